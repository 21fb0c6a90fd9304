use crate::models::coin_transaction::TransactionType;
use crate::models::user::UserOption;
use crate::routes;

use super::{Breadcrumb, FieldSpec, FormConfig, FormMethod, PageHeader, SelectOption};

const COIN_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><circle cx="12" cy="12" r="9"/><path d="M12 7v10M9.5 9.5h3.75a1.75 1.75 0 0 1 0 3.5h-2.5a1.75 1.75 0 0 0 0 3.5H14.5"/></svg>"#;

pub fn page_header() -> PageHeader {
    PageHeader {
        title: "Create Coin Transaction".to_string(),
        subtitle: "Credit or debit coins on a user's balance".to_string(),
        icon: COIN_ICON.to_string(),
        icon_bg: "bg-amber-100".to_string(),
        icon_color: "text-amber-600".to_string(),
        breadcrumbs: vec![
            Breadcrumb::link("Dashboard", routes::DASHBOARD),
            Breadcrumb::link("Coin Transactions", routes::COIN_INDEX),
            Breadcrumb::current("Create"),
        ],
    }
}

/// id -> name options for the user select, in the order given.
pub fn user_options(users: &[UserOption]) -> Vec<SelectOption> {
    users
        .iter()
        .map(|u| SelectOption::new(u.id.to_string(), u.name.clone()))
        .collect()
}

pub fn type_options() -> Vec<SelectOption> {
    TransactionType::ALL
        .iter()
        .map(|t| SelectOption::new(t.code(), t.label()))
        .collect()
}

pub fn create_form(users: &[UserOption]) -> FormConfig {
    FormConfig {
        method: FormMethod::Post,
        action: routes::COIN_STORE.to_string(),
        title: "Transaction Details".to_string(),
        subtitle: "The amount is applied to the selected user's balance".to_string(),
        fields: vec![
            FieldSpec::select("user_id")
                .with_label("User")
                .with_placeholder("Select a user")
                .with_options(user_options(users))
                .required(),
            FieldSpec::number("amount")
                .with_label("Amount")
                .with_placeholder("e.g. 100")
                .with_step("1")
                .with_help("Positive amounts credit the user, negative amounts debit")
                .required(),
            FieldSpec::select("type")
                .with_label("Type")
                .with_placeholder("Select a type")
                .with_options(type_options())
                .required(),
            FieldSpec::textarea("description")
                .with_label("Description")
                .with_placeholder("Optional note shown in the transaction history")
                .with_rows(3),
        ],
        cancel_url: routes::COIN_INDEX.to_string(),
        submit_text: "Create Transaction".to_string(),
    }
}
