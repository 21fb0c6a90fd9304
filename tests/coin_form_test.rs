//! Coin transaction form configuration: field list, options, routes.

mod common;

use coin_admin::forms::coin_transaction::{create_form, page_header};
use coin_admin::forms::{FieldType, FormMethod};
use coin_admin::models::coin_transaction::TransactionType;
use coin_admin::routes;
use common::*;

#[test]
fn test_fields_in_order_with_types() {
    let form = create_form(&sample_users());

    let fields: Vec<(&str, FieldType)> = form
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.field_type))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("user_id", FieldType::Select),
            ("amount", FieldType::Number),
            ("type", FieldType::Select),
            ("description", FieldType::Textarea),
        ]
    );
    assert!(form.validate().is_ok());
}

#[test]
fn test_user_options_follow_user_list() {
    let users = sample_users();
    let form = create_form(&users);
    let field = form.field("user_id").expect("user_id field");

    assert_eq!(field.options.len(), users.len());
    for (opt, user) in field.options.iter().zip(&users) {
        assert_eq!(opt.value, user.id.to_string());
        assert_eq!(opt.label, user.name);
    }
}

#[test]
fn test_user_options_empty_list() {
    let form = create_form(&[]);
    let field = form.field("user_id").expect("user_id field");
    assert!(field.options.is_empty());
    assert!(field.required);
}

#[test]
fn test_type_options_fixed_set() {
    let form = create_form(&sample_users());
    let field = form.field("type").expect("type field");

    let pairs: Vec<(&str, &str)> = field
        .options
        .iter()
        .map(|o| (o.value.as_str(), o.label.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("earned", "Earned"),
            ("purchased", "Purchased"),
            ("gift", "Gift"),
            ("refund", "Refund"),
            ("admin_adjustment", "Admin Adjustment"),
        ]
    );
    assert_eq!(field.options.len(), TransactionType::ALL.len());
}

#[test]
fn test_required_flags() {
    let form = create_form(&sample_users());
    assert!(form.field("user_id").expect("user_id").required);
    assert!(form.field("amount").expect("amount").required);
    assert!(!form.field("description").expect("description").required);
}

#[test]
fn test_routes_and_method() {
    let form = create_form(&sample_users());
    assert_eq!(form.method, FormMethod::Post);
    assert_eq!(form.action, routes::COIN_STORE);
    assert_eq!(form.cancel_url, routes::COIN_INDEX);
    assert_eq!(form.submit_text, "Create Transaction");
}

#[test]
fn test_page_header_breadcrumbs() {
    let header = page_header();
    assert_eq!(header.title, "Create Coin Transaction");
    assert_eq!(header.breadcrumbs.len(), 3);
    assert_eq!(header.breadcrumbs[0].url.as_deref(), Some(routes::DASHBOARD));
    assert_eq!(header.breadcrumbs[1].url.as_deref(), Some(routes::COIN_INDEX));
    assert_eq!(header.breadcrumbs[2].url, None);
    assert!(header.icon.starts_with("<svg"));
}
