use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::forms::coin_transaction;
use crate::models::user::{self, UserOption};
use crate::routes;
use crate::templates_structs::{CoinTransactionFormTemplate, PageContext};

pub async fn new_form(
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    let users = user::find_options(&pool).await?;
    log::debug!("Coin transaction form: {} user options", users.len());
    render_new_form(&config.app_name, &users)
}

/// Render the create page for an already-fetched user list.
pub fn render_new_form(app_name: &str, users: &[UserOption]) -> Result<HttpResponse, AppError> {
    let form = coin_transaction::create_form(users);
    form.validate()?;

    let tmpl = CoinTransactionFormTemplate {
        ctx: PageContext::new(app_name, routes::COIN_CREATE),
        header: coin_transaction::page_header(),
        form,
    };
    render(tmpl)
}
