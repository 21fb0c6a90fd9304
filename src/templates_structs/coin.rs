use askama::Template;

use crate::forms::{FormConfig, PageHeader};
use super::PageContext;

#[derive(Template)]
#[template(path = "coins/create.html")]
pub struct CoinTransactionFormTemplate {
    pub ctx: PageContext,
    pub header: PageHeader,
    pub form: FormConfig,
}
