// Template context structures for Askama templates, organized by domain.

mod common;
mod coin;

pub use self::common::{PageContext, NotFoundTemplate};
pub use self::coin::CoinTransactionFormTemplate;
