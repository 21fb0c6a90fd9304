pub mod coin_transaction;
pub mod user;
