//! Admin URLs used by the coin pages. The index and store handlers live in
//! the surrounding admin application; this crate only links to them.

pub const DASHBOARD: &str = "/admin";
pub const COIN_INDEX: &str = "/admin/coins";
pub const COIN_CREATE: &str = "/admin/coins/create";
pub const COIN_STORE: &str = "/admin/coins";
