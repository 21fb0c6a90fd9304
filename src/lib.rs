pub mod config;
pub mod db;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod templates_structs;
