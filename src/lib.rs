pub mod api;
pub mod config;
pub mod database;
pub mod domain;
pub mod models;
pub mod utils;

pub use config::*;
pub use database::*;
pub use models::*;
