rust_i18n::i18n!("locales", fallback = "en");

pub mod assets;
pub mod cli;
pub mod config;
pub mod db;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod session;
pub mod template;

pub use db::*;
pub use routes::AppState;
