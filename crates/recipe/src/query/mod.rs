mod list;
mod missing;

pub use list::*;

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);
