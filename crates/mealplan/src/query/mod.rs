mod week;

pub use week::*;

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);
