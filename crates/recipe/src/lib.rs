mod descriptor;
pub mod gap;
mod query;
mod root;

pub use descriptor::*;
pub use query::*;
pub use root::*;
