pub mod handlers;
pub mod project;
pub mod types;

pub use handlers::*;
pub use types::*;
