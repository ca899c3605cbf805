pub mod client;
pub mod genres;
pub mod types;

pub use client::*;
pub use genres::*;
pub use types::*;
