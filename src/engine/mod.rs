pub mod aggregate;
pub mod context;
pub mod errors;
pub mod filter;
pub mod query;
pub mod source;
pub mod types;
pub mod window;

pub use errors::*;
