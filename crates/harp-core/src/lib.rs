pub mod error;
pub mod filter;
pub mod har;
pub mod headers;

pub use error::{Error, Result};
