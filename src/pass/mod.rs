//! Password generation.

pub mod charset;
mod error;
mod generate;

pub use error::{Error, Result};
pub use generate::{MAX_LENGTH, MIN_LENGTH, generate_password, generate_with};
