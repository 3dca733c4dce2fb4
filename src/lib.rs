//! Password generation with guaranteed character-class coverage.
//!
//! Every password contains at least one lowercase letter, uppercase letter,
//! digit and symbol. All randomness comes from the operating system CSPRNG.

pub mod entropy;
pub mod pass;

pub use pass::{Error, MAX_LENGTH, MIN_LENGTH, generate_password, generate_with};
