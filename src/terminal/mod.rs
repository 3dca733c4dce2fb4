//! Box-drawn terminal text.

mod output;

pub use output::*;
