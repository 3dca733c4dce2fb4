use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Too short to hold one character of every class.
    #[error("invalid argument: password length must be at least {min}, got {length}")]
    InvalidArgument { length: usize, min: usize },
    /// Longer than any buffer we are willing to allocate.
    #[error("invalid argument: password length must be at most {max}, got {length}")]
    TooLong { length: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
