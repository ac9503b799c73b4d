use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An element that should have been text was not.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown app: {0}")]
    UnknownApp(String),
}

pub type Result<T> = std::result::Result<T, Error>;
