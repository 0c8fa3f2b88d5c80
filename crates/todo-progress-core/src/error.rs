use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid employee ID: {0:?} (expected a positive integer)")]
    InvalidIdentifier(String),
}

pub type Result<T> = std::result::Result<T, Error>;
