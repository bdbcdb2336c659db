use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid country code: {0}")]
    InvalidCountryCode(String),
    #[error("rule token cannot be empty")]
    EmptyToken,
}
