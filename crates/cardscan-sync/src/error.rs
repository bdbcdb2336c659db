use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scan timestamp: {0}")]
    InvalidTimestamp(i64),
}

pub type Result<T> = std::result::Result<T, SyncError>;
