use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the rank key generator.
///
/// Both variants are caller bugs: the generator never retries or corrects
/// its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Record not found: {0}")]
    RecordNotFound(Uuid),

    #[error(transparent)]
    Rank(#[from] RankError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
