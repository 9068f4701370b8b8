use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaffleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No file name passed")]
    MissingInput,

    #[error("File cannot be read: {0}")]
    UnreadableSource(String),

    #[error("No rows in the participant source: {0}")]
    EmptySource(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),
}

pub type Result<T> = std::result::Result<T, RaffleError>;
