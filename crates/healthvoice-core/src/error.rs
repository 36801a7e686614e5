use thiserror::Error;

/// Rejected transcript input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Note text must be a non-empty string")]
    EmptyText,

    #[error("Note text is {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
