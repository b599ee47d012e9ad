use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[cfg(feature = "http-source")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Board endpoint {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error("Invalid grouping '{0}'. Valid groupings: status, users, priority")]
    InvalidGrouping(String),

    #[error("Invalid ordering '{0}'. Valid orderings: priority, title")]
    InvalidOrdering(String),

    #[error("Invalid priority {0}. Valid priorities: 0-4")]
    InvalidPriority(u8),

    #[error("{0}")]
    Other(String),
}
