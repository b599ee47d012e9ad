use crate::{domain::BoardData, error::Result};
use async_trait::async_trait;

pub mod file_source;

#[cfg(feature = "http-source")]
pub mod http_source;

pub use file_source::FileSource;
#[cfg(feature = "http-source")]
pub use http_source::HttpSource;

/// Somewhere a board document can be fetched from
#[async_trait]
pub trait BoardSource: Send + Sync {
    /// Fetches the full user and ticket lists
    async fn fetch(&self) -> Result<BoardData>;

    /// Human-readable location, used in logs
    fn describe(&self) -> String;
}
