use crate::{
    domain::BoardData,
    error::{DashboardError, Result},
    source::BoardSource,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Reads the board document from a JSON file on disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl BoardSource for FileSource {
    async fn fetch(&self) -> Result<BoardData> {
        if !self.path.exists() {
            return Err(DashboardError::Other(format!(
                "Board file not found: {}",
                self.path.display()
            )));
        }

        let contents = fs::read_to_string(&self.path).await?;
        let data: BoardData = serde_json::from_str(&contents)?;

        Ok(data)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
