use crate::{
    domain::BoardData,
    error::{DashboardError, Result},
    source::BoardSource,
};
use async_trait::async_trait;
use std::time::Duration;

/// Fetches the board document with a single `GET` to an endpoint
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl BoardSource for HttpSource {
    async fn fetch(&self) -> Result<BoardData> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let data: BoardData = serde_json::from_str(&body)?;

        Ok(data)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
