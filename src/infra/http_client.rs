use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use std::time::Duration;

use crate::app::ports::{SourcePort, SourceResponse};
use crate::error::Result;

/// `reqwest`-backed source adapter. Requests carry no-cache headers so each
/// load cycle sees the current state of the attribute table.
pub struct ReqwestSource {
    client: reqwest::Client,
}

impl ReqwestSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SourcePort for ReqwestSource {
    async fn get(&self, url: &str) -> std::result::Result<SourceResponse, String> {
        let resp = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(|e| e.to_string())?.to_vec();
        Ok(SourceResponse { status, body })
    }
}
