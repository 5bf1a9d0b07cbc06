use async_trait::async_trait;

/// Transport seam for the remote tabular source. Implementations report
/// failures as strings; interpretation happens at the load boundary.
#[async_trait]
pub trait SourcePort: Send + Sync {
    async fn get(&self, url: &str) -> Result<SourceResponse, String>;
}

#[derive(Clone, Debug)]
pub struct SourceResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl SourceResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
