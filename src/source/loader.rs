use tracing::{debug, warn};

use crate::app::ports::SourcePort;

/// Fetches the raw attribute table. Absent-on-failure: transport errors and
/// non-success statuses never escape this boundary, they degrade to `None`
/// and a warning.
pub struct SourceLoader {
    source: Box<dyn SourcePort>,
    url: String,
}

impl SourceLoader {
    pub fn new(source: Box<dyn SourcePort>, url: impl Into<String>) -> Self {
        Self {
            source,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One fetch attempt. No automatic retry; a retry only happens when the
    /// whole load cycle is re-invoked.
    pub async fn fetch_source_text(&self) -> Option<String> {
        match self.source.get(&self.url).await {
            Ok(resp) if resp.is_success() => match String::from_utf8(resp.body) {
                Ok(text) => {
                    debug!(bytes = text.len(), "source fetched");
                    Some(text)
                }
                Err(e) => {
                    warn!(error = %e, "source payload is not valid UTF-8");
                    None
                }
            },
            Ok(resp) => {
                warn!(status = resp.status, "source responded with non-success status");
                None
            }
            Err(e) => {
                warn!(error = %e, "source fetch failed");
                None
            }
        }
    }
}
