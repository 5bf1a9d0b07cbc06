//! The load cycle: fetch → parse → merge, always yielding a fully-shaped
//! record set tagged with how it was obtained.

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::app::ports::SourcePort;
use crate::constants::{PREVIEW_LIMIT, SOURCE_DELIMITER};
use crate::domain::{DegradeReason, LoadOutcome};
use crate::pipeline::normalize::normalize;
use crate::registry::RankRegistry;
use crate::source::loader::SourceLoader;
use crate::source::table;

pub struct LoadUseCase {
    loader: SourceLoader,
    registry: RankRegistry,
    // Single-flight guard: a load requested while one is pending is ignored.
    in_flight: Mutex<()>,
}

impl LoadUseCase {
    pub fn new(source: Box<dyn SourcePort>, url: impl Into<String>, registry: RankRegistry) -> Self {
        Self {
            loader: SourceLoader::new(source, url),
            registry,
            in_flight: Mutex::new(()),
        }
    }

    pub fn registry(&self) -> &RankRegistry {
        &self.registry
    }

    /// Runs one load cycle and returns the tagged outcome, or `None` when a
    /// cycle is already in flight (ignore-while-in-flight policy).
    ///
    /// Failure never propagates: an unreachable or unparsable source
    /// degrades to a placeholder-filled record set.
    pub async fn load(&self) -> Option<LoadOutcome> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            info!("load requested while one is in flight, ignoring");
            return None;
        };

        let text = self.loader.fetch_source_text().await;
        let fetched = text.is_some();
        let rows = table::parse(text.as_deref(), SOURCE_DELIMITER, PREVIEW_LIMIT);
        let records = normalize(self.registry.slots(), &rows);

        let outcome = if !fetched {
            warn!(url = self.loader.url(), "load degraded: source unreachable");
            LoadOutcome::Degraded(records, DegradeReason::Transport)
        } else if rows.is_empty() {
            warn!(url = self.loader.url(), "load degraded: no usable rows");
            LoadOutcome::Degraded(records, DegradeReason::EmptySource)
        } else {
            info!(rows = rows.len(), "load complete");
            LoadOutcome::Live(records)
        };
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::SourceResponse;
    use crate::constants::{COL_NAME_EN, COL_NAME_ZH, PLACEHOLDER};
    use async_trait::async_trait;

    struct StaticSource(String);

    #[async_trait]
    impl SourcePort for StaticSource {
        async fn get(&self, _url: &str) -> Result<SourceResponse, String> {
            Ok(SourceResponse {
                status: 200,
                body: self.0.clone().into_bytes(),
            })
        }
    }

    struct DeadSource;

    #[async_trait]
    impl SourcePort for DeadSource {
        async fn get(&self, _url: &str) -> Result<SourceResponse, String> {
            Err("connection refused".to_string())
        }
    }

    #[tokio::test]
    async fn live_source_produces_a_live_outcome() {
        let text = format!(
            "{COL_NAME_EN};{COL_NAME_ZH}\nKindergarten 1;根德園幼稚園\n"
        );
        let use_case = LoadUseCase::new(
            Box::new(StaticSource(text)),
            "http://unit.test/table",
            RankRegistry::seeded(),
        );
        let outcome = use_case.load().await.expect("no load in flight");
        assert!(matches!(outcome, LoadOutcome::Live(_)));
        assert_eq!(outcome.records().len(), 100);
        assert_eq!(outcome.records()[0].localized_name, "根德園幼稚園");
        assert_eq!(outcome.records()[1].localized_name, PLACEHOLDER);
    }

    #[tokio::test]
    async fn dead_source_degrades_with_transport_reason() {
        let use_case = LoadUseCase::new(
            Box::new(DeadSource),
            "http://unit.test/table",
            RankRegistry::seeded(),
        );
        let outcome = use_case.load().await.expect("no load in flight");
        assert_eq!(outcome.degrade_reason(), Some(DegradeReason::Transport));
        assert_eq!(outcome.records().len(), 100);
    }

    #[tokio::test]
    async fn header_only_source_degrades_as_empty() {
        let text = format!("{COL_NAME_EN};{COL_NAME_ZH}\n");
        let use_case = LoadUseCase::new(
            Box::new(StaticSource(text)),
            "http://unit.test/table",
            RankRegistry::seeded(),
        );
        let outcome = use_case.load().await.expect("no load in flight");
        assert_eq!(outcome.degrade_reason(), Some(DegradeReason::EmptySource));
    }
}
