use crate::shared::error::TcoError;
use crate::shared::TcoResult;
use crate::tco::domain::{
    RawTcoConfig, RoiBaseline, RunMetadata, TcoConfig, TcoResults, VendorFailure, VendorProfile,
    VendorResult,
};
use crate::tco::services::{
    BaselineResolver, ConfigNormalizer, CostModel, ResultAggregator, DEFAULT_LABOR_RATE,
};
use futures::stream::{FuturesOrdered, StreamExt};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinError;

/// Lifecycle of a comparison engine
///
/// `Idle -> Running -> Completed | Failed`; a finished engine can run again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running,
    Completed,
    Failed,
}

/// Engine-wide tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    /// Internal administrator cost per hour, used for operations cost
    pub labor_rate_per_hour: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            labor_rate_per_hour: DEFAULT_LABOR_RATE,
        }
    }
}

/// Outcome of one vendor's evaluation task
type VendorOutcome = (String, TcoResult<VendorResult>);

/// ComparisonEngine evaluates every catalog vendor against one buyer configuration.
///
/// Whole-run problems (invalid configuration, empty catalog) fail the run.
/// Problems with a single vendor profile are recorded in the failure list
/// and the remaining vendors are still evaluated. Vendors are evaluated in
/// parallel on the blocking pool; results keep catalog order. An evaluation
/// that panics is recorded as a failure of that vendor.
pub struct ComparisonEngine {
    settings: EngineSettings,
    state: Mutex<EngineState>,
}

impl ComparisonEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            state: Mutex::new(EngineState::Idle),
        }
    }

    pub fn settings(&self) -> EngineSettings {
        self.settings
    }

    pub fn state(&self) -> EngineState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn transition(&self, next: EngineState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Runs one comparison
    ///
    /// # Errors
    /// - `InvalidConfig` if the buyer configuration or the labor rate is invalid
    /// - `EmptyCatalog` if there is no vendor to compare
    pub async fn run(&self, raw: &RawTcoConfig, catalog: Vec<VendorProfile>) -> TcoResult<TcoResults> {
        self.run_with_progress(raw, catalog, |_, _, _| {}).await
    }

    /// Runs one comparison, calling `on_vendor(done, total, vendor_id)` as
    /// each vendor is settled.
    ///
    /// Vendors are settled in catalog order, so `done` counts up from 1 and
    /// a slow vendor holds back the report of the ones after it.
    pub async fn run_with_progress<F>(
        &self,
        raw: &RawTcoConfig,
        catalog: Vec<VendorProfile>,
        on_vendor: F,
    ) -> TcoResult<TcoResults>
    where
        F: FnMut(usize, usize, &str),
    {
        self.transition(EngineState::Running);
        let outcome = self.compare(raw, catalog, on_vendor).await;
        self.transition(if outcome.is_ok() {
            EngineState::Completed
        } else {
            EngineState::Failed
        });
        outcome
    }

    async fn compare<F>(
        &self,
        raw: &RawTcoConfig,
        catalog: Vec<VendorProfile>,
        on_vendor: F,
    ) -> TcoResult<TcoResults>
    where
        F: FnMut(usize, usize, &str),
    {
        let labor_rate = self.settings.labor_rate_per_hour;
        if !labor_rate.is_finite() || labor_rate < 0.0 {
            return Err(TcoError::invalid_config(
                "laborRate",
                format!("must be a non-negative number, got {}", labor_rate),
            ));
        }

        let config = ConfigNormalizer::normalize(raw)?;
        if catalog.is_empty() {
            return Err(TcoError::EmptyCatalog);
        }

        let cost_model = CostModel::new(labor_rate);
        let baseline = BaselineResolver::resolve(&config, &catalog, &cost_model);

        let config = Arc::new(config);
        let shared_baseline = Arc::new(baseline.clone());
        let outcomes = Self::evaluate_all(
            ResultAggregator::new(cost_model),
            Arc::clone(&config),
            shared_baseline,
            catalog,
            on_vendor,
        )
        .await;

        let mut results = Vec::new();
        let mut failures = Vec::new();
        for (vendor_id, outcome) in outcomes {
            match outcome {
                Ok(result) => results.push(result),
                Err(e) => failures.push(VendorFailure::new(vendor_id, &e)),
            }
        }

        let config = Arc::try_unwrap(config).unwrap_or_else(|shared| (*shared).clone());
        Ok(TcoResults::new(
            RunMetadata::generate(),
            baseline,
            results,
            failures,
            config,
        ))
    }

    /// Spawns one blocking task per vendor and collects them in catalog order
    async fn evaluate_all<F>(
        aggregator: ResultAggregator,
        config: Arc<TcoConfig>,
        baseline: Arc<RoiBaseline>,
        catalog: Vec<VendorProfile>,
        mut on_vendor: F,
    ) -> Vec<VendorOutcome>
    where
        F: FnMut(usize, usize, &str),
    {
        let total = catalog.len();
        let mut seen_ids = HashSet::new();
        let mut pending = FuturesOrdered::new();
        for profile in catalog {
            let duplicate = !seen_ids.insert(profile.id.clone());
            let vendor_id = profile.id.clone();
            let config = Arc::clone(&config);
            let baseline = Arc::clone(&baseline);
            let task = tokio::task::spawn_blocking(move || {
                Self::check_identity(&profile, duplicate)
                    .and_then(|()| aggregator.evaluate(&config, &profile, &baseline))
            });
            pending.push_back(async move {
                let outcome = task
                    .await
                    .unwrap_or_else(|e| Err(Self::aborted(&vendor_id, e)));
                (vendor_id, outcome)
            });
        }

        let mut outcomes = Vec::with_capacity(total);
        while let Some((vendor_id, outcome)) = pending.next().await {
            on_vendor(outcomes.len() + 1, total, &vendor_id);
            outcomes.push((vendor_id, outcome));
        }
        outcomes
    }

    /// Turns a task that panicked or was cancelled into a failure of its vendor
    fn aborted(vendor_id: &str, error: JoinError) -> TcoError {
        let details = if error.is_panic() {
            let payload = error.into_panic();
            let message = payload
                .downcast_ref::<&str>()
                .map(|message| message.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned());
            match message {
                Some(message) => format!("evaluation panicked: {}", message),
                None => "evaluation panicked".to_string(),
            }
        } else {
            "evaluation was cancelled".to_string()
        };
        TcoError::EvaluationAborted {
            vendor_id: vendor_id.to_string(),
            details,
        }
    }

    fn check_identity(profile: &VendorProfile, duplicate: bool) -> TcoResult<()> {
        if profile.id.trim().is_empty() {
            return Err(TcoError::invalid_field(&profile.id, "id", "must not be empty"));
        }
        if duplicate {
            return Err(TcoError::invalid_field(
                &profile.id,
                "id",
                "duplicate vendor id; only the first entry is evaluated",
            ));
        }
        Ok(())
    }
}

impl Default for ComparisonEngine {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ErrorKind;
    use crate::tco::domain::vendor_profile::fixtures::complete_profile;
    use crate::tco::domain::BaselineSource;

    fn raw() -> RawTcoConfig {
        RawTcoConfig {
            industry: "healthcare".to_string(),
            users: 500.0,
            devices: 1000.0,
            timeframe: 36.0,
            current_vendor: None,
            requirements: Some(vec!["mfa".to_string(), "encryption".to_string()]),
        }
    }

    fn catalog() -> Vec<VendorProfile> {
        let mut sparse = complete_profile("sparse");
        sparse.pricing.rate_per_month = None;
        vec![complete_profile("acme"), sparse, complete_profile("zenith")]
    }

    #[tokio::test]
    async fn test_new_engine_is_idle() {
        assert_eq!(ComparisonEngine::default().state(), EngineState::Idle);
    }

    #[tokio::test]
    async fn test_run_completes_with_partial_failures() {
        let engine = ComparisonEngine::default();
        let results = engine.run(&raw(), catalog()).await.unwrap();

        assert_eq!(engine.state(), EngineState::Completed);
        let ids: Vec<_> = results.results().iter().map(|r| r.vendor_id()).collect();
        assert_eq!(ids, vec!["acme", "zenith"]);
        assert_eq!(results.failures().len(), 1);
        assert_eq!(results.failures()[0].vendor_id(), "sparse");
        assert_eq!(results.failures()[0].kind(), ErrorKind::MissingProfileField);
        assert_eq!(results.baseline().source(), BaselineSource::IndustryAverage);
    }

    #[tokio::test]
    async fn test_invalid_config_fails_run() {
        let engine = ComparisonEngine::default();
        let err = engine
            .run(&RawTcoConfig { users: 0.0, ..raw() }, catalog())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert_eq!(engine.state(), EngineState::Failed);
    }

    #[tokio::test]
    async fn test_empty_catalog_fails_run() {
        let engine = ComparisonEngine::default();
        let err = engine.run(&raw(), Vec::new()).await.unwrap_err();
        assert_eq!(err, TcoError::EmptyCatalog);
        assert_eq!(engine.state(), EngineState::Failed);
    }

    #[tokio::test]
    async fn test_invalid_config_reported_before_empty_catalog() {
        let err = ComparisonEngine::default()
            .run(&RawTcoConfig { devices: -1.0, ..raw() }, Vec::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[tokio::test]
    async fn test_engine_can_rerun_after_failure() {
        let engine = ComparisonEngine::default();
        assert!(engine.run(&raw(), Vec::new()).await.is_err());
        assert_eq!(engine.state(), EngineState::Failed);

        assert!(engine.run(&raw(), catalog()).await.is_ok());
        assert_eq!(engine.state(), EngineState::Completed);
    }

    #[tokio::test]
    async fn test_duplicate_vendor_ids_recorded() {
        let engine = ComparisonEngine::default();
        let results = engine
            .run(&raw(), vec![complete_profile("acme"), complete_profile("acme")])
            .await
            .unwrap();
        assert_eq!(results.results().len(), 1);
        assert_eq!(results.failures().len(), 1);
        assert_eq!(results.failures()[0].kind(), ErrorKind::InvalidProfileField);
        assert!(results.failures()[0].message().contains("duplicate vendor id"));
    }

    #[tokio::test]
    async fn test_current_vendor_baseline() {
        let engine = ComparisonEngine::default();
        let results = engine
            .run(
                &RawTcoConfig {
                    current_vendor: Some("zenith".to_string()),
                    ..raw()
                },
                catalog(),
            )
            .await
            .unwrap();
        assert_eq!(results.baseline().source(), BaselineSource::CurrentVendor);
        // the current vendor saves nothing against itself
        let zenith = &results.results()[1];
        assert!(zenith.roi().annual_savings.abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_runs_are_deterministic() {
        let engine = ComparisonEngine::default();
        let first = engine.run(&raw(), catalog()).await.unwrap();
        let second = engine.run(&raw(), catalog()).await.unwrap();
        assert_eq!(first.results(), second.results());
        assert_eq!(first.failures(), second.failures());
        assert_ne!(first.run_id(), second.run_id());
    }

    #[tokio::test]
    async fn test_negative_labor_rate_rejected() {
        let engine = ComparisonEngine::new(EngineSettings {
            labor_rate_per_hour: -5.0,
        });
        let err = engine.run(&raw(), catalog()).await.unwrap_err();
        assert!(matches!(err, TcoError::InvalidConfig { ref field, .. } if field == "laborRate"));
    }

    #[tokio::test]
    async fn test_every_vendor_failing_still_completes() {
        let mut broken = complete_profile("broken");
        broken.roadmap.architecture = None;
        let engine = ComparisonEngine::default();
        let results = engine.run(&raw(), vec![broken]).await.unwrap();
        assert!(results.results().is_empty());
        assert_eq!(results.failures().len(), 1);
        assert_eq!(engine.state(), EngineState::Completed);
    }

    #[tokio::test]
    async fn test_progress_follows_catalog_order() {
        let mut progress = Vec::new();
        let results = ComparisonEngine::default()
            .run_with_progress(&raw(), catalog(), |done, total, vendor_id| {
                progress.push((done, total, vendor_id.to_string()));
            })
            .await
            .unwrap();

        // the failing vendor is reported in its catalog position
        assert_eq!(
            progress,
            vec![
                (1, 3, "acme".to_string()),
                (2, 3, "sparse".to_string()),
                (3, 3, "zenith".to_string()),
            ]
        );
        assert_eq!(results.results().len() + results.failures().len(), 3);
    }

    #[tokio::test]
    async fn test_panicking_evaluation_becomes_vendor_failure() {
        let joined = tokio::task::spawn_blocking(|| -> TcoResult<VendorResult> {
            panic!("division table corrupted")
        })
        .await;

        let err = ComparisonEngine::aborted("acme", joined.unwrap_err());
        assert_eq!(err.kind(), ErrorKind::EvaluationAborted);
        assert!(err.is_vendor_scoped());

        let failure = VendorFailure::new("acme", &err);
        assert_eq!(failure.vendor_id(), "acme");
        assert!(failure.message().contains("evaluation panicked: division table corrupted"));
    }

    #[tokio::test]
    async fn test_cancelled_evaluation_becomes_vendor_failure() {
        let task = tokio::spawn(std::future::pending::<()>());
        task.abort();
        let err = ComparisonEngine::aborted("acme", task.await.unwrap_err());
        assert_eq!(
            err,
            TcoError::EvaluationAborted {
                vendor_id: "acme".to_string(),
                details: "evaluation was cancelled".to_string(),
            }
        );
    }
}
