use super::roi_baseline::RoiBaseline;
use super::run_metadata::RunMetadata;
use super::tco_config::TcoConfig;
use super::vendor_result::VendorResult;
use crate::shared::error::{ErrorKind, TcoError};
use crate::tco::policies::{RankingOrder, RankingPolicy};
use serde::Serialize;

/// A vendor that could not be evaluated
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorFailure {
    vendor_id: String,
    kind: ErrorKind,
    message: String,
}

impl VendorFailure {
    pub fn new(vendor_id: impl Into<String>, error: &TcoError) -> Self {
        Self {
            vendor_id: vendor_id.into(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of one comparison run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcoResults {
    run_id: String,
    timestamp: String,
    ordering: RankingOrder,
    baseline: RoiBaseline,
    results: Vec<VendorResult>,
    failures: Vec<VendorFailure>,
    config: TcoConfig,
}

impl TcoResults {
    /// Builds results in catalog order
    pub(crate) fn new(
        metadata: RunMetadata,
        baseline: RoiBaseline,
        results: Vec<VendorResult>,
        failures: Vec<VendorFailure>,
        config: TcoConfig,
    ) -> Self {
        Self {
            run_id: metadata.run_id().to_string(),
            timestamp: metadata.timestamp().to_string(),
            ordering: RankingOrder::Catalog,
            baseline,
            results,
            failures,
            config,
        }
    }

    /// Returns the same run with its successful results reordered
    pub fn ranked(self, order: RankingOrder) -> Self {
        let results = RankingPolicy::rank(self.results, order);
        Self {
            ordering: order,
            results,
            ..self
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn ordering(&self) -> RankingOrder {
        self.ordering
    }

    pub fn baseline(&self) -> &RoiBaseline {
        &self.baseline
    }

    pub fn results(&self) -> &[VendorResult] {
        &self.results
    }

    pub fn failures(&self) -> &[VendorFailure] {
        &self.failures
    }

    pub fn config(&self) -> &TcoConfig {
        &self.config
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
