use crate::application::comparison_engine::ComparisonEngine;
use crate::application::dto::{ComparisonRequest, ComparisonResponse};
use crate::ports::outbound::{ProgressReporter, VendorCatalogReader};
use crate::shared::Result;
use crate::tco::domain::{TcoResults, VendorProfile};
use anyhow::Context;

/// CompareVendorsUseCase - orchestrates one vendor comparison
///
/// Loads the catalog through the injected reader, runs the engine, applies
/// the requested ranking and keeps the user informed through the progress
/// reporter.
///
/// # Type Parameters
/// * `CR` - VendorCatalogReader implementation
/// * `PR` - ProgressReporter implementation
pub struct CompareVendorsUseCase<CR, PR> {
    catalog_reader: CR,
    progress_reporter: PR,
    engine: ComparisonEngine,
}

impl<CR, PR> CompareVendorsUseCase<CR, PR>
where
    CR: VendorCatalogReader,
    PR: ProgressReporter,
{
    pub fn new(catalog_reader: CR, progress_reporter: PR, engine: ComparisonEngine) -> Self {
        Self {
            catalog_reader,
            progress_reporter,
            engine,
        }
    }

    pub fn engine(&self) -> &ComparisonEngine {
        &self.engine
    }

    /// Executes the comparison
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be loaded, the buyer
    /// configuration is invalid or the catalog is empty. Failures of single
    /// vendors are not errors; they are listed in the response.
    pub async fn execute(&self, request: ComparisonRequest) -> Result<ComparisonResponse> {
        // Step 1: Load the catalog
        let catalog = self.load_catalog(&request)?;

        // Step 2: Evaluate every vendor
        self.progress_reporter.report(&format!(
            "🧮 Evaluating {} vendor(s) for {} month(s)...",
            catalog.len(),
            request.config.timeframe
        ));
        let results = self
            .engine
            .run_with_progress(&request.config, catalog, |done, total, vendor_id| {
                self.progress_reporter
                    .report_progress(done, total, Some(vendor_id));
            })
            .await?;

        // Step 3: Tell the user what happened to each vendor
        self.report_outcome(&results);

        // Step 4: Order for presentation
        Ok(ComparisonResponse::new(results.ranked(request.ranking)))
    }

    fn load_catalog(&self, request: &ComparisonRequest) -> Result<Vec<VendorProfile>> {
        self.progress_reporter.report(&format!(
            "📖 Loading vendor catalog from: {}",
            request.catalog_path.display()
        ));

        let catalog = self
            .catalog_reader
            .read_catalog(&request.catalog_path)
            .with_context(|| format!("Could not load vendor catalog {}", request.catalog_path.display()))?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} vendor profile(s)", catalog.len()));
        Ok(catalog)
    }

    fn report_outcome(&self, results: &TcoResults) {
        if let Some(note) = results.baseline().note() {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", note));
        }

        for tag in results.config().requirements().unrecognized() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Requirement '{}' is not recognized and does not affect scoring.",
                tag
            ));
        }

        for failure in results.failures() {
            let reason = failure.message().lines().next().unwrap_or_default();
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Vendor '{}' was not evaluated ({}): {}",
                failure.vendor_id(),
                failure.kind(),
                reason
            ));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Comparison complete: {} vendor(s) evaluated, {} failed",
            results.results().len(),
            results.failures().len()
        ));
    }
}
