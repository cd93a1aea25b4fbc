use crate::ports::outbound::ResultsFormatter;
use crate::shared::Result;
use crate::tco::domain::TcoResults;
use anyhow::Context;

/// JsonFormatter adapter rendering the full comparison as pretty-printed JSON
///
/// Keys are camelCase; a payback that never happens and the ROI percentage
/// of a vendor that costs nothing are written as `"n/a"`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsFormatter for JsonFormatter {
    fn format(&self, results: &TcoResults) -> Result<String> {
        serde_json::to_string_pretty(results).context("Failed to serialize comparison results to JSON")
    }
}
