use crate::tco::domain::TcoResults;

/// Outcome of a successful comparison run
///
/// A run succeeds even when some vendors failed; those are listed in
/// `results.failures()`.
#[derive(Debug, Clone)]
pub struct ComparisonResponse {
    pub results: TcoResults,
}

impl ComparisonResponse {
    pub fn new(results: TcoResults) -> Self {
        Self { results }
    }

    pub fn has_vendor_failures(&self) -> bool {
        self.results.has_failures()
    }
}
