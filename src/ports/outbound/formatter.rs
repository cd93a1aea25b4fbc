use crate::shared::Result;
use crate::tco::domain::TcoResults;

/// ResultsFormatter port for rendering comparison results
///
/// This port abstracts the formatting logic for different output formats
/// (JSON, Markdown, etc.).
pub trait ResultsFormatter {
    /// Renders a completed comparison run
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, results: &TcoResults) -> Result<String>;
}
