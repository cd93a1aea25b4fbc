/// ProgressReporter port for keeping the user informed during a comparison
///
/// Implementations must not write to stdout; stdout carries the report.
pub trait ProgressReporter {
    /// Reports a step of the run, e.g. catalog loading
    fn report(&self, message: &str);

    /// Reports that `current` of `total` vendors have been handled
    ///
    /// # Arguments
    /// * `current` - Vendors handled so far (1-based)
    /// * `total` - Vendors in the catalog
    /// * `message` - Usually the vendor id just handled
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning: a skipped vendor, a baseline fallback, an ignored tag
    fn report_error(&self, message: &str);

    /// Reports the end of the run with a one-line summary
    fn report_completion(&self, message: &str);
}
