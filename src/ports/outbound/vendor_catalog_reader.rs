use crate::shared::Result;
use crate::tco::domain::VendorProfile;
use std::path::Path;

/// VendorCatalogReader port for loading candidate vendor profiles
///
/// Profiles are returned in catalog order; that order is the default
/// presentation order of the comparison.
pub trait VendorCatalogReader {
    /// Reads every vendor profile from the catalog at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The catalog file does not exist or cannot be read
    /// - The content is not a valid catalog document
    fn read_catalog(&self, path: &Path) -> Result<Vec<VendorProfile>>;
}
