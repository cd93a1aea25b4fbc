use crate::shared::Result;
use crate::tco::domain::RawTcoConfig;
use std::path::Path;

/// BuyerProfileReader port for loading a buyer's deployment profile from a file
pub trait BuyerProfileReader {
    /// Reads the raw, not yet validated buyer configuration at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    fn read_buyer_profile(&self, path: &Path) -> Result<RawTcoConfig>;
}
