use std::path::Path;
use tco_compare::prelude::*;

/// Mock VendorCatalogReader serving a catalog parsed from inline YAML
pub struct MockCatalogReader {
    content: String,
    should_fail: bool,
}

impl MockCatalogReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl VendorCatalogReader for MockCatalogReader {
    fn read_catalog(&self, path: &Path) -> Result<Vec<VendorProfile>> {
        if self.should_fail {
            anyhow::bail!("Mock catalog read failure for {}", path.display());
        }
        let catalog: tco_compare::tco::domain::VendorCatalog = serde_yaml_ng::from_str(&self.content)?;
        Ok(catalog.vendors)
    }
}
