use crate::ports::outbound::{BuyerProfileReader, VendorCatalogReader};
use crate::shared::error::TcoError;
use crate::shared::security::{validate_readable_file, MAX_FILE_SIZE};
use crate::shared::Result;
use crate::tco::domain::{RawTcoConfig, VendorCatalog, VendorProfile};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Document syntax, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    /// Unknown or missing extensions are read as YAML
    fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => DocumentFormat::Json,
            Some("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Yaml,
        }
    }

    fn parse<T: DeserializeOwned>(self, content: &str) -> std::result::Result<T, String> {
        match self {
            DocumentFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// FileSystemReader adapter for reading input documents from the file system
///
/// Implements both VendorCatalogReader and BuyerProfileReader. Files are
/// checked with the shared security rules (no symlinks, regular files only,
/// size limit) before they are read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_document<T: DeserializeOwned>(&self, path: &Path, description: &str) -> Result<T> {
        validate_readable_file(path, description, MAX_FILE_SIZE)?;

        let content = fs::read_to_string(path).map_err(|e| TcoError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let document = DocumentFormat::from_path(path)
            .parse(&content)
            .map_err(|details| TcoError::ParseError {
                path: path.to_path_buf(),
                details,
            })?;
        Ok(document)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VendorCatalogReader for FileSystemReader {
    fn read_catalog(&self, path: &Path) -> Result<Vec<VendorProfile>> {
        if !path.exists() {
            return Err(TcoError::CatalogNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass an existing catalog file with --catalog, or set 'catalog' in tco-compare.config.yml"
                    .to_string(),
            }
            .into());
        }

        let catalog: VendorCatalog = self.read_document(path, "vendor catalog")?;
        Ok(catalog.vendors)
    }
}

impl BuyerProfileReader for FileSystemReader {
    fn read_buyer_profile(&self, path: &Path) -> Result<RawTcoConfig> {
        self.read_document(path, "buyer profile")
    }
}
