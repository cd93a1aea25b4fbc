//! Configuration file support for tco-compare.
//!
//! Provides YAML-based configuration through `tco-compare.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tco_compare::application::dto::OutputFormat;
use tco_compare::shared::Result;
use tco_compare::tco::policies::RankingOrder;

pub const CONFIG_FILENAME: &str = "tco-compare.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub ranking: Option<String>,
    pub labor_rate: Option<f64>,
    /// Vendor catalog; relative paths are resolved against the config file's directory.
    pub catalog: Option<PathBuf>,
    pub strict: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Report format, already validated on load
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| OutputFormat::from_str(f).ok())
    }

    /// Ranking order, already validated on load
    pub fn ranking_order(&self) -> Option<RankingOrder> {
        self.ranking.as_deref().and_then(|r| RankingOrder::from_str(r).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let (Some(catalog), Some(base)) = (config.catalog.as_ref(), path.parent()) {
        if catalog.is_relative() {
            config.catalog = Some(base.join(catalog));
        }
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!(
                "Invalid config: format: {}\n\n💡 Hint: Use 'json' or 'markdown'.",
                e
            );
        }
    }

    if let Some(ref ranking) = config.ranking {
        if let Err(e) = RankingOrder::from_str(ranking) {
            bail!(
                "Invalid config: ranking: {}\n\n💡 Hint: Use 'catalog', 'total-cost' or 'composite'.",
                e
            );
        }
    }

    if let Some(rate) = config.labor_rate {
        if !rate.is_finite() || rate < 0.0 {
            bail!(
                "Invalid config: labor_rate must be a non-negative number, got {}.\n\n\
                 💡 Hint: labor_rate is the internal cost of one administrator hour (e.g., 60.0).",
                rate
            );
        }
    }

    if let Some(ref catalog) = config.catalog {
        if catalog.as_os_str().is_empty() {
            bail!(
                "Invalid config: catalog must not be empty.\n\n\
                 💡 Hint: Point 'catalog' at a vendor catalog file (e.g., vendors.yml)."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
