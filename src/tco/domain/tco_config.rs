use super::industry::Industry;
use super::requirement::Requirements;
use serde::{Deserialize, Serialize};

/// Buyer input exactly as submitted.
///
/// Numeric fields are floating point so that fractional, negative or
/// non-finite values reach the normalizer and are rejected there with a
/// precise message instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTcoConfig {
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub users: f64,
    #[serde(default)]
    pub devices: f64,
    /// Planning horizon in months
    #[serde(default)]
    pub timeframe: f64,
    #[serde(default, alias = "current_vendor")]
    pub current_vendor: Option<String>,
    #[serde(default)]
    pub requirements: Option<Vec<String>>,
}

/// The vendor the buyer runs today, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CurrentVendor {
    Absent,
    Named(String),
}

impl CurrentVendor {
    pub fn id(&self) -> Option<&str> {
        match self {
            CurrentVendor::Absent => None,
            CurrentVendor::Named(id) => Some(id),
        }
    }
}

/// Canonical buyer configuration, produced only by `ConfigNormalizer`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcoConfig {
    industry: Industry,
    users: u64,
    devices: u64,
    timeframe: u32,
    current_vendor: CurrentVendor,
    requirements: Requirements,
}

impl TcoConfig {
    pub(crate) fn new(
        industry: Industry,
        users: u64,
        devices: u64,
        timeframe: u32,
        current_vendor: CurrentVendor,
        requirements: Requirements,
    ) -> Self {
        Self {
            industry,
            users,
            devices,
            timeframe,
            current_vendor,
            requirements,
        }
    }

    pub fn industry(&self) -> &Industry {
        &self.industry
    }

    pub fn users(&self) -> u64 {
        self.users
    }

    pub fn devices(&self) -> u64 {
        self.devices
    }

    /// Planning horizon in months
    pub fn timeframe(&self) -> u32 {
        self.timeframe
    }

    pub fn current_vendor(&self) -> &CurrentVendor {
        &self.current_vendor
    }

    pub fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    /// Device-months covered by the plan; the denominator of the per-device view
    pub fn device_months(&self) -> f64 {
        self.devices as f64 * self.timeframe as f64
    }
}
