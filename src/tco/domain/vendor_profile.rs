use super::requirement::{normalize_tag, Requirement};
use crate::shared::error::TcoError;
use crate::shared::TcoResult;
use serde::Deserialize;
use std::collections::HashMap;

/// A catalog file: the list of candidate vendors, in the order they are compared.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VendorCatalog {
    #[serde(default)]
    pub vendors: Vec<VendorProfile>,
}

/// Static pricing and capability data for one vendor.
///
/// Sections are optional in the file. A calculator that needs a value the
/// profile does not carry fails that vendor with `MissingProfileField`; no
/// value is ever assumed to be zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VendorProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub pricing: PricingProfile,
    #[serde(default)]
    pub hardware: HardwareProfile,
    #[serde(default)]
    pub services: ServicesProfile,
    #[serde(default)]
    pub operations: OperationsProfile,
    #[serde(default)]
    pub efficacy: EfficacyProfile,
    #[serde(default)]
    pub automation: AutomationProfile,
    #[serde(default)]
    pub security: SecurityProfile,
    #[serde(default)]
    pub compliance: ComplianceProfile,
    #[serde(default)]
    pub roadmap: RoadmapProfile,
    #[serde(default)]
    pub support: SupportProfile,
    #[serde(default)]
    pub deployment: DeploymentProfile,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LicenseModel {
    #[default]
    PerDevice,
    PerUser,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct VolumeTier {
    /// Licensed units at which the tier starts to apply
    pub min_units: u64,
    /// Fraction taken off the list rate, in [0, 1)
    pub discount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PricingProfile {
    #[serde(default)]
    pub model: LicenseModel,
    /// List price per licensed unit per month
    pub rate_per_month: Option<f64>,
    #[serde(default)]
    pub volume_discounts: Vec<VolumeTier>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HardwareProfile {
    /// One-time appliance cost; cloud vendors state 0
    pub appliance_cost: Option<f64>,
    /// One-time agent or sensor cost per device
    #[serde(default)]
    pub per_device_cost: f64,
    #[serde(default)]
    pub capitalized: bool,
    /// Months between hardware refreshes
    pub refresh_cycle_months: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServicesProfile {
    pub onboarding_fee: Option<f64>,
    pub support_monthly: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OperationsProfile {
    /// Internal administration effort per device per month, in hours
    pub admin_hours_per_device_month: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EfficacyProfile {
    /// Stated reduction in breach likelihood, in [0, 1]
    pub breach_reduction: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AutomationProfile {
    /// Automation coefficient used when the buyer names no known requirement
    pub baseline: Option<f64>,
    /// Per-requirement automation coefficients, keyed by requirement tag
    #[serde(default)]
    pub coefficients: HashMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SecurityProfile {
    /// Vendor-intrinsic security score (0-100) used when the buyer names no known requirement
    pub baseline_score: Option<f64>,
    /// Per-requirement capability strength, keyed by requirement tag
    #[serde(default)]
    pub capabilities: HashMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ComplianceProfile {
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Architecture {
    CloudNative,
    Hybrid,
    OnPremise,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RoadmapProfile {
    pub releases_per_year: Option<f64>,
    pub architecture: Option<Architecture>,
    #[serde(default)]
    pub api_first: bool,
    #[serde(default)]
    pub ai_driven: bool,
    #[serde(default)]
    pub zero_trust_native: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MttrSpec {
    pub value: f64,
    pub unit: TimeUnit,
}

impl MttrSpec {
    pub fn in_hours(&self) -> f64 {
        match self.unit {
            TimeUnit::Minutes => self.value / 60.0,
            TimeUnit::Hours => self.value,
            TimeUnit::Days => self.value * 24.0,
        }
    }
}

/// How often the vendor ships patches that need a maintenance window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatchCadence {
    /// Zero-downtime delivery, no customer maintenance windows
    Continuous,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl PatchCadence {
    pub fn windows_per_year(&self) -> f64 {
        match self {
            PatchCadence::Continuous => 0.0,
            PatchCadence::Weekly => 52.0,
            PatchCadence::Biweekly => 26.0,
            PatchCadence::Monthly => 12.0,
            PatchCadence::Quarterly => 4.0,
            PatchCadence::SemiAnnual => 2.0,
            PatchCadence::Annual => 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SupportProfile {
    pub mttr: Option<MttrSpec>,
    pub patch_cadence: Option<PatchCadence>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeploymentProfile {
    /// Days until first value for a single device
    pub onboarding_days: Option<f64>,
    /// Extra days per natural-log unit of device count
    pub scale_days: Option<f64>,
    /// Stated base rollout duration in weeks
    pub base_weeks: Option<f64>,
    pub integration_weeks_per_requirement: Option<f64>,
    /// Requirement tags that need custom integration work with this vendor
    #[serde(default)]
    pub custom_integration: Vec<String>,
}

impl VendorProfile {
    /// Unwraps a value the calculation cannot do without
    pub(crate) fn required<T>(&self, value: Option<T>, field: &str) -> TcoResult<T> {
        value.ok_or_else(|| TcoError::missing_field(&self.id, field))
    }

    /// Unwraps a required monetary or duration value and checks it is a finite, non-negative number
    pub(crate) fn required_amount(&self, value: Option<f64>, field: &str) -> TcoResult<f64> {
        let value = self.required(value, field)?;
        self.amount(value, field)
    }

    /// Checks a value is a finite number
    pub(crate) fn finite(&self, value: f64, field: &str) -> TcoResult<f64> {
        if !value.is_finite() {
            return Err(TcoError::invalid_field(
                &self.id,
                field,
                format!("must be a finite number, got {}", value),
            ));
        }
        Ok(value)
    }

    /// Checks a value is finite and non-negative
    pub(crate) fn amount(&self, value: f64, field: &str) -> TcoResult<f64> {
        let value = self.finite(value, field)?;
        if value < 0.0 {
            return Err(TcoError::invalid_field(
                &self.id,
                field,
                format!("must not be negative, got {}", value),
            ));
        }
        Ok(value)
    }

    /// Checks a value lies in [0, 1]
    pub(crate) fn fraction(&self, value: f64, field: &str) -> TcoResult<f64> {
        let value = self.amount(value, field)?;
        if value > 1.0 {
            return Err(TcoError::invalid_field(
                &self.id,
                field,
                format!("must be between 0 and 1, got {}", value),
            ));
        }
        Ok(value)
    }

    /// Whether the vendor lists `requirement` as needing custom integration
    pub fn needs_custom_integration(&self, requirement: Requirement) -> bool {
        self.deployment
            .custom_integration
            .iter()
            .any(|tag| Requirement::from_tag(&normalize_tag(tag)) == Some(requirement))
    }

    /// Re-keys a per-requirement map by requirement.
    ///
    /// Keys are compared after normalization, so `Zero_Trust` in a catalog
    /// matches the `zero-trust` requirement. Two keys naming the same
    /// requirement make the field invalid. Keys naming no known requirement
    /// and non-finite values are dropped.
    pub(crate) fn requirement_values(
        &self,
        map: &HashMap<String, f64>,
        field: &str,
    ) -> TcoResult<HashMap<Requirement, f64>> {
        let mut entries: Vec<(&String, &f64)> = map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut sources: HashMap<Requirement, &str> = HashMap::new();
        let mut values = HashMap::new();
        for (key, value) in entries {
            let Some(requirement) = Requirement::from_tag(&normalize_tag(key)) else {
                continue;
            };
            if let Some(previous) = sources.insert(requirement, key.as_str()) {
                return Err(TcoError::invalid_field(
                    &self.id,
                    field,
                    format!(
                        "keys '{}' and '{}' both name requirement '{}'",
                        previous, key, requirement
                    ),
                ));
            }
            if value.is_finite() {
                values.insert(requirement, *value);
            }
        }
        Ok(values)
    }
}
