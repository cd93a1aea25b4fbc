use crate::shared::error::TcoError;
use crate::shared::TcoResult;
use crate::tco::domain::{
    normalize_tag, CurrentVendor, Industry, RawTcoConfig, RequirementTag, Requirements, TcoConfig,
};
use std::collections::HashSet;

/// ConfigNormalizer validates buyer input and produces the canonical `TcoConfig`.
///
/// Every other component relies on its guarantees: counts and horizon are
/// positive integers within bounds, the industry is non-empty and lower-case,
/// requirement tags are canonical and unique.
pub struct ConfigNormalizer;

impl ConfigNormalizer {
    /// Upper bound for users and devices
    pub const MAX_SEATS: u64 = 10_000_000;
    /// Upper bound for the planning horizon (20 years)
    pub const MAX_TIMEFRAME_MONTHS: u64 = 240;
    pub const MAX_REQUIREMENTS: usize = 64;

    pub fn normalize(raw: &RawTcoConfig) -> TcoResult<TcoConfig> {
        let industry = normalize_tag(&raw.industry);
        if industry.is_empty() {
            return Err(TcoError::invalid_config("industry", "must not be empty"));
        }

        let users = Self::positive_count(raw.users, "users", Self::MAX_SEATS)?;
        let devices = Self::positive_count(raw.devices, "devices", Self::MAX_SEATS)?;
        let timeframe =
            Self::positive_count(raw.timeframe, "timeframe", Self::MAX_TIMEFRAME_MONTHS)? as u32;

        let current_vendor = match raw.current_vendor.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => CurrentVendor::Named(id.to_string()),
            _ => CurrentVendor::Absent,
        };

        let requirements = match &raw.requirements {
            None => Requirements::Unspecified,
            Some(tags) => Requirements::Specified(Self::normalize_requirements(tags)?),
        };

        Ok(TcoConfig::new(
            Industry::from_normalized(&industry),
            users,
            devices,
            timeframe,
            current_vendor,
            requirements,
        ))
    }

    fn positive_count(value: f64, field: &str, max: u64) -> TcoResult<u64> {
        if !value.is_finite() {
            return Err(TcoError::invalid_config(
                field,
                format!("must be a finite number, got {}", value),
            ));
        }
        if value.fract() != 0.0 {
            return Err(TcoError::invalid_config(
                field,
                format!("must be a whole number, got {}", value),
            ));
        }
        if value <= 0.0 {
            return Err(TcoError::invalid_config(
                field,
                format!("must be positive, got {}", value),
            ));
        }
        if value > max as f64 {
            return Err(TcoError::invalid_config(
                field,
                format!("must be at most {}, got {}", max, value),
            ));
        }
        Ok(value as u64)
    }

    /// Canonicalizes tags, drops blanks and keeps the first occurrence of duplicates
    fn normalize_requirements(tags: &[String]) -> TcoResult<Vec<RequirementTag>> {
        let mut seen = HashSet::new();
        let normalized: Vec<RequirementTag> = tags
            .iter()
            .map(|tag| normalize_tag(tag))
            .filter(|tag| !tag.is_empty())
            .map(RequirementTag::classify)
            .filter(|tag| seen.insert(tag.clone()))
            .collect();

        if normalized.len() > Self::MAX_REQUIREMENTS {
            return Err(TcoError::invalid_config(
                "requirements",
                format!(
                    "at most {} distinct requirements are supported, got {}",
                    Self::MAX_REQUIREMENTS,
                    normalized.len()
                ),
            ));
        }
        Ok(normalized)
    }
}
