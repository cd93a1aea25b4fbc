use crate::shared::error::TcoError;
use crate::shared::TcoResult;
use crate::tco::domain::{TcoConfig, TimelineEstimate, VendorProfile};

/// TimelineEstimator predicts how long a vendor takes to deploy and deliver value
pub struct TimelineEstimator;

impl TimelineEstimator {
    pub fn estimate(config: &TcoConfig, profile: &VendorProfile) -> TcoResult<TimelineEstimate> {
        let devices = config.devices();
        if devices == 0 {
            return Err(TcoError::InvalidScale { devices });
        }

        let deployment = &profile.deployment;
        let onboarding = profile.required_amount(deployment.onboarding_days, "deployment.onboarding_days")?;
        let scale = profile.required_amount(deployment.scale_days, "deployment.scale_days")?;
        let time_to_value = onboarding + scale * (devices as f64).ln();
        if time_to_value <= 0.0 {
            return Err(TcoError::invalid_field(
                &profile.id,
                "deployment.onboarding_days",
                format!("time to value must be positive, got {} days", time_to_value),
            ));
        }

        let base_weeks = profile.required_amount(deployment.base_weeks, "deployment.base_weeks")?;
        let custom_integrations = config
            .requirements()
            .known()
            .into_iter()
            .filter(|requirement| profile.needs_custom_integration(*requirement))
            .count();
        let integration_weeks = if custom_integrations == 0 {
            0.0
        } else {
            let per_requirement = profile.required_amount(
                deployment.integration_weeks_per_requirement,
                "deployment.integration_weeks_per_requirement",
            )?;
            per_requirement * custom_integrations as f64
        };

        let implementation_weeks = base_weeks + integration_weeks;
        if implementation_weeks <= 0.0 {
            return Err(TcoError::invalid_field(
                &profile.id,
                "deployment.base_weeks",
                format!("implementation time must be positive, got {} weeks", implementation_weeks),
            ));
        }

        Ok(TimelineEstimate {
            time_to_value,
            implementation_weeks,
        })
    }
}
