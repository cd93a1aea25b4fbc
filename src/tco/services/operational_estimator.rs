use crate::shared::TcoResult;
use crate::tco::domain::{OperationalEstimate, TcoConfig, VendorProfile};
use crate::tco::policies::RequirementWeighting;

/// OperationalEstimator derives automation, staffing and maintenance figures
pub struct OperationalEstimator;

impl OperationalEstimator {
    pub fn estimate(config: &TcoConfig, profile: &VendorProfile) -> TcoResult<OperationalEstimate> {
        let automation = Self::automation_fraction(config, profile)?;
        let automation_level = (automation * 100.0).clamp(0.0, 100.0);

        let industry = config.industry().profile();
        let baseline_fte = config.devices() as f64 / industry.devices_per_admin_fte
            + config.users() as f64 / industry.users_per_admin_fte;
        let fte_saved = automation_level / 100.0 * baseline_fte;

        let cadence = profile.required(profile.support.patch_cadence, "support.patch_cadence")?;
        let maintenance_windows = cadence.windows_per_year() * config.timeframe() as f64 / 12.0;

        let mttr = profile.required(profile.support.mttr, "support.mttr")?;
        profile.amount(mttr.value, "support.mttr.value")?;

        Ok(OperationalEstimate {
            automation_level,
            fte_saved,
            maintenance_windows,
            mttr: mttr.in_hours(),
        })
    }

    /// Weighted coefficient over the requested requirements, or the vendor baseline without any
    fn automation_fraction(config: &TcoConfig, profile: &VendorProfile) -> TcoResult<f64> {
        let known = config.requirements().known();
        let coefficients =
            profile.requirement_values(&profile.automation.coefficients, "automation.coefficients")?;
        match RequirementWeighting::average(&known, &coefficients) {
            Some(fraction) => Ok(fraction),
            None => {
                let baseline = profile.required(profile.automation.baseline, "automation.baseline")?;
                Ok(profile.finite(baseline, "automation.baseline")?.clamp(0.0, 1.0))
            }
        }
    }
}
