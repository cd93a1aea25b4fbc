use super::cost_model::CostModel;
use crate::tco::domain::{RoiBaseline, TcoConfig, VendorProfile};

/// BaselineResolver determines, once per run, the annual spend every vendor is compared against.
///
/// Resolution order:
/// 1. the named current vendor's own annual cost, when it is in the catalog
///    and its cost model succeeds
/// 2. the industry-average cost per device, with a note explaining why the
///    current vendor could not be used
pub struct BaselineResolver;

impl BaselineResolver {
    pub fn resolve(config: &TcoConfig, catalog: &[VendorProfile], cost_model: &CostModel) -> RoiBaseline {
        let industry_average = Self::industry_average(config);

        let Some(current_id) = config.current_vendor().id() else {
            return RoiBaseline::industry_average(industry_average, None);
        };

        let Some(profile) = catalog.iter().find(|profile| profile.id == current_id) else {
            return RoiBaseline::industry_average(
                industry_average,
                Some(format!(
                    "Current vendor '{}' is not in the catalog; using the {} industry average",
                    current_id,
                    config.industry()
                )),
            );
        };

        match cost_model.annual_cost(config, profile) {
            Ok(annual_cost) => RoiBaseline::current_vendor(current_id, annual_cost),
            Err(e) => RoiBaseline::industry_average(
                industry_average,
                Some(format!(
                    "Cost of current vendor '{}' could not be computed ({}); using the {} industry average",
                    current_id,
                    e.to_string().lines().next().unwrap_or_default(),
                    config.industry()
                )),
            ),
        }
    }

    /// Industry-average annual spend for the configured fleet
    pub fn industry_average(config: &TcoConfig) -> f64 {
        config.industry().profile().baseline_cost_per_device_month * config.devices() as f64 * 12.0
    }
}
