use super::competitive_scorer::CompetitiveScorer;
use super::cost_model::CostModel;
use super::operational_estimator::OperationalEstimator;
use super::risk_scorer::RiskScorer;
use super::roi_estimator::RoiEstimator;
use super::timeline_estimator::TimelineEstimator;
use crate::shared::TcoResult;
use crate::tco::domain::{RoiBaseline, TcoConfig, VendorProfile, VendorResult};

/// ResultAggregator runs every calculator for one vendor and assembles the result.
///
/// The first failing calculator fails the vendor; partial results are never returned.
#[derive(Debug, Clone, Copy)]
pub struct ResultAggregator {
    cost_model: CostModel,
}

impl ResultAggregator {
    pub fn new(cost_model: CostModel) -> Self {
        Self { cost_model }
    }

    pub fn evaluate(
        &self,
        config: &TcoConfig,
        profile: &VendorProfile,
        baseline: &RoiBaseline,
    ) -> TcoResult<VendorResult> {
        let breakdown = self.cost_model.compute(config, profile)?;
        let yearly = self.cost_model.project_years(config, profile, &breakdown)?;
        let roi = RoiEstimator::estimate(config, profile, &breakdown, &yearly, baseline)?;
        let operational = OperationalEstimator::estimate(config, profile)?;
        let risk = RiskScorer::score(config, profile)?;
        let competitive = CompetitiveScorer::score(profile)?;
        let timeline = TimelineEstimator::estimate(config, profile)?;

        Ok(VendorResult::new(
            profile.id.clone(),
            profile.name.clone(),
            config.device_months(),
            breakdown,
            yearly,
            roi,
            operational,
            risk,
            competitive,
            timeline,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::{ErrorKind, TcoError};
    use crate::tco::domain::vendor_profile::fixtures::complete_profile;
    use crate::tco::domain::{CurrentVendor, Industry, Requirement, RequirementTag, Requirements};

    fn config() -> TcoConfig {
        TcoConfig::new(
            Industry::Healthcare,
            500,
            1000,
            36,
            CurrentVendor::Absent,
            Requirements::Specified(vec![
                RequirementTag::Known(Requirement::Mfa),
                RequirementTag::Known(Requirement::Encryption),
            ]),
        )
    }

    fn baseline() -> RoiBaseline {
        RoiBaseline::industry_average(168_000.0, None)
    }

    #[test]
    fn test_worked_example_result() {
        let mut profile = complete_profile("acme");
        profile.operations.admin_hours_per_device_month = Some(0.0);

        let result = ResultAggregator::new(CostModel::default())
            .evaluate(&config(), &profile, &baseline())
            .unwrap();

        assert_eq!(result.vendor_id(), "acme");
        assert_eq!(result.vendor_name(), "acme Networks");
        assert_eq!(result.total_cost(), 286_000.0);
        assert!((result.per_device_per_month() - 286_000.0 / 36_000.0).abs() < 1e-9);

        let totals: Vec<f64> = result.yearly().iter().map(|year| year.total).collect();
        assert_eq!(totals, vec![142_000.0, 72_000.0, 72_000.0]);
        // baseline 168,000 a year against 286,000 over three years
        let percent = result.roi().roi_percentage.percent().unwrap();
        assert!((percent - 218_000.0 / 286_000.0 * 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_invariants_hold() {
        let result = ResultAggregator::new(CostModel::default())
            .evaluate(&config(), &complete_profile("acme"), &baseline())
            .unwrap();

        let breakdown = result.breakdown();
        let sum = breakdown.software + breakdown.hardware + breakdown.services + breakdown.operations;
        assert!((result.total_cost() - sum).abs() < 1e-6);

        for score in [
            result.operational().automation_level,
            result.risk().security_score,
            result.risk().compliance_score,
            result.competitive().innovation_score,
            result.competitive().future_readiness,
        ] {
            assert!((0.0..=100.0).contains(&score), "score out of range: {}", score);
        }

        let yearly_total: f64 = result.yearly().iter().map(|year| year.total).sum();
        assert!((yearly_total - result.total_cost()).abs() < 1e-6);
        assert_eq!(result.yearly().len(), 3);
    }

    #[test]
    fn test_any_calculator_failure_fails_vendor() {
        let mut profile = complete_profile("acme");
        profile.deployment.base_weeks = None;

        let err = ResultAggregator::new(CostModel::default())
            .evaluate(&config(), &profile, &baseline())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingProfileField);
        assert_eq!(err, TcoError::missing_field("acme", "deployment.base_weeks"));
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let aggregator = ResultAggregator::new(CostModel::default());
        let profile = complete_profile("acme");
        assert_eq!(
            aggregator.evaluate(&config(), &profile, &baseline()).unwrap(),
            aggregator.evaluate(&config(), &profile, &baseline()).unwrap()
        );
    }
}
