use crate::shared::TcoResult;
use crate::tco::domain::{
    CostBreakdown, PaybackPeriod, RoiBaseline, RoiPercentage, RoiProjection, TcoConfig, VendorProfile,
    YearlyCost, NPV_DISCOUNT_RATE,
};

/// RoiEstimator projects savings against the buyer's baseline spend
pub struct RoiEstimator;

impl RoiEstimator {
    pub fn estimate(
        config: &TcoConfig,
        profile: &VendorProfile,
        breakdown: &CostBreakdown,
        yearly: &[YearlyCost],
        baseline: &RoiBaseline,
    ) -> TcoResult<RoiProjection> {
        let efficacy = profile.required(profile.efficacy.breach_reduction, "efficacy.breach_reduction")?;
        let efficacy = profile.fraction(efficacy, "efficacy.breach_reduction")?;

        let months = config.timeframe() as f64;
        let annual_cost = breakdown.total() * 12.0 / months;
        let annual_savings = baseline.annual_cost() - annual_cost;
        let total_savings = annual_savings * months / 12.0;
        let roi_percentage = if breakdown.total() > 0.0 {
            RoiPercentage::Percent(total_savings / breakdown.total() * 100.0)
        } else {
            RoiPercentage::NotApplicable
        };

        let multiplier = config.industry().profile().breach_risk_multiplier;
        let breach_reduction = (efficacy * 100.0 * multiplier).min(100.0);

        Ok(RoiProjection {
            annual_savings,
            total_savings,
            roi_percentage,
            net_present_value: Self::net_present_value(yearly, baseline.annual_cost()),
            breach_reduction,
            payback_months: Self::payback(breakdown.upfront(), annual_savings),
        })
    }

    /// Baseline spend minus vendor cost, year by year, discounted to today
    fn net_present_value(yearly: &[YearlyCost], baseline_annual_cost: f64) -> f64 {
        yearly
            .iter()
            .map(|year| {
                let avoided = baseline_annual_cost * year.months as f64 / 12.0;
                (avoided - year.total) / (1.0 + NPV_DISCOUNT_RATE).powi(year.year as i32)
            })
            .sum()
    }

    fn payback(upfront: f64, annual_savings: f64) -> PaybackPeriod {
        if annual_savings <= 0.0 {
            PaybackPeriod::NotApplicable
        } else {
            PaybackPeriod::Months(upfront / (annual_savings / 12.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::{ErrorKind, TcoError};
    use crate::tco::domain::vendor_profile::fixtures::complete_profile;
    use crate::tco::domain::{CurrentVendor, Industry, Requirements};

    fn config(industry: Industry) -> TcoConfig {
        TcoConfig::new(industry, 500, 1000, 36, CurrentVendor::Absent, Requirements::Unspecified)
    }

    /// The worked example split by year: hardware and onboarding land in year 1
    fn yearly() -> Vec<YearlyCost> {
        vec![
            YearlyCost::new(1, 12, 48_000.0, 50_000.0, 44_000.0, 0.0),
            YearlyCost::new(2, 12, 48_000.0, 0.0, 24_000.0, 0.0),
            YearlyCost::new(3, 12, 48_000.0, 0.0, 24_000.0, 0.0),
        ]
    }

    fn breakdown() -> CostBreakdown {
        CostBreakdown {
            software: 144_000.0,
            hardware: 50_000.0,
            services: 92_000.0,
            operations: 0.0,
            hardware_amortized_monthly: None,
        }
    }

    #[test]
    fn test_savings_and_payback() {
        // vendor annual cost: 286,000 / 3 years
        let baseline = RoiBaseline::industry_average(168_000.0, None);
        let roi = RoiEstimator::estimate(
            &config(Industry::Healthcare),
            &complete_profile("acme"),
            &breakdown(),
            &yearly(),
            &baseline,
        )
        .unwrap();

        let annual = 168_000.0 - 286_000.0 / 3.0;
        assert!((roi.annual_savings - annual).abs() < 1e-6);
        assert!((roi.total_savings - annual * 3.0).abs() < 1e-6);
        let payback = roi.payback_months.months().unwrap();
        assert!((payback - 142_000.0 / (annual / 12.0)).abs() < 1e-6);
    }

    #[test]
    fn test_no_savings_yields_not_applicable() {
        let baseline = RoiBaseline::industry_average(10_000.0, None);
        let roi = RoiEstimator::estimate(
            &config(Industry::Healthcare),
            &complete_profile("acme"),
            &breakdown(),
            &yearly(),
            &baseline,
        )
        .unwrap();
        assert!(roi.annual_savings < 0.0);
        assert_eq!(roi.payback_months, PaybackPeriod::NotApplicable);

        let break_even = RoiBaseline::industry_average(286_000.0 / 3.0, None);
        let roi = RoiEstimator::estimate(
            &config(Industry::Healthcare),
            &complete_profile("acme"),
            &breakdown(),
            &yearly(),
            &break_even,
        )
        .unwrap();
        assert_eq!(roi.payback_months, PaybackPeriod::NotApplicable);
    }

    #[test]
    fn test_breach_reduction_weighted_by_industry_and_capped() {
        let baseline = RoiBaseline::industry_average(0.0, None);
        let mut profile = complete_profile("acme");

        let tech = RoiEstimator::estimate(
            &config(Industry::Technology),
            &profile,
            &breakdown(),
            &yearly(),
            &baseline,
        )
        .unwrap();
        assert!((tech.breach_reduction - 60.0).abs() < 1e-9);

        profile.efficacy.breach_reduction = Some(0.9);
        let health = RoiEstimator::estimate(
            &config(Industry::Healthcare),
            &profile,
            &breakdown(),
            &yearly(),
            &baseline,
        )
        .unwrap();
        assert_eq!(health.breach_reduction, 100.0);
    }

    #[test]
    fn test_efficacy_validation() {
        let baseline = RoiBaseline::industry_average(0.0, None);
        let mut profile = complete_profile("acme");
        profile.efficacy.breach_reduction = None;
        let err = RoiEstimator::estimate(
            &config(Industry::Retail),
            &profile,
            &breakdown(),
            &yearly(),
            &baseline,
        )
        .unwrap_err();
        assert_eq!(err, TcoError::missing_field("acme", "efficacy.breach_reduction"));

        profile.efficacy.breach_reduction = Some(1.5);
        let err = RoiEstimator::estimate(
            &config(Industry::Retail),
            &profile,
            &breakdown(),
            &yearly(),
            &baseline,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidProfileField);
    }

    #[test]
    fn test_roi_percentage_and_net_present_value() {
        let baseline = RoiBaseline::industry_average(168_000.0, None);
        let roi = RoiEstimator::estimate(
            &config(Industry::Healthcare),
            &complete_profile("acme"),
            &breakdown(),
            &yearly(),
            &baseline,
        )
        .unwrap();

        let percent = roi.roi_percentage.percent().unwrap();
        assert!((percent - 218_000.0 / 286_000.0 * 100.0).abs() < 1e-6);

        let expected_npv = 26_000.0 / 1.1 + 96_000.0 / 1.21 + 96_000.0 / 1.331;
        assert!((roi.net_present_value - expected_npv).abs() < 1e-6);
    }

    #[test]
    fn test_free_vendor_has_no_roi_percentage() {
        let baseline = RoiBaseline::industry_average(1_000.0, None);
        let free = CostBreakdown {
            software: 0.0,
            hardware: 0.0,
            services: 0.0,
            operations: 0.0,
            hardware_amortized_monthly: None,
        };
        let years = vec![YearlyCost::new(1, 12, 0.0, 0.0, 0.0, 0.0)];
        let roi = RoiEstimator::estimate(
            &config(Industry::Retail),
            &complete_profile("acme"),
            &free,
            &years,
            &baseline,
        )
        .unwrap();

        assert_eq!(roi.roi_percentage, RoiPercentage::NotApplicable);
        assert!((roi.net_present_value - 1_000.0 / 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_partial_year_counts_partial_baseline() {
        let baseline = RoiBaseline::industry_average(12_000.0, None);
        let years = vec![YearlyCost::new(1, 6, 1_000.0, 0.0, 0.0, 0.0)];
        let npv = RoiEstimator::net_present_value(&years, baseline.annual_cost());
        assert!((npv - 5_000.0 / 1.1).abs() < 1e-9);
    }
}
