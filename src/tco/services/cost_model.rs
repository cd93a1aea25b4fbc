use crate::shared::error::TcoError;
use crate::shared::TcoResult;
use crate::tco::domain::vendor_profile::LicenseModel;
use crate::tco::domain::{CostBreakdown, TcoConfig, VendorProfile, YearlyCost};

/// Default internal labor cost per administrator hour
pub const DEFAULT_LABOR_RATE: f64 = 60.0;

/// CostModel computes the cost breakdown of one vendor over the planning horizon.
///
/// Each category is rounded to cents; the total is always the sum of the
/// rounded categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    labor_rate_per_hour: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self::new(DEFAULT_LABOR_RATE)
    }
}

impl CostModel {
    pub fn new(labor_rate_per_hour: f64) -> Self {
        Self {
            labor_rate_per_hour,
        }
    }

    pub fn labor_rate_per_hour(&self) -> f64 {
        self.labor_rate_per_hour
    }

    pub fn compute(&self, config: &TcoConfig, profile: &VendorProfile) -> TcoResult<CostBreakdown> {
        let months = config.timeframe() as f64;

        let software = Self::software(config, profile, months)?;
        let plan = HardwarePlan::new(config, profile)?;
        let hardware = plan.spend_between(0, config.timeframe());
        let services = Self::services(profile, months)?;
        let operations = self.operations(config, profile, months)?;

        let hardware = round_cents(hardware);
        Ok(CostBreakdown {
            software: round_cents(software),
            hardware,
            services: round_cents(services),
            operations: round_cents(operations),
            hardware_amortized_monthly: plan.capitalized.then(|| round_cents(hardware / months)),
        })
    }

    /// Splits `breakdown` over the years of the horizon.
    ///
    /// Every year but the last is rounded to cents on its own; the last year
    /// takes the remainder, so each category sums back to `breakdown`.
    pub fn project_years(
        &self,
        config: &TcoConfig,
        profile: &VendorProfile,
        breakdown: &CostBreakdown,
    ) -> TcoResult<Vec<YearlyCost>> {
        let timeframe = config.timeframe();
        let monthly_software = Self::software(config, profile, 1.0)?;
        let plan = HardwarePlan::new(config, profile)?;
        let onboarding = profile.required_amount(profile.services.onboarding_fee, "services.onboarding_fee")?;
        let support = profile.required_amount(profile.services.support_monthly, "services.support_monthly")?;
        let monthly_operations = self.operations(config, profile, 1.0)?;

        let year_count = (timeframe + 11) / 12;
        let mut booked = [0.0; 4];
        let mut years = Vec::with_capacity(year_count as usize);
        for year in 1..=year_count {
            let start = (year - 1) * 12;
            let end = (year * 12).min(timeframe);
            let months = end - start;

            let raw = [
                monthly_software * months as f64,
                plan.spend_between(start, end),
                support * months as f64 + if year == 1 { onboarding } else { 0.0 },
                monthly_operations * months as f64,
            ];
            let totals = [
                breakdown.software,
                breakdown.hardware,
                breakdown.services,
                breakdown.operations,
            ];

            let mut amounts = [0.0; 4];
            for (category, amount) in amounts.iter_mut().enumerate() {
                *amount = if year == year_count {
                    round_cents(totals[category] - booked[category])
                } else {
                    round_cents(raw[category])
                };
                booked[category] += *amount;
            }

            let [software, hardware, services, operations] = amounts;
            years.push(YearlyCost::new(year, months, software, hardware, services, operations));
        }
        Ok(years)
    }

    /// Total cost of ownership expressed per year
    pub fn annual_cost(&self, config: &TcoConfig, profile: &VendorProfile) -> TcoResult<f64> {
        let breakdown = self.compute(config, profile)?;
        Ok(breakdown.total() * 12.0 / config.timeframe() as f64)
    }

    fn software(config: &TcoConfig, profile: &VendorProfile, months: f64) -> TcoResult<f64> {
        let rate = profile.required_amount(profile.pricing.rate_per_month, "pricing.rate_per_month")?;
        let units = match profile.pricing.model {
            LicenseModel::PerDevice => config.devices(),
            LicenseModel::PerUser => config.users(),
        };
        let discount = Self::volume_discount(profile, units)?;
        Ok(rate * units as f64 * months * (1.0 - discount))
    }

    /// Discount of the highest tier whose threshold the licensed units reach
    fn volume_discount(profile: &VendorProfile, units: u64) -> TcoResult<f64> {
        let mut best: Option<(u64, f64)> = None;
        for tier in &profile.pricing.volume_discounts {
            let discount = profile.amount(tier.discount, "pricing.volume_discounts.discount")?;
            if discount >= 1.0 {
                return Err(TcoError::invalid_field(
                    &profile.id,
                    "pricing.volume_discounts.discount",
                    format!("must be below 1, got {}", discount),
                ));
            }
            if tier.min_units <= units && best.map_or(true, |(min, _)| tier.min_units > min) {
                best = Some((tier.min_units, discount));
            }
        }
        Ok(best.map_or(0.0, |(_, discount)| discount))
    }

    fn services(profile: &VendorProfile, months: f64) -> TcoResult<f64> {
        let onboarding = profile.required_amount(profile.services.onboarding_fee, "services.onboarding_fee")?;
        let support = profile.required_amount(profile.services.support_monthly, "services.support_monthly")?;
        Ok(onboarding + support * months)
    }

    fn operations(&self, config: &TcoConfig, profile: &VendorProfile, months: f64) -> TcoResult<f64> {
        let hours = profile.required_amount(
            profile.operations.admin_hours_per_device_month,
            "operations.admin_hours_per_device_month",
        )?;
        Ok(hours * config.devices() as f64 * months * self.labor_rate_per_hour)
    }
}

/// One purchase at the start of the horizon, then one per refresh cycle
#[derive(Debug, Clone, Copy)]
struct HardwarePlan {
    one_purchase: f64,
    refresh_cycle_months: Option<u32>,
    capitalized: bool,
}

impl HardwarePlan {
    fn new(config: &TcoConfig, profile: &VendorProfile) -> TcoResult<Self> {
        let hardware = &profile.hardware;
        let appliance = profile.required_amount(hardware.appliance_cost, "hardware.appliance_cost")?;
        let per_device = profile.amount(hardware.per_device_cost, "hardware.per_device_cost")?;
        if hardware.refresh_cycle_months == Some(0) {
            return Err(TcoError::invalid_field(
                &profile.id,
                "hardware.refresh_cycle_months",
                "must be positive",
            ));
        }

        Ok(Self {
            one_purchase: appliance + per_device * config.devices() as f64,
            refresh_cycle_months: hardware.refresh_cycle_months,
            capitalized: hardware.capitalized,
        })
    }

    /// Hardware spend in months `start..end` of the horizon, counted from 0
    fn spend_between(&self, start: u32, end: u32) -> f64 {
        let purchases = match self.refresh_cycle_months {
            None => usize::from(start == 0 && end > 0),
            Some(cycle) => (start..end).filter(|month| month % cycle == 0).count(),
        };
        self.one_purchase * purchases as f64
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ErrorKind;
    use crate::tco::domain::vendor_profile::fixtures::complete_profile;
    use crate::tco::domain::vendor_profile::VolumeTier;
    use crate::tco::domain::{CurrentVendor, Industry, Requirements};

    fn config(users: u64, devices: u64, timeframe: u32) -> TcoConfig {
        TcoConfig::new(
            Industry::Healthcare,
            users,
            devices,
            timeframe,
            CurrentVendor::Absent,
            Requirements::Unspecified,
        )
    }

    #[test]
    fn test_worked_example() {
        let mut profile = complete_profile("acme");
        profile.operations.admin_hours_per_device_month = Some(0.0);
        let breakdown = CostModel::default()
            .compute(&config(500, 1000, 36), &profile)
            .unwrap();

        assert_eq!(breakdown.software, 144_000.0);
        assert_eq!(breakdown.hardware, 50_000.0);
        assert_eq!(breakdown.services, 92_000.0);
        assert_eq!(breakdown.operations, 0.0);
        assert_eq!(breakdown.total(), 286_000.0);
        assert_eq!(breakdown.hardware_amortized_monthly, None);
    }

    #[test]
    fn test_operations_uses_labor_rate() {
        let profile = complete_profile("acme");
        let breakdown = CostModel::new(50.0).compute(&config(500, 1000, 36), &profile).unwrap();
        // 0.01 h * 1000 devices * 36 months * $50
        assert_eq!(breakdown.operations, 18_000.0);
    }

    #[test]
    fn test_per_user_licensing() {
        let mut profile = complete_profile("acme");
        profile.pricing.model = LicenseModel::PerUser;
        let breakdown = CostModel::default().compute(&config(500, 1000, 36), &profile).unwrap();
        assert_eq!(breakdown.software, 4.0 * 500.0 * 36.0);
    }

    #[test]
    fn test_highest_reached_volume_tier_applies() {
        let mut profile = complete_profile("acme");
        profile.pricing.volume_discounts = vec![
            VolumeTier { min_units: 5000, discount: 0.3 },
            VolumeTier { min_units: 100, discount: 0.1 },
            VolumeTier { min_units: 1000, discount: 0.2 },
        ];
        let breakdown = CostModel::default().compute(&config(500, 1000, 36), &profile).unwrap();
        assert_eq!(breakdown.software, 115_200.0);
    }

    #[test]
    fn test_full_discount_rejected() {
        let mut profile = complete_profile("acme");
        profile.pricing.volume_discounts = vec![VolumeTier { min_units: 1, discount: 1.0 }];
        let err = CostModel::default().compute(&config(500, 1000, 36), &profile).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidProfileField);
    }

    #[test]
    fn test_hardware_refresh_cycle() {
        let mut profile = complete_profile("acme");
        profile.hardware.per_device_cost = 5.0;
        profile.hardware.refresh_cycle_months = Some(36);

        // 36 months: one purchase; 37 months: a refresh is needed
        let model = CostModel::default();
        let once = model.compute(&config(500, 1000, 36), &profile).unwrap();
        assert_eq!(once.hardware, 55_000.0);
        let twice = model.compute(&config(500, 1000, 37), &profile).unwrap();
        assert_eq!(twice.hardware, 110_000.0);
    }

    #[test]
    fn test_zero_refresh_cycle_rejected() {
        let mut profile = complete_profile("acme");
        profile.hardware.refresh_cycle_months = Some(0);
        let err = CostModel::default().compute(&config(500, 1000, 36), &profile).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidProfileField);
    }

    #[test]
    fn test_capitalized_hardware_reports_amortization() {
        let mut profile = complete_profile("acme");
        profile.hardware.capitalized = true;
        let breakdown = CostModel::default().compute(&config(500, 1000, 36), &profile).unwrap();
        assert_eq!(breakdown.hardware, 50_000.0);
        assert_eq!(breakdown.hardware_amortized_monthly, Some(1388.89));
    }

    #[test]
    fn test_missing_rate_is_not_zero() {
        let mut profile = complete_profile("acme");
        profile.pricing.rate_per_month = None;
        let err = CostModel::default().compute(&config(500, 1000, 36), &profile).unwrap_err();
        assert_eq!(
            err,
            TcoError::missing_field("acme", "pricing.rate_per_month")
        );
    }

    #[test]
    fn test_missing_services_fields() {
        let mut profile = complete_profile("acme");
        profile.services.support_monthly = None;
        let err = CostModel::default().compute(&config(500, 1000, 36), &profile).unwrap_err();
        assert_eq!(err, TcoError::missing_field("acme", "services.support_monthly"));
    }

    #[test]
    fn test_negative_appliance_cost_rejected() {
        let mut profile = complete_profile("acme");
        profile.hardware.appliance_cost = Some(-1.0);
        let err = CostModel::default().compute(&config(500, 1000, 36), &profile).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidProfileField);
    }

    #[test]
    fn test_components_rounded_to_cents_and_summed() {
        let mut profile = complete_profile("acme");
        profile.pricing.rate_per_month = Some(1.0 / 3.0);
        let breakdown = CostModel::default().compute(&config(7, 7, 7), &profile).unwrap();
        assert_eq!(breakdown.software, 16.33);
        let sum = breakdown.software + breakdown.hardware + breakdown.services + breakdown.operations;
        assert!((breakdown.total() - sum).abs() < 1e-6);
    }

    #[test]
    fn test_annual_cost() {
        let mut profile = complete_profile("acme");
        profile.operations.admin_hours_per_device_month = Some(0.0);
        let annual = CostModel::default().annual_cost(&config(500, 1000, 36), &profile).unwrap();
        assert!((annual - 286_000.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_project_years_books_upfront_costs_in_first_year() {
        let mut profile = complete_profile("acme");
        profile.operations.admin_hours_per_device_month = Some(0.0);
        let config = config(500, 1000, 36);
        let model = CostModel::default();
        let breakdown = model.compute(&config, &profile).unwrap();

        let years = model.project_years(&config, &profile, &breakdown).unwrap();
        assert_eq!(
            years,
            vec![
                YearlyCost::new(1, 12, 48_000.0, 50_000.0, 44_000.0, 0.0),
                YearlyCost::new(2, 12, 48_000.0, 0.0, 24_000.0, 0.0),
                YearlyCost::new(3, 12, 48_000.0, 0.0, 24_000.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_project_years_partial_last_year() {
        let profile = complete_profile("acme");
        let config = config(500, 1000, 30);
        let model = CostModel::default();
        let breakdown = model.compute(&config, &profile).unwrap();

        let years = model.project_years(&config, &profile, &breakdown).unwrap();
        let months: Vec<u32> = years.iter().map(|year| year.months).collect();
        assert_eq!(months, vec![12, 12, 6]);
        assert_eq!(years[2].software, 24_000.0);
        // 0.01 h * 1000 devices * 6 months * $60
        assert_eq!(years[2].operations, 3_600.0);
    }

    #[test]
    fn test_project_years_books_refresh_purchases() {
        let mut profile = complete_profile("acme");
        profile.hardware.per_device_cost = 5.0;
        profile.hardware.refresh_cycle_months = Some(24);
        let config = config(500, 1000, 37);
        let model = CostModel::default();
        let breakdown = model.compute(&config, &profile).unwrap();
        assert_eq!(breakdown.hardware, 110_000.0);

        let years = model.project_years(&config, &profile, &breakdown).unwrap();
        let hardware: Vec<f64> = years.iter().map(|year| year.hardware).collect();
        assert_eq!(hardware, vec![55_000.0, 0.0, 55_000.0, 0.0]);
    }

    #[test]
    fn test_project_years_sum_to_breakdown() {
        let mut profile = complete_profile("acme");
        profile.pricing.rate_per_month = Some(1.0 / 3.0);
        profile.services.support_monthly = Some(10.0 / 7.0);
        let config = config(7, 7, 25);
        let model = CostModel::default();
        let breakdown = model.compute(&config, &profile).unwrap();

        let years = model.project_years(&config, &profile, &breakdown).unwrap();
        let sum = |pick: fn(&YearlyCost) -> f64| years.iter().map(pick).sum::<f64>();
        assert!((sum(|y| y.software) - breakdown.software).abs() < 1e-6);
        assert!((sum(|y| y.hardware) - breakdown.hardware).abs() < 1e-6);
        assert!((sum(|y| y.services) - breakdown.services).abs() < 1e-6);
        assert!((sum(|y| y.operations) - breakdown.operations).abs() < 1e-6);
        assert!((sum(|y| y.total) - breakdown.total()).abs() < 1e-6);
    }
}
