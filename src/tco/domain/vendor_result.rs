use serde::{Serialize, Serializer};

/// Cost of ownership split by category, over the full planning horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub software: f64,
    pub hardware: f64,
    pub services: f64,
    pub operations: f64,
    /// Monthly amortization of capitalized hardware; informational only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_amortized_monthly: Option<f64>,
}

impl CostBreakdown {
    /// Sum of the four cost categories
    pub fn total(&self) -> f64 {
        self.software + self.hardware + self.services + self.operations
    }

    /// Spend that has to be recovered before the investment pays back
    pub fn upfront(&self) -> f64 {
        self.hardware + self.services
    }
}

/// Spend falling in one year of the planning horizon.
///
/// Hardware is booked in the year of each purchase and onboarding in the
/// first year; recurring costs follow the months of the year. Summed over
/// all years, each category equals the matching [`CostBreakdown`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyCost {
    /// 1-based
    pub year: u32,
    /// Months of the horizon inside this year; only the last year can be partial
    pub months: u32,
    pub software: f64,
    pub hardware: f64,
    pub services: f64,
    pub operations: f64,
    pub total: f64,
}

impl YearlyCost {
    pub fn new(year: u32, months: u32, software: f64, hardware: f64, services: f64, operations: f64) -> Self {
        Self {
            year,
            months,
            software,
            hardware,
            services,
            operations,
            total: software + hardware + services + operations,
        }
    }
}

/// Months until cumulative savings cover the upfront spend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaybackPeriod {
    Months(f64),
    /// The vendor saves nothing against the baseline
    NotApplicable,
}

impl PaybackPeriod {
    pub fn months(&self) -> Option<f64> {
        match self {
            PaybackPeriod::Months(months) => Some(*months),
            PaybackPeriod::NotApplicable => None,
        }
    }
}

impl Serialize for PaybackPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PaybackPeriod::Months(months) => serializer.serialize_f64(*months),
            PaybackPeriod::NotApplicable => serializer.serialize_str("n/a"),
        }
    }
}

/// Savings over the horizon as a percentage of the vendor's total cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoiPercentage {
    Percent(f64),
    /// The vendor costs nothing, so there is nothing to divide by
    NotApplicable,
}

impl RoiPercentage {
    pub fn percent(&self) -> Option<f64> {
        match self {
            RoiPercentage::Percent(percent) => Some(*percent),
            RoiPercentage::NotApplicable => None,
        }
    }
}

impl Serialize for RoiPercentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RoiPercentage::Percent(percent) => serializer.serialize_f64(*percent),
            RoiPercentage::NotApplicable => serializer.serialize_str("n/a"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiProjection {
    pub annual_savings: f64,
    pub total_savings: f64,
    pub roi_percentage: RoiPercentage,
    /// Yearly savings discounted at [`NPV_DISCOUNT_RATE`]
    pub net_present_value: f64,
    /// Industry-weighted breach likelihood reduction, percent
    pub breach_reduction: f64,
    pub payback_months: PaybackPeriod,
}

/// Annual discount rate of the net present value
pub const NPV_DISCOUNT_RATE: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalEstimate {
    /// Percent of administrative work automated, 0-100
    pub automation_level: f64,
    pub fte_saved: f64,
    /// Maintenance windows over the planning horizon
    pub maintenance_windows: f64,
    /// Mean time to resolution, hours
    pub mttr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub security_score: f64,
    pub compliance_score: f64,
    pub missing_frameworks: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitivePosition {
    pub innovation_score: f64,
    pub future_readiness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEstimate {
    /// Days until the deployment delivers value
    pub time_to_value: f64,
    pub implementation_weeks: f64,
}

/// Complete evaluation of one vendor for one buyer configuration.
///
/// `total_cost` and `per_device_per_month` are derived from the breakdown at
/// construction, so they can never disagree with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorResult {
    vendor_id: String,
    vendor_name: String,
    total_cost: f64,
    per_device_per_month: f64,
    breakdown: CostBreakdown,
    yearly: Vec<YearlyCost>,
    roi: RoiProjection,
    operational: OperationalEstimate,
    risk: RiskAssessment,
    competitive: CompetitivePosition,
    timeline: TimelineEstimate,
}

impl VendorResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        vendor_id: String,
        vendor_name: String,
        device_months: f64,
        breakdown: CostBreakdown,
        yearly: Vec<YearlyCost>,
        roi: RoiProjection,
        operational: OperationalEstimate,
        risk: RiskAssessment,
        competitive: CompetitivePosition,
        timeline: TimelineEstimate,
    ) -> Self {
        let total_cost = breakdown.total();
        let per_device_per_month = if device_months > 0.0 {
            total_cost / device_months
        } else {
            0.0
        };
        Self {
            vendor_id,
            vendor_name,
            total_cost,
            per_device_per_month,
            breakdown,
            yearly,
            roi,
            operational,
            risk,
            competitive,
            timeline,
        }
    }

    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    pub fn vendor_name(&self) -> &str {
        &self.vendor_name
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn per_device_per_month(&self) -> f64 {
        self.per_device_per_month
    }

    pub fn breakdown(&self) -> &CostBreakdown {
        &self.breakdown
    }

    /// Cost per year of the horizon, first year first
    pub fn yearly(&self) -> &[YearlyCost] {
        &self.yearly
    }

    pub fn roi(&self) -> &RoiProjection {
        &self.roi
    }

    pub fn operational(&self) -> &OperationalEstimate {
        &self.operational
    }

    pub fn risk(&self) -> &RiskAssessment {
        &self.risk
    }

    pub fn competitive(&self) -> &CompetitivePosition {
        &self.competitive
    }

    pub fn timeline(&self) -> &TimelineEstimate {
        &self.timeline
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_total_cost_is_sum_of_breakdown() {
        let result = result_with_cost("acme", breakdown(144_000.0, 50_000.0, 92_000.0, 0.0));
        assert_eq!(result.total_cost(), 286_000.0);
        assert_eq!(result.per_device_per_month(), 286.0);
    }

    #[test]
    fn test_zero_device_months_yields_zero_per_device() {
        let result = VendorResult::new(
            "acme".to_string(),
            "Acme".to_string(),
            0.0,
            breakdown(10.0, 0.0, 0.0, 0.0),
            Vec::new(),
            *result_with_cost("x", breakdown(0.0, 0.0, 0.0, 0.0)).roi(),
            *result_with_cost("x", breakdown(0.0, 0.0, 0.0, 0.0)).operational(),
            RiskAssessment {
                security_score: 0.0,
                compliance_score: 0.0,
                missing_frameworks: vec![],
            },
            CompetitivePosition {
                innovation_score: 0.0,
                future_readiness: 0.0,
            },
            TimelineEstimate {
                time_to_value: 1.0,
                implementation_weeks: 1.0,
            },
        );
        assert_eq!(result.per_device_per_month(), 0.0);
    }

    #[test]
    fn test_upfront_is_hardware_plus_services() {
        assert_eq!(breakdown(1.0, 2.0, 3.0, 4.0).upfront(), 5.0);
    }

    #[test]
    fn test_payback_serialization() {
        assert_eq!(
            serde_json::to_string(&PaybackPeriod::NotApplicable).unwrap(),
            "\"n/a\""
        );
        assert_eq!(
            serde_json::to_string(&PaybackPeriod::Months(6.5)).unwrap(),
            "6.5"
        );
        assert_eq!(PaybackPeriod::NotApplicable.months(), None);
    }

    #[test]
    fn test_roi_percentage_serialization() {
        assert_eq!(
            serde_json::to_string(&RoiPercentage::NotApplicable).unwrap(),
            "\"n/a\""
        );
        assert_eq!(serde_json::to_string(&RoiPercentage::Percent(-12.5)).unwrap(), "-12.5");
        assert_eq!(RoiPercentage::Percent(40.0).percent(), Some(40.0));
    }

    #[test]
    fn test_yearly_cost_total() {
        let year = YearlyCost::new(2, 6, 100.0, 0.0, 25.5, 4.5);
        assert_eq!(year.total, 130.0);
        let json = serde_json::to_value(year).unwrap();
        assert_eq!(json["months"], 6);
        assert_eq!(json["total"], 130.0);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = result_with_cost("acme", breakdown(1.0, 2.0, 3.0, 4.0));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["vendorId"], "acme");
        assert_eq!(json["totalCost"], 10.0);
        assert!(json["breakdown"].get("hardwareAmortizedMonthly").is_none());
        assert_eq!(json["roi"]["paybackMonths"], 12.0);
        assert_eq!(json["roi"]["roiPercentage"], 25.0);
        assert_eq!(json["roi"]["netPresentValue"], 2500.0);
        assert_eq!(json["yearly"][0]["year"], 1);
        assert_eq!(json["yearly"][0]["total"], 10.0);
        assert_eq!(json["timeline"]["implementationWeeks"], 8.0);
    }
}
