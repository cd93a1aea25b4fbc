use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaselineSource {
    /// Annual cost of the buyer's current vendor under the same configuration
    CurrentVendor,
    /// Industry-average spend per device
    IndustryAverage,
}

/// What the buyer spends per year today; every vendor's savings are measured against it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiBaseline {
    annual_cost: f64,
    source: BaselineSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    vendor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl RoiBaseline {
    pub fn current_vendor(vendor_id: &str, annual_cost: f64) -> Self {
        Self {
            annual_cost,
            source: BaselineSource::CurrentVendor,
            vendor_id: Some(vendor_id.to_string()),
            note: None,
        }
    }

    pub fn industry_average(annual_cost: f64, note: Option<String>) -> Self {
        Self {
            annual_cost,
            source: BaselineSource::IndustryAverage,
            vendor_id: None,
            note,
        }
    }

    pub fn annual_cost(&self) -> f64 {
        self.annual_cost
    }

    pub fn source(&self) -> BaselineSource {
        self.source
    }

    pub fn vendor_id(&self) -> Option<&str> {
        self.vendor_id.as_deref()
    }

    /// Why the industry average was used instead of a named current vendor
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_omits_empty_fields() {
        let json = serde_json::to_value(RoiBaseline::industry_average(120_000.0, None)).unwrap();
        assert_eq!(json["source"], "industry-average");
        assert_eq!(json["annualCost"], 120_000.0);
        assert!(json.get("vendorId").is_none());
        assert!(json.get("note").is_none());

        let json = serde_json::to_value(RoiBaseline::current_vendor("legacy", 1.0)).unwrap();
        assert_eq!(json["source"], "current-vendor");
        assert_eq!(json["vendorId"], "legacy");
    }
}
