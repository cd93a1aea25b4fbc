use serde::{Serialize, Serializer};
use std::fmt;

/// Buyer industry. Unknown industries are kept verbatim and use default factors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Industry {
    Healthcare,
    Finance,
    Government,
    Technology,
    Retail,
    Education,
    Manufacturing,
    Energy,
    Other(String),
}

/// Static factors for one industry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndustryProfile {
    /// Weight applied to a vendor's breach-reduction efficacy
    pub breach_risk_multiplier: f64,
    /// Industry-average spend on the capability, per device per month
    pub baseline_cost_per_device_month: f64,
    /// Devices one administrator can look after
    pub devices_per_admin_fte: f64,
    /// Users one administrator can look after
    pub users_per_admin_fte: f64,
    /// Compliance frameworks the industry is expected to meet
    pub mandated_frameworks: &'static [&'static str],
}

const HEALTHCARE: IndustryProfile = IndustryProfile {
    breach_risk_multiplier: 1.5,
    baseline_cost_per_device_month: 14.0,
    devices_per_admin_fte: 1500.0,
    users_per_admin_fte: 4000.0,
    mandated_frameworks: &["hipaa", "hitech", "iso-27001"],
};

const FINANCE: IndustryProfile = IndustryProfile {
    breach_risk_multiplier: 1.3,
    baseline_cost_per_device_month: 15.0,
    devices_per_admin_fte: 1500.0,
    users_per_admin_fte: 4000.0,
    mandated_frameworks: &["pci-dss", "sox", "glba"],
};

const GOVERNMENT: IndustryProfile = IndustryProfile {
    breach_risk_multiplier: 1.1,
    baseline_cost_per_device_month: 13.0,
    devices_per_admin_fte: 1200.0,
    users_per_admin_fte: 3500.0,
    mandated_frameworks: &["fisma", "fedramp", "nist-800-53"],
};

const TECHNOLOGY: IndustryProfile = IndustryProfile {
    breach_risk_multiplier: 1.0,
    baseline_cost_per_device_month: 10.0,
    devices_per_admin_fte: 2500.0,
    users_per_admin_fte: 6000.0,
    mandated_frameworks: &["soc2", "iso-27001", "gdpr"],
};

const RETAIL: IndustryProfile = IndustryProfile {
    breach_risk_multiplier: 1.15,
    baseline_cost_per_device_month: 9.0,
    devices_per_admin_fte: 2000.0,
    users_per_admin_fte: 5000.0,
    mandated_frameworks: &["pci-dss", "gdpr", "ccpa"],
};

const EDUCATION: IndustryProfile = IndustryProfile {
    breach_risk_multiplier: 0.9,
    baseline_cost_per_device_month: 7.0,
    devices_per_admin_fte: 2500.0,
    users_per_admin_fte: 6000.0,
    mandated_frameworks: &["ferpa", "coppa"],
};

const MANUFACTURING: IndustryProfile = IndustryProfile {
    breach_risk_multiplier: 1.1,
    baseline_cost_per_device_month: 11.0,
    devices_per_admin_fte: 2000.0,
    users_per_admin_fte: 5000.0,
    mandated_frameworks: &["nist-800-171", "iso-27001"],
};

const ENERGY: IndustryProfile = IndustryProfile {
    breach_risk_multiplier: 1.2,
    baseline_cost_per_device_month: 12.0,
    devices_per_admin_fte: 1500.0,
    users_per_admin_fte: 4000.0,
    mandated_frameworks: &["nerc-cip", "nist-800-53", "iso-27001"],
};

const DEFAULT: IndustryProfile = IndustryProfile {
    breach_risk_multiplier: 1.0,
    baseline_cost_per_device_month: 10.0,
    devices_per_admin_fte: 2000.0,
    users_per_admin_fte: 5000.0,
    mandated_frameworks: &["iso-27001", "soc2"],
};

impl Industry {
    /// Maps a normalized (trimmed, lower-case, kebab-case) industry name
    pub fn from_normalized(name: &str) -> Self {
        match name {
            "healthcare" | "health-care" => Industry::Healthcare,
            "finance" | "financial" | "financial-services" | "banking" => Industry::Finance,
            "government" | "public-sector" => Industry::Government,
            "technology" | "tech" => Industry::Technology,
            "retail" => Industry::Retail,
            "education" => Industry::Education,
            "manufacturing" => Industry::Manufacturing,
            "energy" | "utilities" | "energy-utilities" => Industry::Energy,
            other => Industry::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Industry::Healthcare => "healthcare",
            Industry::Finance => "finance",
            Industry::Government => "government",
            Industry::Technology => "technology",
            Industry::Retail => "retail",
            Industry::Education => "education",
            Industry::Manufacturing => "manufacturing",
            Industry::Energy => "energy",
            Industry::Other(name) => name,
        }
    }

    pub fn profile(&self) -> &'static IndustryProfile {
        match self {
            Industry::Healthcare => &HEALTHCARE,
            Industry::Finance => &FINANCE,
            Industry::Government => &GOVERNMENT,
            Industry::Technology => &TECHNOLOGY,
            Industry::Retail => &RETAIL,
            Industry::Education => &EDUCATION,
            Industry::Manufacturing => &MANUFACTURING,
            Industry::Energy => &ENERGY,
            Industry::Other(_) => &DEFAULT,
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Industry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
