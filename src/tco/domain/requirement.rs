use serde::{Serialize, Serializer};
use std::fmt;

/// Capability a buyer can require from a vendor.
///
/// The set is closed: tags outside it are carried as
/// [`RequirementTag::Unrecognized`] and ignored by the scorers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Requirement {
    Mfa,
    Encryption,
    ZeroTrust,
    IotSecurity,
    Byod,
    GuestAccess,
    Segmentation,
    ComplianceReporting,
    AuditLogging,
    RiskBasedAccess,
    EndpointCompliance,
    CloudPki,
}

impl Requirement {
    pub const ALL: [Requirement; 12] = [
        Requirement::Mfa,
        Requirement::Encryption,
        Requirement::ZeroTrust,
        Requirement::IotSecurity,
        Requirement::Byod,
        Requirement::GuestAccess,
        Requirement::Segmentation,
        Requirement::ComplianceReporting,
        Requirement::AuditLogging,
        Requirement::RiskBasedAccess,
        Requirement::EndpointCompliance,
        Requirement::CloudPki,
    ];

    /// Canonical kebab-case tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Requirement::Mfa => "mfa",
            Requirement::Encryption => "encryption",
            Requirement::ZeroTrust => "zero-trust",
            Requirement::IotSecurity => "iot-security",
            Requirement::Byod => "byod",
            Requirement::GuestAccess => "guest-access",
            Requirement::Segmentation => "segmentation",
            Requirement::ComplianceReporting => "compliance-reporting",
            Requirement::AuditLogging => "audit-logging",
            Requirement::RiskBasedAccess => "risk-based-access",
            Requirement::EndpointCompliance => "endpoint-compliance",
            Requirement::CloudPki => "cloud-pki",
        }
    }

    /// Looks up a tag that has already been through [`normalize_tag`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "2fa" => return Some(Requirement::Mfa),
            "iot" => return Some(Requirement::IotSecurity),
            "micro-segmentation" | "microsegmentation" => return Some(Requirement::Segmentation),
            _ => {}
        }
        Self::ALL.into_iter().find(|r| r.as_str() == tag)
    }

    /// Relative importance in the weighted automation and security averages
    pub fn weight(&self) -> f64 {
        match self {
            Requirement::Mfa | Requirement::ZeroTrust => 1.5,
            Requirement::Encryption
            | Requirement::Segmentation
            | Requirement::RiskBasedAccess => 1.2,
            Requirement::IotSecurity
            | Requirement::ComplianceReporting
            | Requirement::EndpointCompliance => 1.0,
            Requirement::Byod | Requirement::AuditLogging | Requirement::CloudPki => 0.8,
            Requirement::GuestAccess => 0.6,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical spelling of a free-form tag: trimmed, lower-case, `_` and
/// whitespace folded into `-`.
pub fn normalize_tag(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// A requirement tag as submitted by the buyer, after normalization
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequirementTag {
    Known(Requirement),
    Unrecognized(String),
}

impl RequirementTag {
    /// Classifies an already-normalized tag
    pub fn classify(tag: String) -> Self {
        match Requirement::from_tag(&tag) {
            Some(requirement) => RequirementTag::Known(requirement),
            None => RequirementTag::Unrecognized(tag),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RequirementTag::Known(requirement) => requirement.as_str(),
            RequirementTag::Unrecognized(tag) => tag,
        }
    }

    pub fn known(&self) -> Option<Requirement> {
        match self {
            RequirementTag::Known(requirement) => Some(*requirement),
            RequirementTag::Unrecognized(_) => None,
        }
    }
}

impl Serialize for RequirementTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Buyer requirements: either not stated at all, or an explicit deduplicated list.
///
/// "Not stated" and "stated but empty" both leave the scorers without known
/// tags; they then fall back to vendor-intrinsic baselines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Requirements {
    Unspecified,
    Specified(Vec<RequirementTag>),
}

impl Requirements {
    /// Recognized requirements in submission order
    pub fn known(&self) -> Vec<Requirement> {
        match self {
            Requirements::Unspecified => Vec::new(),
            Requirements::Specified(tags) => tags.iter().filter_map(RequirementTag::known).collect(),
        }
    }

    /// Tags outside the known vocabulary
    pub fn unrecognized(&self) -> Vec<&str> {
        match self {
            Requirements::Unspecified => Vec::new(),
            Requirements::Specified(tags) => tags
                .iter()
                .filter(|tag| tag.known().is_none())
                .map(RequirementTag::as_str)
                .collect(),
        }
    }

    pub fn is_specified(&self) -> bool {
        matches!(self, Requirements::Specified(_))
    }
}
