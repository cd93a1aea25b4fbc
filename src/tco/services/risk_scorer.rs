use crate::shared::TcoResult;
use crate::tco::domain::{RiskAssessment, TcoConfig, VendorProfile};
use crate::tco::policies::RequirementWeighting;
use std::collections::HashSet;

/// RiskScorer rates a vendor's security fit and compliance coverage
pub struct RiskScorer;

impl RiskScorer {
    pub fn score(config: &TcoConfig, profile: &VendorProfile) -> TcoResult<RiskAssessment> {
        let known = config.requirements().known();
        let capabilities =
            profile.requirement_values(&profile.security.capabilities, "security.capabilities")?;
        let security_score = match RequirementWeighting::average(&known, &capabilities) {
            Some(fraction) => fraction * 100.0,
            None => {
                let baseline = profile.required(profile.security.baseline_score, "security.baseline_score")?;
                profile.finite(baseline, "security.baseline_score")?
            }
        }
        .clamp(0.0, 100.0);

        let certified: HashSet<String> = profile
            .compliance
            .certifications
            .iter()
            .map(|certification| framework_key(certification))
            .collect();

        let mandated = config.industry().profile().mandated_frameworks;
        let missing_frameworks: Vec<String> = mandated
            .iter()
            .filter(|framework| !certified.contains(&framework_key(framework)))
            .map(|framework| framework.to_string())
            .collect();

        let compliance_score = if mandated.is_empty() {
            100.0
        } else {
            let covered = mandated.len() - missing_frameworks.len();
            100.0 * covered as f64 / mandated.len() as f64
        };

        Ok(RiskAssessment {
            security_score,
            compliance_score: compliance_score.clamp(0.0, 100.0),
            missing_frameworks,
        })
    }
}

/// Matching key of a framework name: lower-case letters and digits only,
/// so `SOC 2`, `soc-2` and `SOC2` are the same framework.
fn framework_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
