use crate::tco::domain::Requirement;
use std::collections::HashMap;

/// RequirementWeighting scores a vendor against the buyer's requirements.
///
/// Each requested requirement contributes the vendor's per-requirement value,
/// clamped to [0, 1] (absent counts as 0), weighted by the requirement's
/// importance. The result is a fraction in [0, 1].
pub struct RequirementWeighting;

impl RequirementWeighting {
    /// Weighted average over `requirements`, or None when there is nothing to weigh
    pub fn average(requirements: &[Requirement], values: &HashMap<Requirement, f64>) -> Option<f64> {
        if requirements.is_empty() {
            return None;
        }

        let (weighted_sum, total_weight) =
            requirements
                .iter()
                .fold((0.0, 0.0), |(sum, weights), requirement| {
                    let value = values
                        .get(requirement)
                        .copied()
                        .unwrap_or(0.0)
                        .clamp(0.0, 1.0);
                    let weight = requirement.weight();
                    (sum + weight * value, weights + weight)
                });

        Some((weighted_sum / total_weight).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_requirements_yields_none() {
        assert_eq!(RequirementWeighting::average(&[], &HashMap::new()), None);
    }

    #[test]
    fn test_weighted_average() {
        let values = HashMap::from([(Requirement::Mfa, 1.0), (Requirement::GuestAccess, 0.0)]);
        let score = RequirementWeighting::average(
            &[Requirement::Mfa, Requirement::GuestAccess],
            &values,
        )
        .unwrap();
        // 1.5 * 1.0 / (1.5 + 0.6)
        assert!((score - 1.5 / 2.1).abs() < 1e-12);
    }

    #[test]
    fn test_adversarial_values_stay_in_range() {
        let values = HashMap::from([
            (Requirement::Mfa, 1e9),
            (Requirement::Encryption, -1e9),
            (Requirement::ZeroTrust, f64::INFINITY),
        ]);
        let score = RequirementWeighting::average(
            &[Requirement::Mfa, Requirement::Encryption, Requirement::ZeroTrust],
            &values,
        )
        .unwrap();
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_absent_values_count_as_zero() {
        let score =
            RequirementWeighting::average(&[Requirement::Byod], &HashMap::new()).unwrap();
        assert_eq!(score, 0.0);
    }
}
