use crate::shared::TcoResult;
use crate::tco::domain::vendor_profile::Architecture;
use crate::tco::domain::{CompetitivePosition, VendorProfile};

/// CompetitiveScorer rates a vendor's innovation pace and readiness for future needs.
///
/// Scores depend on the vendor profile only and are recomputed on every call.
pub struct CompetitiveScorer;

impl CompetitiveScorer {
    /// Monthly release cadence counted as full velocity
    const FULL_VELOCITY_RELEASES: f64 = 12.0;

    pub fn score(profile: &VendorProfile) -> TcoResult<CompetitivePosition> {
        let roadmap = &profile.roadmap;
        let releases = profile.required_amount(roadmap.releases_per_year, "roadmap.releases_per_year")?;
        let architecture = profile.required(roadmap.architecture, "roadmap.architecture")?;

        let velocity = (releases / Self::FULL_VELOCITY_RELEASES).min(1.0);

        let mut innovation = 50.0 * velocity + Self::innovation_points(architecture);
        if roadmap.ai_driven {
            innovation += 20.0;
        }

        let mut readiness = Self::readiness_points(architecture) + 15.0 * velocity;
        if roadmap.api_first {
            readiness += 20.0;
        }
        if roadmap.zero_trust_native {
            readiness += 25.0;
        }

        Ok(CompetitivePosition {
            innovation_score: innovation.clamp(0.0, 100.0),
            future_readiness: readiness.clamp(0.0, 100.0),
        })
    }

    fn innovation_points(architecture: Architecture) -> f64 {
        match architecture {
            Architecture::CloudNative => 30.0,
            Architecture::Hybrid => 18.0,
            Architecture::OnPremise => 6.0,
        }
    }

    fn readiness_points(architecture: Architecture) -> f64 {
        match architecture {
            Architecture::CloudNative => 40.0,
            Architecture::Hybrid => 25.0,
            Architecture::OnPremise => 10.0,
        }
    }
}
