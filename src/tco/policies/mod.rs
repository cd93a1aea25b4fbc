mod ranking_policy;
mod requirement_weighting;

pub use ranking_policy::{RankingOrder, RankingPolicy};
pub use requirement_weighting::RequirementWeighting;
