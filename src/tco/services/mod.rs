mod baseline_resolver;
mod competitive_scorer;
mod config_normalizer;
mod cost_model;
mod operational_estimator;
mod result_aggregator;
mod risk_scorer;
mod roi_estimator;
mod timeline_estimator;

pub use baseline_resolver::BaselineResolver;
pub use competitive_scorer::CompetitiveScorer;
pub use config_normalizer::ConfigNormalizer;
pub use cost_model::{CostModel, DEFAULT_LABOR_RATE};
pub use operational_estimator::OperationalEstimator;
pub use result_aggregator::ResultAggregator;
pub use risk_scorer::RiskScorer;
pub use roi_estimator::RoiEstimator;
pub use timeline_estimator::TimelineEstimator;
