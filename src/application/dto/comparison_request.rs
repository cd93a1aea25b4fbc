use crate::tco::domain::RawTcoConfig;
use crate::tco::policies::RankingOrder;
use std::path::PathBuf;

/// Input of one vendor comparison
#[derive(Debug, Clone)]
pub struct ComparisonRequest {
    /// Catalog file with the candidate vendor profiles
    pub catalog_path: PathBuf,
    /// Buyer configuration, not yet validated
    pub config: RawTcoConfig,
    pub ranking: RankingOrder,
}

impl ComparisonRequest {
    pub fn new(catalog_path: PathBuf, config: RawTcoConfig, ranking: RankingOrder) -> Self {
        Self {
            catalog_path,
            config,
            ranking,
        }
    }
}
