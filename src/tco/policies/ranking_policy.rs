use crate::tco::domain::VendorResult;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Order in which successful vendor results are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankingOrder {
    /// Catalog order, as evaluated
    #[default]
    Catalog,
    /// Cheapest total cost first
    TotalCost,
    /// Highest weighted composite score first
    Composite,
}

impl FromStr for RankingOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "catalog" => Ok(RankingOrder::Catalog),
            "total-cost" | "cost" => Ok(RankingOrder::TotalCost),
            "composite" => Ok(RankingOrder::Composite),
            _ => Err(format!(
                "Invalid ranking: {}. Valid values: catalog, total-cost, composite",
                s
            )),
        }
    }
}

impl fmt::Display for RankingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingOrder::Catalog => write!(f, "catalog"),
            RankingOrder::TotalCost => write!(f, "total-cost"),
            RankingOrder::Composite => write!(f, "composite"),
        }
    }
}

/// RankingPolicy encodes how vendors are ordered for the buyer.
///
/// Composite weighting:
/// - cost 35% (cheapest vendor scores 100, others proportionally less)
/// - security 20%
/// - compliance 15%
/// - automation, future readiness and innovation 10% each
///
/// All sorts are stable, so ties keep catalog order.
pub struct RankingPolicy;

impl RankingPolicy {
    const COST_WEIGHT: f64 = 0.35;
    const SECURITY_WEIGHT: f64 = 0.20;
    const COMPLIANCE_WEIGHT: f64 = 0.15;
    const AUTOMATION_WEIGHT: f64 = 0.10;
    const FUTURE_READINESS_WEIGHT: f64 = 0.10;
    const INNOVATION_WEIGHT: f64 = 0.10;

    pub fn rank(mut results: Vec<VendorResult>, order: RankingOrder) -> Vec<VendorResult> {
        match order {
            RankingOrder::Catalog => {}
            RankingOrder::TotalCost => {
                results.sort_by(|a, b| a.total_cost().total_cmp(&b.total_cost()));
            }
            RankingOrder::Composite => {
                let cheapest = Self::cheapest(&results);
                let mut scored: Vec<(f64, VendorResult)> = results
                    .into_iter()
                    .map(|result| (Self::composite_score(&result, cheapest), result))
                    .collect();
                scored.sort_by(|a, b| b.0.total_cmp(&a.0));
                results = scored.into_iter().map(|(_, result)| result).collect();
            }
        }
        results
    }

    /// Weighted 0-100 score of one vendor relative to the cheapest total cost in the run
    pub fn composite_score(result: &VendorResult, cheapest_total: f64) -> f64 {
        let cost_score = if result.total_cost() > 0.0 {
            (100.0 * cheapest_total / result.total_cost()).clamp(0.0, 100.0)
        } else {
            100.0
        };

        Self::COST_WEIGHT * cost_score
            + Self::SECURITY_WEIGHT * result.risk().security_score
            + Self::COMPLIANCE_WEIGHT * result.risk().compliance_score
            + Self::AUTOMATION_WEIGHT * result.operational().automation_level
            + Self::FUTURE_READINESS_WEIGHT * result.competitive().future_readiness
            + Self::INNOVATION_WEIGHT * result.competitive().innovation_score
    }

    fn cheapest(results: &[VendorResult]) -> f64 {
        results
            .iter()
            .map(VendorResult::total_cost)
            .fold(f64::INFINITY, f64::min)
    }
}
