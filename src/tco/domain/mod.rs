pub mod industry;
pub mod requirement;
pub mod roi_baseline;
pub mod run_metadata;
pub mod tco_config;
pub mod tco_results;
pub mod vendor_profile;
pub mod vendor_result;

pub use industry::{Industry, IndustryProfile};
pub use requirement::{normalize_tag, Requirement, RequirementTag, Requirements};
pub use roi_baseline::{BaselineSource, RoiBaseline};
pub use run_metadata::RunMetadata;
pub use tco_config::{CurrentVendor, RawTcoConfig, TcoConfig};
pub use tco_results::{TcoResults, VendorFailure};
pub use vendor_profile::{VendorCatalog, VendorProfile};
pub use vendor_result::{
    CompetitivePosition, CostBreakdown, OperationalEstimate, PaybackPeriod, RiskAssessment,
    RoiPercentage, RoiProjection, TimelineEstimate, VendorResult, YearlyCost, NPV_DISCOUNT_RATE,
};
