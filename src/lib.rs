//! tco-compare - vendor total cost of ownership comparison
//!
//! This library evaluates a catalog of vendor profiles against one buyer
//! deployment (industry, users, devices, planning horizon, required
//! capabilities) and produces comparable cost breakdowns, ROI, operational,
//! risk, competitive and timeline estimates for every vendor.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`tco`): Pure business logic, domain models and pricing rules
//! - **Application Layer** (`application`): The comparison engine and use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use tco_compare::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! let use_case = CompareVendorsUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//!     ComparisonEngine::default(),
//! );
//!
//! let buyer = RawTcoConfig {
//!     industry: "healthcare".to_string(),
//!     users: 500.0,
//!     devices: 1000.0,
//!     timeframe: 36.0,
//!     current_vendor: None,
//!     requirements: Some(vec!["mfa".to_string(), "encryption".to_string()]),
//! };
//! let request = ComparisonRequest::new(PathBuf::from("vendors.yml"), buyer, RankingOrder::TotalCost);
//! let response = use_case.execute(request).await?;
//!
//! let output = MarkdownFormatter::new().format(&response.results)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod tco;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{ComparisonRequest, ComparisonResponse, OutputFormat};
    pub use crate::application::use_cases::CompareVendorsUseCase;
    pub use crate::application::{ComparisonEngine, EngineSettings, EngineState};
    pub use crate::ports::outbound::{
        BuyerProfileReader, OutputPresenter, ProgressReporter, ResultsFormatter,
        VendorCatalogReader,
    };
    pub use crate::tco::domain::{
        CostBreakdown, RawTcoConfig, RoiBaseline, RoiPercentage, TcoConfig, TcoResults,
        VendorFailure, VendorProfile, VendorResult, YearlyCost,
    };
    pub use crate::tco::policies::{RankingOrder, RankingPolicy};
    pub use crate::tco::services::{CostModel, ResultAggregator};
    pub use crate::shared::error::{ExitCode, TcoError};
    pub use crate::shared::{Result, TcoResult};
}
