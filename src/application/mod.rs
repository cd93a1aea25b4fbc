/// Application layer - Engine, use cases and DTOs
///
/// This layer orchestrates the domain services and coordinates with
/// infrastructure through ports.
pub mod comparison_engine;
pub mod dto;
pub mod factories;
pub mod use_cases;

pub use comparison_engine::{ComparisonEngine, EngineSettings, EngineState};
