use crate::shared::error::TcoError;

/// Type alias for Result with anyhow::Error as the error type.
/// Used by the application layer and adapters.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Result of a domain computation; the error keeps its kind so the engine can
/// tell vendor-scoped failures from whole-run failures.
pub type TcoResult<T> = std::result::Result<T, TcoError>;
