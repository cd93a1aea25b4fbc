use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripted callers to tell a clean comparison apart from
/// one where some vendors could not be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every vendor was evaluated (or `--strict` was not set)
    Success = 0,
    /// At least one vendor failed and `--strict` was requested
    VendorFailures = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid buyer config, empty catalog, file I/O, parse error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::VendorFailures => write!(f, "Vendor Failures (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Machine-readable error category, recorded in the failure list of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    InvalidConfig,
    EmptyCatalog,
    MissingProfileField,
    InvalidProfileField,
    InvalidScale,
    EvaluationAborted,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidConfig => "InvalidConfig",
            ErrorKind::EmptyCatalog => "EmptyCatalog",
            ErrorKind::MissingProfileField => "MissingProfileField",
            ErrorKind::InvalidProfileField => "InvalidProfileField",
            ErrorKind::InvalidScale => "InvalidScale",
            ErrorKind::EvaluationAborted => "EvaluationAborted",
            ErrorKind::Io => "Io",
        };
        write!(f, "{}", name)
    }
}

/// Application-specific errors for TCO comparison.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TcoError {
    #[error("Invalid buyer configuration: {field}\nReason: {reason}\n\n💡 Hint: users, devices and timeframe must be positive whole numbers and industry must not be empty")]
    InvalidConfig { field: String, reason: String },

    #[error("Vendor catalog is empty\n\n💡 Hint: Add at least one entry under 'vendors' in the catalog file")]
    EmptyCatalog,

    #[error("Vendor '{vendor_id}' is missing required profile field '{field}'\n\n💡 Hint: Complete the vendor profile; missing values are never treated as zero")]
    MissingProfileField { vendor_id: String, field: String },

    #[error("Vendor '{vendor_id}' has an invalid value for '{field}'\nReason: {reason}")]
    InvalidProfileField {
        vendor_id: String,
        field: String,
        reason: String,
    },

    #[error("Invalid deployment scale: {devices} device(s)\n\n💡 Hint: The device count must be positive")]
    InvalidScale { devices: u64 },

    #[error("Evaluation of vendor '{vendor_id}' did not complete\nDetails: {details}\n\n💡 Hint: The other vendors were still evaluated; check this vendor's profile for unusual values")]
    EvaluationAborted { vendor_id: String, details: String },

    #[error("Vendor catalog not found: {path}\n\n💡 Hint: {suggestion}")]
    CatalogNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is valid YAML, JSON or TOML matching its extension")]
    ParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl TcoError {
    /// Returns the category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TcoError::InvalidConfig { .. } => ErrorKind::InvalidConfig,
            TcoError::EmptyCatalog => ErrorKind::EmptyCatalog,
            TcoError::MissingProfileField { .. } => ErrorKind::MissingProfileField,
            TcoError::InvalidProfileField { .. } => ErrorKind::InvalidProfileField,
            TcoError::InvalidScale { .. } => ErrorKind::InvalidScale,
            TcoError::EvaluationAborted { .. } => ErrorKind::EvaluationAborted,
            TcoError::CatalogNotFound { .. }
            | TcoError::ParseError { .. }
            | TcoError::FileReadError { .. }
            | TcoError::FileWriteError { .. }
            | TcoError::SecurityError { .. } => ErrorKind::Io,
        }
    }

    /// Whether the error concerns a single vendor profile rather than the whole run
    pub fn is_vendor_scoped(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::MissingProfileField
                | ErrorKind::InvalidProfileField
                | ErrorKind::InvalidScale
                | ErrorKind::EvaluationAborted
        )
    }

    pub(crate) fn invalid_config(field: &str, reason: impl Into<String>) -> Self {
        TcoError::InvalidConfig {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn missing_field(vendor_id: &str, field: &str) -> Self {
        TcoError::MissingProfileField {
            vendor_id: vendor_id.to_string(),
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid_field(vendor_id: &str, field: &str, reason: impl Into<String>) -> Self {
        TcoError::InvalidProfileField {
            vendor_id: vendor_id.to_string(),
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
