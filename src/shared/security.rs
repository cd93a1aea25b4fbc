use crate::shared::error::TcoError;
use crate::shared::TcoResult;
use std::fs;
use std::path::Path;

/// Maximum size of a catalog or buyer profile file (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` is a regular file that is safe to read.
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// - `FileReadError` if metadata cannot be read
/// - `SecurityError` if the path is a symbolic link or exceeds `max_size`
/// - `FileReadError` if the path is not a regular file
pub fn validate_readable_file(path: &Path, file_description: &str, max_size: u64) -> TcoResult<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| TcoError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(TcoError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Pass the real file path instead of a symbolic link".to_string(),
        });
    }

    if !metadata.is_file() {
        return Err(TcoError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        });
    }

    validate_file_size(metadata.len(), path, max_size)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> TcoResult<()> {
    if file_size > max_size {
        return Err(TcoError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the catalog or remove unused vendor entries".to_string(),
        });
    }
    Ok(())
}
