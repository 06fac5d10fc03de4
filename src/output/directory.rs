//! Output directory management

use std::io::ErrorKind;
use std::path::Path;

/// Ensures the output directory exists, creating it if absent
///
/// Only the final path component is created; a missing parent is an error.
/// Calling this on an existing directory is a no-op, and losing a creation
/// race to another process counts as success.
///
/// # Arguments
///
/// * `path` - The directory to ensure
///
/// # Returns
///
/// * `Ok(())` - The directory exists
/// * `Err(io::Error)` - The directory could not be created
pub fn ensure_directory(path: &Path) -> std::io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    match std::fs::create_dir(path) {
        Ok(()) => {
            tracing::debug!("Created output directory {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(e),
    }
}
