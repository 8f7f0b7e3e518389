//! CLI output: error mapping from domain errors to the stable CLI surface.

use crate::error::ManifestError;

/// Map domain errors to the plain-text messages printed on stdout.
/// The two user-facing cases are fixed strings; everything else renders
/// as a generic `Error:` line.
pub fn map_error(e: &ManifestError) -> String {
    match e {
        ManifestError::PathNotFound(path) => {
            format!("Error: Path '{}' does not exist.", path.display())
        }
        ManifestError::InvalidRoot => {
            "Error: Root directory missing README.md or is invalid.".to_string()
        }
        other => format!("Error: {}", other),
    }
}
