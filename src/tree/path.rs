//! Path normalization and web-path derivation utilities

use crate::error::ManifestError;
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Resolve the CLI path argument to an absolute path without touching the
/// filesystem. Used for the existence check and for the not-found message,
/// which reports the absolute form of what the user supplied.
pub fn absolute_path(path: &Path) -> Result<PathBuf, ManifestError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path))
}

/// Canonicalize the vault root before traversal.
///
/// Uses dunce for cross-platform canonicalization. Children of the root are
/// derived by joining entry names onto the canonical root, so canonicalizing
/// once here keeps every prefix-strip during the walk consistent.
pub fn canonicalize_path(path: &Path) -> Result<PathBuf, ManifestError> {
    dunce::canonicalize(path)
        .map_err(|e| ManifestError::InvalidPath(format!("Failed to canonicalize path: {}", e)))
}

/// Derive a node's slug: the path relative to the vault root with forward
/// slashes, Unicode-normalized to NFC. The vault root itself slugs to the
/// literal "root".
pub fn slug(path: &Path, vault_root: &Path) -> Result<String, ManifestError> {
    let rel = relative_to_root(path, vault_root)?;
    if rel.as_os_str().is_empty() {
        return Ok("root".to_string());
    }
    Ok(to_web_path(rel))
}

/// Derive a node's content path: the web-absolute form (leading slash) of
/// the path relative to the vault root.
pub fn content_path(path: &Path, vault_root: &Path) -> Result<String, ManifestError> {
    let rel = relative_to_root(path, vault_root)?;
    Ok(format!("/{}", to_web_path(rel)))
}

fn relative_to_root<'a>(path: &'a Path, vault_root: &Path) -> Result<&'a Path, ManifestError> {
    path.strip_prefix(vault_root).map_err(|_| {
        ManifestError::InvalidPath(format!(
            "Path {:?} is outside the vault root {:?}",
            path, vault_root
        ))
    })
}

/// Join the normal components of a relative path with forward slashes and
/// normalize Unicode to NFC (Canonical Composition) so slugs compare equal
/// across hosts that store filenames in different normal forms.
fn to_web_path(rel: &Path) -> String {
    let joined = rel
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");

    joined.nfc().collect()
}
