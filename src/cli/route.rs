//! CLI route: run context for a single manifest build.
//! Resolves the vault root, loads config, and dispatches to the tree builder.

use crate::config::{ConfigLoader, VaultnavConfig};
use crate::error::ManifestError;
use crate::manifest::Manifest;
use crate::tree::builder::TreeBuilder;
use crate::tree::path;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution: canonical vault root and effective
/// configuration. Built once per invocation; the traversal itself is pure
/// filesystem reads.
pub struct RunContext {
    vault_root: PathBuf,
    config: VaultnavConfig,
}

impl RunContext {
    /// Create a run context from the vault path argument and an optional
    /// explicit config path.
    ///
    /// The existence check runs against the lexically absolutized argument
    /// so the not-found message reports the path the user meant, before any
    /// canonicalization that would itself fail on a missing path.
    pub fn new(vault_path: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ManifestError> {
        let absolute = path::absolute_path(&vault_path)?;
        if !absolute.exists() {
            return Err(ManifestError::PathNotFound(absolute));
        }

        let vault_root = path::canonicalize_path(&absolute)?;
        let config = ConfigLoader::resolve(&vault_root, config_path.as_ref())?;

        Ok(Self { vault_root, config })
    }

    /// Canonical vault root this context scans.
    pub fn vault_root(&self) -> &Path {
        &self.vault_root
    }

    /// Build the manifest and render it.
    ///
    /// Returns the pretty-printed JSON document, or a one-line confirmation
    /// when an output file is given. A root that does not qualify as a node
    /// is `InvalidRoot`; no JSON is produced in that case.
    pub fn execute(&self, output: Option<&Path>) -> Result<String, ManifestError> {
        let builder = TreeBuilder::new(self.vault_root.clone())
            .with_scan_config(self.config.scan.clone());

        let root = builder.build_root()?.ok_or(ManifestError::InvalidRoot)?;
        let json = Manifest::new(root).to_json()?;

        match output {
            Some(path) => {
                std::fs::write(path, format!("{}\n", json)).map_err(|e| {
                    ManifestError::IoError(std::io::Error::new(
                        std::io::ErrorKind::Other,
                        format!("Failed to write manifest to {:?}: {}", path, e),
                    ))
                })?;
                info!(path = %path.display(), "Manifest written");
                Ok(format!("Manifest written to {}", path.display()))
            }
            None => Ok(json),
        }
    }
}
