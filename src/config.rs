//! Configuration System
//!
//! Vault-scoped configuration for scan rules and logging. Loaded from an
//! explicit `--config` path or discovered as `.vaultnav.toml` in the vault
//! root (hidden, so the scan itself never lists it). Every field is optional
//! and defaults to the stock vault conventions.

use crate::error::ManifestError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name probed in the vault root when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".vaultnav.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaultnavConfig {
    /// Scan rules (marker name, rendered extension, excluded names)
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scan rules controlling which directories and files become nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Source marker document whose presence makes a directory a node
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Extension (without dot) of rendered documents
    #[serde(default = "default_rendered_extension")]
    pub rendered_extension: String,

    /// Directory base names excluded from the tree entirely
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
}

fn default_marker() -> String {
    "README.md".to_string()
}

fn default_rendered_extension() -> String {
    "html".to_string()
}

fn default_excluded_dirs() -> Vec<String> {
    vec!["graphics".to_string()]
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            rendered_extension: default_rendered_extension(),
            excluded_dirs: default_excluded_dirs(),
        }
    }
}

impl ScanConfig {
    /// File name of the rendered form of the marker document
    /// (marker stem + rendered extension, e.g. "README.html").
    pub fn rendered_marker(&self) -> String {
        let stem = Path::new(&self.marker)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.marker.clone());
        format!("{}.{}", stem, self.rendered_extension)
    }

    /// Suffix that identifies rendered documents (".html").
    pub fn rendered_suffix(&self) -> String {
        format!(".{}", self.rendered_extension)
    }

    /// Validate scan rules. Invalid rules abort the run before traversal.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.marker.is_empty() {
            return Err(ManifestError::ConfigError(
                "scan.marker must not be empty".to_string(),
            ));
        }
        if self.rendered_extension.is_empty() {
            return Err(ManifestError::ConfigError(
                "scan.rendered_extension must not be empty".to_string(),
            ));
        }
        if self.rendered_extension.starts_with('.') {
            return Err(ManifestError::ConfigError(
                "scan.rendered_extension must not include a leading dot".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration loading
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a vault: `.vaultnav.toml` in the vault root
    /// when present, defaults otherwise.
    pub fn load(vault_root: &Path) -> Result<VaultnavConfig, ManifestError> {
        let config_path = vault_root.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Self::load_from_file(&config_path);
        }
        Ok(VaultnavConfig::default())
    }

    /// Load configuration from an explicit file path.
    pub fn load_from_file(path: &Path) -> Result<VaultnavConfig, ManifestError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ManifestError::ConfigError(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config: VaultnavConfig = toml::from_str(&contents).map_err(|e| {
            ManifestError::ConfigError(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        config.scan.validate()?;
        Ok(config)
    }

    /// Resolve the effective config: explicit path wins over discovery.
    pub fn resolve(
        vault_root: &Path,
        config_path: Option<&PathBuf>,
    ) -> Result<VaultnavConfig, ManifestError> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(vault_root),
        }
    }
}
