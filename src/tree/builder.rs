//! Tree builder for constructing vault navigation trees

use crate::config::ScanConfig;
use crate::error::ManifestError;
use crate::tree::node::{DirectoryNode, FileNode, Node};
use crate::tree::path;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Tree builder for the vault navigation manifest
///
/// Holds the fixed traversal origin (`vault_root`) and the scan rules; both
/// are read-only across the recursion. The vault root must be canonical
/// before the walk so relative slugs and content paths strip cleanly.
pub struct TreeBuilder {
    vault_root: PathBuf,
    scan_config: ScanConfig,
}

impl TreeBuilder {
    /// Create a new tree builder rooted at the given vault directory.
    pub fn new(vault_root: PathBuf) -> Self {
        Self {
            vault_root,
            scan_config: ScanConfig::default(),
        }
    }

    /// Set scan config (marker name, rendered extension, excluded names).
    /// When set, the builder uses this config instead of the default.
    pub fn with_scan_config(mut self, config: ScanConfig) -> Self {
        self.scan_config = config;
        self
    }

    /// Build the navigation tree from the vault root.
    ///
    /// Returns `Ok(None)` when the root itself does not qualify as a node
    /// (excluded by name or missing its marker document).
    #[instrument(skip(self), fields(vault = %self.vault_root.display()))]
    pub fn build_root(&self) -> Result<Option<Node>, ManifestError> {
        let start = Instant::now();
        info!("Starting manifest build");

        let root = self.build(&self.vault_root)?;

        let duration = start.elapsed();
        info!(
            root_included = root.is_some(),
            duration_ms = duration.as_millis(),
            "Manifest build completed"
        );

        Ok(root)
    }

    /// Build the node for a single directory, recursing into subdirectories.
    ///
    /// Returns `Ok(None)` when the directory is excluded by name or does not
    /// directly contain the source marker document. Enumeration failures
    /// propagate and abort the whole run; partial trees are never returned.
    pub fn build(&self, dir: &Path) -> Result<Option<Node>, ManifestError> {
        let dir_name = dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        // Excluded names short-circuit before the marker check: contents are
        // never inspected, descendants never visited.
        if self.scan_config.excluded_dirs.iter().any(|excluded| excluded == &dir_name) {
            debug!(path = %dir.display(), "Directory excluded by name");
            return Ok(None);
        }

        // The marker document is the eligibility signal. We check the source
        // form but serve the rendered form; parity between the two is assumed,
        // never validated.
        if !dir.join(&self.scan_config.marker).exists() {
            debug!(path = %dir.display(), "Directory has no marker document");
            return Ok(None);
        }

        let is_root = dir == self.vault_root;
        let title = if is_root { "Home".to_string() } else { dir_name };
        let slug = path::slug(dir, &self.vault_root)?;
        let rendered_marker = self.scan_config.rendered_marker();
        let content_path = path::content_path(&dir.join(&rendered_marker), &self.vault_root)?;

        let entries = self.read_sorted_entries(dir)?;

        let rendered_suffix = self.scan_config.rendered_suffix();
        let mut children = Vec::new();

        for entry in entries {
            let entry_name = entry.file_name().to_string_lossy().into_owned();

            // Hidden entries are neither traversed nor listed.
            if entry_name.starts_with('.') {
                continue;
            }

            let entry_path = entry.path();
            let file_type = entry.file_type().map_err(|e| {
                ManifestError::IoError(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to read entry type for {:?}: {}", entry_path, e),
                ))
            })?;

            if file_type.is_dir() {
                if let Some(child) = self.build(&entry_path)? {
                    children.push(child);
                }
            } else if file_type.is_file() {
                // Only rendered documents become file nodes, and a directory's
                // own rendered marker is represented by the directory node.
                if entry_name == rendered_marker || !entry_name.ends_with(&rendered_suffix) {
                    continue;
                }

                let title = entry_name[..entry_name.len() - rendered_suffix.len()].to_string();
                let slug = path::slug(&dir.join(&title), &self.vault_root)?;
                let content_path = path::content_path(&entry_path, &self.vault_root)?;

                children.push(Node::File(FileNode {
                    title,
                    slug,
                    content_path,
                }));
            }
            // Symlinks and special files are skipped; links are not followed.
        }

        Ok(Some(Node::Directory(DirectoryNode {
            title,
            slug,
            content_path,
            children,
        })))
    }

    /// Enumerate a directory's entries sorted lexicographically by raw name.
    ///
    /// The single sorted pass is what interleaves directories and files by
    /// name in `children`; sorting by type would change the manifest.
    fn read_sorted_entries(&self, dir: &Path) -> Result<Vec<fs::DirEntry>, ManifestError> {
        let read_dir = fs::read_dir(dir).map_err(|e| {
            ManifestError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to read directory {:?}: {}", dir, e),
            ))
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| {
                ManifestError::IoError(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to read directory entry in {:?}: {}", dir, e),
                ))
            })?;
            entries.push(entry);
        }

        entries.sort_by_key(|entry| entry.file_name());

        Ok(entries)
    }
}
