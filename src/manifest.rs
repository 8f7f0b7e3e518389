//! Manifest envelope and JSON rendering

use crate::error::ManifestError;
use crate::tree::node::Node;
use serde::{Deserialize, Serialize};

/// Top-level manifest document: the root directory node wrapped in the
/// fixed `{ "root": ... }` envelope the front end expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub root: Node,
}

impl Manifest {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Render the manifest as pretty-printed JSON (two-space indent).
    pub fn to_json(&self) -> Result<String, ManifestError> {
        serde_json::to_string_pretty(self).map_err(ManifestError::from)
    }
}
