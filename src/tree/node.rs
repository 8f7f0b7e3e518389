//! Navigation node types

use serde::{Deserialize, Serialize};

/// A node in the navigation tree
///
/// Serializes with a `type` tag ("directory" or "file") so the manifest
/// schema is explicit about which variant each object is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Directory(DirectoryNode),
    File(FileNode),
}

impl Node {
    /// Display title of the node.
    pub fn title(&self) -> &str {
        match self {
            Node::Directory(dir) => &dir.title,
            Node::File(file) => &file.title,
        }
    }

    /// Unique, separator-normalized identifier of the node.
    pub fn slug(&self) -> &str {
        match self {
            Node::Directory(dir) => &dir.slug,
            Node::File(file) => &file.slug,
        }
    }

    /// Web-absolute path to the node's rendered document.
    pub fn content_path(&self) -> &str {
        match self {
            Node::Directory(dir) => &dir.content_path,
            Node::File(file) => &file.content_path,
        }
    }
}

/// Directory node representation
///
/// `children` holds directories and files interleaved in entry-name sort
/// order; `content_path` points at the directory's rendered index document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub title: String,
    pub slug: String,
    pub content_path: String,
    pub children: Vec<Node>,
}

/// File node representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    pub title: String,
    pub slug: String,
    pub content_path: String,
}
