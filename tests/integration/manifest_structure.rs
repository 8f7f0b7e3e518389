//! Integration tests for manifest structure correctness

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vaultnav::cli::RunContext;

fn mark(dir: &Path) {
    fs::write(dir.join("README.md"), "# index").unwrap();
    fs::write(dir.join("README.html"), "<h1>index</h1>").unwrap();
}

fn manifest_for(root: &Path) -> Value {
    let context = RunContext::new(root.to_path_buf(), None).unwrap();
    serde_json::from_str(&context.execute(None).unwrap()).unwrap()
}

/// The simplest vault: a marker pair and one rendered document.
#[test]
fn test_minimal_vault_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    mark(root);
    fs::write(root.join("Notes.html"), "<p>notes</p>").unwrap();

    let manifest = manifest_for(root);

    assert_eq!(
        manifest,
        json!({
            "root": {
                "type": "directory",
                "title": "Home",
                "slug": "root",
                "content_path": "/README.html",
                "children": [
                    {
                        "type": "file",
                        "title": "Notes",
                        "slug": "Notes",
                        "content_path": "/Notes.html"
                    }
                ]
            }
        })
    );
}

/// Nested directories mirror the filesystem hierarchy.
#[test]
fn test_nested_directory_nodes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    mark(root);

    let guides = root.join("guides");
    fs::create_dir(&guides).unwrap();
    mark(&guides);
    fs::write(guides.join("Setup.html"), "<p>setup</p>").unwrap();

    let advanced = guides.join("advanced");
    fs::create_dir(&advanced).unwrap();
    mark(&advanced);

    let manifest = manifest_for(root);
    let guides_node = &manifest["root"]["children"][0];

    assert_eq!(guides_node["type"], "directory");
    assert_eq!(guides_node["title"], "guides");
    assert_eq!(guides_node["slug"], "guides");
    assert_eq!(guides_node["content_path"], "/guides/README.html");

    let children = guides_node["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    // ASCII uppercase sorts before lowercase, so the file precedes the dir
    assert_eq!(children[0]["slug"], "guides/Setup");
    assert_eq!(children[1]["slug"], "guides/advanced");
}

/// Directories and files interleave in raw entry-name sort order.
#[test]
fn test_children_ordering_interleaves_types() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    mark(root);

    for dir_name in ["bravo", "delta"] {
        let sub = root.join(dir_name);
        fs::create_dir(&sub).unwrap();
        mark(&sub);
    }
    fs::write(root.join("alpha.html"), "<p>a</p>").unwrap();
    fs::write(root.join("charlie.html"), "<p>c</p>").unwrap();

    let manifest = manifest_for(root);
    let titles: Vec<&str> = manifest["root"]["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|child| child["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, vec!["alpha", "bravo", "charlie", "delta"]);
}

/// Slugs always use forward slashes and stay unique across the tree.
#[test]
fn test_slugs_are_unique_and_forward_slashed() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    mark(root);

    for dir_name in ["one", "two"] {
        let sub = root.join(dir_name);
        fs::create_dir(&sub).unwrap();
        mark(&sub);
        fs::write(sub.join("Page.html"), "<p>page</p>").unwrap();
    }

    let manifest = manifest_for(root);

    let mut slugs = Vec::new();
    collect_slugs(&manifest["root"], &mut slugs);

    let mut deduped = slugs.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), slugs.len());
    assert!(slugs.iter().all(|slug| !slug.contains('\\')));
    assert!(slugs.contains(&"one/Page".to_string()));
    assert!(slugs.contains(&"two/Page".to_string()));
}

fn collect_slugs(node: &Value, out: &mut Vec<String>) {
    out.push(node["slug"].as_str().unwrap().to_string());
    if let Some(children) = node["children"].as_array() {
        for child in children {
            collect_slugs(child, out);
        }
    }
}
