//! Integration tests for vault-local and explicit configuration

use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vaultnav::cli::RunContext;
use vaultnav::config::CONFIG_FILE_NAME;

fn manifest_for(root: &Path, config: Option<&Path>) -> Value {
    let context = RunContext::new(root.to_path_buf(), config.map(Path::to_path_buf)).unwrap();
    serde_json::from_str(&context.execute(None).unwrap()).unwrap()
}

/// A `.vaultnav.toml` in the vault root is discovered automatically and,
/// being hidden, never appears in the manifest itself.
#[test]
fn test_vault_local_config_discovered() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(
        root.join(CONFIG_FILE_NAME),
        "[scan]\nexcluded_dirs = [\"media\"]\n",
    )
    .unwrap();
    fs::write(root.join("README.md"), "# index").unwrap();
    fs::write(root.join("README.html"), "<h1>index</h1>").unwrap();

    let media = root.join("media");
    fs::create_dir(&media).unwrap();
    fs::write(media.join("README.md"), "# media").unwrap();
    fs::write(media.join("README.html"), "<h1>media</h1>").unwrap();

    // "graphics" is no longer excluded once the config overrides the set
    let graphics = root.join("graphics");
    fs::create_dir(&graphics).unwrap();
    fs::write(graphics.join("README.md"), "# graphics").unwrap();
    fs::write(graphics.join("README.html"), "<h1>graphics</h1>").unwrap();

    let manifest = manifest_for(root, None);
    let titles: Vec<&str> = manifest["root"]["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|child| child["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, vec!["graphics"]);
}

/// An explicit --config path overrides vault-local discovery.
#[test]
fn test_explicit_config_overrides_discovery() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("index.md"), "# index").unwrap();
    fs::write(root.join("index.xhtml"), "<h1>index</h1>").unwrap();
    fs::write(root.join("Notes.xhtml"), "<p>notes</p>").unwrap();
    fs::write(root.join("Ignored.html"), "<p>ignored</p>").unwrap();

    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("custom.toml");
    fs::write(
        &config_path,
        "[scan]\nmarker = \"index.md\"\nrendered_extension = \"xhtml\"\n",
    )
    .unwrap();

    let manifest = manifest_for(root, Some(&config_path));

    assert_eq!(manifest["root"]["content_path"], "/index.xhtml");
    let children = manifest["root"]["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["content_path"], "/Notes.xhtml");
}

/// An invalid explicit config aborts context construction.
#[test]
fn test_invalid_config_aborts() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("README.md"), "# index").unwrap();

    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("bad.toml");
    fs::write(&config_path, "[scan]\nrendered_extension = \".html\"\n").unwrap();

    let result = RunContext::new(temp_dir.path().to_path_buf(), Some(config_path));
    assert!(result.is_err());
}
