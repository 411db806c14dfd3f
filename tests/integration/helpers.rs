//! Shared fixtures for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use busy::{parse_document, Document};

/// Frontmatter for a document of `doc_type` followed by `body`.
pub fn document_text(name: &str, doc_type: &str, body: &str) -> String {
    format!("---\nName: {name}\nType: {doc_type}\nDescription: {name} document\n---\n{body}")
}

/// Write `content` to `relative` under `root`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Parse the file at `path`.
pub fn load(path: &Path) -> Document {
    let content = fs::read_to_string(path).expect("Failed to read fixture");
    parse_document(&content).expect("Fixture should parse")
}

pub fn temp_workspace() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}
