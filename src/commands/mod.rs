//! Subcommand implementations for the `busy` binary

pub mod check;
pub mod fmt;
pub mod parse;
pub mod resolve;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::Document;
use crate::parser::parse_document;

/// Read and parse the document at `path`.
pub fn load_document(path: &Path) -> Result<Document> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_document(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
