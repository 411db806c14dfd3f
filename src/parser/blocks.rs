//! Imports, Local Definitions and Setup sections, plus shared list helpers

use regex::Regex;
use std::sync::LazyLock;

use super::section::{extract_section, split_items};
use crate::error::ModelError;
use crate::models::{Import, LocalDefinition};

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static IMPORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]:\s*([^\s#]+)(?:#(\S+))?").expect("constant regex pattern is valid")
});

const LOCAL_DEFINITIONS: &[&str] = &["Local Definitions"];
const SETUP: &[&str] = &["Setup"];

/// Reference-link imports, `[Concept]: path` or `[Concept]: path#anchor`,
/// found anywhere in the body.
pub fn parse_imports(body: &str) -> Result<Vec<Import>, ModelError> {
    IMPORT_PATTERN
        .captures_iter(body)
        .map(|caps| {
            Import::new(
                &caps[1],
                &caps[2],
                caps.get(3).map(|m| m.as_str().to_string()),
            )
        })
        .collect()
}

/// One definition per `##` heading of the Local Definitions section.
pub fn parse_local_definitions(body: &str) -> Result<Vec<LocalDefinition>, ModelError> {
    let Some(section) = extract_section(body, 1, LOCAL_DEFINITIONS) else {
        return Ok(Vec::new());
    };

    split_items(section, 2)
        .into_iter()
        .map(|(name, content)| LocalDefinition::new(name, content.trim()))
        .collect()
}

pub fn parse_setup(body: &str) -> Option<String> {
    extract_section(body, 1, SETUP).map(|content| content.trim().to_string())
}

/// Bullet items of `text`: lines starting with `-` or `*`, marker stripped.
pub fn bullet_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with(['-', '*']))
        .map(|line| line.trim_start_matches(['-', '*']).trim())
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
