use serde_yaml::{Mapping, Value};

use crate::error::ValidationError;
use crate::models::Metadata;

const DELIMITER: &str = "---";

/// Required frontmatter keys, checked in this order.
const REQUIRED_FIELDS: [&str; 3] = ["Name", "Type", "Description"];

/// Frontmatter split from a BUSY document.
#[derive(Debug)]
pub struct Frontmatter<'a> {
    pub metadata: Metadata,
    /// The whole YAML mapping; later stages read optional keys such as `Triggers`.
    pub raw: Mapping,
    /// Markdown following the closing delimiter.
    pub body: &'a str,
}

/// Split `content` into YAML frontmatter and body, and build the document metadata.
///
/// The content must open with a `---` line and contain a closing `---` line
/// that is followed by a newline.
///
/// ```text
/// ---
/// Name: DailyReview
/// Type: [Operation]
/// Description: Review new leads every morning
/// ---
/// # Operations
/// ```
///
/// # Errors
///
/// Returns a [`ValidationError`] if:
/// - The delimiters are missing or the frontmatter is not closed
/// - The YAML cannot be parsed or is not a mapping
/// - `Name`, `Type` or `Description` is missing or not a string
pub fn extract_frontmatter(content: &str) -> Result<Frontmatter<'_>, ValidationError> {
    let (yaml, body) = split_frontmatter(content).ok_or(ValidationError::MissingFrontmatter)?;

    let data: Value =
        serde_yaml::from_str(yaml).map_err(|e| ValidationError::InvalidYaml(e.to_string()))?;
    let Value::Mapping(raw) = data else {
        return Err(ValidationError::NotAMapping);
    };

    for field in REQUIRED_FIELDS {
        if !raw.contains_key(field) {
            return Err(ValidationError::MissingField(field));
        }
    }

    let metadata = build_metadata(&raw)?;
    tracing::debug!(name = metadata.name(), doc_type = metadata.doc_type(), "parsed frontmatter");

    Ok(Frontmatter {
        metadata,
        raw,
        body,
    })
}

/// Locate the delimited YAML block and the body after it.
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');

    let opening = lines.next()?;
    if !is_delimiter(opening) || !opening.ends_with('\n') {
        return None;
    }

    let yaml_start = opening.len();
    let mut offset = yaml_start;
    for line in lines {
        let line_start = offset;
        offset += line.len();
        if is_delimiter(line) && line.ends_with('\n') {
            return Some((&content[yaml_start..line_start], &content[offset..]));
        }
    }

    None
}

fn is_delimiter(line: &str) -> bool {
    line.strip_prefix(DELIMITER)
        .is_some_and(|rest| rest.trim().is_empty())
}

fn build_metadata(raw: &Mapping) -> Result<Metadata, ValidationError> {
    let name = required_string(raw, "Name")?;
    let doc_type = type_tag(raw.get("Type").unwrap_or(&Value::Null))?;
    let description = required_string(raw, "Description")?;
    let provider = match raw.get("Provider") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            return Err(ValidationError::InvalidMetadata(
                "Provider must be a string".to_string(),
            ))
        }
    };

    Metadata::new(name, doc_type, description, provider)
        .map_err(|e| ValidationError::InvalidMetadata(e.to_string()))
}

fn required_string(raw: &Mapping, field: &str) -> Result<String, ValidationError> {
    match raw.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ValidationError::InvalidMetadata(format!(
            "{field} must be a string"
        ))),
    }
}

/// Rewind a YAML-decoded `Type` to its bracketed tag.
///
/// `Type: [Tool]` decodes as a one-element sequence; it becomes `"[Tool]"`
/// again. An empty sequence becomes `"[]"`.
fn type_tag(value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Sequence(items) => match items.first() {
            None => Ok("[]".to_string()),
            Some(first) => scalar_to_string(first)
                .map(|word| format!("[{word}]"))
                .ok_or_else(|| {
                    ValidationError::InvalidMetadata("Type must be a bracketed tag".to_string())
                }),
        },
        _ => Err(ValidationError::InvalidMetadata(
            "Type must be a string".to_string(),
        )),
    }
}

/// Render a scalar YAML value as text; `None` for null, sequences and mappings.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
