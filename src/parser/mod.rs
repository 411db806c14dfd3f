//! BUSY markdown parsing
//!
//! A document is YAML frontmatter followed by markdown sections:
//!
//! ```text
//! ---
//! Name: DailyLeadReview
//! Type: [Operation]
//! Description: Review new leads every morning
//! ---
//! [Lead]: ./concepts/lead.busy.md
//!
//! # Local Definitions
//! ## Hot Lead
//! A lead that replied within a day.
//!
//! # Setup
//! Open the CRM.
//!
//! # Operations
//! ## ReviewLeads
//! ### Steps
//! 1. Score each [Lead]
//!
//! # Triggers
//! - Set alarm for 6am each morning to run ReviewLeads
//! ```

pub mod blocks;
pub mod fence;
pub mod frontmatter;
pub mod operations;
pub mod schedule;
pub mod section;
pub mod tools;
pub mod triggers;

pub use blocks::{bullet_items, parse_imports, parse_local_definitions, parse_setup};
pub use frontmatter::{extract_frontmatter, Frontmatter};
pub use operations::parse_operations;
pub use schedule::time_phrase_to_cron;
pub use tools::parse_tools;
pub use triggers::{parse_frontmatter_triggers, parse_markdown_triggers, parse_trigger_declaration};

use crate::error::{BusyError, ValidationError};
use crate::models::{is_tool_type, BusyDocument, Document, ToolDocument, Trigger, OPERATION_TYPE};

/// Parse a BUSY document from its full text.
///
/// `Type: [Tool]` produces [`Document::Tool`]; any other type produces
/// [`Document::Busy`]. Sections are read in a fixed order (frontmatter,
/// imports, definitions, setup, operations, then tools or triggers) and the
/// first failure wins.
///
/// # Errors
///
/// - [`BusyError::Validation`] for missing frontmatter or fields, a tool
///   without description, a tool document without tools, or a malformed trigger
/// - [`BusyError::Parse`] for any other invalid content, such as step number 0
pub fn parse_document(content: &str) -> Result<Document, BusyError> {
    let Frontmatter {
        metadata,
        raw,
        body,
    } = extract_frontmatter(content)?;

    let imports = parse_imports(body)?;
    let definitions = parse_local_definitions(body)?;
    let setup = parse_setup(body);
    let operations = parse_operations(body)?;

    if is_tool_type(metadata.doc_type()) {
        let tools = parse_tools(body)?;
        if tools.is_empty() {
            return Err(ValidationError::NoTools.into());
        }
        tracing::debug!(name = metadata.name(), tools = tools.len(), "parsed tool document");
        let doc = ToolDocument::new(metadata, imports, definitions, setup, operations, tools);
        return Ok(doc.into());
    }

    let mut triggers: Vec<Trigger> = Vec::new();
    if metadata.doc_type() == OPERATION_TYPE {
        triggers.extend(parse_frontmatter_triggers(&raw, &metadata)?);
    }
    triggers.extend(parse_markdown_triggers(body)?);

    tracing::debug!(
        name = metadata.name(),
        operations = operations.len(),
        triggers = triggers.len(),
        "parsed document"
    );
    Ok(BusyDocument::new(metadata, imports, definitions, setup, operations, triggers).into())
}
