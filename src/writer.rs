//! Serialize documents back to BUSY markdown
//!
//! Output re-parses to an equal [`Document`] as long as free-text fields
//! (definitions, setup, step instructions, tool descriptions) contain no
//! structural headings of their own.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::Path;

use crate::error::WriteError;
use crate::models::{
    Document, Import, LocalDefinition, Operation, ProviderMapping, Tool, Trigger, TriggerSource,
};
use crate::workspace::Workspace;

#[derive(Serialize)]
struct FrontmatterOut<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Type")]
    doc_type: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Provider", skip_serializing_if = "Option::is_none")]
    provider: Option<&'a str>,
    #[serde(rename = "Triggers", skip_serializing_if = "Vec::is_empty")]
    triggers: Vec<TriggerOut<'a>>,
}

#[derive(Serialize)]
struct TriggerOut<'a> {
    event_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<&'a IndexMap<String, String>>,
    queue_when_paused: bool,
}

/// Render `document` as BUSY markdown.
pub fn write_document(document: &Document) -> Result<String, WriteError> {
    let mut sections = vec![format_frontmatter(document)?];

    if !document.imports().is_empty() {
        sections.push(format_imports(document.imports()));
    }
    if !document.definitions().is_empty() {
        sections.push(format_definitions(document.definitions()));
    }
    if let Some(setup) = document.setup().filter(|s| !s.is_empty()) {
        sections.push(format!("# Setup\n\n{setup}\n"));
    }
    if !document.operations().is_empty() {
        sections.push(format_operations(document.operations()));
    }
    if !document.tools().is_empty() {
        sections.push(format_tools(document.tools()));
    }

    let markdown_triggers: Vec<&Trigger> = document
        .triggers()
        .iter()
        .filter(|t| t.source() == TriggerSource::Markdown)
        .collect();
    if !markdown_triggers.is_empty() {
        sections.push(format_triggers(&markdown_triggers));
    }

    Ok(sections.join("\n"))
}

/// Render `document` and write it to `path` through `workspace`.
pub fn save_document<W: Workspace + ?Sized>(
    document: &Document,
    workspace: &W,
    path: &Path,
) -> Result<(), WriteError> {
    let content = write_document(document)?;
    workspace.write(path, &content)?;
    tracing::info!(name = document.name(), path = %path.display(), "saved document");
    Ok(())
}

fn format_frontmatter(document: &Document) -> Result<String, WriteError> {
    let metadata = document.metadata();
    let triggers: Vec<TriggerOut<'_>> = document
        .triggers()
        .iter()
        .filter(|t| t.source() == TriggerSource::Frontmatter)
        .filter_map(|t| {
            Some(TriggerOut {
                event_type: t.event_type()?,
                filters: t.filter(),
                queue_when_paused: t.queue_when_paused(),
            })
        })
        .collect();

    let frontmatter = FrontmatterOut {
        name: metadata.name(),
        doc_type: metadata.doc_type(),
        description: metadata.description(),
        provider: metadata.provider(),
        triggers,
    };
    let yaml = serde_yaml::to_string(&frontmatter)?;

    Ok(format!("---\n{yaml}---\n"))
}

fn format_imports(imports: &[Import]) -> String {
    let mut content = String::new();
    for import in imports {
        match import.anchor() {
            Some(anchor) => content.push_str(&format!(
                "[{}]: {}#{}\n",
                import.concept_name(),
                import.path(),
                anchor
            )),
            None => content.push_str(&format!("[{}]: {}\n", import.concept_name(), import.path())),
        }
    }
    content
}

fn format_definitions(definitions: &[LocalDefinition]) -> String {
    let mut content = String::from("# Local Definitions\n");
    for definition in definitions {
        content.push_str(&format!("\n## {}\n", definition.name()));
        if !definition.content().is_empty() {
            content.push_str(&format!("\n{}\n", definition.content()));
        }
    }
    content
}

/// `### <heading>` followed by one bullet per item.
fn bullet_block(heading: &str, items: &[String]) -> String {
    let mut content = format!("### {heading}\n\n");
    for item in items {
        content.push_str(&format!("- {item}\n"));
    }
    content
}

fn format_operations(operations: &[Operation]) -> String {
    let mut blocks = vec![String::from("# Operations\n")];
    blocks.extend(operations.iter().map(format_operation));
    blocks.join("\n")
}

fn format_operation(operation: &Operation) -> String {
    let mut blocks = vec![format!("## {}\n", operation.name())];

    if !operation.inputs().is_empty() {
        blocks.push(bullet_block("Inputs", operation.inputs()));
    }
    if !operation.outputs().is_empty() {
        blocks.push(bullet_block("Outputs", operation.outputs()));
    }
    if !operation.steps().is_empty() {
        let mut steps = String::from("### Steps\n\n");
        for step in operation.steps() {
            steps.push_str(&format!("{}. {}\n", step.step_number(), step.instruction()));
        }
        blocks.push(steps);
    }
    if let Some(checklist) = operation.checklist().filter(|c| !c.items().is_empty()) {
        blocks.push(bullet_block("Checklist", checklist.items()));
    }

    blocks.join("\n")
}

fn format_tools(tools: &[Tool]) -> String {
    let mut blocks = vec![String::from("# Tools\n")];
    blocks.extend(tools.iter().map(format_tool));
    blocks.join("\n")
}

fn format_tool(tool: &Tool) -> String {
    let mut blocks = vec![
        format!("## {}\n", tool.name()),
        format!("{}\n", tool.description()),
    ];

    if !tool.inputs().is_empty() {
        blocks.push(bullet_block("Inputs", tool.inputs()));
    }
    if !tool.outputs().is_empty() {
        blocks.push(bullet_block("Outputs", tool.outputs()));
    }
    if let Some(examples) = tool.examples().filter(|e| !e.is_empty()) {
        blocks.push(bullet_block("Examples", examples));
    }
    if let Some(providers) = tool.providers().filter(|p| !p.is_empty()) {
        blocks.push(String::from("### Providers\n"));
        blocks.extend(
            providers
                .iter()
                .map(|(name, mapping)| format_provider(name, mapping)),
        );
    }

    blocks.join("\n")
}

fn format_provider(name: &str, mapping: &ProviderMapping) -> String {
    let mut content = format!("#### {name}\n");
    if mapping.action.is_none() && mapping.parameters.is_none() {
        return content;
    }

    content.push('\n');
    if let Some(action) = &mapping.action {
        content.push_str(&format!("Action: {action}\n"));
    }
    if let Some(parameters) = &mapping.parameters {
        content.push_str("Parameters:\n");
        for (key, value) in parameters {
            content.push_str(&format!("  {key}: {value}\n"));
        }
    }
    content
}

fn format_triggers(triggers: &[&Trigger]) -> String {
    let mut content = String::from("# Triggers\n\n");
    for trigger in triggers {
        content.push_str(&format!("- {}\n", trigger.raw_text()));
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    const OPERATION_DOC: &str = "\
---
Name: DailyLeadReview
Type: [Operation]
Description: Review new leads every morning
Triggers:
  - event_type: crm.lead.created
    filters:
      source: web
    queue_when_paused: false
---
[Lead]: ./concepts/lead.busy.md
[Review]: ./review.busy.md#weekly-review

# Local Definitions

## Hot Lead

A lead that replied within a day.

# Setup

Open the CRM dashboard.

# Operations

## ReviewLeads

### Inputs

- lead list

### Outputs

- ranked leads

### Steps

1. Load leads via [LoadLeads]
2. Score each [Lead]
   and record the score

### Checklist

- All leads scored

# Triggers

- Set alarm for 6am each morning to run ReviewLeads
- When crm.lead.created from web, run ReviewLeads
";

    const TOOL_DOC: &str = "\
---
Name: Gmail
Type: [Tool]
Description: Email tools
Provider: composio
---
# Tools

## send_email

Send an email.

### Inputs

- to: recipient

### Examples

- send_email(to='a@b.c')

### Providers

#### composio

Action: GMAIL_SEND_EMAIL
Parameters:
  recipient_email: to

#### zapier
";

    #[test]
    fn test_operation_document_round_trip() {
        let original = parse_document(OPERATION_DOC).unwrap();
        let written = write_document(&original).unwrap();
        let reparsed = parse_document(&written).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_tool_document_round_trip() {
        let original = parse_document(TOOL_DOC).unwrap();
        let written = write_document(&original).unwrap();
        let reparsed = parse_document(&written).unwrap();
        assert_eq!(reparsed, original);
        assert!(written.contains("Provider: composio"));
        assert!(written.contains("#### zapier"));
    }

    #[test]
    fn test_written_layout() {
        let doc = parse_document(OPERATION_DOC).unwrap();
        let written = write_document(&doc).unwrap();

        assert!(written.starts_with("---\nName: DailyLeadReview\n"));
        assert!(written.contains("[Review]: ./review.busy.md#weekly-review\n"));
        assert!(written.contains("# Setup\n\nOpen the CRM dashboard.\n"));
        assert!(written.contains("### Steps\n\n1. Load leads via [LoadLeads]\n"));
        assert!(written.contains("- Set alarm for 6am each morning to run ReviewLeads\n"));
        assert!(!written.contains("Frontmatter trigger"));
    }

    #[test]
    fn test_step_numbers_written_verbatim() {
        let content = "---\nName: T\nType: [Operation]\nDescription: d\n---\n# Operations\n## Op\n### Steps\n1. Do Y\n5. Do X\n3. Do Z\n";
        let written = write_document(&parse_document(content).unwrap()).unwrap();
        assert!(written.contains("1. Do Y\n5. Do X\n3. Do Z\n"));
    }

    #[test]
    fn test_minimal_document_has_only_frontmatter() {
        let doc = parse_document("---\nName: T\nType: [Concept]\nDescription: d\n---\n").unwrap();
        let written = write_document(&doc).unwrap();
        assert!(written.starts_with("---\n"));
        assert!(written.ends_with("---\n"));
        assert!(!written.contains('#'));
    }

    #[test]
    fn test_save_document() {
        let temp = tempfile::TempDir::new().unwrap();
        let workspace = crate::workspace::FsWorkspace::new(temp.path());
        let doc = parse_document(TOOL_DOC).unwrap();

        save_document(&doc, &workspace, Path::new("tools/gmail.busy.md")).unwrap();

        let saved = std::fs::read_to_string(temp.path().join("tools/gmail.busy.md")).unwrap();
        assert_eq!(parse_document(&saved).unwrap(), doc);
    }
}
