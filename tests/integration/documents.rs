//! Whole-document parsing scenarios

use busy::models::{TriggerSource, TriggerType};
use busy::parse_document;

use super::helpers::document_text;

const LEAD_REVIEW: &str = "\
---
Name: DailyLeadReview
Type: [Operation]
Description: Review and rank inbound leads
Triggers:
  - event_type: crm.lead.created
    filters:
      source: web
      priority: 1
---
[Lead]: ./concepts/lead.busy.md
[Scoring]: ./scoring.busy.md#score-lead

# [Local Definitions]

## Hot Lead

A lead that replied within one day.

# Setup

Open the CRM and filter to unassigned leads:

```bash
# show unassigned
crm leads --unassigned
```

# [Operations]

## ReviewLeads

### Inputs
- unassigned leads

### Outputs
- ranked leads

### Steps
1. Score each [Lead] with [ScoreLead]
2. Sort by score
3. Post the summary:
   ```markdown
   ## Summary
   # Top leads
   ```

### Checklist
- Every lead scored

## Archive

### Steps
1. Archive leads older than 30 days

# Triggers

- Set alarm for 6am each morning to run ReviewLeads
- Set alarm for 9:30pm every Friday to run Archive
- When crm.lead.created from *@partner.com, run ReviewLeads
";

#[test]
fn test_full_operation_document() {
    let doc = parse_document(LEAD_REVIEW).unwrap();

    assert!(!doc.is_tool());
    assert_eq!(doc.name(), "DailyLeadReview");
    assert_eq!(doc.metadata().doc_type(), "[Operation]");

    let imports = doc.imports();
    assert_eq!(imports.len(), 2);
    assert_eq!(imports[1].anchor(), Some("score-lead"));

    assert_eq!(doc.definitions().len(), 1);
    assert_eq!(doc.definitions()[0].name(), "Hot Lead");

    let setup = doc.setup().unwrap();
    assert!(setup.contains("# show unassigned"));
    assert!(setup.ends_with("```"));

    let operations = doc.operations();
    assert_eq!(operations.len(), 2);
    let review = &operations[0];
    assert_eq!(review.steps().len(), 3);
    assert_eq!(
        review.steps()[0].operation_references(),
        ["Lead", "ScoreLead"]
    );
    assert!(review.steps()[2].instruction().contains("## Summary"));
    assert!(review.steps()[2].instruction().contains("# Top leads"));
    assert_eq!(operations[1].name(), "Archive");
}

#[test]
fn test_trigger_order_and_schedules() {
    let doc = parse_document(LEAD_REVIEW).unwrap();
    let triggers = doc.triggers();
    assert_eq!(triggers.len(), 4);

    let frontmatter = &triggers[0];
    assert_eq!(frontmatter.source(), TriggerSource::Frontmatter);
    assert_eq!(frontmatter.operation(), "DailyLeadReview");
    let filter = frontmatter.filter().unwrap();
    assert_eq!(filter["source"], "web");
    assert_eq!(filter["priority"], "1");

    assert_eq!(triggers[1].schedule(), Some("0 6 * * *"));
    assert_eq!(triggers[2].schedule(), Some("30 21 * * 5"));
    assert_eq!(triggers[2].operation(), "Archive");

    let event = &triggers[3];
    assert_eq!(event.trigger_type(), TriggerType::Event);
    assert_eq!(event.filter().unwrap()["from"], "*@partner.com");
    assert!(event.queue_when_paused());
}

#[test]
fn test_tool_document() {
    let content = document_text(
        "Slack",
        "[Tool]",
        "\
# Tools

## post_message

Post a message to a channel.

### Inputs
- channel
- text

### Providers

#### composio

Action: SLACK_SEND_MESSAGE
Parameters:
  channel: channel
  text: text

# Triggers

- this line is documentation only
",
    );

    let doc = parse_document(&content).unwrap();
    assert!(doc.is_tool());
    assert!(doc.triggers().is_empty());

    let tool = &doc.tools()[0];
    assert_eq!(tool.name(), "post_message");
    assert_eq!(tool.inputs(), ["channel", "text"]);
    let composio = tool.provider("composio").unwrap();
    assert_eq!(composio.action.as_deref(), Some("SLACK_SEND_MESSAGE"));
    assert_eq!(composio.parameters.as_ref().unwrap().len(), 2);
}

#[test]
fn test_tool_document_requires_tools() {
    let content = document_text("Empty", "[Tool]", "# Operations\n## Op\n");
    let err = parse_document(&content).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_tool_without_description() {
    let content = document_text("Bad", "[Tool]", "# Tools\n## mute\n### Inputs\n- channel\n");
    let err = parse_document(&content).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("mute"));
}

#[test]
fn test_type_tags_are_preserved() {
    for tag in ["[Concept]", "[Document]", "[Playbook]"] {
        let doc = parse_document(&document_text("X", tag, "")).unwrap();
        assert_eq!(doc.metadata().doc_type(), tag);
    }
}

#[test]
fn test_missing_sections_are_empty() {
    let doc = parse_document(&document_text("Bare", "[Document]", "Just prose.\n")).unwrap();
    assert!(doc.imports().is_empty());
    assert!(doc.definitions().is_empty());
    assert!(doc.setup().is_none());
    assert!(doc.operations().is_empty());
    assert!(doc.triggers().is_empty());
    assert!(doc.tools().is_empty());
}

#[test]
fn test_missing_description_field() {
    let err = parse_document("---\nName: X\nType: [Document]\n---\n").unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("'Description'"));
}

#[test]
fn test_json_output_shape() {
    let doc = parse_document(LEAD_REVIEW).unwrap();
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["variant"], "busy");
    assert_eq!(json["metadata"]["type"], "[Operation]");
    assert_eq!(json["operations"][0]["steps"][0]["step_number"], 1);
    assert_eq!(json["triggers"][1]["trigger_type"], "alarm");
}
