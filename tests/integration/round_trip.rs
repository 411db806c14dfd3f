//! Writer output re-parses to the same document

use busy::{parse_document, save_document, write_document, FsWorkspace};
use std::path::Path;

use super::helpers::{document_text, load, temp_workspace};

fn assert_round_trip(content: &str) {
    let original = parse_document(content).unwrap();
    let written = write_document(&original).unwrap();
    let reparsed = parse_document(&written)
        .unwrap_or_else(|e| panic!("written document failed to parse: {e}\n{written}"));
    assert_eq!(reparsed, original, "round trip changed the document:\n{written}");
}

#[test]
fn test_round_trip_operation_document() {
    assert_round_trip(&document_text(
        "Onboard",
        "[Operation]",
        "\
[Customer]: ./customer.busy.md

# Local Definitions

## Kickoff
The first call with a new customer.

# Setup
Create a shared channel.

# Operations

## Welcome
### Inputs
- customer record
### Steps
1. Send the welcome pack
2. Book the [Kickoff]
### Checklist
- Pack sent

## FollowUp
### Outputs
- notes
### Steps
2. Call back
1. Write notes

# Triggers
- When crm.customer.signed from enterprise, run Welcome
- Set alarm for 10am every Tuesday to run FollowUp
",
    ));
}

#[test]
fn test_round_trip_frontmatter_triggers() {
    assert_round_trip(
        "\
---
Name: Inbox
Type: [Operation]
Description: Sort the inbox
Triggers:
  - event_type: gmail.message.received
    filters:
      from: \"*@vip.com\"
    queue_when_paused: false
---
# Operations
## Inbox
### Steps
1. Sort
",
    );
}

#[test]
fn test_round_trip_tool_document() {
    assert_round_trip(
        "\
---
Name: Calendar
Type: [Tool]
Description: Calendar tools
Provider: composio
---
# Tools

## create_event
Create a calendar event.

### Inputs
- title
- start

### Outputs
- event_id

### Examples
- create_event(title='Sync')

### Providers

#### composio
Action: GOOGLECALENDAR_CREATE_EVENT
Parameters:
  summary: title
  start_datetime: start

## list_events
List upcoming events.
",
    );
}

#[test]
fn test_round_trip_multiline_description() {
    assert_round_trip(
        "---\nName: Notes\nType: [Document]\nDescription: |\n  First line\n  ---\n  Second line\n---\n# Setup\nx\n",
    );
}

#[test]
fn test_fmt_write_back_is_stable() {
    let temp = temp_workspace();
    let workspace = FsWorkspace::new(temp.path());
    let doc = parse_document(&document_text(
        "Stable",
        "[Operation]",
        "# Operations\n## Run\n### Steps\n1. go\n",
    ))
    .unwrap();

    save_document(&doc, &workspace, Path::new("stable.busy.md")).unwrap();
    let first = std::fs::read_to_string(temp.path().join("stable.busy.md")).unwrap();

    save_document(
        &load(&temp.path().join("stable.busy.md")),
        &workspace,
        Path::new("stable.busy.md"),
    )
    .unwrap();
    let second = std::fs::read_to_string(temp.path().join("stable.busy.md")).unwrap();

    assert_eq!(first, second);
}
