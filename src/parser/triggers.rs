//! Trigger declarations from frontmatter and from the Triggers section
//!
//! Markdown bullets use one of two phrasings:
//! - `Set alarm for 6am each morning to run DailyLeadReview`
//! - `When gmail.message.received from *@lead.com, run RespondToLead`

use indexmap::IndexMap;
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::LazyLock;

use super::blocks::bullet_items;
use super::frontmatter::scalar_to_string;
use super::schedule::time_phrase_to_cron;
use super::section::extract_section;
use crate::error::{BusyError, ValidationError};
use crate::models::{Metadata, Trigger, TriggerSource};

// Allow expect here as the regexes are compile-time verified to be valid
#[allow(clippy::expect_used)]
static ALARM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^set\s+alarm\s+for\s+(.+?)\s+to\s+run\s+(\w+)")
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static EVENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^when\s+([\w.]+)(?:\s+from\s+(.+?))?,\s*run\s+(\w+)")
        .expect("constant regex pattern is valid")
});

const TRIGGERS: &[&str] = &["Triggers", "Trigger"];
const TRIGGERS_KEY: &str = "Triggers";

/// Triggers declared in the Triggers section of the body.
pub fn parse_markdown_triggers(body: &str) -> Result<Vec<Trigger>, BusyError> {
    let Some(section) = extract_section(body, 1, TRIGGERS) else {
        return Ok(Vec::new());
    };

    bullet_items(section)
        .iter()
        .map(|text| parse_trigger_declaration(text))
        .collect()
}

/// Parse one trigger bullet; the alarm phrasing is tried first.
pub fn parse_trigger_declaration(text: &str) -> Result<Trigger, BusyError> {
    let invalid = |reason: String| ValidationError::InvalidTrigger {
        text: text.to_string(),
        reason,
    };

    if let Some(caps) = ALARM_PATTERN.captures(text) {
        let schedule = time_phrase_to_cron(caps[1].trim()).map_err(invalid)?;
        return Ok(Trigger::alarm(text, schedule, &caps[2])?);
    }

    if let Some(caps) = EVENT_PATTERN.captures(text) {
        let filter = caps.get(2).map(|from| {
            let mut filter = IndexMap::new();
            filter.insert("from".to_string(), from.as_str().trim().to_string());
            filter
        });
        return Ok(Trigger::event(text, &caps[1], filter, &caps[3])?);
    }

    Err(invalid(
        "Unrecognized trigger format. Expected 'Set alarm for <time> to run <Operation>' \
         or 'When <event> [from <filter>], run <Operation>'"
            .to_string(),
    )
    .into())
}

/// Triggers declared under the frontmatter `Triggers` key.
///
/// ```text
/// Triggers:
///   - event_type: gmail.message.received
///     filters:
///       from: "*@company.com"
///     queue_when_paused: false
/// ```
///
/// Each one targets the document's own operation.
pub fn parse_frontmatter_triggers(
    raw: &Mapping,
    metadata: &Metadata,
) -> Result<Vec<Trigger>, BusyError> {
    let entries = match raw.get(TRIGGERS_KEY) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Ok(Vec::new()),
        Some(Value::Mapping(map)) if map.is_empty() => return Ok(Vec::new()),
        Some(Value::String(text)) if text.is_empty() => return Ok(Vec::new()),
        Some(Value::Sequence(entries)) => entries,
        Some(_) => {
            return Err(invalid_shape(
                "Triggers field must be a list of trigger declarations",
            ))
        }
    };

    entries
        .iter()
        .map(|entry| frontmatter_trigger(entry, metadata))
        .collect()
}

fn frontmatter_trigger(entry: &Value, metadata: &Metadata) -> Result<Trigger, BusyError> {
    let Value::Mapping(entry) = entry else {
        return Err(invalid_shape("each trigger must be a mapping"));
    };

    let event_type = match entry.get("event_type") {
        Some(Value::String(s)) if !s.is_empty() => s.as_str(),
        _ => return Err(invalid_shape("trigger missing required field: event_type")),
    };

    let filter = match entry.get("filters") {
        None | Some(Value::Null) => None,
        Some(Value::Mapping(filters)) => Some(filter_map(filters)?),
        Some(_) => return Err(invalid_shape("trigger filters must be a mapping")),
    };

    let queue_when_paused = match entry.get("queue_when_paused") {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => *b,
        Some(_) => return Err(invalid_shape("queue_when_paused must be a boolean")),
    };

    let trigger = Trigger::event(
        format!("Frontmatter trigger: {event_type}"),
        event_type,
        filter,
        metadata.name(),
    )?
    .with_queue_when_paused(queue_when_paused)
    .with_source(TriggerSource::Frontmatter);

    Ok(trigger)
}

fn filter_map(filters: &Mapping) -> Result<IndexMap<String, String>, BusyError> {
    filters
        .iter()
        .map(|(key, value)| match (scalar_to_string(key), scalar_to_string(value)) {
            (Some(key), Some(value)) => Ok((key, value)),
            _ => Err(invalid_shape("trigger filter keys and values must be scalars")),
        })
        .collect()
}

fn invalid_shape(reason: &str) -> BusyError {
    ValidationError::InvalidFrontmatterTriggers(reason.to_string()).into()
}
