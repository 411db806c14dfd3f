use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use super::require_non_empty;
use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    Alarm,
    Event,
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerType::Alarm => write!(f, "alarm"),
            TriggerType::Event => write!(f, "event"),
        }
    }
}

/// Where a trigger was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerSource {
    Frontmatter,
    Markdown,
}

/// A rule binding a schedule or an event to an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trigger {
    raw_text: String,
    trigger_type: TriggerType,
    schedule: Option<String>,
    event_type: Option<String>,
    filter: Option<IndexMap<String, String>>,
    operation: String,
    queue_when_paused: bool,
    source: TriggerSource,
}

impl Trigger {
    /// Time-based trigger with a five-field cron schedule.
    pub fn alarm(
        raw_text: impl Into<String>,
        schedule: impl Into<String>,
        operation: impl Into<String>,
    ) -> Result<Self, ModelError> {
        Self::build(
            raw_text.into(),
            TriggerType::Alarm,
            Some(schedule.into()),
            None,
            None,
            operation.into(),
        )
    }

    pub fn event(
        raw_text: impl Into<String>,
        event_type: impl Into<String>,
        filter: Option<IndexMap<String, String>>,
        operation: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let event_type = event_type.into();
        require_non_empty(&event_type, "Trigger", "event_type")?;
        Self::build(
            raw_text.into(),
            TriggerType::Event,
            None,
            Some(event_type),
            filter,
            operation.into(),
        )
    }

    fn build(
        raw_text: String,
        trigger_type: TriggerType,
        schedule: Option<String>,
        event_type: Option<String>,
        filter: Option<IndexMap<String, String>>,
        operation: String,
    ) -> Result<Self, ModelError> {
        require_non_empty(&raw_text, "Trigger", "raw_text")?;
        require_non_empty(&operation, "Trigger", "operation")?;

        Ok(Self {
            raw_text,
            trigger_type,
            schedule,
            event_type,
            filter,
            operation,
            queue_when_paused: true,
            source: TriggerSource::Markdown,
        })
    }

    pub fn with_queue_when_paused(mut self, queue_when_paused: bool) -> Self {
        self.queue_when_paused = queue_when_paused;
        self
    }

    pub fn with_source(mut self, source: TriggerSource) -> Self {
        self.source = source;
        self
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn trigger_type(&self) -> TriggerType {
        self.trigger_type
    }

    pub fn schedule(&self) -> Option<&str> {
        self.schedule.as_deref()
    }

    pub fn event_type(&self) -> Option<&str> {
        self.event_type.as_deref()
    }

    pub fn filter(&self) -> Option<&IndexMap<String, String>> {
        self.filter.as_ref()
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn queue_when_paused(&self) -> bool {
        self.queue_when_paused
    }

    pub fn source(&self) -> TriggerSource {
        self.source
    }
}
