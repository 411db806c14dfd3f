//! BUSY document model
//!
//! Every type here is an immutable value: fields are private, constructors
//! validate, and accessors hand out borrows.

pub mod document;
pub mod metadata;
pub mod operation;
pub mod tool;
pub mod trigger;

pub use document::{is_tool_type, BusyDocument, Document, ToolDocument};
pub use metadata::{Import, LocalDefinition, Metadata};
pub use operation::{Checklist, Operation, Step};
pub use tool::{ProviderMapping, Tool};
pub use trigger::{Trigger, TriggerSource, TriggerType};

use crate::error::ModelError;

/// Type tag selecting the tool document variant.
pub const TOOL_TYPE: &str = "[Tool]";

/// Type tag of documents that may declare triggers in their frontmatter.
pub const OPERATION_TYPE: &str = "[Operation]";

fn require_non_empty(
    value: &str,
    model: &'static str,
    field: &'static str,
) -> Result<(), ModelError> {
    if value.is_empty() {
        return Err(ModelError::EmptyField { model, field });
    }
    Ok(())
}
