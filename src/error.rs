//! Error types for BUSY document parsing and import resolution
//!
//! Three kinds are kept apart all the way up the call stack:
//! - [`ValidationError`]: required content is missing or malformed
//! - [`ImportError`]: an import could not be resolved
//! - [`BusyError::Parse`]: anything else that went wrong while assembling a document

use std::path::PathBuf;
use thiserror::Error;

/// Required structural or semantic content is missing or malformed.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Document missing metadata section (YAML frontmatter with --- fences)")]
    MissingFrontmatter,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),

    #[error("Document metadata must be a YAML mapping")]
    NotAMapping,

    #[error("Missing required field '{0}' in document metadata")]
    MissingField(&'static str),

    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),

    #[error("Tool '{0}' missing description")]
    MissingToolDescription(String),

    #[error("Tool document must contain at least one tool definition in Tools section")]
    NoTools,

    #[error("Invalid frontmatter Triggers: {0}")]
    InvalidFrontmatterTriggers(String),

    #[error("Invalid trigger declaration '{text}': {reason}")]
    InvalidTrigger { text: String, reason: String },
}

/// An import statement could not be resolved.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Import path '{path}' not found (resolved to {})", resolved.display())]
    NotFound { path: String, resolved: PathBuf },

    #[error("Circular import detected: '{path}' (resolved to {})", resolved.display())]
    Circular { path: String, resolved: PathBuf },

    #[error("Anchor '#{anchor}' not found in '{path}'")]
    AnchorNotFound { anchor: String, path: String },

    #[error("Failed to parse imported document '{path}': {source}")]
    Invalid {
        path: String,
        #[source]
        source: Box<BusyError>,
    },
}

impl ImportError {
    /// The import path (as written in the importing document) this error is about.
    pub fn path(&self) -> &str {
        match self {
            ImportError::NotFound { path, .. }
            | ImportError::Circular { path, .. }
            | ImportError::AnchorNotFound { path, .. }
            | ImportError::Invalid { path, .. } => path,
        }
    }
}

/// Value-level constraint violated while building a model type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{model}.{field} must not be empty")]
    EmptyField {
        model: &'static str,
        field: &'static str,
    },

    #[error("step number must be at least 1, got {0}")]
    InvalidStepNumber(u32),

    #[error("step number '{0}' is out of range")]
    StepNumberOutOfRange(String),
}

/// Top-level error returned by [`crate::parser::parse_document`].
#[derive(Debug, Error)]
pub enum BusyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("{message}")]
    Parse { message: String },
}

impl BusyError {
    /// Wrap an unexpected failure as a parse error.
    pub fn parse(inner: impl std::fmt::Display) -> Self {
        BusyError::Parse {
            message: format!("Failed to parse BUSY document: {inner}"),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, BusyError::Validation(_))
    }

    pub fn is_import(&self) -> bool {
        matches!(self, BusyError::Import(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, BusyError::Parse { .. })
    }
}

impl From<ModelError> for BusyError {
    fn from(e: ModelError) -> Self {
        BusyError::parse(e)
    }
}

/// A document could not be serialized or saved.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to serialize frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BusyError>;
