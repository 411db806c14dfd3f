use serde::Serialize;

use super::require_non_empty;
use crate::error::ModelError;

/// Document metadata taken from the YAML frontmatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    name: String,
    #[serde(rename = "type")]
    doc_type: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<String>,
}

impl Metadata {
    pub fn new(
        name: impl Into<String>,
        doc_type: impl Into<String>,
        description: impl Into<String>,
        provider: Option<String>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        let description = description.into();
        require_non_empty(&name, "Metadata", "name")?;
        require_non_empty(&description, "Metadata", "description")?;

        Ok(Self {
            name,
            doc_type: doc_type.into(),
            description,
            provider,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bracketed type tag, e.g. `[Operation]`.
    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }
}

/// A reference-link import: `[ConceptName]: path#anchor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Import {
    concept_name: String,
    path: String,
    anchor: Option<String>,
}

impl Import {
    pub fn new(
        concept_name: impl Into<String>,
        path: impl Into<String>,
        anchor: Option<String>,
    ) -> Result<Self, ModelError> {
        let concept_name = concept_name.into();
        let path = path.into();
        require_non_empty(&concept_name, "Import", "concept_name")?;
        require_non_empty(&path, "Import", "path")?;

        Ok(Self {
            concept_name,
            path,
            anchor,
        })
    }

    pub fn concept_name(&self) -> &str {
        &self.concept_name
    }

    /// Path relative to the importing document's directory.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }
}

/// A `##` entry of the Local Definitions section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalDefinition {
    name: String,
    content: String,
}

impl LocalDefinition {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        require_non_empty(&name, "LocalDefinition", "name")?;

        Ok(Self {
            name,
            content: content.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
