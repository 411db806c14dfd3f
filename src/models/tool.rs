use indexmap::IndexMap;
use serde::Serialize;

use super::require_non_empty;
use crate::error::ModelError;

/// How a tool maps onto one provider's action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProviderMapping {
    pub action: Option<String>,
    pub parameters: Option<IndexMap<String, String>>,
}

/// A tool declared in a `[Tool]` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    name: String,
    description: String,
    inputs: Vec<String>,
    outputs: Vec<String>,
    examples: Option<Vec<String>>,
    providers: Option<IndexMap<String, ProviderMapping>>,
}

impl Tool {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        inputs: Vec<String>,
        outputs: Vec<String>,
        examples: Option<Vec<String>>,
        providers: Option<IndexMap<String, ProviderMapping>>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        let description = description.into();
        require_non_empty(&name, "Tool", "name")?;
        require_non_empty(&description, "Tool", "description")?;

        Ok(Self {
            name,
            description,
            inputs,
            outputs,
            examples,
            providers,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn examples(&self) -> Option<&[String]> {
        self.examples.as_deref()
    }

    pub fn providers(&self) -> Option<&IndexMap<String, ProviderMapping>> {
        self.providers.as_ref()
    }

    pub fn provider(&self, name: &str) -> Option<&ProviderMapping> {
        self.providers.as_ref()?.get(name)
    }
}
