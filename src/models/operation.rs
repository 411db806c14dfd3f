use serde::Serialize;

use super::require_non_empty;
use crate::error::ModelError;

/// A numbered step of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    step_number: u32,
    instruction: String,
    operation_references: Vec<String>,
}

impl Step {
    /// The step number is stored as written; gaps and ordering are not checked.
    pub fn new(
        step_number: u32,
        instruction: impl Into<String>,
        operation_references: Vec<String>,
    ) -> Result<Self, ModelError> {
        if step_number < 1 {
            return Err(ModelError::InvalidStepNumber(step_number));
        }
        let instruction = instruction.into();
        require_non_empty(&instruction, "Step", "instruction")?;

        Ok(Self {
            step_number,
            instruction,
            operation_references,
        })
    }

    pub fn step_number(&self) -> u32 {
        self.step_number
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Bracketed names in the instruction, in order of appearance.
    pub fn operation_references(&self) -> &[String] {
        &self.operation_references
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checklist {
    items: Vec<String>,
}

impl Checklist {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    name: String,
    inputs: Vec<String>,
    outputs: Vec<String>,
    steps: Vec<Step>,
    checklist: Option<Checklist>,
}

impl Operation {
    pub fn new(
        name: impl Into<String>,
        inputs: Vec<String>,
        outputs: Vec<String>,
        steps: Vec<Step>,
        checklist: Option<Checklist>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        require_non_empty(&name, "Operation", "name")?;

        Ok(Self {
            name,
            inputs,
            outputs,
            steps,
            checklist,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn checklist(&self) -> Option<&Checklist> {
        self.checklist.as_ref()
    }
}
