//! Operations section: one operation per `##` heading

use regex::Regex;
use std::sync::LazyLock;

use super::blocks::bullet_items;
use super::section::{extract_block_section, extract_section, split_items};
use crate::error::ModelError;
use crate::models::{Checklist, Operation, Step};

// Allow expect here as the regexes are compile-time verified to be valid
#[allow(clippy::expect_used)]
static STEP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.*)$").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static REFERENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("constant regex pattern is valid"));

pub(crate) const OPERATIONS: &[&str] = &["Operations", "Operation"];
pub(crate) const INPUTS: &[&str] = &["Inputs", "Input"];
pub(crate) const OUTPUTS: &[&str] = &["Outputs", "Output"];
const STEPS: &[&str] = &["Steps", "Step"];
const CHECKLIST: &[&str] = &["Checklist"];

pub fn parse_operations(body: &str) -> Result<Vec<Operation>, ModelError> {
    let Some(section) = extract_block_section(body, OPERATIONS) else {
        return Ok(Vec::new());
    };

    let operations = split_items(section, 2)
        .into_iter()
        .map(|(name, content)| parse_operation(name, content))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = operations.len(), "parsed operations");
    Ok(operations)
}

fn parse_operation(name: &str, content: &str) -> Result<Operation, ModelError> {
    let inputs = subsection_bullets(content, INPUTS);
    let outputs = subsection_bullets(content, OUTPUTS);
    let steps = match extract_section(content, 3, STEPS) {
        Some(text) => parse_steps(text)?,
        None => Vec::new(),
    };
    let checklist = extract_section(content, 3, CHECKLIST)
        .map(bullet_items)
        .filter(|items| !items.is_empty())
        .map(Checklist::new);

    Operation::new(name, inputs, outputs, steps, checklist)
}

/// Bullet items of the `###` sub-section named one of `names`, or empty.
pub(crate) fn subsection_bullets(content: &str, names: &[&str]) -> Vec<String> {
    extract_section(content, 3, names)
        .map(bullet_items)
        .unwrap_or_default()
}

/// Numbered steps. A line `<n>. <text>` opens a step; following lines are
/// part of its instruction until the next numbered line.
fn parse_steps(text: &str) -> Result<Vec<Step>, ModelError> {
    let mut raw_steps: Vec<(&str, Vec<&str>)> = Vec::new();

    for line in text.lines() {
        if let Some(caps) = STEP_PATTERN.captures(line.trim()) {
            let (Some(number), Some(first)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            raw_steps.push((number.as_str(), vec![first.as_str()]));
        } else if let Some((_, lines)) = raw_steps.last_mut() {
            lines.push(line);
        }
    }

    raw_steps
        .into_iter()
        .map(|(number, lines)| {
            let step_number: u32 = number
                .parse()
                .map_err(|_| ModelError::StepNumberOutOfRange(number.to_string()))?;
            let instruction = lines.join("\n").trim().to_string();
            let references = operation_references(&instruction);
            Step::new(step_number, instruction, references)
        })
        .collect()
}

/// Every bracketed substring, in order, duplicates kept.
fn operation_references(instruction: &str) -> Vec<String> {
    REFERENCE_PATTERN
        .captures_iter(instruction)
        .map(|caps| caps[1].to_string())
        .collect()
}
