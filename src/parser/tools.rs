//! Tools section of `[Tool]` documents: one tool per `##` heading

use indexmap::IndexMap;

use super::operations::{subsection_bullets, INPUTS, OUTPUTS};
use super::section::{extract_block_section, extract_section, leading_text, split_items};
use crate::error::{BusyError, ValidationError};
use crate::models::{ProviderMapping, Tool};

const TOOLS: &[&str] = &["Tools", "Tool"];
const EXAMPLES: &[&str] = &["Examples", "Example"];
const PROVIDERS: &[&str] = &["Providers", "Provider"];

pub fn parse_tools(body: &str) -> Result<Vec<Tool>, BusyError> {
    let Some(section) = extract_block_section(body, TOOLS) else {
        return Ok(Vec::new());
    };

    let tools = split_items(section, 2)
        .into_iter()
        .map(|(name, content)| parse_tool(name, content))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = tools.len(), "parsed tools");
    Ok(tools)
}

fn parse_tool(name: &str, content: &str) -> Result<Tool, BusyError> {
    let description = leading_text(content, 3).trim();
    if description.is_empty() {
        return Err(ValidationError::MissingToolDescription(name.to_string()).into());
    }

    let inputs = subsection_bullets(content, INPUTS);
    let outputs = subsection_bullets(content, OUTPUTS);
    let examples = Some(subsection_bullets(content, EXAMPLES)).filter(|e| !e.is_empty());
    let providers = parse_providers(content);

    Ok(Tool::new(
        name,
        description,
        inputs,
        outputs,
        examples,
        providers,
    )?)
}

/// `####` provider headings inside the Providers sub-section.
fn parse_providers(content: &str) -> Option<IndexMap<String, ProviderMapping>> {
    let section = extract_section(content, 3, PROVIDERS)?;
    let providers: IndexMap<String, ProviderMapping> = split_items(section, 4)
        .into_iter()
        .map(|(name, body)| (name.to_string(), parse_provider(body)))
        .collect();

    (!providers.is_empty()).then_some(providers)
}

/// Read `Action: <text>` and a `Parameters:` block of indented `key: value` lines.
fn parse_provider(body: &str) -> ProviderMapping {
    let mut action = None;
    let mut parameters = IndexMap::new();
    let mut in_parameters = false;

    for line in body.lines() {
        let text = strip_bullet(line);

        if in_parameters {
            if text.is_empty() {
                continue;
            }
            if line.starts_with([' ', '\t']) || line.trim_start().starts_with(['-', '*']) {
                if let Some((key, value)) = text.split_once(':') {
                    parameters.insert(key.trim().to_string(), value.trim().to_string());
                }
                continue;
            }
            in_parameters = false;
        }

        if let Some(rest) = text.strip_prefix("Action:") {
            let rest = rest.trim();
            if action.is_none() && !rest.is_empty() {
                action = Some(rest.to_string());
            }
        } else if text.starts_with("Parameters:") {
            in_parameters = true;
        }
    }

    ProviderMapping {
        action,
        parameters: (!parameters.is_empty()).then_some(parameters),
    }
}

fn strip_bullet(line: &str) -> &str {
    line.trim().trim_start_matches(['-', '*']).trim_start()
}
