//! `busy parse`: print a parsed document

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::load_document;
use crate::config::OutputFormat;
use crate::models::{Document, Trigger, TriggerType};

pub fn execute(path: &Path, format: OutputFormat) -> Result<()> {
    let document = load_document(path)?;

    match format {
        OutputFormat::Summary => print!("{}", format_summary(&document)),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&document).context("Failed to serialize to JSON")?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&document).context("Failed to serialize to YAML")?;
            print!("{yaml}");
        }
    }

    Ok(())
}

/// Human-readable overview of a document.
pub fn format_summary(document: &Document) -> String {
    let metadata = document.metadata();
    let mut content = String::new();

    content.push_str(&format!(
        "{} {}\n",
        metadata.name().bold(),
        metadata.doc_type().dimmed()
    ));
    content.push_str(&format!("  {}\n", metadata.description()));
    if let Some(provider) = metadata.provider() {
        content.push_str(&format!("  {} {provider}\n", "Provider:".dimmed()));
    }

    if !document.imports().is_empty() {
        content.push_str(&format!("\n{}\n", "Imports:".bold()));
        for import in document.imports() {
            let target = match import.anchor() {
                Some(anchor) => format!("{}#{anchor}", import.path()),
                None => import.path().to_string(),
            };
            content.push_str(&format!("  {} → {target}\n", import.concept_name().cyan()));
        }
    }

    if !document.definitions().is_empty() {
        content.push_str(&format!("\n{}\n", "Local Definitions:".bold()));
        for definition in document.definitions() {
            content.push_str(&format!("  {}\n", definition.name()));
        }
    }

    if !document.operations().is_empty() {
        content.push_str(&format!("\n{}\n", "Operations:".bold()));
        for operation in document.operations() {
            content.push_str(&format!(
                "  {} ({} steps)\n",
                operation.name().cyan(),
                operation.steps().len()
            ));
        }
    }

    if !document.tools().is_empty() {
        content.push_str(&format!("\n{}\n", "Tools:".bold()));
        for tool in document.tools() {
            content.push_str(&format!("  {} {}\n", tool.name().cyan(), tool.description()));
        }
    }

    if !document.triggers().is_empty() {
        content.push_str(&format!("\n{}\n", "Triggers:".bold()));
        for trigger in document.triggers() {
            content.push_str(&format!("  {}\n", describe_trigger(trigger)));
        }
    }

    content
}

fn describe_trigger(trigger: &Trigger) -> String {
    match trigger.trigger_type() {
        TriggerType::Alarm => format!(
            "{} {} → {}",
            "alarm".yellow(),
            trigger.schedule().unwrap_or_default(),
            trigger.operation()
        ),
        TriggerType::Event => {
            let filter = trigger
                .filter()
                .map(|f| {
                    f.iter()
                        .map(|(k, v)| format!("{k}={v}"))
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .map(|f| format!(" [{f}]"))
                .unwrap_or_default();
            format!(
                "{} {}{filter} → {}",
                "event".yellow(),
                trigger.event_type().unwrap_or_default(),
                trigger.operation()
            )
        }
    }
}
