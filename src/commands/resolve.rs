//! `busy resolve`: follow a document's imports

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::load_document;
use crate::resolver::ImportResolver;
use crate::workspace::FsWorkspace;

pub fn execute(path: &Path) -> Result<()> {
    let document = load_document(path)?;
    let base_dir = path.parent().unwrap_or(Path::new(""));

    let workspace = FsWorkspace::current();
    let resolved = ImportResolver::new(&workspace)
        .resolve(&document, base_dir)
        .with_context(|| format!("Failed to resolve imports of {}", path.display()))?;

    if resolved.is_empty() {
        println!("{} {} has no imports", "−".dimmed(), document.name());
        return Ok(());
    }

    println!("{} {}", "Imports of".bold(), document.name().bold());
    for (concept, imported) in &resolved {
        println!(
            "  {} → {} {}",
            concept.cyan(),
            imported.name(),
            imported.metadata().doc_type().dimmed()
        );
    }
    println!(
        "\n{} {} concept(s) resolved",
        "✓".green().bold(),
        resolved.len()
    );

    Ok(())
}
