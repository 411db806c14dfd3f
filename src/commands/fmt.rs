//! `busy fmt`: rewrite a document in canonical layout

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::load_document;
use crate::workspace::FsWorkspace;
use crate::writer::{save_document, write_document};

pub fn execute(path: &Path, write: bool) -> Result<()> {
    let document = load_document(path)?;

    if write {
        save_document(&document, &FsWorkspace::current(), path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("{} Formatted {}", "✓".green().bold(), path.display());
    } else {
        let content = write_document(&document).context("Failed to format document")?;
        print!("{content}");
    }

    Ok(())
}
