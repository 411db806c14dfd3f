//! `busy check`: validate one or more documents

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::PathBuf;

use super::load_document;

pub fn execute(paths: &[PathBuf]) -> Result<()> {
    let mut failed = 0;

    for path in paths {
        match load_document(path) {
            Ok(document) => println!(
                "{} {} ({})",
                "✓".green().bold(),
                path.display(),
                document.metadata().doc_type()
            ),
            Err(e) => {
                failed += 1;
                println!("{} {}", "✗".red().bold(), path.display());
                println!("    {}", format!("{:#}", e).red());
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} documents failed validation", paths.len());
    }

    println!(
        "\n{} {} document(s) valid",
        "✓".green().bold(),
        paths.len()
    );
    Ok(())
}
