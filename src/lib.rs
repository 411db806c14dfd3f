//! Parser, writer and import resolver for BUSY v2 documents
//!
//! ```no_run
//! use busy::parser::parse_document;
//! use busy::resolver::resolve_imports;
//! use std::path::Path;
//!
//! let content = std::fs::read_to_string("daily-review.busy.md")?;
//! let document = parse_document(&content)?;
//! let imports = resolve_imports(&document, Path::new("."))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod parser;
pub mod resolver;
pub mod workspace;
pub mod writer;

pub use error::{BusyError, ImportError, ModelError, ValidationError, WriteError};
pub use models::Document;
pub use parser::parse_document;
pub use resolver::{resolve_imports, ImportResolver, ResolvedImports};
pub use workspace::{FsWorkspace, Workspace};
pub use writer::{save_document, write_document};
