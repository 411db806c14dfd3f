//! Recursive import resolution
//!
//! Imports are followed depth-first. Every file on the current branch is
//! tracked by canonical path, so a file that imports one of its own
//! ancestors is reported as circular, while two siblings importing the same
//! file (a diamond) are fine.

use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::ImportError;
use crate::models::{Document, Import};
use crate::parser::parse_document;
use crate::workspace::{FsWorkspace, Workspace};

/// Concept name to imported document, in resolution order.
pub type ResolvedImports = IndexMap<String, Document>;

/// Files on the branch currently being resolved.
#[derive(Debug, Default)]
struct ResolveContext {
    branch: HashSet<PathBuf>,
}

impl ResolveContext {
    fn enter(&mut self, key: PathBuf) -> bool {
        self.branch.insert(key)
    }

    fn leave(&mut self, key: &Path) {
        self.branch.remove(key);
    }
}

pub struct ImportResolver<'w, W: Workspace + ?Sized> {
    workspace: &'w W,
}

impl<'w, W: Workspace + ?Sized> ImportResolver<'w, W> {
    pub fn new(workspace: &'w W) -> Self {
        Self { workspace }
    }

    /// Resolve every import of `document`, and theirs, relative to `base_dir`.
    ///
    /// Nested imports are resolved relative to the importing file's
    /// directory. When two imports share a concept name the later one wins.
    pub fn resolve(
        &self,
        document: &Document,
        base_dir: &Path,
    ) -> Result<ResolvedImports, ImportError> {
        let mut context = ResolveContext::default();
        let mut resolved = ResolvedImports::new();
        self.resolve_into(document, base_dir, &mut context, &mut resolved)?;
        Ok(resolved)
    }

    fn resolve_into(
        &self,
        document: &Document,
        base_dir: &Path,
        context: &mut ResolveContext,
        resolved: &mut ResolvedImports,
    ) -> Result<(), ImportError> {
        for import in document.imports() {
            let full_path = base_dir.join(import.path());
            if !self.workspace.exists(&full_path) {
                return Err(not_found(import, full_path));
            }

            let key = match self.workspace.canonicalize(&full_path) {
                Ok(key) => key,
                Err(_) => return Err(not_found(import, full_path)),
            };
            if !context.enter(key.clone()) {
                return Err(ImportError::Circular {
                    path: import.path().to_string(),
                    resolved: key,
                });
            }

            let outcome = self.resolve_import(import, &full_path, context, resolved);
            context.leave(&key);
            outcome?;
        }

        Ok(())
    }

    fn resolve_import(
        &self,
        import: &Import,
        full_path: &Path,
        context: &mut ResolveContext,
        resolved: &mut ResolvedImports,
    ) -> Result<(), ImportError> {
        tracing::debug!(
            concept = import.concept_name(),
            path = %full_path.display(),
            "resolving import"
        );

        let content = self
            .workspace
            .read_text(full_path)
            .map_err(|_| not_found(import, full_path.to_path_buf()))?;

        let document = parse_document(&content).map_err(|e| ImportError::Invalid {
            path: import.path().to_string(),
            source: Box::new(e),
        })?;

        if let Some(anchor) = import.anchor() {
            if !document.has_anchor(anchor) {
                return Err(ImportError::AnchorNotFound {
                    anchor: anchor.to_string(),
                    path: import.path().to_string(),
                });
            }
        }

        let nested_base = full_path.parent().unwrap_or(Path::new(""));
        let mut nested = ResolvedImports::new();
        self.resolve_into(&document, nested_base, context, &mut nested)?;

        if resolved.contains_key(import.concept_name()) {
            tracing::warn!(
                concept = import.concept_name(),
                path = import.path(),
                "concept imported more than once, keeping the later import"
            );
        }
        resolved.insert(import.concept_name().to_string(), document);
        resolved.extend(nested);

        Ok(())
    }
}

fn not_found(import: &Import, resolved: PathBuf) -> ImportError {
    ImportError::NotFound {
        path: import.path().to_string(),
        resolved,
    }
}

/// Resolve the imports of `document` against the local filesystem.
pub fn resolve_imports(
    document: &Document,
    base_dir: &Path,
) -> Result<ResolvedImports, ImportError> {
    let workspace = FsWorkspace::current();
    ImportResolver::new(&workspace).resolve(document, base_dir)
}
