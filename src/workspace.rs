//! File access used by import resolution and document saving
//!
//! Relative paths are taken relative to the workspace root; absolute paths
//! are used as they are.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub trait Workspace {
    fn exists(&self, path: &Path) -> bool;

    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// A stable key for `path` (absolute, symlinks resolved).
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Write `content` to `path`, creating missing parent directories.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// [`Workspace`] backed by the local filesystem.
#[derive(Debug, Clone)]
pub struct FsWorkspace {
    root: PathBuf,
}

impl FsWorkspace {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Workspace rooted at the process working directory.
    pub fn current() -> Self {
        Self::new(".")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Workspace for FsWorkspace {
    fn exists(&self, path: &Path) -> bool {
        self.full_path(path).exists()
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.full_path(path))
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(self.full_path(path))
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let full = self.full_path(path);
        if let Some(parent) = full.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&full, content)?;
        tracing::debug!(path = %full.display(), bytes = content.len(), "wrote file");
        Ok(())
    }
}
