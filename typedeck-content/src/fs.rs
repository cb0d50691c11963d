use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{ContentError, Result};
use crate::source::ContentSource;

/// Content source rooted at a directory on disk.
///
/// Logical paths are resolved beneath the root. Absolute paths and `..`
/// traversal are rejected so a descriptor cannot point outside the root.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if path.is_empty() || !safe {
            return Err(ContentError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl ContentSource for DirSource {
    fn text(&self, path: &str) -> Result<String> {
        let resolved = self.resolve(path)?;
        debug!(path, resolved = %resolved.display(), "reading declaration content");
        std::fs::read_to_string(&resolved).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ContentError::NotFound(path.to_string()),
            _ => ContentError::Unreadable {
                path: path.to_string(),
                source: e,
            },
        })
    }
}
