use std::sync::Arc;

use crate::error::Result;

/// Resolves a logical path to raw text.
///
/// The path is opaque to callers: its only contract is that the source can
/// resolve it. Implementations back onto whatever the host platform uses for
/// resource storage (an in-memory map, a resources directory, a repository
/// service).
pub trait ContentSource: Send + Sync {
    fn text(&self, path: &str) -> Result<String>;
}

impl<T: ContentSource + ?Sized> ContentSource for &T {
    fn text(&self, path: &str) -> Result<String> {
        (**self).text(path)
    }
}

impl<T: ContentSource + ?Sized> ContentSource for Arc<T> {
    fn text(&self, path: &str) -> Result<String> {
        (**self).text(path)
    }
}
