use std::collections::HashMap;

use crate::error::{ContentError, Result};
use crate::source::ContentSource;

/// Map-backed content source for hosts that hold their resources in memory,
/// and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: &str, text: &str) {
        self.entries.insert(path.to_string(), text.to_string());
    }

    pub fn with(mut self, path: &str, text: &str) -> Self {
        self.insert(path, text);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ContentSource for MemorySource {
    fn text(&self, path: &str) -> Result<String> {
        self.entries
            .get(path)
            .cloned()
            .ok_or_else(|| ContentError::NotFound(path.to_string()))
    }
}
