use std::fmt;

use serde::{Deserialize, Serialize};

/// Non-fatal diagnostics accumulated during discovery and aggregation.
///
/// One broken module descriptor must not block completion support for all the
/// others, so per-item failures are collected here instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A package-description entry lacks a usable declaration path, or a
    /// provider yielded content that is not a sequence of entries.
    DescriptorMalformed { module: String, detail: String },
    /// A provider yielded more than one package-description entry.
    DuplicatePackageDescription { module: String },
    /// A provider failed to load or its describe call failed.
    ProviderUnavailable { module: String, detail: String },
    /// The content source could not resolve a declaration path.
    ContentFetchFailed { path: String, detail: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DescriptorMalformed { module, detail } => {
                write!(f, "malformed descriptor in '{module}': {detail}")
            }
            Warning::DuplicatePackageDescription { module } => {
                write!(f, "duplicate package description in '{module}'")
            }
            Warning::ProviderUnavailable { module, detail } => {
                write!(f, "provider '{module}' unavailable: {detail}")
            }
            Warning::ContentFetchFailed { path, detail } => {
                write!(f, "fetch failed for '{path}': {detail}")
            }
        }
    }
}
