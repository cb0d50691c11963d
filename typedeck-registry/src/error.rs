/// Fatal failure of the extension registry lookup itself.
///
/// Everything else in the discovery pipeline degrades to warnings; without a
/// provider list there is no meaningful partial result, so this one propagates.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("extension point lookup failed: {0}")]
    Unavailable(String),
}

/// Errors produced by a single descriptor provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Descriptor content is not an enumerable sequence of entries.
    #[error("malformed descriptor content: {0}")]
    Malformed(String),

    #[error("content: {0}")]
    Content(#[from] typedeck_content::ContentError),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("provider unavailable: {0}")]
    Unavailable(String),
}
