/// Errors produced by content source lookups.
///
/// Hosts fold every failure mode of their retrieval backend (missing entry,
/// unreadable bytes, timeout) into one of these; the aggregation layer treats
/// them all as the same fetch-failed condition.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("unreadable {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid path: {0}")]
    InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, ContentError>;
