use serde::Serialize;
use tracing::{debug, warn};
use typedeck_content::ContentSource;
use typedeck_registry::Warning;

/// Concatenated declaration text plus fetch diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    pub text: String,
    pub warnings: Vec<Warning>,
}

/// Fetches each declaration path in input order and concatenates the texts,
/// newline-separated.
///
/// A path the source cannot resolve is skipped with a warning rather than
/// failing the whole document, so the editor surface stays functional when one
/// declaration source is stale or missing. Each entry is atomic: fully
/// included (untrimmed, with its separator) or fully excluded.
pub fn aggregate_declarations(source: &dyn ContentSource, paths: &[String]) -> Aggregation {
    let mut aggregation = Aggregation::default();
    for path in paths {
        match source.text(path) {
            Ok(text) => {
                aggregation.text.push_str(&text);
                aggregation.text.push('\n');
            }
            Err(e) => {
                let warning = Warning::ContentFetchFailed {
                    path: path.clone(),
                    detail: e.to_string(),
                };
                warn!(path, %warning, "declaration skipped");
                aggregation.warnings.push(warning);
            }
        }
    }
    debug!(
        paths = paths.len(),
        bytes = aggregation.text.len(),
        warnings = aggregation.warnings.len(),
        "declarations aggregated"
    );
    aggregation
}
