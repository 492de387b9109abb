//! Replacement errors

use thiserror::Error;

/// A mismatch between the placeholders in an HTML body and its replacements.
///
/// Each variant carries the offending keys, sorted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplacementError {
    /// The HTML uses placeholders that have no replacement
    #[error("some placeholders in the HTML have no replacement: {}", .0.join(", "))]
    MissingReplacement(Vec<String>),

    /// Some replacements have an empty value
    #[error("all replacement values must be non-empty: {}", .0.join(", "))]
    EmptyReplacementValue(Vec<String>),

    /// Some replacements are not used by the HTML
    #[error("surplus replacement keys not used in the HTML: {}", .0.join(", "))]
    SurplusReplacementKey(Vec<String>),
}
