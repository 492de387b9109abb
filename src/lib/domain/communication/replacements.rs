//! Placeholders in an HTML body and the replacements that fill them.

mod errors;
mod placeholders;

pub use errors::ReplacementError;
pub use placeholders::{placeholders, validate_html_replacements, Replacements};
