//! Placeholder extraction and replacement checks

use std::collections::{BTreeMap, BTreeSet};

use lazy_static::lazy_static;
use regex::Regex;

use super::ReplacementError;

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{(\w+)\}").unwrap();
}

/// Placeholder identifier to substitution value
pub type Replacements = BTreeMap<String, String>;

/// Returns the set of placeholder identifiers used in `html`.
///
/// A placeholder is `{identifier}` where the identifier is one or more word
/// characters. Only the identifier is returned.
pub fn placeholders(html: &str) -> BTreeSet<&str> {
    PLACEHOLDER_REGEX
        .captures_iter(html)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Checks that the placeholders in `html` and the keys of `replacements` match.
///
/// # Returns
/// - [`Ok`] if every placeholder has a non-empty replacement and every
///   replacement is used.
/// - [`Err`] with the first mismatch found, checked in the order
///   missing, empty, surplus.
pub fn validate_html_replacements(
    html: &str,
    replacements: &Replacements,
) -> Result<(), ReplacementError> {
    let used = placeholders(html);

    let missing = sorted(
        used.iter()
            .copied()
            .filter(|key| !replacements.contains_key(*key)),
    );

    if !missing.is_empty() {
        return Err(ReplacementError::MissingReplacement(missing));
    }

    let empty = sorted(
        replacements
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(key, _)| key.as_str()),
    );

    if !empty.is_empty() {
        return Err(ReplacementError::EmptyReplacementValue(empty));
    }

    let surplus = sorted(
        replacements
            .keys()
            .map(String::as_str)
            .filter(|key| !used.contains(key)),
    );

    if !surplus.is_empty() {
        return Err(ReplacementError::SurplusReplacementKey(surplus));
    }

    Ok(())
}

fn sorted<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<String> {
    keys.collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
