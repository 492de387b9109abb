//! Payload validation errors

use thiserror::Error;
use tracing::debug;

use crate::domain::communication::{
    display_names::DisplayNameError, email_addresses::EmailAddressError,
    replacements::ReplacementError, Party,
};

/// Errors that can occur when validating an email payload.
///
/// None of these are transient: the payload itself is malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// A display name is too short or too long
    #[error(transparent)]
    InvalidName(DisplayNameError),

    /// An email address breaks one of the address rules
    #[error("Invalid {party} email address: {source}")]
    InvalidEmailAddress {
        /// Whose address was rejected
        party: Party,

        /// The rule that was broken
        source: EmailAddressError,
    },

    /// The HTML uses placeholders that have no replacement
    #[error(
        "Invalid replacements: some placeholders in the HTML have no replacement: {}",
        .0.join(", ")
    )]
    MissingReplacement(Vec<String>),

    /// Some replacements have an empty value
    #[error(
        "Invalid replacements: all replacement values must be non-empty: {}",
        .0.join(", ")
    )]
    EmptyReplacementValue(Vec<String>),

    /// Some replacements are not used by the HTML
    #[error(
        "Invalid replacements: surplus replacement keys not used in the HTML: {}",
        .0.join(", ")
    )]
    SurplusReplacementKey(Vec<String>),
}

impl PayloadError {
    /// The name of the kind of failure
    pub fn kind(&self) -> &'static str {
        match self {
            PayloadError::InvalidName(_) => "InvalidName",
            PayloadError::InvalidEmailAddress { .. } => "InvalidEmailAddress",
            PayloadError::MissingReplacement(_) => "MissingReplacement",
            PayloadError::EmptyReplacementValue(_) => "EmptyReplacementValue",
            PayloadError::SurplusReplacementKey(_) => "SurplusReplacementKey",
        }
    }

    /// Wraps an address error with the party whose address it was
    pub fn invalid_email_address(party: Party) -> impl FnOnce(EmailAddressError) -> Self {
        move |source| PayloadError::InvalidEmailAddress { party, source }
    }
}

impl From<DisplayNameError> for PayloadError {
    fn from(err: DisplayNameError) -> Self {
        debug!("DisplayNameError -> PayloadError");

        PayloadError::InvalidName(err)
    }
}

impl From<ReplacementError> for PayloadError {
    fn from(err: ReplacementError) -> Self {
        debug!("ReplacementError -> PayloadError");

        match err {
            ReplacementError::MissingReplacement(keys) => PayloadError::MissingReplacement(keys),
            ReplacementError::EmptyReplacementValue(keys) => {
                PayloadError::EmptyReplacementValue(keys)
            }
            ReplacementError::SurplusReplacementKey(keys) => {
                PayloadError::SurplusReplacementKey(keys)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let err = PayloadError::from(ReplacementError::SurplusReplacementKey(vec![
            "age".to_string(),
        ]));

        assert_eq!(err.kind(), "SurplusReplacementKey");

        let err = PayloadError::invalid_email_address(Party::Receiver)(
            EmailAddressError::InvalidAtSign,
        );

        assert_eq!(err.kind(), "InvalidEmailAddress");
    }

    #[test]
    fn test_email_address_message_names_the_party() {
        let err = PayloadError::invalid_email_address(Party::Sender)(
            EmailAddressError::InvalidCharacters,
        );

        assert_eq!(
            err.to_string(),
            "Invalid sender email address: contains invalid characters"
        );
    }

    #[test]
    fn test_replacement_errors_keep_their_kind_and_keys() {
        let keys = vec!["age".to_string(), "city".to_string()];

        assert_eq!(
            PayloadError::from(ReplacementError::MissingReplacement(keys.clone())),
            PayloadError::MissingReplacement(keys.clone())
        );
        assert_eq!(
            PayloadError::from(ReplacementError::EmptyReplacementValue(keys.clone())),
            PayloadError::EmptyReplacementValue(keys.clone())
        );
        assert_eq!(
            PayloadError::from(ReplacementError::SurplusReplacementKey(keys.clone())),
            PayloadError::SurplusReplacementKey(keys)
        );
    }

    #[test]
    fn test_name_error_converts_to_invalid_name() {
        let name_err = DisplayNameError::OutOfBounds {
            party: Party::Receiver,
            min: 5,
            max: 60,
            length: 2,
        };

        let err = PayloadError::from(name_err);

        assert_eq!(err.kind(), "InvalidName");
        assert_eq!(
            err.to_string(),
            "Invalid receiver name: should be between 5 and 60 characters long"
        );
    }

    #[test]
    fn test_surplus_message_lists_keys() {
        let err = PayloadError::SurplusReplacementKey(vec!["a".to_string(), "b".to_string()]);

        assert_eq!(
            err.to_string(),
            "Invalid replacements: surplus replacement keys not used in the HTML: a, b"
        );
    }

    #[test]
    fn test_replacement_message() {
        let err = PayloadError::from(ReplacementError::MissingReplacement(vec![
            "name".to_string(),
        ]));

        assert_eq!(
            err.to_string(),
            "Invalid replacements: some placeholders in the HTML have no replacement: name"
        );
    }
}
