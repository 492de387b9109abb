//! Display names

use std::{fmt, ops::RangeInclusive};

use thiserror::Error;

use super::Party;

/// Allowed length of the sender's display name, in characters
pub const SENDER_NAME_LENGTH: RangeInclusive<usize> = 5..=30;

/// Allowed length of the receiver's display name, in characters
pub const RECEIVER_NAME_LENGTH: RangeInclusive<usize> = 5..=60;

/// An error that can occur when creating a display name
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DisplayNameError {
    /// The trimmed name is shorter or longer than allowed
    #[error("Invalid {party} name: should be between {min} and {max} characters long")]
    OutOfBounds {
        /// Whose name was rejected
        party: Party,

        /// Minimum length
        min: usize,

        /// Maximum length
        max: usize,

        /// Length of the trimmed name
        length: usize,
    },
}

/// A trimmed display name within the bounds for its party
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayName {
    party: Party,
    name: String,
}

impl DisplayName {
    /// Create a new display name for `party`
    pub fn new(raw: &str, party: Party) -> Result<Self, DisplayNameError> {
        let trimmed = raw.trim();
        let bounds = Self::bounds(party);
        let length = trimmed.chars().count();

        if !bounds.contains(&length) {
            return Err(DisplayNameError::OutOfBounds {
                party,
                min: *bounds.start(),
                max: *bounds.end(),
                length,
            });
        }

        Ok(Self {
            party,
            name: trimmed.to_string(),
        })
    }

    /// The length bounds that apply to `party`
    pub fn bounds(party: Party) -> RangeInclusive<usize> {
        match party {
            Party::Sender => SENDER_NAME_LENGTH,
            Party::Receiver => RECEIVER_NAME_LENGTH,
        }
    }

    /// Whose name this is
    pub fn party(&self) -> Party {
        self.party
    }

    /// The trimmed name
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<DisplayName> for String {
    fn from(name: DisplayName) -> Self {
        name.name
    }
}

/// Validates the sender's and then the receiver's display name.
///
/// # Returns
/// The trimmed `(sender, receiver)` names, or the first [`DisplayNameError`].
pub fn validate_names(
    sender_name: &str,
    receiver_name: &str,
) -> Result<(DisplayName, DisplayName), DisplayNameError> {
    let sender = DisplayName::new(sender_name, Party::Sender)?;
    let receiver = DisplayName::new(receiver_name, Party::Receiver)?;

    Ok((sender, receiver))
}
