//! Email payload

use serde::{Deserialize, Serialize};

use crate::domain::communication::{
    display_names::{validate_names, DisplayName},
    email_addresses::EmailAddress,
    replacements::{placeholders, validate_html_replacements, Replacements},
    Party,
};

use super::PayloadError;

/// An outbound email, as submitted by the caller.
///
/// Missing fields default to empty text, and missing replacements to an
/// empty mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailPayload {
    /// The sender's display name
    pub sender_name: String,

    /// The receiver's display name
    pub receiver_name: String,

    /// The sender's email address
    pub sender_addr: String,

    /// The receiver's email address
    pub receiver_addr: String,

    /// The HTML body, with `{placeholder}` tokens
    pub html: String,

    /// Values for the placeholders in the HTML body
    pub replacements: Replacements,
}

/// A payload that passed validation, with its names and addresses trimmed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedPayload {
    /// The sender's display name
    pub sender_name: DisplayName,

    /// The receiver's display name
    pub receiver_name: DisplayName,

    /// The sender's email address
    pub sender_addr: EmailAddress,

    /// The receiver's email address
    pub receiver_addr: EmailAddress,

    /// The HTML body
    pub html: String,

    /// Values for the placeholders in the HTML body
    pub replacements: Replacements,
}

impl ValidatedPayload {
    /// The placeholder identifiers used in the HTML body, sorted
    pub fn placeholders(&self) -> Vec<String> {
        placeholders(&self.html)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Validates a payload, stopping at the first failure.
///
/// Names are checked first, then the sender's address, the receiver's
/// address, and finally the HTML placeholders against the replacements.
pub fn validate_email_payload(payload: &EmailPayload) -> Result<ValidatedPayload, PayloadError> {
    let (sender_name, receiver_name) =
        validate_names(&payload.sender_name, &payload.receiver_name)?;

    let sender_addr = EmailAddress::new(&payload.sender_addr)
        .map_err(PayloadError::invalid_email_address(Party::Sender))?;

    let receiver_addr = EmailAddress::new(&payload.receiver_addr)
        .map_err(PayloadError::invalid_email_address(Party::Receiver))?;

    validate_html_replacements(&payload.html, &payload.replacements)?;

    Ok(ValidatedPayload {
        sender_name,
        receiver_name,
        sender_addr,
        receiver_addr,
        html: payload.html.clone(),
        replacements: payload.replacements.clone(),
    })
}
