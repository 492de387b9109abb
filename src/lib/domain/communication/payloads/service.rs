//! Payload validation service

#[cfg(test)]
use mockall::mock;
use tracing::{debug, warn};

use super::{validate_email_payload, EmailPayload, PayloadError, ValidatedPayload};

/// Payload validation service
pub trait PayloadValidator: Clone + Send + Sync + 'static {
    /// Validates an outbound email payload.
    ///
    /// # Arguments
    /// * `payload` - The payload to validate.
    ///
    /// # Returns
    /// - [`Ok`] with the [`ValidatedPayload`] if every field passed.
    /// - [`Err`] containing the first [`PayloadError`] found otherwise.
    fn validate(&self, payload: &EmailPayload) -> Result<ValidatedPayload, PayloadError>;
}

#[cfg(test)]
mock! {
    pub PayloadValidator {}

    impl Clone for PayloadValidator {
        fn clone(&self) -> Self;
    }

    impl PayloadValidator for PayloadValidator {
        fn validate(&self, payload: &EmailPayload) -> Result<ValidatedPayload, PayloadError>;
    }
}

/// Payload validation service implementation
#[derive(Debug, Clone, Default)]
pub struct PayloadValidatorImpl;

impl PayloadValidatorImpl {
    /// Creates a new payload validation service.
    pub fn new() -> Self {
        Self
    }
}

impl PayloadValidator for PayloadValidatorImpl {
    fn validate(&self, payload: &EmailPayload) -> Result<ValidatedPayload, PayloadError> {
        match validate_email_payload(payload) {
            Ok(validated) => {
                debug!(
                    replacements = validated.replacements.len(),
                    "payload accepted"
                );

                Ok(validated)
            }
            Err(err) => {
                warn!(kind = err.kind(), "payload rejected: {}", err);

                Err(err)
            }
        }
    }
}
