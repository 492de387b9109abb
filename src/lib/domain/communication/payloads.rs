//! Email payloads module.

mod errors;
mod payload;
mod service;

pub use errors::PayloadError;
pub use payload::{validate_email_payload, EmailPayload, ValidatedPayload};
pub use service::{PayloadValidator, PayloadValidatorImpl};
