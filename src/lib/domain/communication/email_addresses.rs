//! Email addresses module.

mod email_address;

pub use email_address::{
    EmailAddress, EmailAddressError, DOMAIN_MAX_LENGTH, EMAIL_MAX_LENGTH, USERNAME_MAX_LENGTH,
    VALID_TLDS,
};
