//! Email Address

use std::fmt;

use thiserror::Error;
use tracing::debug;

use EmailAddressError::*;

/// Maximum length of a whole address, in characters
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum length of the part before the `@`
pub const USERNAME_MAX_LENGTH: usize = 64;

/// Maximum length of the part after the `@`
pub const DOMAIN_MAX_LENGTH: usize = 251;

/// Top-level domains an address may end in
pub const VALID_TLDS: [&str; 3] = [".com", ".net", ".org"];

/// An error that can occur when creating an email address.
///
/// Each variant is one rule; rules are checked in declaration order and the
/// first one violated is reported.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailAddressError {
    /// The whole address is too long
    #[error("total length should be no longer than 254 characters")]
    TooLong,

    /// The address has no `@`, or more than one
    #[error("must contain a single '@' character")]
    InvalidAtSign,

    /// The username part is too long
    #[error("username part should be no longer than 64 characters")]
    UsernameTooLong,

    /// The domain part is too long
    #[error("domain part should be no longer than 251 characters")]
    DomainTooLong,

    /// The address contains a character other than an ASCII letter, digit, `@`, `-` or `.`
    #[error("contains invalid characters")]
    InvalidCharacters,

    /// The domain does not end in an accepted top-level domain
    #[error("domain must end in '.com', '.net', or '.org'")]
    UnsupportedTld,

    /// The username starts or ends with `-` or `.`
    #[error("hyphens or dots cannot be first or last characters of username")]
    InvalidUsernameEdge,

    /// The domain has a dot outside of its top-level domain
    #[error("dots (.) can only appear in TLD part of the domain")]
    InvalidDomainDots,
}

/// An email address
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address
    pub fn new(raw: &str) -> Result<Self, EmailAddressError> {
        let trimmed = raw.trim();

        check(trimmed).map_err(|err| {
            debug!("rejected email address {:?}: {}", trimmed, err);
            err
        })?;

        Ok(Self(trimmed.to_string()))
    }

    /// The part before the `@`
    pub fn username(&self) -> &str {
        self.split().0
    }

    /// The part after the `@`
    pub fn domain(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        self.0.split_once('@').unwrap_or((self.0.as_str(), ""))
    }
}

fn check(email: &str) -> Result<(), EmailAddressError> {
    if email.chars().count() > EMAIL_MAX_LENGTH {
        return Err(TooLong);
    }

    if email.matches('@').count() != 1 {
        return Err(InvalidAtSign);
    }

    let (username, domain) = email.split_once('@').ok_or(InvalidAtSign)?;

    if username.chars().count() > USERNAME_MAX_LENGTH {
        return Err(UsernameTooLong);
    }

    if domain.chars().count() > DOMAIN_MAX_LENGTH {
        return Err(DomainTooLong);
    }

    if !email
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '-' | '.'))
    {
        return Err(InvalidCharacters);
    }

    let has_valid_tld = VALID_TLDS.iter().any(|tld| domain.ends_with(tld));

    if !has_valid_tld {
        return Err(UnsupportedTld);
    }

    if [username.chars().next(), username.chars().last()]
        .into_iter()
        .flatten()
        .any(|c| c == '-' || c == '.')
    {
        return Err(InvalidUsernameEdge);
    }

    let dots = domain.matches('.').count();

    if dots > 1 || (dots == 1 && !has_valid_tld) {
        return Err(InvalidDomainDots);
    }

    Ok(())
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}
