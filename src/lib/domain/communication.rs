//! Outbound email communication: the fields of a payload and their rules.

pub mod display_names;
pub mod email_addresses;
pub mod payloads;
pub mod replacements;

mod party;

pub use party::Party;
