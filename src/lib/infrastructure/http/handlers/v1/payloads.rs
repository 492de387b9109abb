//! Payload handlers

pub mod validate;
