//! Infrastructure adapters

pub mod http;
