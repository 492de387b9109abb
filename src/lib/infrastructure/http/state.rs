//! Application state module

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};

use crate::domain::communication::payloads::PayloadValidator;

/// Global application state
#[derive(Clone)]
pub struct AppState<V: PayloadValidator> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// Payload validation service
    pub validator: Arc<V>,
}

impl<V> AppState<V>
where
    V: PayloadValidator,
{
    /// Create a new application state
    pub fn new(validator: V) -> Self {
        Self {
            start_time: Utc::now(),
            validator: Arc::new(validator),
        }
    }
}

impl<V> fmt::Debug for AppState<V>
where
    V: PayloadValidator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("validator", &"PayloadValidator")
            .finish()
    }
}

#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use crate::domain::communication::payloads::tests::MockPayloadValidator;

    use super::AppState;

    pub fn test_state(validator: Option<MockPayloadValidator>) -> AppState<MockPayloadValidator> {
        let validator = validator
            .map(Arc::new)
            .unwrap_or_else(|| Arc::new(MockPayloadValidator::new()));

        AppState {
            start_time: Utc::now(),
            validator,
        }
    }
}
