use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// # Envelope
/// Opaque key value message used to hand serialized state across a process or component
/// boundary. Values are always plain strings, nested structures travel as JSON text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    extras: HashMap<String, String>,
}

impl Envelope {
    /// Creates an empty [Envelope]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value
    pub fn put_extra(&mut self, key: &str, value: String) {
        self.extras.insert(key.to_string(), value);
    }

    /// Gets the value stored under `key`
    pub fn get_extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }

    /// Checks if there is a value stored under `key`
    pub fn has_extra(&self, key: &str) -> bool {
        self.extras.contains_key(key)
    }
}
