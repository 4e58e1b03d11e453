//! Normalized user identity produced by a successful login.

use std::collections::HashMap;

use serde::Serialize;

/// A logged-in user as seen by the hosting application.
///
/// Immutable once built; the caller owns it after a pass returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    urn: String,
    properties: HashMap<String, String>,
}

impl Identity {
    /// Create an identity from its URN and provider properties.
    pub fn new(urn: String, properties: HashMap<String, String>) -> Self {
        Self { urn, properties }
    }

    /// Unique URN-style identifier, e.g. `urn:github:42`.
    pub fn urn(&self) -> &str {
        &self.urn
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    /// Look up a single property by name.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}
