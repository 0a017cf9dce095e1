//! Cart session key.
//!
//! The session identifier is generated by the browser and stored in local
//! storage; the server never issues one. It is an opaque bearer key for a
//! cart, not an authenticated session.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque client-generated identifier that owns a cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(feature = "postgres", sqlx(transparent))]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a raw session string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the session key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_round_trips_as_plain_string() {
        let id = SessionId::new("cart_abc123");
        assert_eq!(id.as_str(), "cart_abc123");
        assert_eq!(id.to_string(), "cart_abc123");

        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"cart_abc123\"");
    }
}
