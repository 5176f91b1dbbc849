//! Tenant identity.

use crate::constants::DEFAULT_CLIENT_ID;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A short token identifying which client's content and configuration to serve.
///
/// Derived once per request from the hostname and immutable afterwards. Any
/// hostname that cannot be attributed to a tenant maps to [`ClientId::default_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// The fail-open tenant: `"default"`.
    #[must_use]
    pub fn default_id() -> Self {
        Self(DEFAULT_CLIENT_ID.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_CLIENT_ID
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::default_id()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientId {
    fn from(slug: &str) -> Self {
        Self(slug.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_slug_is_stable() {
        assert_eq!(ClientId::default_id().as_str(), "default");
        assert!(ClientId::default().is_default());
        assert!(!ClientId::from("acme").is_default());
    }
}
