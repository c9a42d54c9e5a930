//! Opaque identity tokens naming provenance nodes, and the sources that mint them.

pub mod source;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use source::{IdentitySource, RandomIdentitySource, SequentialIdentitySource};

/// Opaque unique token naming one provenance node.
///
/// Identities are never interpreted: they are compared for equality and
/// embedded in derivation records, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(Uuid);

impl Identity {
    /// Wrap an existing UUID.
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Build an identity from a raw 128-bit value.
    pub fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for Identity {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<Identity> for Uuid {
    fn from(id: Identity) -> Self {
        id.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_hyphenated_uuid() {
        let id = Identity::from_u128(1);
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000001");
    }

    #[test]
    fn serializes_transparently() {
        let id = Identity::from_u128(0xff);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-0000000000ff\"");
    }
}
