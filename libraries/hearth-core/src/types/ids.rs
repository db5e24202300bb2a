/// ID types for Hearth entities
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Episode identifier
///
/// Assigned by the remote catalog; opaque to the core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeId(String);

impl EpisodeId {
    /// Create a new episode ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EpisodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EpisodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Locally cached listener identity
///
/// There is no account model: the id is generated on first launch, cached in
/// local storage and never validated against a server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListenerId(String);

impl ListenerId {
    /// Wrap a previously cached ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random listener ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_id_serializes_transparently() {
        let id = EpisodeId::new("ep-42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ep-42\"");
        let back: EpisodeId = serde_json::from_str("\"ep-42\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn generated_listener_ids_are_distinct() {
        let a = ListenerId::generate();
        let b = ListenerId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }
}
