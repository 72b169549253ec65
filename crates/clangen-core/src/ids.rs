use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique, immutable identifier of a cat.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CatId(String);

impl CatId {
    /// Fresh id, unique across runs and reloaded saves.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CatId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CatId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_unique_and_non_empty() {
        let ids: HashSet<CatId> = (0..500).map(|_| CatId::generate()).collect();
        assert_eq!(ids.len(), 500);
        assert!(ids.iter().all(|id| !id.as_str().is_empty()));
    }

    #[test]
    fn test_from_str_display() {
        let id = CatId::from("42");
        assert_eq!(id.to_string(), "42");
    }
}
