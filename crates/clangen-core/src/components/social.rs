//! Relationship value object held by each cat for every cat it knows.

use serde::{Deserialize, Serialize};

use crate::ids::CatId;

/// How one cat feels about another. Values run 0–100.
///
/// Relationships are directional: `cat_from`'s view of `cat_to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub cat_from: CatId,
    pub cat_to: CatId,
    pub mates: bool,
    pub family: bool,
    pub romantic_love: i32,
    pub platonic_like: i32,
    pub dislike: i32,
    pub admiration: i32,
    pub comfortable: i32,
    pub jealousy: i32,
    pub trust: i32,
}

impl Relationship {
    pub fn new(cat_from: CatId, cat_to: CatId) -> Self {
        Self {
            cat_from,
            cat_to,
            mates: false,
            family: false,
            romantic_love: 0,
            platonic_like: 0,
            dislike: 0,
            admiration: 0,
            comfortable: 0,
            jealousy: 0,
            trust: 0,
        }
    }

    /// Starting point for kin: some liking, comfort and trust.
    pub fn family(cat_from: CatId, cat_to: CatId) -> Self {
        Self {
            family: true,
            platonic_like: 20,
            comfortable: 20,
            trust: 10,
            ..Self::new(cat_from, cat_to)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_neutral() {
        let rel = Relationship::new(CatId::from("1"), CatId::from("2"));
        assert!(!rel.mates && !rel.family);
        assert_eq!(rel.platonic_like, 0);
        assert_eq!(rel.cat_to, CatId::from("2"));
    }

    #[test]
    fn test_family_starts_warm() {
        let rel = Relationship::family(CatId::from("1"), CatId::from("2"));
        assert!(rel.family);
        assert!(rel.platonic_like > 0);
        assert!(rel.trust > 0);
    }
}
