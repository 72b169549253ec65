//! Registry of every cat the simulation knows about, living or dead.
//!
//! The simulation owns the registry. Groups never hold it; they borrow it
//! read-only when they need to look a member up.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::components::Cat;
use crate::ids::CatId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatRegistry {
    cats: BTreeMap<CatId, Cat>,
}

impl CatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cat, returning its id. A cat with the same id is replaced.
    pub fn insert(&mut self, cat: Cat) -> CatId {
        let id = cat.id().clone();
        self.cats.insert(id.clone(), cat);
        id
    }

    pub fn remove(&mut self, id: &CatId) -> Option<Cat> {
        self.cats.remove(id)
    }

    pub fn get(&self, id: &CatId) -> Option<&Cat> {
        self.cats.get(id)
    }

    pub fn get_mut(&mut self, id: &CatId) -> Option<&mut Cat> {
        self.cats.get_mut(id)
    }

    pub fn contains(&self, id: &CatId) -> bool {
        self.cats.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.cats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cats.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cat> {
        self.cats.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cat> {
        self.cats.values_mut()
    }

    pub fn living(&self) -> impl Iterator<Item = &Cat> {
        self.iter().filter(|c| !c.is_dead())
    }

    pub fn dead(&self) -> impl Iterator<Item = &Cat> {
        self.iter().filter(|c| c.is_dead())
    }
}

impl FromIterator<Cat> for CatRegistry {
    fn from_iter<T: IntoIterator<Item = Cat>>(iter: T) -> Self {
        let mut registry = Self::new();
        for cat in iter {
            registry.insert(cat);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_insert_get_remove() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut registry = CatRegistry::new();
        let cat = Cat::random(&mut rng);
        let id = registry.insert(cat.clone());

        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&id));
        assert_eq!(registry.get(&id), Some(&cat));
        assert_eq!(registry.remove(&id), Some(cat));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_living_and_dead_partition() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut registry: CatRegistry = (0..5).map(|_| Cat::random(&mut rng)).collect();
        let victim = registry.iter().next().map(|c| c.id().clone()).unwrap();
        registry.get_mut(&victim).unwrap().die();

        assert_eq!(registry.living().count(), 4);
        assert_eq!(registry.dead().count(), 1);
        assert_eq!(registry.dead().next().unwrap().id(), &victim);
    }
}
