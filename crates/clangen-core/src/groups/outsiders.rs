use std::collections::BTreeSet;

use super::{GroupBehavior, GroupKind, GroupRecord};
use crate::error::GroupError;
use crate::ids::CatId;
use crate::registry::CatRegistry;

pub const DEFAULT_OUTSIDERS_ID: &str = "outsiders";
pub const DEFAULT_OUTSIDERS_NAME: &str = "Cats Outside the Clan";

/// Living cats with no tie to the home clan: loners, rogues, kittypets.
///
/// Status changes need no reaction here, so the default hook applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outsiders {
    id: String,
    name: String,
    members: BTreeSet<CatId>,
}

impl Outsiders {
    /// Seeded with every living cat in `registry` flagged as outside.
    pub fn from_live_state(id: impl Into<String>, registry: &CatRegistry, name: impl Into<String>) -> Self {
        let members = registry
            .living()
            .filter(|cat| cat.outside)
            .map(|cat| cat.id().clone())
            .collect();
        Self {
            id: id.into(),
            name: name.into(),
            members,
        }
    }

    pub fn from_persisted_record(record: GroupRecord) -> Result<Self, GroupError> {
        record.expect_kind(GroupKind::Outsiders)?;
        if record.dead {
            return Err(GroupError::InconsistentRecord {
                id: record.id,
                reason: "outsiders record is flagged dead",
            });
        }
        let id = if record.id.is_empty() {
            DEFAULT_OUTSIDERS_ID.to_string()
        } else {
            record.id
        };
        let name = if record.name.is_empty() {
            DEFAULT_OUTSIDERS_NAME.to_string()
        } else {
            record.name
        };
        Ok(Self {
            id,
            name,
            members: record.members.into_iter().collect(),
        })
    }

    pub fn to_record(&self) -> GroupRecord {
        let mut record = GroupRecord::new(GroupKind::Outsiders, &self.id, false, &self.name);
        record.members = self.members.iter().cloned().collect();
        record
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl GroupBehavior for Outsiders {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn holds_dead(&self) -> bool {
        false
    }

    fn members(&self) -> &BTreeSet<CatId> {
        &self.members
    }

    fn members_mut(&mut self) -> &mut BTreeSet<CatId> {
        &mut self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Cat, CatStatus};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_live_state_seeds_living_outside() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut loner = Cat::random(&mut rng);
        loner.outside = true;
        let mut dead_loner = Cat::random(&mut rng);
        dead_loner.outside = true;
        dead_loner.die();
        let clan_cat = Cat::random(&mut rng);
        let loner_id = loner.id().clone();
        let registry: CatRegistry = vec![loner, dead_loner, clan_cat].into_iter().collect();

        let outsiders = Outsiders::from_live_state(DEFAULT_OUTSIDERS_ID, &registry, DEFAULT_OUTSIDERS_NAME);
        assert_eq!(outsiders.members().len(), 1);
        assert!(outsiders.contains(&loner_id));
        assert_eq!(outsiders.name(), "Cats Outside the Clan");
    }

    #[test]
    fn test_status_change_is_noop() {
        let mut rng = StdRng::seed_from_u64(11);
        let cat = Cat::random(&mut rng);
        let mut outsiders = Outsiders::from_live_state("o", &CatRegistry::new(), "Loners");
        assert_eq!(outsiders.on_cat_status_change(&cat, CatStatus::Rogue), Ok(()));
    }

    #[test]
    fn test_record_defaults_fill_blanks() {
        let record = GroupRecord::new(GroupKind::Outsiders, "", false, "");
        let outsiders = Outsiders::from_persisted_record(record).unwrap();
        assert_eq!(outsiders.id(), DEFAULT_OUTSIDERS_ID);
        assert_eq!(outsiders.name(), DEFAULT_OUTSIDERS_NAME);
    }

    #[test]
    fn test_record_must_be_alive() {
        let record = GroupRecord::new(GroupKind::Outsiders, "o", true, "Loners");
        assert!(Outsiders::from_persisted_record(record).is_err());
    }
}
