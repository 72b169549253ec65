use std::collections::BTreeSet;

use super::{GroupBehavior, GroupKind, GroupRecord};
use crate::components::{Cat, CatStatus};
use crate::error::GroupError;
use crate::ids::CatId;
use crate::registry::CatRegistry;

pub const DEFAULT_AFTERLIFE_NAME: &str = "Afterlife";

/// Cats who died an ordinary death. Dark Forest cats are not members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Afterlife {
    id: String,
    name: String,
    members: BTreeSet<CatId>,
}

impl Afterlife {
    /// Seeded with every dead cat in `registry` not bound to the Dark Forest.
    pub fn from_live_state(id: impl Into<String>, registry: &CatRegistry, name: impl Into<String>) -> Self {
        let members = registry
            .dead()
            .filter(|cat| !cat.dark_forest)
            .map(|cat| cat.id().clone())
            .collect();
        Self {
            id: id.into(),
            name: name.into(),
            members,
        }
    }

    pub fn from_persisted_record(record: GroupRecord) -> Result<Self, GroupError> {
        record.expect_kind(GroupKind::Afterlife)?;
        if !record.dead {
            return Err(GroupError::InconsistentRecord {
                id: record.id,
                reason: "afterlife record is not flagged dead",
            });
        }
        let name = if record.name.is_empty() {
            DEFAULT_AFTERLIFE_NAME.to_string()
        } else {
            record.name
        };
        Ok(Self {
            id: record.id,
            name,
            members: record.members.into_iter().collect(),
        })
    }

    pub fn to_record(&self) -> GroupRecord {
        let mut record = GroupRecord::new(GroupKind::Afterlife, &self.id, true, &self.name);
        record.members = self.members.iter().cloned().collect();
        record
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl GroupBehavior for Afterlife {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn holds_dead(&self) -> bool {
        true
    }

    fn members(&self) -> &BTreeSet<CatId> {
        &self.members
    }

    fn members_mut(&mut self) -> &mut BTreeSet<CatId> {
        &mut self.members
    }

    fn on_cat_status_change(&mut self, _cat: &Cat, _old_status: CatStatus) -> Result<(), GroupError> {
        Err(GroupError::NotImplemented {
            group: self.id.clone(),
            operation: "on_cat_status_change",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_live_state_seeds_ordinary_dead() {
        let mut rng = StdRng::seed_from_u64(8);
        let alive = Cat::random(&mut rng);
        let mut dead = Cat::random(&mut rng);
        dead.die();
        let mut wicked = Cat::random(&mut rng);
        wicked.dark_forest = true;
        wicked.die();
        let dead_id = dead.id().clone();
        let registry: CatRegistry = vec![alive, dead, wicked].into_iter().collect();

        let afterlife = Afterlife::from_live_state("sc", &registry, "StarClan");
        assert_eq!(afterlife.members().len(), 1);
        assert!(afterlife.contains(&dead_id));
        assert_eq!(afterlife.name(), "StarClan");
    }

    #[test]
    fn test_rename() {
        let mut afterlife = Afterlife::from_live_state("sc", &CatRegistry::new(), DEFAULT_AFTERLIFE_NAME);
        assert_eq!(afterlife.name(), "Afterlife");
        afterlife.set_name("Silverpelt");
        assert_eq!(afterlife.name(), "Silverpelt");
    }

    #[test]
    fn test_record_must_be_dead() {
        let record = GroupRecord::new(GroupKind::Afterlife, "sc", false, "StarClan");
        assert!(matches!(
            Afterlife::from_persisted_record(record),
            Err(GroupError::InconsistentRecord { .. })
        ));
    }

    #[test]
    fn test_record_kind_checked() {
        let record = GroupRecord::new(GroupKind::Outsiders, "o", false, "Loners");
        assert_eq!(
            Afterlife::from_persisted_record(record),
            Err(GroupError::KindMismatch {
                expected: GroupKind::Afterlife,
                found: GroupKind::Outsiders
            })
        );
    }

    #[test]
    fn test_status_change_not_implemented() {
        let mut rng = StdRng::seed_from_u64(9);
        let cat = Cat::random(&mut rng);
        let mut afterlife = Afterlife::from_live_state("sc", &CatRegistry::new(), "StarClan");
        assert_eq!(
            afterlife.on_cat_status_change(&cat, CatStatus::Elder),
            Err(GroupError::NotImplemented {
                group: "sc".to_string(),
                operation: "on_cat_status_change"
            })
        );
    }
}
