use std::collections::BTreeSet;

use super::{GroupBehavior, GroupKind, GroupRecord};
use crate::components::{Cat, CatStatus};
use crate::error::GroupError;
use crate::ids::CatId;
use crate::registry::CatRegistry;

pub const DEFAULT_CLAN_SUFFIX: &str = "Clan";

/// A rival clan, named `{prefix}{suffix}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherClan {
    id: String,
    pub prefix: String,
    pub suffix: String,
    pub leader: Option<CatId>,
    pub deputy: Option<CatId>,
    pub medicine_cats: Vec<CatId>,
    members: BTreeSet<CatId>,
}

impl OtherClan {
    pub fn new(id: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prefix: prefix.into(),
            suffix: DEFAULT_CLAN_SUFFIX.to_string(),
            leader: None,
            deputy: None,
            medicine_cats: Vec::new(),
            members: BTreeSet::new(),
        }
    }

    /// Build from the live registry. Role ids the registry does not know
    /// are dropped; the rest become members.
    pub fn from_live_state(
        id: impl Into<String>,
        registry: &CatRegistry,
        prefix: impl Into<String>,
        leader: Option<CatId>,
        deputy: Option<CatId>,
        medicine_cats: Vec<CatId>,
    ) -> Self {
        let mut clan = Self::new(id, prefix);
        clan.leader = leader.filter(|id| registry.contains(id));
        clan.deputy = deputy.filter(|id| registry.contains(id));
        clan.medicine_cats = medicine_cats
            .into_iter()
            .filter(|id| registry.contains(id))
            .collect();

        let roles: Vec<CatId> = clan
            .leader
            .iter()
            .chain(clan.deputy.iter())
            .chain(clan.medicine_cats.iter())
            .cloned()
            .collect();
        clan.members.extend(roles);
        clan
    }

    pub fn from_persisted_record(record: GroupRecord) -> Result<Self, GroupError> {
        record.expect_kind(GroupKind::OtherClan)?;
        if record.dead {
            return Err(GroupError::InconsistentRecord {
                id: record.id,
                reason: "other clan record is flagged dead",
            });
        }
        if record.name.is_empty() {
            return Err(GroupError::InconsistentRecord {
                id: record.id,
                reason: "other clan record has no prefix",
            });
        }
        Ok(Self {
            id: record.id,
            prefix: record.name,
            suffix: record
                .suffix
                .unwrap_or_else(|| DEFAULT_CLAN_SUFFIX.to_string()),
            leader: record.leader,
            deputy: record.deputy,
            medicine_cats: record.medicine_cats,
            members: record.members.into_iter().collect(),
        })
    }

    pub fn to_record(&self) -> GroupRecord {
        let mut record = GroupRecord::new(GroupKind::OtherClan, &self.id, false, &self.prefix);
        record.suffix = Some(self.suffix.clone());
        record.leader = self.leader.clone();
        record.deputy = self.deputy.clone();
        record.medicine_cats = self.medicine_cats.clone();
        record.members = self.members.iter().cloned().collect();
        record
    }
}

impl GroupBehavior for OtherClan {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> String {
        format!("{}{}", self.prefix, self.suffix)
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

    /// Also clears any role the cat held.
    fn remove_member(&mut self, id: &CatId) -> bool {
        if self.leader.as_ref() == Some(id) {
            self.leader = None;
        }
        if self.deputy.as_ref() == Some(id) {
            self.deputy = None;
        }
        self.medicine_cats.retain(|m| m != id);
        self.members.remove(id)
    }

    // TODO: decide whether a rival leader or deputy losing their rank
    // should clear `leader`/`deputy` here.
    fn on_cat_status_change(&mut self, _cat: &Cat, _old_status: CatStatus) -> Result<(), GroupError> {
        Err(GroupError::NotImplemented {
            group: self.id.clone(),
            operation: "on_cat_status_change",
        })
    }
}
