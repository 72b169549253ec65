//! Groups of cats living outside the home clan.
//!
//! A [`Group`] is one of three variants, each holding its own fields and
//! member set. They share one capability interface, [`GroupBehavior`]:
//! a display name and a hook called when a member's status changes.
//!
//! Groups do not own cats. They store member ids and borrow the
//! [`CatRegistry`] when they need the cats themselves.

mod afterlife;
mod other_clan;
mod outsiders;

pub use afterlife::Afterlife;
pub use other_clan::OtherClan;
pub use outsiders::Outsiders;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::components::{Cat, CatStatus};
use crate::error::GroupError;
use crate::ids::CatId;
use crate::registry::CatRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    Afterlife,
    Outsiders,
    OtherClan,
}

/// Capabilities shared by every group variant.
pub trait GroupBehavior {
    fn id(&self) -> &str;

    /// Display name, derived from current fields.
    fn name(&self) -> String;

    /// Whether this group holds dead cats.
    fn holds_dead(&self) -> bool;

    fn members(&self) -> &BTreeSet<CatId>;

    fn members_mut(&mut self) -> &mut BTreeSet<CatId>;

    /// Called after `cat`'s status changed from `old_status` while it is a
    /// member. Groups that have no rule for this yet return an error.
    fn on_cat_status_change(&mut self, _cat: &Cat, _old_status: CatStatus) -> Result<(), GroupError> {
        Ok(())
    }

    fn contains(&self, id: &CatId) -> bool {
        self.members().contains(id)
    }

    /// Returns false if the cat was already a member.
    fn add_member(&mut self, id: CatId) -> bool {
        self.members_mut().insert(id)
    }

    fn remove_member(&mut self, id: &CatId) -> bool {
        self.members_mut().remove(id)
    }

    /// Members found in `registry` that are still alive.
    fn living_members<'r>(&self, registry: &'r CatRegistry) -> Vec<&'r Cat> {
        self.members()
            .iter()
            .filter_map(|id| registry.get(id))
            .filter(|cat| !cat.is_dead())
            .collect()
    }
}

/// Persisted form of a group, rebuildable without the cat registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub kind: GroupKind,
    pub id: String,
    pub dead: bool,
    /// Display name; for an other clan this is the prefix.
    pub name: String,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub leader: Option<CatId>,
    #[serde(default)]
    pub deputy: Option<CatId>,
    #[serde(default)]
    pub medicine_cats: Vec<CatId>,
    #[serde(default)]
    pub members: Vec<CatId>,
}

impl GroupRecord {
    /// Minimal record: identifier, dead flag and display name.
    pub fn new(kind: GroupKind, id: impl Into<String>, dead: bool, name: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            dead,
            name: name.into(),
            suffix: None,
            leader: None,
            deputy: None,
            medicine_cats: Vec::new(),
            members: Vec::new(),
        }
    }

    pub(crate) fn expect_kind(&self, expected: GroupKind) -> Result<(), GroupError> {
        if self.kind != expected {
            return Err(GroupError::KindMismatch {
                expected,
                found: self.kind,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    Afterlife(Afterlife),
    Outsiders(Outsiders),
    OtherClan(OtherClan),
}

impl Group {
    /// Build a group from the live simulation. `name` is the display name,
    /// or the prefix for an other clan.
    pub fn from_live_state(
        kind: GroupKind,
        id: impl Into<String>,
        registry: &CatRegistry,
        name: impl Into<String>,
    ) -> Self {
        match kind {
            GroupKind::Afterlife => Afterlife::from_live_state(id, registry, name).into(),
            GroupKind::Outsiders => Outsiders::from_live_state(id, registry, name).into(),
            GroupKind::OtherClan => {
                OtherClan::from_live_state(id, registry, name, None, None, Vec::new()).into()
            }
        }
    }

    /// Rebuild a group from its saved record.
    pub fn from_persisted_record(record: GroupRecord) -> Result<Self, GroupError> {
        Ok(match record.kind {
            GroupKind::Afterlife => Afterlife::from_persisted_record(record)?.into(),
            GroupKind::Outsiders => Outsiders::from_persisted_record(record)?.into(),
            GroupKind::OtherClan => OtherClan::from_persisted_record(record)?.into(),
        })
    }

    pub fn to_record(&self) -> GroupRecord {
        match self {
            Group::Afterlife(g) => g.to_record(),
            Group::Outsiders(g) => g.to_record(),
            Group::OtherClan(g) => g.to_record(),
        }
    }

    pub fn kind(&self) -> GroupKind {
        match self {
            Group::Afterlife(_) => GroupKind::Afterlife,
            Group::Outsiders(_) => GroupKind::Outsiders,
            Group::OtherClan(_) => GroupKind::OtherClan,
        }
    }

    fn behavior(&self) -> &dyn GroupBehavior {
        match self {
            Group::Afterlife(g) => g,
            Group::Outsiders(g) => g,
            Group::OtherClan(g) => g,
        }
    }

    fn behavior_mut(&mut self) -> &mut dyn GroupBehavior {
        match self {
            Group::Afterlife(g) => g,
            Group::Outsiders(g) => g,
            Group::OtherClan(g) => g,
        }
    }
}

impl GroupBehavior for Group {
    fn id(&self) -> &str {
        self.behavior().id()
    }

    fn name(&self) -> String {
        self.behavior().name()
    }

    fn holds_dead(&self) -> bool {
        self.behavior().holds_dead()
    }

    fn members(&self) -> &BTreeSet<CatId> {
        self.behavior().members()
    }

    fn members_mut(&mut self) -> &mut BTreeSet<CatId> {
        self.behavior_mut().members_mut()
    }

    fn on_cat_status_change(&mut self, cat: &Cat, old_status: CatStatus) -> Result<(), GroupError> {
        self.behavior_mut().on_cat_status_change(cat, old_status)
    }

    fn add_member(&mut self, id: CatId) -> bool {
        self.behavior_mut().add_member(id)
    }

    fn remove_member(&mut self, id: &CatId) -> bool {
        self.behavior_mut().remove_member(id)
    }
}

impl From<Afterlife> for Group {
    fn from(g: Afterlife) -> Self {
        Group::Afterlife(g)
    }
}

impl From<Outsiders> for Group {
    fn from(g: Outsiders) -> Self {
        Group::Outsiders(g)
    }
}

impl From<OtherClan> for Group {
    fn from(g: OtherClan) -> Self {
        Group::OtherClan(g)
    }
}
