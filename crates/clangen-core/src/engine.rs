//! Simulation context - owns the cat registry and every group, and applies
//! moon-by-moon changes across them.

use std::collections::BTreeSet;
use std::io::{Read, Write};

use crate::components::{Cat, CatStatus};
use clangen_logic::clan_config::ClanConfig;
use rand::Rng;

use crate::error::{CatError, GenerationError, SimulationError};
use crate::generation;
use crate::groups::{Afterlife, Group, GroupBehavior, GroupKind, OtherClan, Outsiders};
use crate::ids::CatId;
use crate::persistence::{self, SaveError};
use crate::registry::CatRegistry;

/// What happened during one call to [`ClanSimulation::advance_moon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoonReport {
    /// Moon number after advancing.
    pub moon: u32,
    /// Living cats that aged.
    pub aged: usize,
}

/// The home clan and everything around it.
#[derive(Debug, Clone)]
pub struct ClanSimulation {
    /// Every known cat, living or dead, in any group.
    pub registry: CatRegistry,
    pub clan_prefix: String,
    /// Ids of the cats living in the home clan.
    pub(crate) clan_members: BTreeSet<CatId>,
    pub groups: Vec<Group>,
    /// Moons elapsed since the clan was founded.
    pub moon: u32,
}

impl ClanSimulation {
    /// An empty clan with no cats and no groups.
    pub fn new(clan_prefix: impl Into<String>) -> Self {
        Self {
            registry: CatRegistry::new(),
            clan_prefix: clan_prefix.into(),
            clan_members: BTreeSet::new(),
            groups: Vec::new(),
            moon: 0,
        }
    }

    /// Generate a starting clan and its neighbours from `config`.
    pub fn generate(config: &ClanConfig, rng: &mut impl Rng) -> Result<Self, GenerationError> {
        generation::generate_clan(config, rng)
    }

    pub fn clan_name(&self) -> String {
        format!("{}Clan", self.clan_prefix)
    }

    pub fn clan_members(&self) -> &BTreeSet<CatId> {
        &self.clan_members
    }

    /// Living cats of the home clan.
    pub fn clan_cats(&self) -> impl Iterator<Item = &Cat> {
        self.clan_members.iter().filter_map(|id| self.registry.get(id))
    }

    /// Register a cat as a member of the home clan.
    pub fn add_clan_cat(&mut self, cat: Cat) -> CatId {
        let id = self.registry.insert(cat);
        self.clan_members.insert(id.clone());
        id
    }

    pub fn add_group(&mut self, group: impl Into<Group>) {
        self.groups.push(group.into());
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id() == id)
    }

    pub fn afterlife(&self) -> Option<&Afterlife> {
        self.groups.iter().find_map(|g| match g {
            Group::Afterlife(a) => Some(a),
            _ => None,
        })
    }

    pub fn outsiders(&self) -> Option<&Outsiders> {
        self.groups.iter().find_map(|g| match g {
            Group::Outsiders(o) => Some(o),
            _ => None,
        })
    }

    pub fn other_clans(&self) -> impl Iterator<Item = &OtherClan> {
        self.groups.iter().filter_map(|g| match g {
            Group::OtherClan(c) => Some(c),
            _ => None,
        })
    }

    fn first_group_mut(&mut self, kind: GroupKind) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.kind() == kind)
    }

    /// Age every living cat by one moon.
    pub fn advance_moon(&mut self) -> MoonReport {
        self.moon += 1;
        let mut aged = 0;
        for cat in self.registry.iter_mut().filter(|c| !c.is_dead()) {
            cat.one_moon();
            aged += 1;
        }
        log::info!("Moon {}: {} cats aged", self.moon, aged);
        MoonReport {
            moon: self.moon,
            aged,
        }
    }

    /// Take a life from a cat. Once it is truly dead it leaves the home
    /// clan and every living group, and joins the afterlife unless it is
    /// bound to the Dark Forest.
    ///
    /// Returns the life-loss event text (empty on final death).
    pub fn kill_cat(&mut self, id: &CatId) -> Result<String, CatError> {
        let cat = self
            .registry
            .get_mut(id)
            .ok_or_else(|| CatError::UnknownCat(id.clone()))?;
        if cat.is_dead() {
            log::warn!("{} is already dead", cat.full_name());
            return Ok(String::new());
        }

        let text = cat.die();
        if !cat.is_dead() {
            log::info!("{}", text);
            return Ok(text);
        }

        let name = cat.full_name();
        let dark_forest = cat.dark_forest;
        self.clan_members.remove(id);
        for group in self.groups.iter_mut().filter(|g| !g.holds_dead()) {
            group.remove_member(id);
        }
        if dark_forest {
            log::info!("{} has died and walks the Dark Forest", name);
        } else if let Some(afterlife) = self.first_group_mut(GroupKind::Afterlife) {
            log::info!("{} has died and joined {}", name, afterlife.name());
            afterlife.add_member(id.clone());
        } else {
            log::warn!("{} has died but there is no afterlife to join", name);
        }
        Ok(text)
    }

    /// Replace a cat's status, then tell every group holding the cat.
    ///
    /// The new status stands even when a group reports an error; the
    /// error means that group could not react to it. Every group is
    /// notified and the first error is returned.
    pub fn change_status(&mut self, id: &CatId, status: CatStatus) -> Result<CatStatus, SimulationError> {
        let cat = self
            .registry
            .get_mut(id)
            .ok_or_else(|| CatError::UnknownCat(id.clone()))?;
        let old = cat.set_status(status);
        log::debug!("{} changed status: {} -> {}", cat.full_name(), old, status);

        let cat: &Cat = cat;
        let mut first_error = None;
        for group in self.groups.iter_mut().filter(|g| g.contains(id)) {
            if let Err(e) = group.on_cat_status_change(cat, old) {
                log::warn!("{} could not react to {}: {}", group.name(), cat.full_name(), e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(old),
        }
    }

    /// Move a living cat out of the home clan or a rival clan and into the
    /// outsiders group.
    pub fn send_outside(&mut self, id: &CatId) -> Result<(), CatError> {
        let cat = self
            .registry
            .get_mut(id)
            .ok_or_else(|| CatError::UnknownCat(id.clone()))?;
        if cat.is_dead() {
            return Err(CatError::Dead(id.clone()));
        }
        cat.outside = true;
        log::info!("{} now lives outside the clan", cat.full_name());

        self.clan_members.remove(id);
        for clan in self.groups.iter_mut().filter(|g| g.kind() == GroupKind::OtherClan) {
            clan.remove_member(id);
        }
        if let Some(outsiders) = self.first_group_mut(GroupKind::Outsiders) {
            outsiders.add_member(id.clone());
        }
        Ok(())
    }

    /// Write the whole simulation to a binary save.
    pub fn save<W: Write>(&self, writer: W) -> Result<(), SaveError> {
        persistence::save_clan(writer, self)
    }

    /// Load a simulation from a binary save.
    pub fn load<R: Read>(reader: R) -> Result<Self, SaveError> {
        persistence::load_clan(reader)
    }
}
