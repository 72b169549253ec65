//! The cat entity.
//!
//! Fields whose change must ripple into derived state (moons, status,
//! experience, lives) are private and go through setters; the rest are
//! plain public data that simulation code edits directly.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use clangen_logic::aging::AgeStage;
use clangen_logic::experience::ExpLevel;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{CatSex, CatStatus, Name, Pronoun, Relationship};
use crate::error::CatError;
use crate::ids::CatId;

/// Defaultable construction parameters for [`Cat::new`].
#[derive(Debug, Clone, Default)]
pub struct CatOptions {
    pub status: CatStatus,
    pub moons: i32,
    pub sex: CatSex,
    pub bio_parents: Vec<CatId>,
    pub adoptive_parents: Vec<CatId>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// Defaults to the textual form of `sex`.
    pub gender: Option<String>,
    pub experience: i32,
}

impl CatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: CatStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_moons(mut self, moons: i32) -> Self {
        self.moons = moons;
        self
    }

    pub fn with_sex(mut self, sex: CatSex) -> Self {
        self.sex = sex;
        self
    }

    pub fn with_bio_parents(mut self, parents: Vec<CatId>) -> Self {
        self.bio_parents = parents;
        self
    }

    pub fn with_adoptive_parents(mut self, parents: Vec<CatId>) -> Self {
        self.adoptive_parents = parents;
        self
    }

    pub fn with_name(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_experience(mut self, experience: i32) -> Self {
        self.experience = experience;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cat {
    id: CatId,
    pub name: Name,
    sex: CatSex,
    /// Free-form gender label, independent of `sex`.
    pub gender: String,
    bio_parents: Vec<CatId>,
    pub adoptive_parents: Vec<CatId>,
    /// Not currently living in the home clan.
    pub outside: bool,
    pub dark_forest: bool,
    dead: bool,
    lives: i32,
    pub relationships: HashMap<CatId, Relationship>,
    moons: i32,
    age: AgeStage,
    status: CatStatus,
    pub mentor: Option<CatId>,
    pub apprentices: Vec<CatId>,
    pub previous_apprentices: Vec<CatId>,
    mates: Vec<CatId>,
    previous_mates: Vec<CatId>,
    experience: i32,
    experience_level: ExpLevel,
    pub pronouns: Vec<Pronoun>,
}

impl Cat {
    pub fn new(options: CatOptions, rng: &mut impl Rng) -> Self {
        let CatOptions {
            status,
            moons,
            sex,
            bio_parents,
            adoptive_parents,
            prefix,
            suffix,
            gender,
            experience,
        } = options;

        let gender = gender.unwrap_or_else(|| sex.to_string());
        let pronouns = Pronoun::defaults_for(&gender);

        let mut cat = Self {
            id: CatId::generate(),
            name: Name::new(prefix, suffix, status, rng),
            sex,
            gender,
            bio_parents,
            adoptive_parents,
            outside: false,
            dark_forest: false,
            dead: false,
            lives: 1,
            relationships: HashMap::new(),
            moons: 0,
            age: AgeStage::Newborn,
            status,
            mentor: None,
            apprentices: Vec::new(),
            previous_apprentices: Vec::new(),
            mates: Vec::new(),
            previous_mates: Vec::new(),
            experience: 0,
            experience_level: ExpLevel::Untrained,
            pronouns,
        };
        cat.set_moons(moons);
        cat.set_experience(experience);
        cat
    }

    /// A newborn with every option left at its default.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(CatOptions::default(), rng)
    }

    pub fn id(&self) -> &CatId {
        &self.id
    }

    pub fn full_name(&self) -> String {
        self.name.to_string()
    }

    pub fn sex(&self) -> CatSex {
        self.sex
    }

    pub fn bio_parents(&self) -> &[CatId] {
        &self.bio_parents
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    /// Grant a cat more (or fewer) lives, e.g. a new leader's nine.
    pub fn set_lives(&mut self, lives: i32) {
        self.lives = lives;
    }

    // ── Age ──

    pub fn moons(&self) -> i32 {
        self.moons
    }

    pub fn age(&self) -> AgeStage {
        self.age
    }

    pub fn set_moons(&mut self, moons: i32) {
        self.moons = moons;
        self.recompute_age();
    }

    /// Re-derive the age stage from moons. Status is never changed here.
    pub fn recompute_age(&mut self) {
        self.age = AgeStage::from_moons(self.moons);
    }

    pub fn one_moon(&mut self) {
        self.set_moons(self.moons + 1);
    }

    // ── Status ──

    pub fn status(&self) -> CatStatus {
        self.status
    }

    /// Replace the status, returning the old one. Any transition is allowed.
    pub fn set_status(&mut self, status: CatStatus) -> CatStatus {
        let old = std::mem::replace(&mut self.status, status);
        self.name.status = status;
        old
    }

    // ── Experience ──

    pub fn experience(&self) -> i32 {
        self.experience
    }

    pub fn experience_level(&self) -> ExpLevel {
        self.experience_level
    }

    pub fn set_experience(&mut self, experience: i32) {
        self.experience = experience;
        self.recompute_experience_level();
    }

    pub fn recompute_experience_level(&mut self) {
        self.experience_level = ExpLevel::from_experience(self.experience);
    }

    // ── Life and death ──

    /// Take one life. Returns event text when the cat survives on a
    /// spare life, or an empty string when it dies for good.
    pub fn die(&mut self) -> String {
        self.lives -= 1;
        if self.lives < 1 {
            self.dead = true;
            log::debug!("{} ({}) died", self.full_name(), self.id);
            String::new()
        } else {
            log::debug!("{} lost a life, {} left", self.full_name(), self.lives);
            format!("{} lost a life.", self.full_name())
        }
    }

    // ── Mates and kin ──

    pub fn mates(&self) -> &[CatId] {
        &self.mates
    }

    pub fn previous_mates(&self) -> &[CatId] {
        &self.previous_mates
    }

    pub fn is_potential_mate(&self, other: &Cat) -> bool {
        self != other
    }

    pub fn is_related(&self, _other: &Cat) -> Result<bool, CatError> {
        Err(CatError::not_supported("is_related"))
    }

    pub fn set_mate(&mut self, _other: &Cat) -> Result<(), CatError> {
        Err(CatError::not_supported("set_mate"))
    }

    pub fn unset_mate(&mut self, _other: &Cat) -> Result<(), CatError> {
        Err(CatError::not_supported("unset_mate"))
    }

    pub fn relationship_with(&self, other: &CatId) -> Option<&Relationship> {
        self.relationships.get(other)
    }
}

impl PartialEq for Cat {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Cat {}

impl Hash for Cat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
