//! Save/Load functionality for persisting a clan
//!
//! Binary saves use bincode; JSON export uses serde_json for saves a
//! player can read or hand-edit. Both go through the same versioned
//! [`SaveData`] snapshot. Groups are stored as [`GroupRecord`]s and
//! rebuilt without touching the registry.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::Cat;
use crate::engine::ClanSimulation;
use crate::error::GroupError;
use crate::groups::{Group, GroupRecord};
use crate::ids::CatId;

/// Version number for save file format (increment when format changes)
const SAVE_VERSION: u32 = 1;

/// Serializable snapshot of a clan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub moon: u32,
    pub clan_prefix: String,
    pub clan_members: Vec<CatId>,
    pub cats: Vec<Cat>,
    pub groups: Vec<GroupRecord>,
}

impl From<&ClanSimulation> for SaveData {
    fn from(sim: &ClanSimulation) -> Self {
        Self {
            version: SAVE_VERSION,
            moon: sim.moon,
            clan_prefix: sim.clan_prefix.clone(),
            clan_members: sim.clan_members.iter().cloned().collect(),
            cats: sim.registry.iter().cloned().collect(),
            groups: sim.groups.iter().map(Group::to_record).collect(),
        }
    }
}

impl SaveData {
    /// Rebuild the live simulation from this snapshot.
    pub fn into_simulation(self) -> Result<ClanSimulation, SaveError> {
        if self.version != SAVE_VERSION {
            return Err(SaveError::VersionMismatch {
                expected: SAVE_VERSION,
                found: self.version,
            });
        }

        let mut sim = ClanSimulation::new(self.clan_prefix);
        sim.moon = self.moon;
        sim.registry = self.cats.into_iter().collect();
        sim.clan_members = self.clan_members.into_iter().collect();
        sim.groups = self
            .groups
            .into_iter()
            .map(Group::from_persisted_record)
            .collect::<Result<_, _>>()?;
        Ok(sim)
    }
}

/// Save the complete clan to a writer
pub fn save_clan<W: Write>(writer: W, sim: &ClanSimulation) -> Result<(), SaveError> {
    let save_data = SaveData::from(sim);
    bincode::serialize_into(writer, &save_data)?;
    log::info!(
        "Saved {} at moon {} ({} cats, {} groups)",
        sim.clan_name(),
        sim.moon,
        save_data.cats.len(),
        save_data.groups.len()
    );
    Ok(())
}

/// Load a clan from a reader
pub fn load_clan<R: Read>(reader: R) -> Result<ClanSimulation, SaveError> {
    let save_data: SaveData = bincode::deserialize_from(reader)?;
    let sim = save_data.into_simulation()?;
    log::info!("Loaded {} at moon {}", sim.clan_name(), sim.moon);
    Ok(sim)
}

/// Export the clan as pretty-printed JSON
pub fn export_json(sim: &ClanSimulation) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(&SaveData::from(sim))?)
}

/// Import a clan from JSON produced by [`export_json`]
pub fn import_json(json: &str) -> Result<ClanSimulation, SaveError> {
    let save_data: SaveData = serde_json::from_str(json)?;
    save_data.into_simulation()
}

/// Errors that can occur during save/load
#[derive(Debug, Error)]
pub enum SaveError {
    /// Also carries I/O failures from the reader or writer.
    #[error("Serialization error: {0}")]
    Bincode(#[from] Box<bincode::ErrorKind>),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
    #[error("Bad group record: {0}")]
    Group(#[from] GroupError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CatOptions, CatStatus};
    use crate::groups::{Afterlife, GroupBehavior, OtherClan};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_clan() -> ClanSimulation {
        let mut rng = StdRng::seed_from_u64(50);
        let mut sim = ClanSimulation::new("Thunder");
        sim.add_group(Afterlife::from_live_state("starclan", &sim.registry, "StarClan"));
        let mut river = OtherClan::new("river", "River");
        river.suffix = "Folk".to_string();
        sim.add_group(river);

        let warrior = Cat::new(
            CatOptions::new()
                .with_status(CatStatus::Warrior)
                .with_moons(40)
                .with_name("Lion", "heart")
                .with_experience(90),
            &mut rng,
        );
        sim.add_clan_cat(warrior);
        let elder = sim.add_clan_cat(Cat::new(CatOptions::new().with_status(CatStatus::Elder), &mut rng));
        sim.kill_cat(&elder).unwrap();
        sim.advance_moon();
        sim
    }

    fn assert_same(a: &ClanSimulation, b: &ClanSimulation) {
        assert_eq!(a.moon, b.moon);
        assert_eq!(a.clan_prefix, b.clan_prefix);
        assert_eq!(a.clan_members(), b.clan_members());
        assert_eq!(a.registry.len(), b.registry.len());
        assert_eq!(a.groups, b.groups);
        for cat in a.registry.iter() {
            let other = b.registry.get(cat.id()).unwrap();
            assert_eq!(other.full_name(), cat.full_name());
            assert_eq!(other.moons(), cat.moons());
            assert_eq!(other.is_dead(), cat.is_dead());
            assert_eq!(other.experience_level(), cat.experience_level());
        }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let sim = small_clan();
        let mut buffer = Vec::new();
        sim.save(&mut buffer).expect("Save failed");

        let loaded = ClanSimulation::load(&buffer[..]).expect("Load failed");
        assert_same(&sim, &loaded);
        assert_eq!(loaded.group("river").unwrap().name(), "RiverFolk");
    }

    #[test]
    fn test_json_roundtrip() {
        let sim = small_clan();
        let json = export_json(&sim).unwrap();
        assert!(json.contains("\"clan_prefix\": \"Thunder\""));

        let loaded = import_json(&json).unwrap();
        assert_same(&sim, &loaded);
    }

    #[test]
    fn test_version_mismatch() {
        let mut data = SaveData::from(&small_clan());
        data.version = 99;
        assert!(matches!(
            data.into_simulation(),
            Err(SaveError::VersionMismatch {
                expected: SAVE_VERSION,
                found: 99
            })
        ));
    }

    #[test]
    fn test_bad_group_record_rejected() {
        let mut data = SaveData::from(&small_clan());
        data.groups[0].dead = false;
        assert!(matches!(data.into_simulation(), Err(SaveError::Group(_))));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_bincode_error() {
        let sim = small_clan();
        let err = sim.save(BrokenPipe).unwrap_err();
        match err {
            SaveError::Bincode(kind) => assert!(matches!(*kind, bincode::ErrorKind::Io(_))),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_truncated_save() {
        let sim = small_clan();
        let mut buffer = Vec::new();
        sim.save(&mut buffer).unwrap();
        buffer.truncate(buffer.len() / 2);
        assert!(ClanSimulation::load(&buffer[..]).is_err());
    }
}
