//! Player-facing clan configuration.
//!
//! Before a game starts the player picks a clan name, how many cats of
//! each role the clan begins with, and which rival clans share the
//! territory. This module holds that data model and its validation,
//! independent of any UI.
//!
//! ```
//! use clangen_logic::clan_config::{validate_config, ClanConfig};
//!
//! let mut config = ClanConfig::default();
//! config.clan_prefix = "Thunder".to_string();
//! assert!(validate_config(&config).is_empty());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on any single starting role count.
const MAX_ROLE_COUNT: u32 = 60;

/// Player-editable clan configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClanConfig {
    /// Clan prefix; the clan is displayed as `{prefix}Clan`.
    pub clan_prefix: String,
    pub warriors: u32,
    pub apprentices: u32,
    pub kits: u32,
    pub elders: u32,
    /// Prefixes of the rival clans sharing the territory.
    pub rival_prefixes: Vec<String>,
    /// Display name for the group of ordinary dead cats.
    pub afterlife_name: String,
    /// Display name for the group of cats living outside the clan.
    pub outsiders_name: String,
    /// Lives granted to the clan leader.
    pub leader_lives: i32,
    /// Moons the headless harness advances.
    pub moons_to_simulate: u32,
    /// Per-moon percentage chance that an elder dies in the harness.
    pub elder_death_chance: i32,
    /// Random seed for generation (None = random).
    pub seed: Option<u64>,
}

impl Default for ClanConfig {
    fn default() -> Self {
        Self {
            clan_prefix: "Thunder".to_string(),
            warriors: 8,
            apprentices: 3,
            kits: 3,
            elders: 2,
            rival_prefixes: vec![
                "River".to_string(),
                "Wind".to_string(),
                "Shadow".to_string(),
            ],
            afterlife_name: "StarClan".to_string(),
            outsiders_name: "Cats Outside the Clan".to_string(),
            leader_lives: 9,
            moons_to_simulate: 24,
            elder_death_chance: 5,
            seed: None,
        }
    }
}

impl ClanConfig {
    /// Total cats the home clan starts with, including leader, deputy and medicine cat.
    pub fn starting_population(&self) -> u32 {
        3 + self.warriors + self.apprentices + self.kits + self.elders
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("clan prefix is empty")]
    EmptyClanPrefix,
    #[error("a clan needs at least one warrior")]
    NoWarriors,
    #[error("{role} count {count} exceeds the limit of 60")]
    RoleCountTooLarge { role: &'static str, count: u32 },
    #[error("more apprentices ({apprentices}) than warriors to mentor them ({warriors})")]
    TooFewMentors { apprentices: u32, warriors: u32 },
    #[error("rival clan prefix is empty")]
    EmptyRivalPrefix,
    #[error("rival clan prefix {0:?} is used more than once")]
    DuplicateRivalPrefix(String),
    #[error("rival clan prefix {0:?} matches the home clan")]
    RivalMatchesHome(String),
    #[error("leader lives must be at least 1, got {0}")]
    InvalidLeaderLives(i32),
    #[error("elder death chance {0} is outside 0..=100")]
    InvalidDeathChance(i32),
    #[error("group display name is empty")]
    EmptyGroupName,
}

/// Validate a clan configuration, returning all errors found.
pub fn validate_config(config: &ClanConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.clan_prefix.trim().is_empty() {
        errors.push(ConfigError::EmptyClanPrefix);
    }
    if config.warriors == 0 {
        errors.push(ConfigError::NoWarriors);
    }
    for (role, count) in [
        ("warrior", config.warriors),
        ("apprentice", config.apprentices),
        ("kit", config.kits),
        ("elder", config.elders),
    ] {
        if count > MAX_ROLE_COUNT {
            errors.push(ConfigError::RoleCountTooLarge { role, count });
        }
    }
    if config.apprentices > config.warriors {
        errors.push(ConfigError::TooFewMentors {
            apprentices: config.apprentices,
            warriors: config.warriors,
        });
    }

    let mut seen: Vec<&str> = Vec::new();
    for prefix in &config.rival_prefixes {
        let trimmed = prefix.trim();
        if trimmed.is_empty() {
            errors.push(ConfigError::EmptyRivalPrefix);
            continue;
        }
        if trimmed.eq_ignore_ascii_case(config.clan_prefix.trim()) {
            errors.push(ConfigError::RivalMatchesHome(prefix.clone()));
        }
        if seen.iter().any(|s| s.eq_ignore_ascii_case(trimmed)) {
            errors.push(ConfigError::DuplicateRivalPrefix(prefix.clone()));
        } else {
            seen.push(trimmed);
        }
    }

    if config.leader_lives < 1 {
        errors.push(ConfigError::InvalidLeaderLives(config.leader_lives));
    }
    if !(0..=100).contains(&config.elder_death_chance) {
        errors.push(ConfigError::InvalidDeathChance(config.elder_death_chance));
    }
    if config.afterlife_name.trim().is_empty() || config.outsiders_name.trim().is_empty() {
        errors.push(ConfigError::EmptyGroupName);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(validate_config(&ClanConfig::default()).is_empty());
    }

    #[test]
    fn test_starting_population() {
        let config = ClanConfig::default();
        assert_eq!(config.starting_population(), 3 + 8 + 3 + 3 + 2);
    }

    #[test]
    fn test_empty_prefix() {
        let config = ClanConfig {
            clan_prefix: "  ".to_string(),
            ..Default::default()
        };
        assert!(validate_config(&config).contains(&ConfigError::EmptyClanPrefix));
    }

    #[test]
    fn test_no_warriors_and_too_few_mentors() {
        let config = ClanConfig {
            warriors: 0,
            apprentices: 2,
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert!(errors.contains(&ConfigError::NoWarriors));
        assert!(errors.contains(&ConfigError::TooFewMentors {
            apprentices: 2,
            warriors: 0
        }));
    }

    #[test]
    fn test_role_count_too_large() {
        let config = ClanConfig {
            kits: 61,
            ..Default::default()
        };
        assert!(validate_config(&config)
            .contains(&ConfigError::RoleCountTooLarge { role: "kit", count: 61 }));
    }

    #[test]
    fn test_rival_prefix_checks() {
        let config = ClanConfig {
            rival_prefixes: vec![
                "River".to_string(),
                "river".to_string(),
                "Thunder".to_string(),
                String::new(),
            ],
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert!(errors.contains(&ConfigError::DuplicateRivalPrefix("river".to_string())));
        assert!(errors.contains(&ConfigError::RivalMatchesHome("Thunder".to_string())));
        assert!(errors.contains(&ConfigError::EmptyRivalPrefix));
    }

    #[test]
    fn test_numeric_ranges() {
        let config = ClanConfig {
            leader_lives: 0,
            elder_death_chance: 101,
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert!(errors.contains(&ConfigError::InvalidLeaderLives(0)));
        assert!(errors.contains(&ConfigError::InvalidDeathChance(101)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ClanConfig =
            serde_json::from_str(r#"{"clan_prefix": "Sky", "warriors": 4}"#).unwrap();
        assert_eq!(config.clan_prefix, "Sky");
        assert_eq!(config.warriors, 4);
        assert_eq!(config.kits, ClanConfig::default().kits);
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InvalidDeathChance(150).to_string(),
            "elder death chance 150 is outside 0..=100"
        );
    }
}
