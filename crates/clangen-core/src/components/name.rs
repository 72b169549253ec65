//! Warrior names: a prefix, a suffix, and a status that decides which
//! suffix is shown.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::CatStatus;
use crate::generation::{random_prefix, random_suffix};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub prefix: String,
    /// Suffix the cat carries as a full warrior.
    pub suffix: String,
    /// Status the displayed name is derived from.
    pub status: CatStatus,
}

impl Name {
    /// Build a name, filling in any missing part at random.
    pub fn new(
        prefix: Option<String>,
        suffix: Option<String>,
        status: CatStatus,
        rng: &mut impl Rng,
    ) -> Self {
        let prefix = prefix.unwrap_or_else(|| random_prefix(rng).to_string());
        let suffix = suffix.unwrap_or_else(|| random_suffix(rng, &prefix).to_string());
        Self {
            prefix,
            suffix,
            status,
        }
    }

    /// Suffix as displayed for the current status.
    pub fn displayed_suffix(&self) -> &str {
        match self.status {
            CatStatus::Newborn | CatStatus::Kitten => "kit",
            CatStatus::Apprentice
            | CatStatus::MedicineCatApprentice
            | CatStatus::MediatorApprentice => "paw",
            CatStatus::Leader => "star",
            _ => &self.suffix,
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.displayed_suffix())
    }
}
