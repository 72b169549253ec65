//! Rank and sex enums for cats.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rank or life stage of a cat within (or outside) a clan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatStatus {
    #[default]
    Newborn,
    Kitten,
    Apprentice,
    Warrior,
    MedicineCatApprentice,
    MedicineCat,
    MediatorApprentice,
    Mediator,
    Deputy,
    Leader,
    Elder,
    Exiled,
    Kittypet,
    Loner,
    Rogue,
    FormerClancat,
}

impl CatStatus {
    pub fn is_kit(self) -> bool {
        matches!(self, Self::Newborn | Self::Kitten)
    }

    pub fn is_apprentice(self) -> bool {
        matches!(
            self,
            Self::Apprentice | Self::MedicineCatApprentice | Self::MediatorApprentice
        )
    }

    pub fn is_leadership(self) -> bool {
        matches!(self, Self::Leader | Self::Deputy)
    }

    /// Statuses held by cats that live outside any clan.
    pub fn is_outsider_role(self) -> bool {
        matches!(
            self,
            Self::Exiled | Self::Kittypet | Self::Loner | Self::Rogue | Self::FormerClancat
        )
    }
}

impl fmt::Display for CatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Newborn => "newborn",
            Self::Kitten => "kitten",
            Self::Apprentice => "apprentice",
            Self::Warrior => "warrior",
            Self::MedicineCatApprentice => "medicine cat apprentice",
            Self::MedicineCat => "medicine cat",
            Self::MediatorApprentice => "mediator apprentice",
            Self::Mediator => "mediator",
            Self::Deputy => "deputy",
            Self::Leader => "leader",
            Self::Elder => "elder",
            Self::Exiled => "exiled",
            Self::Kittypet => "kittypet",
            Self::Loner => "loner",
            Self::Rogue => "rogue",
            Self::FormerClancat => "former Clancat",
        };
        f.write_str(text)
    }
}

/// Biological sex of a cat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatSex {
    Male,
    #[default]
    Female,
}

impl fmt::Display for CatSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("Male"),
            Self::Female => f.write_str("Female"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(CatStatus::default(), CatStatus::Newborn);
        assert_eq!(CatSex::default(), CatSex::Female);
    }

    #[test]
    fn test_status_groups() {
        assert!(CatStatus::Newborn.is_kit());
        assert!(CatStatus::MediatorApprentice.is_apprentice());
        assert!(!CatStatus::Warrior.is_apprentice());
        assert!(CatStatus::Deputy.is_leadership());
        assert!(CatStatus::Kittypet.is_outsider_role());
        assert!(!CatStatus::Elder.is_outsider_role());
    }

    #[test]
    fn test_sex_text() {
        assert_eq!(CatSex::Female.to_string(), "Female");
        assert_eq!(CatSex::Male.to_string(), "Male");
    }
}
