//! Life stages derived from a cat's age in moons.

use serde::{Deserialize, Serialize};

/// Age tier a cat falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeStage {
    /// 0 moons.
    Newborn,
    /// 1–5 moons.
    Kitten,
    /// 6–11 moons.
    Adolescent,
    /// 12–47 moons.
    YoungAdult,
    /// 48–95 moons.
    Adult,
    /// 96–119 moons.
    SeniorAdult,
    /// 120 moons and up.
    Senior,
}

impl AgeStage {
    pub fn from_moons(moons: i32) -> Self {
        match moons {
            i32::MIN..=0 => Self::Newborn,
            1..=5 => Self::Kitten,
            6..=11 => Self::Adolescent,
            12..=47 => Self::YoungAdult,
            48..=95 => Self::Adult,
            96..=119 => Self::SeniorAdult,
            _ => Self::Senior,
        }
    }

    /// Inclusive moon range covered by this stage, as (min, max). `Senior`
    /// has no upper bound.
    pub fn moon_range(self) -> (i32, i32) {
        match self {
            Self::Newborn => (0, 0),
            Self::Kitten => (1, 5),
            Self::Adolescent => (6, 11),
            Self::YoungAdult => (12, 47),
            Self::Adult => (48, 95),
            Self::SeniorAdult => (96, 119),
            Self::Senior => (120, i32::MAX),
        }
    }

    /// Old enough to leave the nursery.
    pub fn can_apprentice(self) -> bool {
        self >= Self::Adolescent
    }

    pub fn is_senior(self) -> bool {
        self == Self::Senior
    }
}
