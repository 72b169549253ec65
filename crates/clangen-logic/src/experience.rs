//! Experience score tiers.
//!
//! A cat's raw experience is an open-ended integer; the tier is what
//! patrols and events read when deciding how capable a cat is.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpLevel {
    #[default]
    Untrained,
    Trainee,
    Prepared,
    Competent,
    Proficient,
    Expert,
    Master,
}

/// Lowest score of each tier above `Untrained`, in order.
const THRESHOLDS: [(i32, ExpLevel); 6] = [
    (1, ExpLevel::Trainee),
    (51, ExpLevel::Prepared),
    (111, ExpLevel::Competent),
    (171, ExpLevel::Proficient),
    (241, ExpLevel::Expert),
    (321, ExpLevel::Master),
];

impl ExpLevel {
    pub fn from_experience(experience: i32) -> Self {
        THRESHOLDS
            .iter()
            .rev()
            .find(|(min, _)| experience >= *min)
            .map(|(_, level)| *level)
            .unwrap_or(ExpLevel::Untrained)
    }

    /// Score needed to reach the next tier, or `None` at `Master`.
    pub fn next_threshold(self) -> Option<i32> {
        THRESHOLDS
            .iter()
            .find(|(_, level)| *level > self)
            .map(|(min, _)| *min)
    }
}
