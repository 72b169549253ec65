//! Error types for the simulation model.

use thiserror::Error;

use clangen_logic::clan_config::ConfigError;
use clangen_logic::random::RollError;

use crate::groups::GroupKind;
use crate::ids::CatId;

/// Errors from operations on a single cat.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatError {
    #[error("no cat with id {0}")]
    UnknownCat(CatId),

    #[error("cat {0} is dead")]
    Dead(CatId),

    /// The operation exists but its rules have not been designed yet.
    #[error("{operation} is not supported yet")]
    NotSupported { operation: &'static str },
}

impl CatError {
    pub fn not_supported(operation: &'static str) -> Self {
        Self::NotSupported { operation }
    }
}

/// Errors from group operations and group record rehydration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// The group has no rule for this yet and refuses to guess.
    #[error("{operation} is not implemented for group {group:?}")]
    NotImplemented {
        group: String,
        operation: &'static str,
    },

    #[error("expected a {expected:?} record, found {found:?}")]
    KindMismatch { expected: GroupKind, found: GroupKind },

    #[error("inconsistent group record {id:?}: {reason}")]
    InconsistentRecord { id: String, reason: &'static str },
}

/// Errors surfaced by [`ClanSimulation`](crate::engine::ClanSimulation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Cat(#[from] CatError),
    #[error(transparent)]
    Group(#[from] GroupError),
}

/// Errors from generating a new clan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid clan config: {}", join_errors(.0))]
    InvalidConfig(Vec<ConfigError>),
    #[error(transparent)]
    Roll(#[from] RollError),
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
