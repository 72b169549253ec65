//! Clangen Core - Clan Life Simulation Model
//!
//! The cats of a forest clan, the groups living around it, and the
//! moon-by-moon changes that move cats between them.
//!
//! # Architecture
//!
//! - **Components**: [`Cat`](components::Cat) and the value types it is
//!   made of (name, pronouns, relationships, status)
//! - **Registry**: every known cat, keyed by id, owned by the simulation
//! - **Groups**: afterlife, outsiders and rival clans, as one sum type
//!   that borrows the registry instead of holding it
//! - **Engine**: [`ClanSimulation`](engine::ClanSimulation), the context
//!   that ages cats, records deaths and routes status changes to groups
//!
//! # Example
//!
//! ```rust,no_run
//! use clangen_core::prelude::*;
//! use clangen_logic::clan_config::ClanConfig;
//!
//! let mut rng = rand::thread_rng();
//! let mut sim = generate_clan(&ClanConfig::default(), &mut rng).unwrap();
//!
//! for _ in 0..12 {
//!     sim.advance_moon();
//! }
//! ```

pub mod components;
pub mod engine;
pub mod error;
pub mod generation;
pub mod groups;
pub mod ids;
pub mod persistence;
pub mod registry;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::engine::{ClanSimulation, MoonReport};
    pub use crate::error::{CatError, GenerationError, GroupError, SimulationError};
    pub use crate::generation::generate_clan;
    pub use crate::groups::{Group, GroupBehavior, GroupKind, GroupRecord};
    pub use crate::ids::CatId;
    pub use crate::registry::CatRegistry;
}
