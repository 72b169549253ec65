//! Pure simulation rules for Clangen.
//!
//! This crate holds the game rules that do not need the cat registry or
//! any runtime: random rolls, collection helpers, age and experience
//! tiers, and the clan configuration model. Functions take plain data
//! (and an injected RNG where chance is involved) and return results,
//! so they are unit-testable in isolation.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`aging`] | Age stages derived from moons |
//! | [`clan_config`] | Starting clan configuration and validation |
//! | [`collections`] | Map merging and lazy chunking |
//! | [`experience`] | Experience score tiers |
//! | [`random`] | Uniform choice, inverse-chance and percentage rolls |

pub mod aging;
pub mod clan_config;
pub mod collections;
pub mod experience;
pub mod random;
