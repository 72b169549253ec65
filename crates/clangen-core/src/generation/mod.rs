//! Generation - procedural creation of clans, rival clans and names

mod clan;
mod names;

pub use clan::*;
pub use names::*;
