//! Data types that make up a cat.
//!
//! Components are mostly plain data. The one with real behavior is
//! [`Cat`], whose setters recompute derived state.

mod cat;
mod name;
mod pronoun;
mod social;
mod status;

pub use cat::*;
pub use name::*;
pub use pronoun::*;
pub use social::*;
pub use status::*;
