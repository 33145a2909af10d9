//! Character catalog and content loaders.
//!
//! This crate supplies the battle engine with content:
//! - The built-in roster of fighters ([`Roster::builtin`])
//! - Team drafting from a roster, by index or at random
//! - RON roster files and TOML battle configuration (behind `loaders`)
//!
//! Content is consumed at battle construction and never changes during a battle.

pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::{Roster, RosterError, random_captain};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, RosterLoader};
