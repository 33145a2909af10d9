//! External inputs the engine reads but does not own.
//!
//! Today that is only randomness; see [`rng`].

pub mod rng;

pub use rng::{FixedRandom, RandomSource, RollBias, ScriptedRandom, SeededRandom};
