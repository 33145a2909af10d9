//! Interactive terminal client for arena battles.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ ClientConfig (environment)
//!   ├─→ Prompter (team selection on stdin/stdout)
//!   ├─→ Battle (arena-core, on a blocking task) ──events──┐
//!   └─→ Narrator (async, paced output)  ←─ mpsc channel ──┘
//! ```
//!
//! The engine never sleeps or prints. Pacing is a narrator setting.

pub mod config;
pub mod content;
pub mod logging;
pub mod narrator;
pub mod selection;

pub use config::ClientConfig;
pub use narrator::{ChannelSink, Narrator};
pub use selection::{Lineup, Prompter, SelectionError, assemble_lineup};
