//! Action labels and single-action resolution.
//!
//! Characters carry opaque [`ActionLabel`]s; [`ActionLabel::kind`] maps the
//! reserved labels onto self-targeted utilities and everything else onto a
//! damaging hit. [`resolve_action`] picks a target and an action for one
//! actor and applies the effect.

mod kind;
mod resolve;

pub use kind::{ActionKind, ActionLabel};
pub use resolve::{ActionEffect, ActionReport, Participant, resolve_action, resolve_against};
