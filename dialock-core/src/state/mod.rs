//! Lock state machine
//!
//! The machine is explicit, finite, and deterministic. `Reset` is a sink:
//! once entered, only a power cycle leaves it.

pub mod machine;

pub use machine::{Outcome, State};
