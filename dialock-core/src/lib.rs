//! Board-agnostic core logic for the dial lock firmware
//!
//! This crate contains all lock logic that does not depend on specific
//! hardware:
//!
//! - Build-time configuration types (secret, tick period, hold time)
//! - State machine and its transition table
//! - Pulse counting, digit decoding and secret matching
//! - Relay/indicator actuation under the CTRL override
//! - The tick engine tying them together
//!
//! Hardware is reached only through [`dialock_hal::LineInterface`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod actuator;
pub mod config;
pub mod dial;
pub mod engine;
pub mod state;

#[cfg(test)]
mod sim;

pub use engine::{LockFsm, Step};
