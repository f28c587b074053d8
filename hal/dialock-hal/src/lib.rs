//! Dialock Hardware Abstraction Layer
//!
//! This crate defines the pin and line traits the lock logic talks to.
//! Chip crates (or the firmware binary) bind real GPIOs to them, while
//! host tests bind simulated pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dialock-core (FSM, decoder, actuator)  │
//! └─────────────────────────────────────────┘
//!                     │  LineInterface
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dialock-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │  embedded-hal 1.0
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embassy-rp GPIO (dialock-firmware)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`lines::LineInterface`] - Named access to the six lock lines

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod lines;

// Re-export key traits at crate root for convenience
pub use gpio::{EhInput, EhOutput, InputPin, OutputPin};
pub use lines::{InputLine, LineInterface, OutputLine, PinLines};
