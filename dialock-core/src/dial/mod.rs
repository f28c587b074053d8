//! Dial decoding
//!
//! Turns pulse counts into digits and checks digits against the secret.

pub mod decoder;
pub mod matcher;

pub use decoder::{decode_digit, PulseCounter};
pub use matcher::{MatchResult, SequenceMatcher};
