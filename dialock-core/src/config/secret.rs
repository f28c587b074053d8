//! Secret digit sequence

use heapless::Vec;

use super::{ConfigError, DEFAULT_SECRET};

/// Longest secret the lock accepts
pub const MAX_SECRET_LEN: usize = 16;

/// Ordered ASCII decimal digits that open the lock
///
/// Stored as ASCII so decoded digits compare directly against it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Secret {
    digits: Vec<u8, MAX_SECRET_LEN>,
}

impl Secret {
    /// Parse a string of decimal digits
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        if s.is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        let mut digits = Vec::new();
        for &b in s.as_bytes() {
            if !b.is_ascii_digit() {
                return Err(ConfigError::InvalidDigit(b));
            }
            digits.push(b).map_err(|_| ConfigError::SecretTooLong)?;
        }

        Ok(Self { digits })
    }

    /// Number of digits
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false for a parsed secret
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Expected ASCII digit at `pos`
    pub fn digit_at(&self, pos: usize) -> Option<u8> {
        self.digits.get(pos).copied()
    }

    /// Raw ASCII digits
    pub fn as_bytes(&self) -> &[u8] {
        &self.digits
    }
}

impl Default for Secret {
    fn default() -> Self {
        let mut digits = Vec::new();
        for &b in DEFAULT_SECRET.as_bytes() {
            // DEFAULT_SECRET is five ASCII digits
            let _ = digits.push(b);
        }
        Self { digits }
    }
}
