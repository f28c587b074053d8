//! Lock configuration
//!
//! Everything here is fixed when the firmware is built. The firmware's
//! build script validates `lock.toml` and bakes the values in; startup
//! re-validates them through [`LockConfig::new`].

pub mod secret;

pub use secret::{Secret, MAX_SECRET_LEN};

use core::fmt;

/// Secret compiled in when `lock.toml` does not override it
pub const DEFAULT_SECRET: &str = "30954";

/// FSM tick period in milliseconds
pub const TICK_PERIOD_MS: u32 = 5;

/// How long the lock stays open after a correct code, in milliseconds
pub const OPEN_HOLD_MS: u32 = 60_000;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Secret has no digits
    EmptySecret,
    /// Secret is longer than [`MAX_SECRET_LEN`]
    SecretTooLong,
    /// Secret contains something other than `0`-`9`
    InvalidDigit(u8),
    /// Tick period of zero
    ZeroTickPeriod,
    /// Hold time shorter than a single tick
    HoldShorterThanTick,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptySecret => write!(f, "secret is empty"),
            ConfigError::SecretTooLong => {
                write!(f, "secret is longer than {} digits", MAX_SECRET_LEN)
            }
            ConfigError::InvalidDigit(b) => write!(f, "secret contains non-digit byte 0x{:02x}", b),
            ConfigError::ZeroTickPeriod => write!(f, "tick period must be non-zero"),
            ConfigError::HoldShorterThanTick => {
                write!(f, "open hold must be at least one tick period")
            }
        }
    }
}

/// Validated lock configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LockConfig {
    secret: Secret,
    tick_period_ms: u32,
    open_hold_ms: u32,
}

impl LockConfig {
    /// Validate and build a configuration
    pub fn new(secret: &str, tick_period_ms: u32, open_hold_ms: u32) -> Result<Self, ConfigError> {
        let secret = Secret::parse(secret)?;

        if tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if open_hold_ms < tick_period_ms {
            return Err(ConfigError::HoldShorterThanTick);
        }

        Ok(Self {
            secret,
            tick_period_ms,
            open_hold_ms,
        })
    }

    /// The secret digit sequence
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Tick period in milliseconds
    pub fn tick_period_ms(&self) -> u32 {
        self.tick_period_ms
    }

    /// Open hold time in milliseconds
    pub fn open_hold_ms(&self) -> u32 {
        self.open_hold_ms
    }

    /// Number of ticks the relay is held open (floor of hold / tick)
    pub fn open_ticks(&self) -> u32 {
        self.open_hold_ms / self.tick_period_ms
    }
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            secret: Secret::default(),
            tick_period_ms: TICK_PERIOD_MS,
            open_hold_ms: OPEN_HOLD_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LockConfig::default();
        assert_eq!(config.secret().as_bytes(), b"30954");
        assert_eq!(config.tick_period_ms(), 5);
        assert_eq!(config.open_hold_ms(), 60_000);
        assert_eq!(config.open_ticks(), 12_000);
    }

    #[test]
    fn test_default_matches_validated_defaults() {
        let built = LockConfig::new(DEFAULT_SECRET, TICK_PERIOD_MS, OPEN_HOLD_MS);
        assert_eq!(built, Ok(LockConfig::default()));
    }

    #[test]
    fn test_open_ticks_rounds_down() {
        let config = LockConfig::new("1", 7, 50).unwrap();
        assert_eq!(config.open_ticks(), 7);
    }

    #[test]
    fn test_rejects_bad_timing() {
        assert_eq!(
            LockConfig::new("12", 0, 100),
            Err(ConfigError::ZeroTickPeriod)
        );
        assert_eq!(
            LockConfig::new("12", 10, 9),
            Err(ConfigError::HoldShorterThanTick)
        );
    }

    #[test]
    fn test_rejects_bad_secret() {
        assert_eq!(LockConfig::new("", 5, 100), Err(ConfigError::EmptySecret));
        assert_eq!(
            LockConfig::new("12a", 5, 100),
            Err(ConfigError::InvalidDigit(b'a'))
        );
    }
}
