//! Build-time lock configuration
//!
//! `build.rs` validates `lock.toml` and writes the values as constants.
//! They are checked again here through `LockConfig::new` so the core's
//! rules are the final word.

use dialock_core::config::{ConfigError, LockConfig};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/lock_config.rs"));
}

use generated::{OPEN_HOLD_MS, SECRET, TICK_PERIOD_MS};

/// Build the lock configuration from the compiled-in values
pub fn load() -> Result<LockConfig, ConfigError> {
    LockConfig::new(SECRET, TICK_PERIOD_MS, OPEN_HOLD_MS)
}
