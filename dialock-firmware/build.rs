//! Build script for dialock-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates lock.toml at compile time and bakes it into the binary

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Longest secret the lock accepts (mirrors dialock-core)
const MAX_SECRET_LEN: usize = 16;

/// Defaults used when a key is absent (mirror dialock-core)
const DEFAULT_SECRET: &str = "30954";
const DEFAULT_TICK_PERIOD_MS: i64 = 5;
const DEFAULT_OPEN_HOLD_MS: i64 = 60_000;

fn main() {
    setup_linker();
    let lock = validate_config();
    write_lock_config(&lock);
}

/// Validated `[lock]` section
struct LockSection {
    secret: String,
    tick_period_ms: u32,
    open_hold_ms: u32,
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate lock.toml configuration at compile time
fn validate_config() -> LockSection {
    println!("cargo:rerun-if-changed=lock.toml");

    let config_path = Path::new("lock.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: lock.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a lock.toml configuration file.           ║\n\
            ║  Please create one in the dialock-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read lock.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in lock.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let lock = validate_lock(&config);
    println!("cargo:warning=lock.toml validated successfully");
    lock
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validate the [lock] section
fn validate_lock(config: &toml::Value) -> LockSection {
    let mut errors = Vec::new();

    let lock = match config.get("lock") {
        Some(toml::Value::Table(t)) => t.clone(),
        Some(_) => {
            errors.push("[lock] must be a table".to_string());
            toml::map::Map::new()
        }
        None => {
            errors.push("Missing [lock] section".to_string());
            toml::map::Map::new()
        }
    };

    let secret = match lock.get("secret") {
        Some(toml::Value::String(s)) => s.clone(),
        Some(_) => {
            errors.push("[lock] secret must be a quoted string of digits".to_string());
            String::new()
        }
        None => DEFAULT_SECRET.to_string(),
    };

    if secret.is_empty() {
        errors.push("[lock] secret cannot be empty".to_string());
    } else if secret.len() > MAX_SECRET_LEN {
        errors.push(format!(
            "[lock] secret must be at most {} digits",
            MAX_SECRET_LEN
        ));
    } else if !secret.bytes().all(|b| b.is_ascii_digit()) {
        errors.push("[lock] secret may only contain digits 0-9".to_string());
    }

    let tick_period_ms = read_u32(&lock, "tick_period_ms", DEFAULT_TICK_PERIOD_MS, &mut errors);
    let open_hold_ms = read_u32(&lock, "open_hold_ms", DEFAULT_OPEN_HOLD_MS, &mut errors);

    if tick_period_ms == 0 {
        errors.push("[lock] tick_period_ms must be greater than 0".to_string());
    } else if open_hold_ms < tick_period_ms {
        errors.push("[lock] open_hold_ms must be at least tick_period_ms".to_string());
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid lock configuration                               ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    LockSection {
        secret,
        tick_period_ms,
        open_hold_ms,
    }
}

/// Read an optional non-negative integer that fits in u32
fn read_u32(
    lock: &toml::map::Map<String, toml::Value>,
    key: &str,
    default: i64,
    errors: &mut Vec<String>,
) -> u32 {
    let value = match lock.get(key) {
        Some(toml::Value::Integer(v)) => *v,
        Some(_) => {
            errors.push(format!("[lock] {} must be an integer", key));
            return 0;
        }
        None => default,
    };

    match u32::try_from(value) {
        Ok(v) => v,
        Err(_) => {
            errors.push(format!("[lock] {} must be 0-{}", key, u32::MAX));
            0
        }
    }
}

/// Write the validated values as Rust constants for `include!`
fn write_lock_config(lock: &LockSection) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("lock_config.rs")).unwrap();

    writeln!(f, "/// Secret digits from lock.toml").unwrap();
    writeln!(f, "pub const SECRET: &str = {:?};", lock.secret).unwrap();
    writeln!(f, "/// FSM tick period from lock.toml").unwrap();
    writeln!(f, "pub const TICK_PERIOD_MS: u32 = {};", lock.tick_period_ms).unwrap();
    writeln!(f, "/// Open hold time from lock.toml").unwrap();
    writeln!(f, "pub const OPEN_HOLD_MS: u32 = {};", lock.open_hold_ms).unwrap();
}
