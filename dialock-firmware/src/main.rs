//! Dialock - Rotary Dial Code Lock Firmware
//!
//! Main firmware binary for RP2040-based lock controllers. A pulse dial
//! is read on three input lines; dialing the compiled-in secret opens a
//! relay lock for a fixed hold time. A wrong digit locks the reader out
//! until the next power cycle.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use dialock_core::LockFsm;

mod board;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Dialock firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());

    // Inputs with pull-ups, outputs low, before anything reads them
    let mut lines = board::init_lines(p);
    info!("Lock lines configured");

    let lock_config = match config::load() {
        Ok(config) => config,
        Err(e) => defmt::panic!("Invalid lock configuration: {}", e),
    };
    info!(
        "Lock config: {} digit secret, tick {} ms, hold {} ticks",
        lock_config.secret().len(),
        lock_config.tick_period_ms(),
        lock_config.open_ticks()
    );

    let mut fsm = LockFsm::new(lock_config);
    fsm.start(&mut lines);
    info!("Reader armed, lock closed");

    spawner.spawn(tasks::lock_task(fsm, lines)).unwrap();

    info!("All tasks spawned");
}
