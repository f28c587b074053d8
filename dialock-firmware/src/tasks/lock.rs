//! Lock tick task
//!
//! Runs the lock state machine once per tick period, forever. The wait
//! between ticks is a busy-wait, so drift against wall-clock time
//! accumulates and is not corrected.

use defmt::*;
use embassy_time::{block_for, Duration};

use dialock_core::state::State;
use dialock_core::{LockFsm, Step};

use crate::board::BoardLines;

/// Lock task - owns the FSM and the lines for the life of the firmware
#[embassy_executor::task]
pub async fn lock_task(mut fsm: LockFsm, mut lines: BoardLines) {
    info!("Lock task started");

    let period = Duration::from_millis(fsm.config().tick_period_ms() as u64);
    let secret_len = fsm.config().secret().len();
    let mut position = fsm.position();

    loop {
        let step = fsm.tick(&mut lines);

        // Never log the digit itself
        if fsm.position() != position {
            position = fsm.position();
            debug!("Digit {} of {} accepted", position, secret_len);
        }
        if step.changed() {
            log_step(&step, &fsm);
        }

        block_for(period);
    }
}

fn log_step(step: &Step, fsm: &LockFsm) {
    match (step.from, step.to) {
        (_, State::LockOpen) => {
            info!("Code accepted, lock open for {} ticks", fsm.config().open_ticks());
        }
        (_, State::Reset) => {
            warn!(
                "Lockout from {:?} ({:?}) after {} digits, power cycle to re-arm",
                step.from,
                step.outcome,
                fsm.position()
            );
        }
        // Idle polling while the dial rests
        (State::WaitRise, State::CheckDig) | (State::CheckDig, State::WaitRise) => {}
        _ => {
            trace!("{:?} -({:?})-> {:?}", step.from, step.outcome, step.to);
        }
    }
}
