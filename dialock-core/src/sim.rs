//! Simulated lock lines for host tests

use dialock_hal::{InputLine, LineInterface, OutputLine};

use crate::engine::{LockFsm, Step};
use crate::state::State;

/// Line levels as the hardware would present them
#[derive(Debug, Clone)]
pub struct SimLines {
    pub dial: bool,
    pub pulse: bool,
    pub ctrl: bool,
    pub check: bool,
    pub relay: bool,
    pub indicator: bool,
}

impl SimLines {
    /// Power-on levels: dial at rest, pulse idle, no override, outputs low
    pub fn new() -> Self {
        Self {
            dial: false,
            pulse: true,
            ctrl: true,
            check: false,
            relay: false,
            indicator: false,
        }
    }
}

impl LineInterface for SimLines {
    fn is_high(&mut self, line: InputLine) -> bool {
        match line {
            InputLine::Dial => self.dial,
            InputLine::Pulse => self.pulse,
            InputLine::Ctrl => self.ctrl,
        }
    }

    fn set(&mut self, line: OutputLine, high: bool) {
        match line {
            OutputLine::Check => self.check = high,
            OutputLine::Relay => self.relay = high,
            OutputLine::Indicator => self.indicator = high,
        }
    }
}

/// Tick a few times with the lines unchanged
pub fn settle(fsm: &mut LockFsm, lines: &mut SimLines) {
    for _ in 0..3 {
        fsm.tick(lines);
    }
}

/// Rotate the dial off rest, produce `pulses` pulses, and let it return
///
/// Ticks until the digit has been checked and returns the check step, or
/// `None` if the machine never reached a digit check.
pub fn dial_pulses(fsm: &mut LockFsm, lines: &mut SimLines, pulses: u8) -> Option<Step> {
    lines.dial = true;
    settle(fsm, lines);

    for _ in 0..pulses {
        lines.pulse = false;
        settle(fsm, lines);
        lines.pulse = true;
        settle(fsm, lines);
    }

    lines.dial = false;
    for _ in 0..4 {
        let step = fsm.tick(lines);
        if step.from == State::CheckDig {
            return Some(step);
        }
    }
    None
}

/// Dial one decimal digit (ten pulses for zero)
pub fn dial_digit(fsm: &mut LockFsm, lines: &mut SimLines, digit: u8) -> Option<Step> {
    let pulses = if digit == 0 { 10 } else { digit };
    dial_pulses(fsm, lines, pulses)
}
