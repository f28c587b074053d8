//! Lock state machine engine
//!
//! [`LockFsm`] owns every piece of mutable lock state. The tick driver
//! calls [`LockFsm::tick`] once per period; each tick runs the handler for
//! the current state and moves to the state the transition table selects.

use dialock_hal::LineInterface;

use crate::actuator::LockActuator;
use crate::config::LockConfig;
use crate::dial::{MatchResult, PulseCounter, SequenceMatcher};
use crate::state::{Outcome, State};

/// What one tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// State whose handler ran
    pub from: State,
    /// Handler outcome
    pub outcome: Outcome,
    /// State selected for the next tick
    pub to: State,
}

impl Step {
    /// Check if the tick changed state
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Dial lock state machine
#[derive(Debug, Clone)]
pub struct LockFsm {
    config: LockConfig,
    state: State,
    pulses: PulseCounter,
    matcher: SequenceMatcher,
    actuator: LockActuator,
    /// Seeded on the first `LockOpen` tick, never refilled
    open_countdown: Option<u32>,
}

impl LockFsm {
    /// Create a machine in the initial state
    pub fn new(config: LockConfig) -> Self {
        Self {
            config,
            state: State::INITIAL,
            pulses: PulseCounter::new(),
            matcher: SequenceMatcher::new(),
            actuator: LockActuator::new(),
            open_countdown: None,
        }
    }

    /// Arm the reader and close the lock
    ///
    /// Call once after line configuration and before the first tick.
    pub fn start<L: LineInterface>(&mut self, lines: &mut L) {
        self.actuator.arm(lines);
        self.actuator.drive(lines, false);
    }

    /// Run one tick
    pub fn tick<L: LineInterface>(&mut self, lines: &mut L) -> Step {
        let from = self.state;
        let outcome = match from {
            State::Reset => self.reset(lines),
            State::WaitRise => self.wait_rise(lines),
            State::CalcPulse => self.calc_pulse(),
            State::WaitFall => self.wait_fall(lines),
            State::CheckDig => self.check_digit(),
            State::LockOpen => self.lock_open(lines),
        };
        let to = from.transition(outcome);
        self.state = to;

        Step { from, outcome, to }
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Digits of the secret matched so far
    pub fn position(&self) -> usize {
        self.matcher.position()
    }

    /// Pulses counted for the digit in progress
    pub fn pulse_count(&self) -> u8 {
        self.pulses.count()
    }

    /// Open ticks left, or `None` before the lock has opened
    pub fn open_ticks_remaining(&self) -> Option<u32> {
        self.open_countdown
    }

    /// Configuration in use
    pub fn config(&self) -> &LockConfig {
        &self.config
    }

    /// Actuator state
    pub fn actuator(&self) -> &LockActuator {
        &self.actuator
    }

    fn reset<L: LineInterface>(&mut self, lines: &mut L) -> Outcome {
        self.actuator.drive(lines, false);
        Outcome::Continue
    }

    fn wait_rise<L: LineInterface>(&mut self, lines: &mut L) -> Outcome {
        if lines.dial_at_rest() {
            return Outcome::Divert;
        }
        if lines.pulse_idle() {
            Outcome::Advance
        } else {
            Outcome::Continue
        }
    }

    fn calc_pulse(&mut self) -> Outcome {
        self.pulses.record();
        Outcome::Continue
    }

    fn wait_fall<L: LineInterface>(&mut self, lines: &mut L) -> Outcome {
        if lines.dial_at_rest() {
            return Outcome::Divert;
        }
        if lines.pulse_idle() {
            Outcome::Continue
        } else {
            Outcome::Advance
        }
    }

    fn check_digit(&mut self) -> Outcome {
        let Some(digit) = self.pulses.digit() else {
            // Too few pulses for a digit
            self.pulses.clear();
            return Outcome::Continue;
        };

        match self.matcher.check(self.config.secret(), digit) {
            MatchResult::Mismatch => Outcome::Divert,
            MatchResult::Partial => {
                self.pulses.clear();
                Outcome::Continue
            }
            MatchResult::Complete => {
                self.pulses.clear();
                Outcome::Advance
            }
        }
    }

    fn lock_open<L: LineInterface>(&mut self, lines: &mut L) -> Outcome {
        let open_ticks = self.config.open_ticks();
        let remaining = self.open_countdown.get_or_insert(open_ticks);

        if *remaining > 0 {
            *remaining -= 1;
            self.actuator.drive(lines, true);
            Outcome::Continue
        } else {
            Outcome::Divert
        }
    }
}
