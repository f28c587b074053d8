//! Named lock lines
//!
//! The lock hardware is six digital signals. Inputs idle high through
//! pull-ups, so an active contact reads low. Outputs power up low.
//!
//! | Line      | Direction | Idle | Active meaning                       |
//! |-----------|-----------|------|--------------------------------------|
//! | DIAL      | input     | high | low while the dial rests             |
//! | PULSE     | input     | high | low for each dial pulse              |
//! | CTRL      | input     | high | low = override, inverts the relay    |
//! | CHECK     | output    | low  | high while the reader is armed       |
//! | RELAY     | output    | low  | high energises the lock              |
//! | INDICATOR | output    | low  | high mirrors the intended open state |

use crate::gpio::{InputPin, OutputPin};

/// Input lines read by the lock logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputLine {
    /// Off-normal contact of the rotary dial
    Dial,
    /// Pulse line, drops low once per counted pulse
    Pulse,
    /// Physical override / presence input
    Ctrl,
}

/// Output lines driven by the lock logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputLine {
    /// Armed signal back to the dial
    Check,
    /// Lock relay
    Relay,
    /// Status LED
    Indicator,
}

/// Named boolean access to the lock lines
///
/// Reads return the raw electrical level; the provided methods translate
/// levels into what the contacts mean.
pub trait LineInterface {
    /// Read the raw level of an input line
    fn is_high(&mut self, line: InputLine) -> bool;

    /// Drive an output line
    fn set(&mut self, line: OutputLine, high: bool);

    /// Check if an input line reads low
    fn is_low(&mut self, line: InputLine) -> bool {
        !self.is_high(line)
    }

    /// Dial has returned to its rest position
    fn dial_at_rest(&mut self) -> bool {
        self.is_low(InputLine::Dial)
    }

    /// Pulse line is at its idle level (between pulses)
    fn pulse_idle(&mut self) -> bool {
        self.is_high(InputLine::Pulse)
    }

    /// Override input is pulling CTRL low
    fn override_active(&mut self) -> bool {
        self.is_low(InputLine::Ctrl)
    }
}

/// Six individual pins bound as a [`LineInterface`]
pub struct PinLines<D, P, C, K, R, I> {
    pub dial: D,
    pub pulse: P,
    pub ctrl: C,
    pub check: K,
    pub relay: R,
    pub indicator: I,
}

impl<D, P, C, K, R, I> PinLines<D, P, C, K, R, I>
where
    D: InputPin,
    P: InputPin,
    C: InputPin,
    K: OutputPin,
    R: OutputPin,
    I: OutputPin,
{
    /// Bind pins that have already been configured (pull-ups on inputs,
    /// outputs low)
    pub fn new(dial: D, pulse: P, ctrl: C, check: K, relay: R, indicator: I) -> Self {
        Self {
            dial,
            pulse,
            ctrl,
            check,
            relay,
            indicator,
        }
    }

    /// Current level of an output line
    pub fn output_level(&self, line: OutputLine) -> bool {
        match line {
            OutputLine::Check => self.check.is_set_high(),
            OutputLine::Relay => self.relay.is_set_high(),
            OutputLine::Indicator => self.indicator.is_set_high(),
        }
    }
}

impl<D, P, C, K, R, I> LineInterface for PinLines<D, P, C, K, R, I>
where
    D: InputPin,
    P: InputPin,
    C: InputPin,
    K: OutputPin,
    R: OutputPin,
    I: OutputPin,
{
    fn is_high(&mut self, line: InputLine) -> bool {
        match line {
            InputLine::Dial => self.dial.is_high(),
            InputLine::Pulse => self.pulse.is_high(),
            InputLine::Ctrl => self.ctrl.is_high(),
        }
    }

    fn set(&mut self, line: OutputLine, high: bool) {
        match line {
            OutputLine::Check => self.check.set_state(high),
            OutputLine::Relay => self.relay.set_state(high),
            OutputLine::Indicator => self.indicator.set_state(high),
        }
    }
}
