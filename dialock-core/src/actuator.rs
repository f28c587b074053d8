//! Lock relay and indicator control
//!
//! The indicator always shows what the state machine intends. The relay
//! follows the same intention unless the CTRL override is active, in which
//! case it is inverted. The override is a hardware interlock and applies in
//! every state, including lockout.

use dialock_hal::{LineInterface, OutputLine};

/// Relay level for an intention under the override input
pub fn relay_level(open: bool, override_active: bool) -> bool {
    open != override_active
}

/// Drives the RELAY, INDICATOR and CHECK lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LockActuator {
    intended_open: bool,
}

impl LockActuator {
    /// Create an actuator with the lock intended closed
    pub const fn new() -> Self {
        Self {
            intended_open: false,
        }
    }

    /// Assert CHECK to signal the reader is armed
    pub fn arm<L: LineInterface>(&mut self, lines: &mut L) {
        lines.set(OutputLine::Check, true);
    }

    /// Drive the lock toward `open`
    ///
    /// Sets the indicator to `open`, then reads CTRL and drives the relay
    /// through [`relay_level`].
    pub fn drive<L: LineInterface>(&mut self, lines: &mut L, open: bool) {
        self.intended_open = open;
        lines.set(OutputLine::Indicator, open);

        let override_active = lines.override_active();
        lines.set(OutputLine::Relay, relay_level(open, override_active));
    }

    /// Last intention passed to [`drive`](Self::drive)
    pub fn is_open_intended(&self) -> bool {
        self.intended_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimLines;

    #[test]
    fn test_relay_level_truth_table() {
        assert!(relay_level(true, false));
        assert!(!relay_level(false, false));
        assert!(!relay_level(true, true));
        assert!(relay_level(false, true));
    }

    #[test]
    fn test_drive_without_override() {
        let mut lines = SimLines::new();
        let mut actuator = LockActuator::new();

        actuator.drive(&mut lines, true);
        assert!(lines.relay);
        assert!(lines.indicator);
        assert!(actuator.is_open_intended());

        actuator.drive(&mut lines, false);
        assert!(!lines.relay);
        assert!(!lines.indicator);
    }

    #[test]
    fn test_override_inverts_relay_only() {
        let mut lines = SimLines::new();
        lines.ctrl = false;
        let mut actuator = LockActuator::new();

        actuator.drive(&mut lines, false);
        assert!(lines.relay);
        assert!(!lines.indicator);

        actuator.drive(&mut lines, true);
        assert!(!lines.relay);
        assert!(lines.indicator);
    }

    #[test]
    fn test_arm_sets_check() {
        let mut lines = SimLines::new();
        let mut actuator = LockActuator::new();

        actuator.arm(&mut lines);
        assert!(lines.check);
        assert!(!lines.relay);
    }
}
