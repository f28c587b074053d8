//! State machine definition
//!
//! Each state's handler reports an [`Outcome`]; the next state is a pure
//! function of the current state and that outcome.

/// Lock states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Lockout: lock held closed until the next power cycle
    Reset,
    /// Waiting for the pulse line to return high, or for the dial to rest
    #[default]
    WaitRise,
    /// Counting one pulse
    CalcPulse,
    /// Waiting for the next pulse to pull the line low, or for the dial to rest
    WaitFall,
    /// Decoding the counted pulses and comparing against the secret
    CheckDig,
    /// Code accepted, relay held open
    LockOpen,
}

/// Result reported by a state handler
///
/// Each variant selects one of the three transition slots of the current
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Slot 0: keep going on the normal path
    Continue,
    /// Slot 1: an edge or milestone was reached
    Advance,
    /// Slot 2: leave the normal path (dial rested, mismatch, hold expired)
    Divert,
}

impl Outcome {
    /// Number of transition slots per state
    pub const SLOTS: u8 = 3;

    /// Decode a raw slot number; anything past the last slot is invalid
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Outcome::Continue),
            1 => Some(Outcome::Advance),
            2 => Some(Outcome::Divert),
            _ => None,
        }
    }

    /// Raw slot number
    pub fn code(self) -> u8 {
        match self {
            Outcome::Continue => 0,
            Outcome::Advance => 1,
            Outcome::Divert => 2,
        }
    }
}

impl State {
    /// State the machine powers up in
    pub const INITIAL: State = State::WaitRise;

    /// Number of states
    pub const COUNT: u8 = 6;

    /// Decode a raw state index, clamping anything out of range to `Reset`
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => State::WaitRise,
            2 => State::CalcPulse,
            3 => State::WaitFall,
            4 => State::CheckDig,
            5 => State::LockOpen,
            _ => State::Reset,
        }
    }

    /// Raw state index
    pub fn index(self) -> u8 {
        match self {
            State::Reset => 0,
            State::WaitRise => 1,
            State::CalcPulse => 2,
            State::WaitFall => 3,
            State::CheckDig => 4,
            State::LockOpen => 5,
        }
    }

    /// Check if this is the lockout sink
    pub fn is_locked_out(&self) -> bool {
        matches!(self, State::Reset)
    }

    /// Check if this state is part of reading a dialed digit
    pub fn is_dialing(&self) -> bool {
        matches!(
            self,
            State::WaitRise | State::CalcPulse | State::WaitFall | State::CheckDig
        )
    }

    /// Select the next state for a handler outcome
    ///
    /// This is the full transition table. `Reset` maps every outcome back
    /// to itself.
    pub fn transition(self, outcome: Outcome) -> Self {
        use Outcome::*;
        use State::*;

        match (self, outcome) {
            (Reset, _) => Reset,

            (WaitRise, Continue) => WaitRise,
            (WaitRise, Advance) => CalcPulse,
            (WaitRise, Divert) => CheckDig,

            (CalcPulse, _) => WaitFall,

            (WaitFall, Continue) => WaitFall,
            (WaitFall, Advance) => WaitRise,
            (WaitFall, Divert) => CheckDig,

            (CheckDig, Continue) => WaitRise,
            (CheckDig, Advance) => LockOpen,
            (CheckDig, Divert) => Reset,

            (LockOpen, Continue) => LockOpen,
            (LockOpen, Advance | Divert) => Reset,
        }
    }

    /// Select the next state for a raw outcome code
    ///
    /// Codes outside the three slots resolve to `Reset` from any state.
    pub fn transition_code(self, code: u8) -> Self {
        match Outcome::from_code(code) {
            Some(outcome) => self.transition(outcome),
            None => State::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [State; 6] = [
        State::Reset,
        State::WaitRise,
        State::CalcPulse,
        State::WaitFall,
        State::CheckDig,
        State::LockOpen,
    ];

    const ALL_OUTCOMES: [Outcome; 3] = [Outcome::Continue, Outcome::Advance, Outcome::Divert];

    #[test]
    fn test_initial_state() {
        assert_eq!(State::default(), State::WaitRise);
    }

    #[test]
    fn test_reset_is_absorbing() {
        for outcome in ALL_OUTCOMES {
            assert_eq!(State::Reset.transition(outcome), State::Reset);
        }
        for code in 0..=u8::MAX {
            assert_eq!(State::Reset.transition_code(code), State::Reset);
        }
    }

    #[test]
    fn test_transition_table() {
        use Outcome::*;
        use State::*;

        let table = [
            (WaitRise, [WaitRise, CalcPulse, CheckDig]),
            (CalcPulse, [WaitFall, WaitFall, WaitFall]),
            (WaitFall, [WaitFall, WaitRise, CheckDig]),
            (CheckDig, [WaitRise, LockOpen, Reset]),
            (LockOpen, [LockOpen, Reset, Reset]),
        ];

        for (state, row) in table {
            assert_eq!(state.transition(Continue), row[0]);
            assert_eq!(state.transition(Advance), row[1]);
            assert_eq!(state.transition(Divert), row[2]);
        }
    }

    #[test]
    fn test_out_of_range_outcome_resets() {
        for state in ALL_STATES {
            assert_eq!(state.transition_code(Outcome::SLOTS), State::Reset);
            assert_eq!(state.transition_code(0xFF), State::Reset);
        }
    }

    #[test]
    fn test_outcome_codes() {
        for outcome in ALL_OUTCOMES {
            assert_eq!(Outcome::from_code(outcome.code()), Some(outcome));
        }
        assert_eq!(Outcome::from_code(3), None);
    }

    #[test]
    fn test_state_index_clamps() {
        for state in ALL_STATES {
            assert_eq!(State::from_index(state.index()), state);
        }
        assert_eq!(State::from_index(State::COUNT), State::Reset);
        assert_eq!(State::from_index(200), State::Reset);
    }

    #[test]
    fn test_state_predicates() {
        assert!(State::Reset.is_locked_out());
        assert!(!State::LockOpen.is_locked_out());
        assert!(State::WaitFall.is_dialing());
        assert!(State::CheckDig.is_dialing());
        assert!(!State::LockOpen.is_dialing());
        assert!(!State::Reset.is_dialing());
    }
}
