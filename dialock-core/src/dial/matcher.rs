//! Secret sequence matching
//!
//! Digits are checked one at a time in dial order. There is no backspace:
//! the position only moves forward, and only on a match.

use crate::config::Secret;

/// Result of checking one digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatchResult {
    /// Digit matched, more digits expected
    Partial,
    /// Digit matched and completed the secret
    Complete,
    /// Digit did not match
    Mismatch,
}

/// Tracks progress through the secret
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceMatcher {
    pos: usize,
}

impl SequenceMatcher {
    /// Start at the first digit
    pub const fn new() -> Self {
        Self { pos: 0 }
    }

    /// Number of digits matched so far
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check an ASCII digit against the secret at the current position
    ///
    /// A match advances the position. A mismatch, or a digit after the
    /// secret is already complete, leaves it unchanged.
    pub fn check(&mut self, secret: &Secret, digit: u8) -> MatchResult {
        match secret.digit_at(self.pos) {
            Some(expected) if expected == digit => {
                self.pos += 1;
                if self.pos == secret.len() {
                    MatchResult::Complete
                } else {
                    MatchResult::Partial
                }
            }
            _ => MatchResult::Mismatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_match() {
        let secret = Secret::parse("30954").unwrap();
        let mut matcher = SequenceMatcher::new();

        for &d in b"3095" {
            assert_eq!(matcher.check(&secret, d), MatchResult::Partial);
        }
        assert_eq!(matcher.check(&secret, b'4'), MatchResult::Complete);
        assert_eq!(matcher.position(), 5);
    }

    #[test]
    fn test_mismatch_keeps_position() {
        let secret = Secret::parse("30954").unwrap();
        let mut matcher = SequenceMatcher::new();

        assert_eq!(matcher.check(&secret, b'3'), MatchResult::Partial);
        assert_eq!(matcher.check(&secret, b'1'), MatchResult::Mismatch);
        assert_eq!(matcher.position(), 1);
    }

    #[test]
    fn test_single_digit_secret() {
        let secret = Secret::parse("7").unwrap();
        let mut matcher = SequenceMatcher::new();
        assert_eq!(matcher.check(&secret, b'7'), MatchResult::Complete);
    }

    #[test]
    fn test_digit_past_end_is_mismatch() {
        let secret = Secret::parse("1").unwrap();
        let mut matcher = SequenceMatcher::new();
        assert_eq!(matcher.check(&secret, b'1'), MatchResult::Complete);
        assert_eq!(matcher.check(&secret, b'1'), MatchResult::Mismatch);
        assert_eq!(matcher.position(), 1);
    }
}
