//! Pulse counting and digit decoding
//!
//! The pulse counter also counts the edge seen when the dial first leaves
//! rest, so a digit of `n` pulses arrives as a count of `n + 1`. Ten
//! pulses encode the digit 0.

/// Smallest count that carries a digit
pub const MIN_DIGIT_COUNT: u8 = 2;

/// Decode a pulse count into an ASCII digit
///
/// Returns `None` for counts of 0 or 1, which carry no digit. Otherwise
/// the digit is `(count - 1) mod 10`.
pub fn decode_digit(count: u8) -> Option<u8> {
    if count < MIN_DIGIT_COUNT {
        return None;
    }
    Some(b'0' + (count - 1) % 10)
}

/// Pulse counter for the digit currently being dialed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseCounter {
    count: u8,
}

impl PulseCounter {
    /// Create an empty counter
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Count one pulse edge
    pub fn record(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Pulses counted so far
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Decode the current count without clearing it
    pub fn digit(&self) -> Option<u8> {
        decode_digit(self.count)
    }

    /// Start counting a new digit
    pub fn clear(&mut self) {
        self.count = 0;
    }
}
