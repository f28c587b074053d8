//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins, plus adapters that
//! lift any infallible `embedded-hal` 1.0 pin into them.

use core::convert::Infallible;

use embedded_hal::digital;

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Reads take `&mut self` because `embedded-hal` input pins do.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Adapter for an `embedded-hal` input pin that cannot fail
///
/// All RP2040 GPIO reads are infallible; requiring `Error = Infallible`
/// lets the adapter unwrap the result without a panic path.
pub struct EhInput<P> {
    pin: P,
}

impl<P> EhInput<P>
where
    P: digital::InputPin + digital::ErrorType<Error = Infallible>,
{
    /// Wrap an input pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> InputPin for EhInput<P>
where
    P: digital::InputPin + digital::ErrorType<Error = Infallible>,
{
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => high,
            Err(never) => match never {},
        }
    }
}

/// Adapter for an `embedded-hal` output pin that cannot fail
///
/// The last written level is cached so `is_set_high` does not need the
/// stateful output trait.
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P> EhOutput<P>
where
    P: digital::OutputPin + digital::ErrorType<Error = Infallible>,
{
    /// Wrap an output pin, driving it to `initial_high`
    pub fn new(pin: P, initial_high: bool) -> Self {
        let mut out = Self {
            pin,
            high: initial_high,
        };
        out.set_state(initial_high);
        out
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for EhOutput<P>
where
    P: digital::OutputPin + digital::ErrorType<Error = Infallible>,
{
    fn set_high(&mut self) {
        if let Err(never) = self.pin.set_high() {
            match never {}
        }
        self.high = true;
    }

    fn set_low(&mut self) {
        if let Err(never) = self.pin.set_low() {
            match never {}
        }
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
