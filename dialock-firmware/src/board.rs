//! Board pin assignment
//!
//! Pin assignments for a Raspberry Pi Pico wired to the dial:
//!
//! | Line      | GPIO | Setup            |
//! |-----------|------|------------------|
//! | DIAL      | 2    | input, pull-up   |
//! | PULSE     | 3    | input, pull-up   |
//! | CTRL      | 4    | input, pull-up   |
//! | CHECK     | 6    | output, low      |
//! | RELAY     | 7    | output, low      |
//! | INDICATOR | 25   | output, low (LED)|

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;

use dialock_hal::{EhInput, EhOutput, PinLines};

type LineIn = EhInput<Input<'static>>;
type LineOut = EhOutput<Output<'static>>;

/// The six lock lines bound to RP2040 GPIOs
pub type BoardLines = PinLines<LineIn, LineIn, LineIn, LineOut, LineOut, LineOut>;

/// Configure the lock lines
///
/// Inputs get pull-ups so an open contact idles high; outputs start low
/// so the relay stays released until the FSM decides otherwise.
pub fn init_lines(p: Peripherals) -> BoardLines {
    let dial = EhInput::new(Input::new(p.PIN_2, Pull::Up));
    let pulse = EhInput::new(Input::new(p.PIN_3, Pull::Up));
    let ctrl = EhInput::new(Input::new(p.PIN_4, Pull::Up));

    let check = EhOutput::new(Output::new(p.PIN_6, Level::Low), false);
    let relay = EhOutput::new(Output::new(p.PIN_7, Level::Low), false);
    let indicator = EhOutput::new(Output::new(p.PIN_25, Level::Low), false);

    PinLines::new(dial, pulse, ctrl, check, relay, indicator)
}
