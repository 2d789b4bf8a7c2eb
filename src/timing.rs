//! Tick cadence and the thresholds that only make sense relative to it.
//!
//! The buttons are polled from a periodic timer at [`TICK_RATE`]. The debouncer
//! counts raw ticks, the gesture machine counts *debounced* ticks (one every
//! [`DEBOUNCE_TICKS`] stable raw ticks). Changing the cadence means rescaling
//! all of these together.

use embedded_time::duration::{Microseconds, Milliseconds};
use embedded_time::rate::Hertz;

/// Polling frequency of the button pins.
///
/// 16 MHz oscillator, 4 MHz instruction clock, timer period 100, postscaler 10.
pub const TICK_RATE: Hertz = Hertz(4_000);

/// Time between two raw ticks.
pub const TICK_PERIOD: Microseconds = Microseconds(1_000_000 / TICK_RATE.0);

/// Consecutive identical raw samples required before a state is confirmed.
/// 250 us * 200 = 50 ms.
pub const DEBOUNCE_TICKS: u8 = 200;

/// Wall-clock length of one debounced tick.
pub const DEBOUNCED_TICK_PERIOD: Milliseconds =
    Milliseconds(TICK_PERIOD.0 * DEBOUNCE_TICKS as u32 / 1_000);

/// Debounced ticks with both buttons held before the SAVE gesture fires (3 s).
pub const SAVE_HOLD_TICKS: u8 = 60;

/// Debounced ticks during which a second press counts as a double click.
///
/// The value is 10 (500 ms at 20 debounced ticks per second), not the 20 an
/// older comment suggested for a one second window.
pub const DOUBLE_CLICK_WINDOW_TICKS: u8 = 10;

/// Converts a number of debounced ticks into milliseconds.
pub fn debounced_ticks_to_millis(ticks: u32) -> Milliseconds {
    Milliseconds(ticks.saturating_mul(DEBOUNCED_TICK_PERIOD.0))
}

/// Period of the polling timer as a `std` duration, for timer services.
pub fn tick_period() -> std::time::Duration {
    std::time::Duration::from_micros(TICK_PERIOD.0 as u64)
}
