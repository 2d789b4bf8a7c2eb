use crate::sample::RawButtonSample;
use crate::timing::DEBOUNCE_TICKS;

/// Confirms a button state once it has been sampled unchanged for
/// [`DEBOUNCE_TICKS`] consecutive ticks.
///
/// Every raw change restarts the window, so a bouncing contact never gets
/// through. While the state stays put the debouncer keeps confirming it, once
/// per window; those confirmations are the debounced ticks the gesture machine
/// runs on.
#[derive(Debug, Clone)]
pub struct Debouncer {
    count: u8,
    stable: RawButtonSample,
}

impl Debouncer {
    pub fn new() -> Self {
        Self {
            count: 0,
            stable: RawButtonSample::RELEASED,
        }
    }

    /// Feeds one raw sample. Returns `true` when the held sample has just been
    /// confirmed, which happens on the [`DEBOUNCE_TICKS`]th repeat after the
    /// last change and then again every [`DEBOUNCE_TICKS`] ticks.
    pub fn debounce(&mut self, sample: RawButtonSample) -> bool {
        if sample != self.stable {
            // Only a candidate until it has been seen for a full window.
            self.count = 0;
            self.stable = sample;
            return false;
        }

        self.count += 1;
        if self.count >= DEBOUNCE_TICKS {
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// The sample currently being held, confirmed or not.
    pub fn stable(&self) -> RawButtonSample {
        self.stable
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
