use std::sync::mpsc::{SyncSender, TrySendError};

use crate::debouncer::Debouncer;
use crate::gesture::{Gesture, GestureMachine};
use crate::sample::{ButtonSource, RawButtonSample};

/// Receives gestures as they change. Called from the tick context, so it must
/// return quickly and must not call back into the dispatcher.
pub trait GestureSink {
    fn report(&mut self, gesture: Gesture);
}

impl<F> GestureSink for F
where
    F: FnMut(Gesture),
{
    fn report(&mut self, gesture: Gesture) {
        self(gesture)
    }
}

/// Hands gestures to another thread. A full or disconnected channel drops the
/// gesture instead of stalling the tick; drops are counted.
pub struct ChannelSink {
    sender: SyncSender<Gesture>,
    dropped: u32,
}

impl ChannelSink {
    pub fn new(sender: SyncSender<Gesture>) -> Self {
        Self { sender, dropped: 0 }
    }

    /// Gestures lost to a full or closed channel. Saturates.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl GestureSink for ChannelSink {
    fn report(&mut self, gesture: Gesture) {
        match self.sender.try_send(gesture) {
            Ok(()) => return,
            Err(TrySendError::Full(gesture)) => {
                ::log::warn!("Gesture queue full, dropping {}", gesture);
            }
            Err(TrySendError::Disconnected(gesture)) => {
                ::log::warn!("Gesture receiver gone, dropping {}", gesture);
            }
        }
        self.dropped = self.dropped.saturating_add(1);
    }
}

/// Runs the debouncer and the gesture machine of one button pair, once per
/// raw tick, and reports each gesture change to the sink.
pub struct Dispatcher<S: GestureSink> {
    debouncer: Debouncer,
    machine: GestureMachine,
    last_reported: Gesture,
    debounced_ticks: u32,
    sink: S,
}

impl<S: GestureSink> Dispatcher<S> {
    pub fn new(sink: S) -> Self {
        Self {
            debouncer: Debouncer::new(),
            machine: GestureMachine::new(),
            last_reported: Gesture::Idle,
            debounced_ticks: 0,
            sink,
        }
    }

    /// Polls `source` and processes the sample. Source errors are passed on
    /// untouched and leave the dispatcher as it was.
    pub fn on_tick<B: ButtonSource>(
        &mut self,
        source: &mut B,
    ) -> Result<Option<Gesture>, B::Error> {
        let sample = source.sample()?;
        Ok(self.feed(sample))
    }

    /// Processes one raw tick. Returns the gesture reported on this tick, if
    /// any.
    ///
    /// The gesture machine only advances when the debouncer confirms the
    /// sample; its timers run on those confirmations, not on raw ticks.
    pub fn feed(&mut self, sample: RawButtonSample) -> Option<Gesture> {
        if !self.debouncer.debounce(sample) {
            return None;
        }

        self.debounced_ticks = self.debounced_ticks.wrapping_add(1);
        let gesture = self.machine.step(sample);
        if gesture == self.last_reported {
            return None;
        }

        self.last_reported = gesture;
        self.sink.report(gesture);
        Some(gesture)
    }

    pub fn last_reported(&self) -> Gesture {
        self.last_reported
    }

    /// Number of confirmed samples so far, the clock of the gesture machine.
    /// Wraps around.
    pub fn debounced_ticks(&self) -> u32 {
        self.debounced_ticks
    }

    pub fn machine(&self) -> &GestureMachine {
        &self.machine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn reset(&mut self) {
        self.debouncer.reset();
        self.machine.reset();
        self.last_reported = Gesture::Idle;
        self.debounced_ticks = 0;
    }
}
