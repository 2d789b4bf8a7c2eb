//! Debounced gesture detection for a pair of push buttons.
//!
//! Each timer tick the [`Dispatcher`] samples both buttons, runs the samples
//! through a [`Debouncer`] and, on every confirmed state, through a
//! [`GestureMachine`] that recognises single presses, double clicks and a long
//! two-button hold. Gesture changes go to a [`GestureSink`].

pub mod debouncer;
pub mod dispatcher;
pub mod gesture;
pub mod report;
pub mod sample;
pub mod timing;

pub use debouncer::Debouncer;
pub use dispatcher::{ChannelSink, Dispatcher, GestureSink};
pub use gesture::{Gesture, GestureMachine};
pub use report::{GestureReport, Reporter};
pub use sample::{ButtonSource, PinPair, Pressed, RawButtonSample};
