use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::gesture::Gesture;

/// A gesture as published to remote listeners.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GestureReport {
    pub sequence: u32,
    pub gesture: Gesture,
    pub code: u8,
    pub uptime_ms: u64,
}

impl GestureReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Numbers outgoing reports so gaps show up on the receiving side.
#[derive(Debug, Default)]
pub struct Reporter {
    sequence: u32,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, gesture: Gesture, uptime: Duration) -> GestureReport {
        let report = GestureReport {
            sequence: self.sequence,
            gesture,
            code: gesture.into(),
            uptime_ms: uptime.as_millis() as u64,
        };
        self.sequence = self.sequence.wrapping_add(1);
        report
    }
}
