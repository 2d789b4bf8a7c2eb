use core::fmt;

use serde::{Deserialize, Serialize};

use crate::sample::{Pressed, RawButtonSample};
use crate::timing::{DOUBLE_CLICK_WINDOW_TICKS, SAVE_HOLD_TICKS};

/// What the user did with the two buttons. Also the state of [`GestureMachine`].
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Gesture {
    #[default]
    Idle = 0,
    Up = 1,
    Down = 2,
    DoubleUp = 3,
    DoubleDown = 4,
    Save = 5,
}

impl Gesture {
    pub const ALL: [Gesture; 6] = [
        Gesture::Idle,
        Gesture::Up,
        Gesture::Down,
        Gesture::DoubleUp,
        Gesture::DoubleDown,
        Gesture::Save,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::Idle => "IDLE",
            Gesture::Up => "UP",
            Gesture::Down => "DOWN",
            Gesture::DoubleUp => "DOUBLE_UP",
            Gesture::DoubleDown => "DOUBLE_DOWN",
            Gesture::Save => "SAVE",
        }
    }
}

impl From<Gesture> for u8 {
    fn from(gesture: Gesture) -> u8 {
        gesture as u8
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turns debounced button states into gestures.
///
/// [`step`](Self::step) must be called once per debounced tick, never per raw
/// tick: the hold counter and the double-click timer both count debounced
/// ticks.
#[derive(Debug, Clone, Default)]
pub struct GestureMachine {
    gesture: Gesture,
    hold: u8,
    double_click_timer: u8,
    awaiting_second_up: bool,
    awaiting_second_down: bool,
}

impl GestureMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the machine by one debounced tick and returns the current
    /// gesture, whether it was entered now or earlier.
    pub fn step(&mut self, sample: RawButtonSample) -> Gesture {
        if self.double_click_timer > 0 {
            self.double_click_timer -= 1;
            if self.double_click_timer == 0 {
                self.awaiting_second_up = false;
                self.awaiting_second_down = false;
            }
        }

        let pressed = sample.pressed();
        let next = match self.gesture {
            Gesture::Idle => self.from_idle(pressed),
            Gesture::Up => match pressed {
                Pressed::Up => Gesture::Up,
                Pressed::Down => Gesture::Down,
                // A chord after a directional press never counts toward SAVE.
                Pressed::Both => Gesture::Idle,
                Pressed::Neither => {
                    self.awaiting_second_up = true;
                    self.double_click_timer = DOUBLE_CLICK_WINDOW_TICKS;
                    Gesture::Idle
                }
            },
            Gesture::Down => match pressed {
                Pressed::Up => Gesture::Up,
                Pressed::Down => Gesture::Down,
                Pressed::Both => Gesture::Idle,
                Pressed::Neither => {
                    self.awaiting_second_down = true;
                    self.double_click_timer = DOUBLE_CLICK_WINDOW_TICKS;
                    Gesture::Idle
                }
            },
            Gesture::Save => match pressed {
                Pressed::Both => Gesture::Save,
                _ => Gesture::Idle,
            },
            double @ (Gesture::DoubleUp | Gesture::DoubleDown) => match pressed {
                Pressed::Neither => Gesture::Idle,
                _ => double,
            },
        };

        if next != self.gesture {
            ::log::debug!("Gesture {} -> {}", self.gesture, next);
        }
        self.gesture = next;
        next
    }

    fn from_idle(&mut self, pressed: Pressed) -> Gesture {
        // Consecutive holds only; an interrupted hold starts over.
        if pressed != Pressed::Both {
            self.hold = 0;
        }

        match pressed {
            Pressed::Up if self.awaiting_second_up => {
                self.awaiting_second_up = false;
                self.double_click_timer = 0;
                Gesture::DoubleUp
            }
            Pressed::Up => Gesture::Up,
            Pressed::Down if self.awaiting_second_down => {
                self.awaiting_second_down = false;
                self.double_click_timer = 0;
                Gesture::DoubleDown
            }
            Pressed::Down => Gesture::Down,
            Pressed::Both => {
                self.hold += 1;
                if self.hold >= SAVE_HOLD_TICKS {
                    self.hold = 0;
                    Gesture::Save
                } else {
                    Gesture::Idle
                }
            }
            Pressed::Neither => Gesture::Idle,
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn hold_counter(&self) -> u8 {
        self.hold
    }

    pub fn double_click_timer(&self) -> u8 {
        self.double_click_timer
    }

    pub fn awaiting_second_up(&self) -> bool {
        self.awaiting_second_up
    }

    pub fn awaiting_second_down(&self) -> bool {
        self.awaiting_second_down
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
