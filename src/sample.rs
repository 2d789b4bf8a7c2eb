use embedded_hal::digital::v2::InputPin;

/// One reading of both button lines, normalized so `true` means pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawButtonSample {
    pub up_active: bool,
    pub down_active: bool,
}

/// Which buttons a sample has pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pressed {
    Neither,
    Up,
    Down,
    Both,
}

impl RawButtonSample {
    pub const RELEASED: Self = Self::new(false, false);
    pub const UP: Self = Self::new(true, false);
    pub const DOWN: Self = Self::new(false, true);
    pub const BOTH: Self = Self::new(true, true);

    pub const fn new(up_active: bool, down_active: bool) -> Self {
        Self {
            up_active,
            down_active,
        }
    }

    /// Builds a sample from line levels. The buttons pull their line low when
    /// pressed.
    pub const fn from_active_low(up_level_high: bool, down_level_high: bool) -> Self {
        Self::new(!up_level_high, !down_level_high)
    }

    pub fn pressed(&self) -> Pressed {
        match (self.up_active, self.down_active) {
            (false, false) => Pressed::Neither,
            (true, false) => Pressed::Up,
            (false, true) => Pressed::Down,
            (true, true) => Pressed::Both,
        }
    }
}

/// Anything that can be polled for the current state of the two buttons.
pub trait ButtonSource {
    type Error;

    fn sample(&mut self) -> Result<RawButtonSample, Self::Error>;
}

/// Two GPIO inputs with pull-ups, one per button.
pub struct PinPair<U, D> {
    up: U,
    down: D,
}

impl<U, D> PinPair<U, D>
where
    U: InputPin,
    D: InputPin<Error = U::Error>,
{
    pub fn new(up: U, down: D) -> Self {
        Self { up, down }
    }
}

impl<U, D> ButtonSource for PinPair<U, D>
where
    U: InputPin,
    D: InputPin<Error = U::Error>,
{
    type Error = U::Error;

    fn sample(&mut self) -> Result<RawButtonSample, Self::Error> {
        Ok(RawButtonSample::from_active_low(
            self.up.is_high()?,
            self.down.is_high()?,
        ))
    }
}
