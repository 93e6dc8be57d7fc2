//! Common types shared by the sampler and actuator tasks
//!
//! The button line is pulled up, so it reads 1 when released and 0 while
//! pressed. The LED is active high, which makes the output the logical
//! inverse of the sampled input.

use embedded_hal::digital::PinState;

/// Level sampled from the button line once per period
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum InputState {
    /// Line pulled to ground (reads 0)
    Pressed = 0,
    /// Line held high by the pull-up (reads 1)
    Released = 1,
}

impl InputState {
    /// Map a raw line level to a button state.
    pub const fn from_level(is_high: bool) -> Self {
        if is_high {
            Self::Released
        } else {
            Self::Pressed
        }
    }

    /// Decode a raw GPIO read. Any nonzero value counts as high.
    pub const fn from_bit(bit: u8) -> Self {
        Self::from_level(bit != 0)
    }

    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::Pressed)
    }
}

/// Level driven onto the LED line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OutputState {
    Off = 0,
    On = 1,
}

impl OutputState {
    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Pin level for an active-high LED
    pub const fn level(self) -> PinState {
        match self {
            Self::On => PinState::High,
            Self::Off => PinState::Low,
        }
    }
}

impl From<InputState> for OutputState {
    // Pressed (0) lights the LED (1); released (1) turns it off (0).
    fn from(input: InputState) -> Self {
        match input {
            InputState::Pressed => Self::On,
            InputState::Released => Self::Off,
        }
    }
}

/// Application version information
pub struct AppVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl AppVersion {
    pub const fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self { major, minor, patch }
    }

    pub fn as_str(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

/// Parse one decimal component of the package version at compile time.
const fn version_field(digits: &str) -> u8 {
    let bytes = digits.as_bytes();
    let mut value: u8 = 0;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0');
        i += 1;
    }
    value
}

/// Current application version, taken from the package manifest
pub const APP_VERSION: AppVersion = AppVersion::new(
    version_field(env!("CARGO_PKG_VERSION_MAJOR")),
    version_field(env!("CARGO_PKG_VERSION_MINOR")),
    version_field(env!("CARGO_PKG_VERSION_PATCH")),
);
