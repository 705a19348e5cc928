//! Keys, input events and control axes.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A keyboard key the mapper can bind.
///
/// Character keys are stored lowercase; build them with [`Key::char`] so
/// `'W'` and `'w'` bind the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key, lowercase.
    Char(char),
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Escape.
    Escape,
}

impl Key {
    /// A character key, case-folded.
    pub fn char(c: char) -> Self {
        Self::Char(c.to_ascii_lowercase())
    }

    /// This key with any character case-folded, so `Char('W')` and
    /// `Char('w')` compare equal after folding.
    pub fn folded(self) -> Self {
        match self {
            Self::Char(c) => Self::char(c),
            other => other,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Self::ArrowUp => f.write_str("ArrowUp"),
            Self::ArrowDown => f.write_str("ArrowDown"),
            Self::ArrowLeft => f.write_str("ArrowLeft"),
            Self::ArrowRight => f.write_str("ArrowRight"),
            Self::Escape => f.write_str("Escape"),
        }
    }
}

/// A key name that [`Key::from_str`] does not recognize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}'", self.0)
    }
}

impl Error for UnknownKey {}

impl FromStr for Key {
    type Err = UnknownKey;

    /// Parses `ArrowUp`, `ArrowDown`, `ArrowLeft`, `ArrowRight`, `Escape`,
    /// or a single character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowUp" => Ok(Self::ArrowUp),
            "ArrowDown" => Ok(Self::ArrowDown),
            "ArrowLeft" => Ok(Self::ArrowLeft),
            "ArrowRight" => Ok(Self::ArrowRight),
            "Escape" => Ok(Self::Escape),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Self::char(c)),
                    _ => Err(UnknownKey(s.to_string())),
                }
            }
        }
    }
}

/// One event from the input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down.
    KeyPress(Key),
    /// A key came up.
    KeyRelease(Key),
    /// The input window was closed.
    WindowClose,
}

/// A vehicle control axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Forward/backward.
    Surge,
    /// Right/left.
    Strafe,
    /// Up/down.
    Heave,
    /// Turn right/left.
    Yaw,
    /// Nose up/down.
    Pitch,
}

impl Axis {
    const ALL: [Axis; 5] = [
        Axis::Surge,
        Axis::Strafe,
        Axis::Heave,
        Axis::Yaw,
        Axis::Pitch,
    ];

    /// Every axis.
    pub fn all() -> &'static [Axis] {
        &Self::ALL
    }

    /// Lowercase axis name.
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Surge => "surge",
            Axis::Strafe => "strafe",
            Axis::Heave => "heave",
            Axis::Yaw => "yaw",
            Axis::Pitch => "pitch",
        }
    }

    /// Per-thruster coefficients for a positive unit input on this axis.
    ///
    /// Channels 0..4 are the vertical thrusters, 4..8 the vectored
    /// horizontal ones.
    pub fn mixing(self) -> [f64; 8] {
        match self {
            Axis::Surge => [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
            Axis::Strafe => [0.0, 0.0, 0.0, 0.0, -1.0, 1.0, -1.0, 1.0],
            Axis::Heave => [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0],
            Axis::Yaw => [0.0, 0.0, 0.0, 0.0, 1.0, -1.0, -1.0, 1.0],
            Axis::Pitch => [-1.0, -1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
