//! Key bindings and axis gains for the keyboard mapper.

use std::error::Error;
use std::fmt;

use crate::key::{Axis, Key};

// ── AxisConfig ─────────────────────────────────────────────────────

/// Bindings and gain for one control axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisConfig {
    /// Key driving the axis in the positive direction.
    pub positive: Key,
    /// Key driving the axis in the negative direction.
    pub negative: Key,
    /// Scale applied to the axis before mixing. Must lie in `(0, 1]`.
    pub gain: f64,
}

impl AxisConfig {
    /// Bindings with unit gain.
    pub const fn new(positive: Key, negative: Key) -> Self {
        Self {
            positive,
            negative,
            gain: 1.0,
        }
    }
}

// ── TeleopConfig ───────────────────────────────────────────────────

/// Keyboard mapper configuration.
///
/// Defaults: `W/S` surge, `D/A` strafe, `ArrowUp/ArrowDown` heave, `E/Q`
/// yaw, `R/F` pitch, `Escape` to quit, every gain `1.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct TeleopConfig {
    /// Forward/backward.
    pub surge: AxisConfig,
    /// Right/left.
    pub strafe: AxisConfig,
    /// Up/down.
    pub heave: AxisConfig,
    /// Turn right/left.
    pub yaw: AxisConfig,
    /// Nose up/down.
    pub pitch: AxisConfig,
    /// Stops the mapper.
    pub quit: Key,
}

impl Default for TeleopConfig {
    fn default() -> Self {
        Self {
            surge: AxisConfig::new(Key::Char('w'), Key::Char('s')),
            strafe: AxisConfig::new(Key::Char('d'), Key::Char('a')),
            heave: AxisConfig::new(Key::ArrowUp, Key::ArrowDown),
            yaw: AxisConfig::new(Key::Char('e'), Key::Char('q')),
            pitch: AxisConfig::new(Key::Char('r'), Key::Char('f')),
            quit: Key::Escape,
        }
    }
}

impl TeleopConfig {
    /// Configuration for one axis.
    pub fn axis(&self, axis: Axis) -> &AxisConfig {
        match axis {
            Axis::Surge => &self.surge,
            Axis::Strafe => &self.strafe,
            Axis::Heave => &self.heave,
            Axis::Yaw => &self.yaw,
            Axis::Pitch => &self.pitch,
        }
    }

    /// Mutable configuration for one axis.
    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisConfig {
        match axis {
            Axis::Surge => &mut self.surge,
            Axis::Strafe => &mut self.strafe,
            Axis::Heave => &mut self.heave,
            Axis::Yaw => &mut self.yaw,
            Axis::Pitch => &mut self.pitch,
        }
    }

    /// Every bound key: two per axis, then quit.
    pub fn bound_keys(&self) -> impl Iterator<Item = Key> + '_ {
        Axis::all()
            .iter()
            .flat_map(|&axis| {
                let cfg = self.axis(axis);
                [cfg.positive, cfg.negative]
            })
            .chain(std::iter::once(self.quit))
    }

    /// Whether `key` is bound to an axis or to quit.
    pub fn is_bound(&self, key: Key) -> bool {
        self.bound_keys().any(|k| k == key)
    }

    /// The same configuration with every character binding case-folded.
    pub fn folded(mut self) -> Self {
        for &axis in Axis::all() {
            let cfg = self.axis_mut(axis);
            cfg.positive = cfg.positive.folded();
            cfg.negative = cfg.negative.folded();
        }
        self.quit = self.quit.folded();
        self
    }

    /// Check that gains are in range and no key is bound twice.
    pub fn validate(&self) -> Result<(), TeleopConfigError> {
        for &axis in Axis::all() {
            let gain = self.axis(axis).gain;
            if !(gain.is_finite() && gain > 0.0 && gain <= 1.0) {
                return Err(TeleopConfigError::InvalidGain { axis, value: gain });
            }
        }
        let keys: Vec<Key> = self.bound_keys().map(Key::folded).collect();
        for (i, key) in keys.iter().enumerate() {
            if keys[i + 1..].contains(key) {
                return Err(TeleopConfigError::DuplicateBinding { key: *key });
            }
        }
        Ok(())
    }
}

// ── TeleopConfigError ──────────────────────────────────────────────

/// Errors detected by [`TeleopConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
pub enum TeleopConfigError {
    /// A gain is outside `(0, 1]` or not finite.
    InvalidGain {
        /// The offending axis.
        axis: Axis,
        /// The rejected gain.
        value: f64,
    },
    /// The same key is bound more than once.
    DuplicateBinding {
        /// The key bound twice.
        key: Key,
    },
}

impl fmt::Display for TeleopConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGain { axis, value } => {
                write!(f, "{axis} gain must be in (0, 1], got {value}")
            }
            Self::DuplicateBinding { key } => write!(f, "key {key} is bound more than once"),
        }
    }
}

impl Error for TeleopConfigError {}
