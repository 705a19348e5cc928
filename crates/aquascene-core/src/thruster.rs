//! The thruster channel contract shared by the scenario's vehicle and the
//! keyboard mapper.
//!
//! Channel layout of the BlueROV2-class vehicle:
//!
//! | Channels | Thrusters | Axes driven |
//! |----------|-----------|-------------|
//! | 0..4 | vertical (front-left, front-right, rear-left, rear-right) | heave, pitch |
//! | 4..8 | vectored horizontal (front-left, front-right, rear-left, rear-right) | surge, strafe, yaw |

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Number of thruster channels on the vehicle.
pub const THRUSTER_CHANNELS: usize = 8;

/// Lower and upper bound of a single channel command.
pub const THRUST_LIMIT: f64 = 1.0;

/// One tick's thrust command, one value per channel in `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThrusterCommand([f64; THRUSTER_CHANNELS]);

impl ThrusterCommand {
    /// All channels idle.
    pub const ZERO: Self = Self([0.0; THRUSTER_CHANNELS]);

    /// Build a command, clamping each channel to `[-1, 1]`.
    ///
    /// NaN channels are treated as idle.
    pub fn clamped(channels: [f64; THRUSTER_CHANNELS]) -> Self {
        Self(channels.map(|c| {
            if c.is_nan() {
                0.0
            } else {
                c.clamp(-THRUST_LIMIT, THRUST_LIMIT)
            }
        }))
    }

    /// The per-channel values.
    pub fn channels(&self) -> &[f64; THRUSTER_CHANNELS] {
        &self.0
    }

    /// Returns `true` if every channel is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0.0)
    }
}

impl Index<usize> for ThrusterCommand {
    type Output = f64;

    fn index(&self, channel: usize) -> &f64 {
        &self.0[channel]
    }
}
