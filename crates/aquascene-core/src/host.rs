//! The boundary to the external simulation host.

use crate::thruster::ThrusterCommand;

/// A running simulation that advances one tick per command.
///
/// The host is a black box: it was started with an exported scenario and,
/// each tick, applies the main agent's thruster command and returns an
/// observation bundle that the core never interprets.
pub trait SimulationHost {
    /// Sensor observations returned by one tick.
    type Observation;
    /// Failure reported by the host.
    type Error: std::error::Error;

    /// Apply `command` to the main agent and advance one tick.
    fn step(&mut self, command: &ThrusterCommand) -> Result<Self::Observation, Self::Error>;
}
