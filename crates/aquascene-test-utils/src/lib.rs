//! Test utilities and mock types for Aquascene development.
//!
//! Provides [`RecordingHost`], a [`SimulationHost`] that records every
//! command it receives, and scenario fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::error::Error;
use std::fmt;

use aquascene_core::{SimulationHost, ThrusterCommand};

/// Observation returned by [`RecordingHost`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MockObservation {
    /// Tick index the host just completed.
    pub tick: u64,
    /// Sum of all channels of the applied command.
    pub net_thrust: f64,
}

/// Failure injected into [`RecordingHost`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockHostError {
    pub tick: u64,
}

impl fmt::Display for MockHostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mock host failed at tick {}", self.tick)
    }
}

impl Error for MockHostError {}

/// In-process stand-in for the simulation host.
///
/// Records every command. Optionally fails on a chosen tick via
/// [`fail_at`](RecordingHost::fail_at).
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    commands: Vec<ThrusterCommand>,
    fail_at: Option<u64>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the step with this zero-based tick index.
    pub fn fail_at(mut self, tick: u64) -> Self {
        self.fail_at = Some(tick);
        self
    }

    /// Commands received so far, in order.
    pub fn commands(&self) -> &[ThrusterCommand] {
        &self.commands
    }

    pub fn steps(&self) -> usize {
        self.commands.len()
    }
}

impl SimulationHost for RecordingHost {
    type Observation = MockObservation;
    type Error = MockHostError;

    fn step(&mut self, command: &ThrusterCommand) -> Result<MockObservation, MockHostError> {
        let tick = self.commands.len() as u64;
        if self.fail_at == Some(tick) {
            return Err(MockHostError { tick });
        }
        self.commands.push(*command);
        Ok(MockObservation {
            tick,
            net_thrust: command.channels().iter().sum(),
        })
    }
}
