//! The caller-driven tick loop.
//!
//! Each tick runs four steps in order on the calling thread: drain pending
//! input into the mapper, compute the command, hand it to the host, and
//! collect the observation. Nothing blocks except the host's own `step`.

use crossbeam_channel::Receiver;
use tracing::{debug, info};

use aquascene_core::{SimulationHost, ThrusterCommand};

use crate::key::InputEvent;
use crate::mapper::{KeyboardMapper, MapperState};

/// What one tick produced.
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutcome<O> {
    /// Zero-based tick index.
    pub tick: u64,
    /// Events consumed before computing the command.
    pub events: usize,
    /// Command sent to the host.
    pub command: ThrusterCommand,
    /// Observation the host returned.
    pub observation: O,
    /// Mapper state after the tick's input was applied.
    pub state: MapperState,
}

/// Why [`ControlLoop::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopExit {
    /// The mapper stopped.
    Stopped,
    /// The tick limit was reached first.
    TickLimit,
}

/// Totals from a [`ControlLoop::run`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopSummary {
    /// Ticks executed during this run.
    pub ticks: u64,
    /// Input events consumed during this run.
    pub events: usize,
    /// Last command sent, or zero if no tick ran.
    pub last_command: ThrusterCommand,
    /// Exit reason.
    pub exit: LoopExit,
}

/// Drives a [`SimulationHost`] from keyboard input.
pub struct ControlLoop<H> {
    mapper: KeyboardMapper,
    host: H,
    events: Receiver<InputEvent>,
    tick: u64,
}

impl<H: SimulationHost> ControlLoop<H> {
    /// Wire a mapper, a host and an input channel together.
    pub fn new(mapper: KeyboardMapper, host: H, events: Receiver<InputEvent>) -> Self {
        Self {
            mapper,
            host,
            events,
            tick: 0,
        }
    }

    /// The mapper.
    pub fn mapper(&self) -> &KeyboardMapper {
        &self.mapper
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Ticks executed so far.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Tear the loop apart, returning the host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Run one tick.
    pub fn run_tick(&mut self) -> Result<TickOutcome<H::Observation>, H::Error> {
        let events = self.mapper.drain(&self.events);
        let command = self.mapper.compute_command_vector();
        let observation = self.host.step(&command)?;
        let outcome = TickOutcome {
            tick: self.tick,
            events,
            command,
            observation,
            state: self.mapper.state(),
        };
        debug!(tick = self.tick, events, state = ?outcome.state, "tick complete");
        self.tick += 1;
        Ok(outcome)
    }

    /// Tick until the mapper stops or `limit` ticks have run.
    ///
    /// The tick on which the mapper stops still runs, sending the zero
    /// command so the vehicle is left idle.
    pub fn run(&mut self, limit: Option<u64>) -> Result<LoopSummary, H::Error> {
        self.run_with(limit, |_| {})
    }

    /// Like [`run`](Self::run), handing every outcome to `on_tick`.
    pub fn run_with<F>(&mut self, limit: Option<u64>, mut on_tick: F) -> Result<LoopSummary, H::Error>
    where
        F: FnMut(&TickOutcome<H::Observation>),
    {
        let mut summary = LoopSummary {
            ticks: 0,
            events: 0,
            last_command: ThrusterCommand::ZERO,
            exit: LoopExit::TickLimit,
        };
        loop {
            if limit.is_some_and(|l| summary.ticks >= l) {
                break;
            }
            let outcome = self.run_tick()?;
            summary.ticks += 1;
            summary.events += outcome.events;
            summary.last_command = outcome.command;
            on_tick(&outcome);
            if outcome.state == MapperState::Stopped {
                summary.exit = LoopExit::Stopped;
                break;
            }
        }
        info!(
            ticks = summary.ticks,
            events = summary.events,
            exit = ?summary.exit,
            "control loop finished"
        );
        Ok(summary)
    }
}
