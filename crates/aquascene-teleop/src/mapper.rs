//! The keyboard thruster mapper.
//!
//! A two-state machine. While [`Running`](MapperState::Running) it tracks
//! the set of held bound keys and turns it into a [`ThrusterCommand`] on
//! demand. The quit key, a window close, or a disconnected input channel
//! moves it to [`Stopped`](MapperState::Stopped), which is terminal: held
//! keys are cleared, later events are ignored and every command is zero.

use crossbeam_channel::{Receiver, TryRecvError};
use smallvec::SmallVec;
use tracing::{debug, info, trace, warn};

use aquascene_core::{ThrusterCommand, THRUSTER_CHANNELS};

use crate::config::{TeleopConfig, TeleopConfigError};
use crate::key::{Axis, InputEvent, Key};

/// Lifecycle state of a [`KeyboardMapper`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapperState {
    /// Accepting input.
    Running,
    /// Terminal. Build a new mapper to resume control.
    Stopped,
}

/// Maps held keys to thruster commands.
#[derive(Clone, Debug)]
pub struct KeyboardMapper {
    config: TeleopConfig,
    held: SmallVec<[Key; 10]>,
    state: MapperState,
}

impl Default for KeyboardMapper {
    fn default() -> Self {
        Self {
            config: TeleopConfig::default(),
            held: SmallVec::new(),
            state: MapperState::Running,
        }
    }
}

impl KeyboardMapper {
    /// A running mapper with a validated configuration.
    pub fn new(config: TeleopConfig) -> Result<Self, TeleopConfigError> {
        config.validate()?;
        Ok(Self {
            config: config.folded(),
            held: SmallVec::new(),
            state: MapperState::Running,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &TeleopConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> MapperState {
        self.state
    }

    /// Returns `true` while the mapper accepts input.
    pub fn is_running(&self) -> bool {
        self.state == MapperState::Running
    }

    /// Currently held bound keys, in press order.
    pub fn held_keys(&self) -> &[Key] {
        &self.held
    }

    /// Returns `true` if `key` is currently held.
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key.folded())
    }

    /// Apply one input event and return the resulting state.
    ///
    /// Character keys are matched case-insensitively.
    pub fn handle_event(&mut self, event: InputEvent) -> MapperState {
        if self.state == MapperState::Stopped {
            warn!(?event, "input after stop ignored");
            return self.state;
        }
        let event = match event {
            InputEvent::KeyPress(key) => InputEvent::KeyPress(key.folded()),
            InputEvent::KeyRelease(key) => InputEvent::KeyRelease(key.folded()),
            InputEvent::WindowClose => InputEvent::WindowClose,
        };
        match event {
            InputEvent::WindowClose => self.stop("window closed"),
            InputEvent::KeyPress(key) if key == self.config.quit => self.stop("quit key"),
            InputEvent::KeyPress(key) if self.config.is_bound(key) => {
                if !self.held.contains(&key) {
                    debug!(%key, "key held");
                    self.held.push(key);
                }
            }
            InputEvent::KeyRelease(key) if self.config.is_bound(key) => {
                if let Some(pos) = self.held.iter().position(|&k| k == key) {
                    debug!(%key, "key released");
                    self.held.remove(pos);
                }
            }
            InputEvent::KeyPress(key) | InputEvent::KeyRelease(key) => {
                warn!(%key, "unbound key ignored");
            }
        }
        self.state
    }

    /// Consume every pending event on `events` without blocking.
    ///
    /// A disconnected channel stops the mapper. Returns the number of events
    /// consumed.
    pub fn drain(&mut self, events: &Receiver<InputEvent>) -> usize {
        let mut consumed = 0;
        loop {
            match events.try_recv() {
                Ok(event) => {
                    self.handle_event(event);
                    consumed += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.is_running() {
                        self.stop("input source disconnected");
                    }
                    break;
                }
            }
        }
        consumed
    }

    /// Signed unit input on `axis`: `+1`, `-1`, or `0` when neither or both
    /// keys are held.
    pub fn axis_input(&self, axis: Axis) -> f64 {
        let cfg = self.config.axis(axis);
        match (self.is_held(cfg.positive), self.is_held(cfg.negative)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Mix the held keys into one thruster command. Zero once stopped.
    pub fn compute_command_vector(&self) -> ThrusterCommand {
        if self.state == MapperState::Stopped {
            return ThrusterCommand::ZERO;
        }
        let mut channels = [0.0; THRUSTER_CHANNELS];
        for &axis in Axis::all() {
            let input = self.axis_input(axis) * self.config.axis(axis).gain;
            if input == 0.0 {
                continue;
            }
            for (channel, coeff) in channels.iter_mut().zip(axis.mixing()) {
                *channel += input * coeff;
            }
        }
        let command = ThrusterCommand::clamped(channels);
        trace!(channels = ?command.channels(), "computed thruster command");
        command
    }

    fn stop(&mut self, reason: &'static str) {
        info!(reason, released = self.held.len(), "keyboard mapper stopped");
        self.held.clear();
        self.state = MapperState::Stopped;
    }
}
