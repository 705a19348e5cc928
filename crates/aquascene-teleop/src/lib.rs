//! Keyboard teleoperation for Aquascene vehicles.
//!
//! [`KeyboardMapper`] turns held keys into an eight-channel
//! [`ThrusterCommand`](aquascene_core::ThrusterCommand) through a fixed
//! mixing table. [`ControlLoop`] drives a
//! [`SimulationHost`](aquascene_core::SimulationHost) with it, one
//! tick at a time.
//!
//! Default bindings:
//!
//! | Axis | Positive | Negative |
//! |------|----------|----------|
//! | surge | `W` | `S` |
//! | strafe | `D` | `A` |
//! | heave | `ArrowUp` | `ArrowDown` |
//! | yaw | `E` | `Q` |
//! | pitch | `R` | `F` |
//!
//! `Escape` or closing the input window stops the mapper.
//!
//! ```rust
//! use aquascene_teleop::{InputEvent, Key, KeyboardMapper};
//!
//! let mut mapper = KeyboardMapper::default();
//! mapper.handle_event(InputEvent::KeyPress(Key::char('w')));
//! let cmd = mapper.compute_command_vector();
//! assert_eq!(&cmd.channels()[4..], &[1.0, 1.0, 1.0, 1.0]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod control_loop;
pub mod key;
pub mod mapper;

pub use config::{AxisConfig, TeleopConfig, TeleopConfigError};
pub use control_loop::{ControlLoop, LoopExit, LoopSummary, TickOutcome};
pub use key::{Axis, InputEvent, Key, UnknownKey};
pub use mapper::{KeyboardMapper, MapperState};
