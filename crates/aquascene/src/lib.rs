//! Aquascene: typed scenario configuration and keyboard teleoperation for
//! underwater robotics simulation.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Aquascene sub-crates. For most users, adding `aquascene` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use aquascene::prelude::*;
//!
//! let mut sensors = SensorFactory::new();
//! let sonar = sensors.imaging_sonar().set("RangeMax", 30.0).build().unwrap();
//!
//! let mut rov = VehiclePreset::bluerov2("rov0").build().unwrap();
//! rov.add_sensor(sonar).unwrap();
//!
//! let mut scenario = ScenarioBuilder::new("dam-inspection");
//! scenario
//!     .set_world(WorldId::Dam)
//!     .add_agent(rov)
//!     .unwrap()
//!     .set_main_agent("rov0");
//!
//! let export = scenario.export().unwrap();
//! assert_eq!(export.agents[0].sensors.len(), 5);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `aquascene-core` | World catalog, errors, option values, thruster commands, host trait |
//! | [`sensor`] | `aquascene-sensor` | Sensor kinds, option tables, factory and descriptors |
//! | [`agent`] | `aquascene-agent` | Agent descriptors and BlueROV presets |
//! | [`scenario`] | `aquascene-scenario` | Scenario builder and host export |
//! | [`teleop`] | `aquascene-teleop` | Keyboard mapper and control loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`aquascene-core`).
///
/// World catalog, the error taxonomy, option values, and the
/// [`types::SimulationHost`] boundary.
pub use aquascene_core as types;

/// Sensor descriptors (`aquascene-sensor`).
pub use aquascene_sensor as sensor;

/// Agent descriptors and presets (`aquascene-agent`).
pub use aquascene_agent as agent;

/// Scenario builder and export (`aquascene-scenario`).
///
/// [`scenario::ScenarioBuilder`] produces a [`scenario::ScenarioExport`]
/// whose JSON form is what the simulation host loads.
pub use aquascene_scenario as scenario;

/// Keyboard teleoperation (`aquascene-teleop`).
pub use aquascene_teleop as teleop;

/// Common imports for typical Aquascene usage.
///
/// ```rust
/// use aquascene::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use aquascene_core::{OptionValue, SimulationHost, ThrusterCommand, Vec3, WorldId};

    // Errors
    pub use aquascene_core::{
        AgentError, BuildError, ScenarioError, SensorConfigError, UnknownAgentType, UnknownWorld,
        ValidationFailure,
    };

    // Sensors
    pub use aquascene_sensor::{SensorBuilder, SensorDescriptor, SensorFactory, SensorKind};

    // Agents
    pub use aquascene_agent::{AgentDescriptor, AgentType, VehiclePreset};

    // Scenario
    pub use aquascene_scenario::{FrameRate, ScenarioBuilder, ScenarioExport};

    // Teleop
    pub use aquascene_teleop::{
        ControlLoop, InputEvent, Key, KeyboardMapper, MapperState, TeleopConfig,
    };
}
