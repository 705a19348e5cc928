//! Core types for the Aquascene scenario builder.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! world catalog, the error taxonomy shared by every builder, the option
//! value type sensors are configured with, the thruster channel contract
//! and the simulation host boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod host;
pub mod thruster;
pub mod value;
pub mod world;

pub use error::{
    AgentError, BuildError, ScenarioError, SensorConfigError, SensorConfigIssue,
    UnknownAgentType, UnknownWorld, ValidationFailure,
};
pub use host::SimulationHost;
pub use thruster::{ThrusterCommand, THRUSTER_CHANNELS, THRUST_LIMIT};
pub use value::{OptionValue, Vec3};
pub use world::WorldId;
