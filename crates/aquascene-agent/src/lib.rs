//! Agent descriptors and vehicle presets for Aquascene scenarios.
//!
//! An [`AgentDescriptor`] names one simulated vehicle, its class, starting
//! pose and attached sensors. [`VehiclePreset`] builds ready-to-fly BlueROV
//! agents with a default sensor suite.
//!
//! ```rust
//! use aquascene_agent::VehiclePreset;
//!
//! let rov = VehiclePreset::bluerov2("rov0").build().unwrap();
//! assert_eq!(rov.sensors().len(), 4);
//! assert_eq!(rov.location(), Some([0.0, 0.0, -4.0]));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent_type;
pub mod descriptor;
pub mod preset;

pub use agent_type::AgentType;
pub use descriptor::{AgentBuilder, AgentDescriptor, AgentEntry};
pub use preset::{default_sensor_suite, VehiclePreset};
