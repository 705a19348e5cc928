//! Scenario assembly and export for Aquascene.
//!
//! A [`ScenarioBuilder`] collects a world, simulation rates and agents, then
//! [`export`](ScenarioBuilder::export)s a validated [`ScenarioExport`] whose
//! JSON form is what the simulation host loads.
//!
//! ```rust
//! use aquascene_agent::VehiclePreset;
//! use aquascene_core::WorldId;
//! use aquascene_scenario::ScenarioBuilder;
//!
//! let mut scenario = ScenarioBuilder::new("dam-inspection");
//! scenario
//!     .set_world(WorldId::Dam)
//!     .add_agent(VehiclePreset::bluerov2("rov0").build().unwrap())
//!     .unwrap()
//!     .set_main_agent("rov0");
//!
//! let export = scenario.export().unwrap();
//! assert_eq!(export.agents.len(), 1);
//! assert!(export.to_json().unwrap().starts_with("{\"name\":\"dam-inspection\""));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod export;

pub use builder::{ScenarioBuilder, DEFAULT_PACKAGE, DEFAULT_TICKS_PER_SEC};
pub use export::{FrameRate, ScenarioExport};
