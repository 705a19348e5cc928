//! Typed sensor descriptors for Aquascene scenarios.
//!
//! Every sensor kind the host can simulate is a [`SensorKind`] variant with
//! an option table in [`schema`]. A [`SensorFactory`] hands out
//! [`SensorBuilder`]s with default names; `build()` validates every override
//! against the table and returns an immutable [`SensorDescriptor`], which
//! exports to the host's [`SensorEntry`] schema.
//!
//! ```rust
//! use aquascene_sensor::SensorFactory;
//!
//! let mut sensors = SensorFactory::new();
//! let sonar = sensors
//!     .imaging_sonar()
//!     .hz(15)
//!     .set("RangeMax", 25.0)
//!     .set("RangeBins", 256)
//!     .build()
//!     .unwrap();
//! assert_eq!(sonar.export().sensor_type, "ImagingSonar");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod descriptor;
pub mod kind;
pub mod schema;

pub use builder::{SensorBuilder, SensorFactory};
pub use descriptor::{SensorDescriptor, SensorEntry};
pub use kind::SensorKind;
pub use schema::{Constraint, OptionSpec, OptionType};
