//! Validated sensor descriptors and their exported form.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use aquascene_core::{OptionValue, Vec3};

use crate::kind::SensorKind;

/// One simulated sensor, fully validated.
///
/// Created by [`SensorBuilder::build`](crate::SensorBuilder::build) and
/// immutable afterwards. `options` always holds every option of the kind's
/// schema, in schema order, with defaults filled in.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorDescriptor {
    pub(crate) kind: SensorKind,
    pub(crate) name: String,
    pub(crate) hz: u32,
    pub(crate) socket: String,
    pub(crate) location: Option<Vec3>,
    pub(crate) rotation: Option<Vec3>,
    pub(crate) options: IndexMap<&'static str, OptionValue>,
}

impl SensorDescriptor {
    /// The sensor kind.
    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    /// Name unique within the owning agent.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sample rate in Hz.
    pub fn hz(&self) -> u32 {
        self.hz
    }

    /// Host socket the sensor is mounted on.
    pub fn socket(&self) -> &str {
        &self.socket
    }

    /// Mounting offset relative to the socket, if set.
    pub fn location(&self) -> Option<Vec3> {
        self.location
    }

    /// Mounting rotation relative to the socket, if set.
    pub fn rotation(&self) -> Option<Vec3> {
        self.rotation
    }

    /// Value of a kind-specific option.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// All kind-specific options in export order.
    pub fn options(&self) -> impl Iterator<Item = (&'static str, &OptionValue)> + '_ {
        self.options.iter().map(|(k, v)| (*k, v))
    }

    /// Export to the host's sensor entry schema.
    pub fn export(&self) -> SensorEntry {
        SensorEntry {
            sensor_type: self.kind.sensor_type().to_string(),
            sensor_name: self.name.clone(),
            socket: self.socket.clone(),
            hz: self.hz,
            location: self.location,
            rotation: self.rotation,
            configuration: self
                .options
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        }
    }
}

/// A sensor as the host's scenario schema spells it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorEntry {
    /// Host kind identifier, e.g. `"ImagingSonar"`.
    pub sensor_type: String,
    /// Name under which observations are reported.
    pub sensor_name: String,
    /// Mounting socket.
    pub socket: String,
    /// Sample rate.
    #[serde(rename = "Hz")]
    pub hz: u32,
    /// Mounting offset, omitted when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec3>,
    /// Mounting rotation, omitted when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    /// Kind-specific options, defaults included.
    pub configuration: IndexMap<String, OptionValue>,
}
