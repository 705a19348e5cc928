//! Agent descriptors: one simulated vehicle and its attached sensors.

use serde::{Deserialize, Serialize};
use tracing::debug;

use aquascene_core::{AgentError, BuildError, Vec3};
use aquascene_sensor::{SensorDescriptor, SensorEntry};

use crate::agent_type::AgentType;

/// One simulated entity in a scenario.
///
/// Sensor names are unique within the agent; [`add_sensor`](Self::add_sensor)
/// rejects collisions and leaves the sensor list untouched when it does.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentDescriptor {
    name: String,
    agent_type: AgentType,
    is_controllable: bool,
    control_scheme: u32,
    location: Option<Vec3>,
    rotation: Option<Vec3>,
    sensors: Vec<SensorDescriptor>,
}

impl AgentDescriptor {
    /// A controllable agent with no pose and no sensors.
    pub fn new(name: impl Into<String>, agent_type: AgentType) -> Result<Self, AgentError> {
        AgentBuilder::new(name, agent_type).build()
    }

    /// Like [`new`](Self::new), resolving the agent type from its host name.
    pub fn from_type_name(name: impl Into<String>, agent_type: &str) -> Result<Self, BuildError> {
        let agent_type: AgentType = agent_type.parse()?;
        Ok(Self::new(name, agent_type)?)
    }

    /// Start building an agent with explicit fields.
    pub fn builder(name: impl Into<String>, agent_type: AgentType) -> AgentBuilder {
        AgentBuilder::new(name, agent_type)
    }

    /// Agent name, unique within a scenario.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vehicle class.
    pub fn agent_type(&self) -> AgentType {
        self.agent_type
    }

    /// Whether the agent accepts thruster commands.
    pub fn is_controllable(&self) -> bool {
        self.is_controllable
    }

    /// Host control scheme index.
    pub fn control_scheme(&self) -> u32 {
        self.control_scheme
    }

    /// Starting position `[x, y, z]` in meters.
    pub fn location(&self) -> Option<Vec3> {
        self.location
    }

    /// Starting orientation `[roll, pitch, yaw]` in degrees.
    pub fn rotation(&self) -> Option<Vec3> {
        self.rotation
    }

    /// Attached sensors in attachment order.
    pub fn sensors(&self) -> &[SensorDescriptor] {
        &self.sensors
    }

    /// Attach a sensor.
    pub fn add_sensor(&mut self, sensor: SensorDescriptor) -> Result<&mut Self, AgentError> {
        if self.sensors.iter().any(|s| s.name() == sensor.name()) {
            return Err(AgentError::DuplicateSensorName {
                agent: self.name.clone(),
                sensor: sensor.name().to_string(),
            });
        }
        debug!(
            agent = %self.name,
            sensor = sensor.name(),
            sensor_type = sensor.kind().sensor_type(),
            "attached sensor"
        );
        self.sensors.push(sensor);
        Ok(self)
    }

    /// Export to the host's agent entry schema.
    pub fn export(&self) -> AgentEntry {
        AgentEntry {
            agent_name: self.name.clone(),
            agent_type: self.agent_type,
            control_scheme: self.control_scheme,
            location: self.location,
            rotation: self.rotation,
            sensors: self.sensors.iter().map(SensorDescriptor::export).collect(),
        }
    }
}

/// Explicit-field constructor for [`AgentDescriptor`].
#[derive(Clone, Debug)]
pub struct AgentBuilder {
    name: String,
    agent_type: AgentType,
    is_controllable: bool,
    control_scheme: u32,
    location: Option<Vec3>,
    rotation: Option<Vec3>,
    sensors: Vec<SensorDescriptor>,
}

impl AgentBuilder {
    fn new(name: impl Into<String>, agent_type: AgentType) -> Self {
        Self {
            name: name.into(),
            agent_type,
            is_controllable: true,
            control_scheme: 0,
            location: None,
            rotation: None,
            sensors: Vec::new(),
        }
    }

    /// Whether the agent accepts thruster commands. Default: `true`.
    pub fn controllable(mut self, is_controllable: bool) -> Self {
        self.is_controllable = is_controllable;
        self
    }

    /// Host control scheme index. Default: `0`.
    pub fn control_scheme(mut self, scheme: u32) -> Self {
        self.control_scheme = scheme;
        self
    }

    /// Starting position.
    pub fn location(mut self, location: Vec3) -> Self {
        self.location = Some(location);
        self
    }

    /// Starting orientation.
    pub fn rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Append a sensor.
    pub fn sensor(mut self, sensor: SensorDescriptor) -> Self {
        self.sensors.push(sensor);
        self
    }

    /// Append several sensors.
    pub fn sensors(mut self, sensors: impl IntoIterator<Item = SensorDescriptor>) -> Self {
        self.sensors.extend(sensors);
        self
    }

    /// Validate and produce the agent.
    pub fn build(self) -> Result<AgentDescriptor, AgentError> {
        if self.name.is_empty() {
            return Err(AgentError::EmptyName);
        }
        for (field, pose) in [("location", self.location), ("rotation", self.rotation)] {
            if pose.is_some_and(|v| !v.iter().all(|c| c.is_finite())) {
                return Err(AgentError::NonFinitePose {
                    agent: self.name,
                    field,
                });
            }
        }
        let mut agent = AgentDescriptor {
            name: self.name,
            agent_type: self.agent_type,
            is_controllable: self.is_controllable,
            control_scheme: self.control_scheme,
            location: self.location,
            rotation: self.rotation,
            sensors: Vec::with_capacity(self.sensors.len()),
        };
        for sensor in self.sensors {
            agent.add_sensor(sensor)?;
        }
        debug!(
            agent = %agent.name,
            agent_type = agent.agent_type.as_str(),
            sensors = agent.sensors.len(),
            "built agent descriptor"
        );
        Ok(agent)
    }
}

/// An agent as the host's scenario schema spells it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentEntry {
    /// Agent name.
    pub agent_name: String,
    /// Vehicle class.
    pub agent_type: AgentType,
    /// Host control scheme index.
    pub control_scheme: u32,
    /// Starting position, omitted when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec3>,
    /// Starting orientation, omitted when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    /// Attached sensors in attachment order.
    pub sensors: Vec<SensorEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquascene_sensor::{SensorBuilder, SensorKind};

    fn sensor(kind: SensorKind, name: &str) -> SensorDescriptor {
        SensorBuilder::new(kind).name(name).build().unwrap()
    }

    #[test]
    fn duplicate_sensor_name_rejected_and_list_untouched() {
        let mut agent = AgentDescriptor::new("rov0", AgentType::BlueRov2).unwrap();
        agent.add_sensor(sensor(SensorKind::Depth, "probe")).unwrap();
        let err = agent
            .add_sensor(sensor(SensorKind::Imu, "probe"))
            .unwrap_err();
        assert_eq!(
            err,
            AgentError::DuplicateSensorName {
                agent: "rov0".to_string(),
                sensor: "probe".to_string(),
            }
        );
        assert_eq!(agent.sensors().len(), 1);
        assert_eq!(agent.sensors()[0].kind(), SensorKind::Depth);
    }

    #[test]
    fn same_sensor_name_on_two_agents_is_fine() {
        let mut a = AgentDescriptor::new("a", AgentType::HoveringAuv).unwrap();
        let mut b = AgentDescriptor::new("b", AgentType::HoveringAuv).unwrap();
        a.add_sensor(sensor(SensorKind::Pose, "pose")).unwrap();
        b.add_sensor(sensor(SensorKind::Pose, "pose")).unwrap();
        assert_eq!(a.sensors().len() + b.sensors().len(), 2);
    }

    #[test]
    fn builder_rejects_duplicate_sensors() {
        let err = AgentDescriptor::builder("rov0", AgentType::BlueRov2)
            .sensor(sensor(SensorKind::Pose, "p"))
            .sensor(sensor(SensorKind::Velocity, "p"))
            .build()
            .unwrap_err();
        assert!(matches!(err, AgentError::DuplicateSensorName { .. }));
    }

    #[test]
    fn empty_name_rejected() {
        assert_eq!(
            AgentDescriptor::new("", AgentType::TorpedoAuv),
            Err(AgentError::EmptyName)
        );
    }

    #[test]
    fn non_finite_pose_rejected() {
        let err = AgentDescriptor::builder("rov0", AgentType::BlueRov2)
            .rotation([0.0, f64::INFINITY, 0.0])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            AgentError::NonFinitePose {
                field: "rotation",
                ..
            }
        ));
    }

    #[test]
    fn unknown_type_name_rejected() {
        let err = AgentDescriptor::from_type_name("rov0", "Dolphin").unwrap_err();
        assert!(matches!(err, BuildError::AgentType(_)));
    }

    #[test]
    fn export_omits_unset_pose() {
        let agent = AgentDescriptor::from_type_name("auv0", "HoveringAUV").unwrap();
        let json = serde_json::to_value(agent.export()).unwrap();
        assert_eq!(json["agent_name"], "auv0");
        assert_eq!(json["agent_type"], "HoveringAUV");
        assert_eq!(json["control_scheme"], 0);
        assert!(json.get("location").is_none());
        assert_eq!(json["sensors"], serde_json::json!([]));
    }
}
