//! Vehicle presets with a default sensor suite.
//!
//! A preset fills in the vehicle class, starting pose and sensors. When the
//! caller supplies its own sensor list, that list replaces the default suite
//! outright; the two are never merged.

use aquascene_core::{BuildError, Vec3};
use aquascene_sensor::{SensorDescriptor, SensorFactory};

use crate::agent_type::AgentType;
use crate::descriptor::AgentDescriptor;

/// Starting position shared by the BlueROV presets: four meters down.
pub const DEFAULT_LOCATION: Vec3 = [0.0, 0.0, -4.0];

/// Starting orientation shared by the BlueROV presets.
pub const DEFAULT_ROTATION: Vec3 = [0.0, 0.0, 0.0];

/// Name of the forward-looking camera in the default suite.
pub const FRONT_CAMERA: &str = "FrontCamera";

/// A vehicle preset being configured.
#[derive(Clone, Debug)]
pub struct VehiclePreset {
    name: String,
    agent_type: AgentType,
    sensors: Option<Vec<SensorDescriptor>>,
    location: Vec3,
    rotation: Vec3,
    control_scheme: u32,
}

impl VehiclePreset {
    /// BlueROV2 in the vectored configuration.
    pub fn bluerov2(name: impl Into<String>) -> Self {
        Self::for_type(name, AgentType::BlueRov2)
    }

    /// BlueROV2 in the heavy configuration.
    pub fn bluerov_heavy(name: impl Into<String>) -> Self {
        Self::for_type(name, AgentType::BlueRovHeavy)
    }

    fn for_type(name: impl Into<String>, agent_type: AgentType) -> Self {
        Self {
            name: name.into(),
            agent_type,
            sensors: None,
            location: DEFAULT_LOCATION,
            rotation: DEFAULT_ROTATION,
            control_scheme: 0,
        }
    }

    /// Replace the default suite with exactly these sensors.
    ///
    /// An empty list yields an agent with no sensors.
    pub fn sensors(mut self, sensors: impl IntoIterator<Item = SensorDescriptor>) -> Self {
        self.sensors = Some(sensors.into_iter().collect());
        self
    }

    /// Override the starting position.
    pub fn location(mut self, location: Vec3) -> Self {
        self.location = location;
        self
    }

    /// Override the starting orientation.
    pub fn rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Override the host control scheme.
    pub fn control_scheme(mut self, scheme: u32) -> Self {
        self.control_scheme = scheme;
        self
    }

    /// Build the agent.
    pub fn build(self) -> Result<AgentDescriptor, BuildError> {
        let sensors = match self.sensors {
            Some(sensors) => sensors,
            None => default_sensor_suite()?,
        };
        let agent = AgentDescriptor::builder(self.name, self.agent_type)
            .control_scheme(self.control_scheme)
            .location(self.location)
            .rotation(self.rotation)
            .sensors(sensors)
            .build()?;
        Ok(agent)
    }
}

/// The suite a preset attaches when no sensors are given: pose, depth with
/// 0.2 m noise, IMU, and a 640x480 front camera.
pub fn default_sensor_suite() -> Result<Vec<SensorDescriptor>, BuildError> {
    let mut factory = SensorFactory::new();
    Ok(vec![
        factory.pose().build()?,
        factory.depth().set("Sigma", 0.2).build()?,
        factory.imu().build()?,
        factory
            .rgb_camera()
            .name(FRONT_CAMERA)
            .set("CaptureWidth", 640)
            .set("CaptureHeight", 480)
            .build()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquascene_core::OptionValue;
    use aquascene_sensor::SensorKind;

    #[test]
    fn default_suite_kinds_in_order() {
        let kinds: Vec<_> = default_sensor_suite()
            .unwrap()
            .iter()
            .map(SensorDescriptor::kind)
            .collect();
        assert_eq!(
            kinds,
            [
                SensorKind::Pose,
                SensorKind::Depth,
                SensorKind::Imu,
                SensorKind::RgbCamera
            ]
        );
    }

    #[test]
    fn default_suite_depth_noise() {
        let suite = default_sensor_suite().unwrap();
        assert_eq!(suite[1].option("Sigma"), Some(&OptionValue::Float(0.2)));
        assert_eq!(suite[3].name(), FRONT_CAMERA);
    }

    #[test]
    fn preset_pose_defaults() {
        let rov = VehiclePreset::bluerov2("rov0").build().unwrap();
        assert_eq!(rov.agent_type(), AgentType::BlueRov2);
        assert_eq!(rov.location(), Some(DEFAULT_LOCATION));
        assert_eq!(rov.rotation(), Some(DEFAULT_ROTATION));
        assert!(rov.is_controllable());
    }

    #[test]
    fn heavy_preset_shares_suite() {
        let rov = VehiclePreset::bluerov_heavy("heavy").build().unwrap();
        assert_eq!(rov.agent_type(), AgentType::BlueRovHeavy);
        assert_eq!(rov.sensors(), default_sensor_suite().unwrap().as_slice());
    }

    #[test]
    fn empty_name_surfaces_as_agent_error() {
        let err = VehiclePreset::bluerov2("").build().unwrap_err();
        assert!(matches!(err, BuildError::Agent(_)));
    }
}
