//! The closed set of sensor kinds the host can simulate.

use std::fmt;

/// A sensor kind.
///
/// Each kind has a host identifier ([`sensor_type`](Self::sensor_type)),
/// a default sample rate and socket, and an option schema
/// ([`crate::schema::options`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SensorKind {
    /// Ground-truth pose.
    Pose,
    /// Pressure depth.
    Depth,
    /// Inertial measurement unit.
    Imu,
    /// Monocular RGB camera.
    RgbCamera,
    /// Stereo camera pair.
    StereoCamera,
    /// RGB camera with a depth channel.
    RgbdCamera,
    /// Per-pixel semantic labels.
    SemanticSegmentationCamera,
    /// Single-beam echo sounder.
    SinglebeamSonar,
    /// Side-scan sonar.
    SidescanSonar,
    /// Forward-looking imaging sonar.
    ImagingSonar,
    /// Profiling (multibeam line) sonar.
    ProfilingSonar,
    /// Doppler velocity log.
    Dvl,
    /// 3-axis magnetometer.
    Magnetometer,
    /// Surface GPS.
    Gps,
    /// Acoustic ranging beacon.
    AcousticBeacon,
    /// Line-of-sight optical modem.
    OpticalModem,
    /// Biomass, salinity and temperature of the water column.
    Bst,
    /// Linear and angular dynamics.
    Dynamics,
    /// Laser range finder.
    RangeFinder,
    /// Contact detection.
    Collision,
    /// Ground-truth velocity.
    Velocity,
    /// Rotating raycast lidar.
    RaycastLidar,
    /// Raycast lidar returning semantic tags.
    RaycastSemanticLidar,
}

impl SensorKind {
    const ALL: [SensorKind; 23] = [
        SensorKind::Pose,
        SensorKind::Depth,
        SensorKind::Imu,
        SensorKind::RgbCamera,
        SensorKind::StereoCamera,
        SensorKind::RgbdCamera,
        SensorKind::SemanticSegmentationCamera,
        SensorKind::SinglebeamSonar,
        SensorKind::SidescanSonar,
        SensorKind::ImagingSonar,
        SensorKind::ProfilingSonar,
        SensorKind::Dvl,
        SensorKind::Magnetometer,
        SensorKind::Gps,
        SensorKind::AcousticBeacon,
        SensorKind::OpticalModem,
        SensorKind::Bst,
        SensorKind::Dynamics,
        SensorKind::RangeFinder,
        SensorKind::Collision,
        SensorKind::Velocity,
        SensorKind::RaycastLidar,
        SensorKind::RaycastSemanticLidar,
    ];

    /// Every kind, in documentation order.
    pub fn all() -> &'static [SensorKind] {
        &Self::ALL
    }

    /// Position of this kind in [`all`](Self::all).
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The `sensor_type` string the host expects.
    pub fn sensor_type(self) -> &'static str {
        match self {
            SensorKind::Pose => "PoseSensor",
            SensorKind::Depth => "DepthSensor",
            SensorKind::Imu => "IMUSensor",
            SensorKind::RgbCamera => "RGBCamera",
            SensorKind::StereoCamera => "StereoCamera",
            SensorKind::RgbdCamera => "RGBDCamera",
            SensorKind::SemanticSegmentationCamera => "SemanticSegmentationCamera",
            SensorKind::SinglebeamSonar => "SinglebeamSonar",
            SensorKind::SidescanSonar => "SidescanSonar",
            SensorKind::ImagingSonar => "ImagingSonar",
            SensorKind::ProfilingSonar => "ProfilingSonar",
            SensorKind::Dvl => "DVLSensor",
            SensorKind::Magnetometer => "MagnetometerSensor",
            SensorKind::Gps => "GPSSensor",
            SensorKind::AcousticBeacon => "AcousticBeaconSensor",
            SensorKind::OpticalModem => "OpticalModemSensor",
            SensorKind::Bst => "BSTSensor",
            SensorKind::Dynamics => "DynamicsSensor",
            SensorKind::RangeFinder => "RangeFinderSensor",
            SensorKind::Collision => "CollisionSensor",
            SensorKind::Velocity => "VelocitySensor",
            SensorKind::RaycastLidar => "RaycastLidar",
            SensorKind::RaycastSemanticLidar => "RaycastSemanticLidar",
        }
    }

    /// Default sample rate in Hz.
    pub fn default_hz(self) -> u32 {
        match self {
            SensorKind::Gps => 1,
            SensorKind::AcousticBeacon
            | SensorKind::OpticalModem
            | SensorKind::Bst
            | SensorKind::ProfilingSonar => 2,
            SensorKind::RgbCamera
            | SensorKind::StereoCamera
            | SensorKind::RgbdCamera
            | SensorKind::SemanticSegmentationCamera
            | SensorKind::SinglebeamSonar
            | SensorKind::SidescanSonar
            | SensorKind::ImagingSonar
            | SensorKind::RangeFinder
            | SensorKind::RaycastLidar
            | SensorKind::RaycastSemanticLidar => 10,
            SensorKind::Dvl => 20,
            SensorKind::Pose
            | SensorKind::Depth
            | SensorKind::Imu
            | SensorKind::Magnetometer
            | SensorKind::Dynamics
            | SensorKind::Collision
            | SensorKind::Velocity => 30,
        }
    }

    /// Default host socket the sensor is mounted on.
    pub fn default_socket(self) -> &'static str {
        match self {
            SensorKind::Pose | SensorKind::Dynamics | SensorKind::Velocity => "COM",
            SensorKind::Depth => "DepthSocket",
            SensorKind::Imu => "IMUSocket",
            SensorKind::RgbCamera
            | SensorKind::StereoCamera
            | SensorKind::RgbdCamera
            | SensorKind::SemanticSegmentationCamera => "CameraSocket",
            SensorKind::SinglebeamSonar
            | SensorKind::SidescanSonar
            | SensorKind::ImagingSonar
            | SensorKind::ProfilingSonar => "SonarSocket",
            SensorKind::Dvl => "DVLSocket",
            SensorKind::Magnetometer => "MagSocket",
            SensorKind::Gps => "GPSSocket",
            SensorKind::AcousticBeacon => "BeaconSocket",
            SensorKind::OpticalModem => "OpticalModemSocket",
            SensorKind::Bst => "BSTSocket",
            SensorKind::RangeFinder => "RangeSocket",
            SensorKind::Collision => "CollisionSocket",
            SensorKind::RaycastLidar | SensorKind::RaycastSemanticLidar => "LidarSocket",
        }
    }

    /// Look up a kind by its host `sensor_type` string.
    pub fn from_sensor_type(sensor_type: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.sensor_type() == sensor_type)
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sensor_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn index_matches_position_in_all() {
        for (i, kind) in SensorKind::all().iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn sensor_types_are_unique_and_resolvable() {
        let mut seen = HashSet::new();
        for &kind in SensorKind::all() {
            assert!(seen.insert(kind.sensor_type()), "{kind:?} duplicated");
            assert_eq!(SensorKind::from_sensor_type(kind.sensor_type()), Some(kind));
        }
        assert_eq!(SensorKind::from_sensor_type("SonarThing"), None);
    }
}
