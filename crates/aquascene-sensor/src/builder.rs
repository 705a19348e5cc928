//! Sensor construction: per-kind builders and the naming factory.

use indexmap::IndexMap;
use tracing::debug;

use aquascene_core::{OptionValue, SensorConfigError, SensorConfigIssue, Vec3};

use crate::descriptor::SensorDescriptor;
use crate::kind::SensorKind;
use crate::schema;

/// Collects overrides for one sensor and validates them in [`build`](Self::build).
///
/// Overrides are applied in call order; setting the same option twice keeps
/// the last value.
#[derive(Clone, Debug)]
pub struct SensorBuilder {
    kind: SensorKind,
    name: String,
    hz: u32,
    socket: String,
    location: Option<Vec3>,
    rotation: Option<Vec3>,
    overrides: Vec<(String, OptionValue)>,
}

impl SensorBuilder {
    /// Start a sensor of `kind` named after its kind label.
    pub fn new(kind: SensorKind) -> Self {
        Self::with_default_name(kind, kind.sensor_type().to_string())
    }

    fn with_default_name(kind: SensorKind, name: String) -> Self {
        Self {
            kind,
            name,
            hz: kind.default_hz(),
            socket: kind.default_socket().to_string(),
            location: None,
            rotation: None,
            overrides: Vec::new(),
        }
    }

    /// Override the sensor name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Override the sample rate.
    pub fn hz(mut self, hz: u32) -> Self {
        self.hz = hz;
        self
    }

    /// Override the mounting socket.
    pub fn socket(mut self, socket: impl Into<String>) -> Self {
        self.socket = socket.into();
        self
    }

    /// Set the mounting offset relative to the socket.
    pub fn location(mut self, location: Vec3) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the mounting rotation relative to the socket.
    pub fn rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Override a kind-specific option, e.g. `.set("RangeMax", 30.0)`.
    pub fn set(mut self, option: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.overrides.push((option.into(), value.into()));
        self
    }

    /// Validate every field and produce the descriptor.
    ///
    /// Fails on the first offending field: an empty name, a zero rate,
    /// a non-finite mounting pose, an option the kind does not have, or an
    /// option value of the wrong type or out of range.
    pub fn build(self) -> Result<SensorDescriptor, SensorConfigError> {
        let sensor_type = self.kind.sensor_type();
        let reject = |field: &str, value: String, issue| SensorConfigError {
            sensor_type,
            field: field.to_string(),
            value,
            issue,
        };

        if self.name.is_empty() {
            return Err(reject(
                "sensor_name",
                String::new(),
                SensorConfigIssue::EmptyName,
            ));
        }
        if self.hz == 0 {
            return Err(reject(
                "Hz",
                "0".to_string(),
                SensorConfigIssue::OutOfRange {
                    constraint: "strictly positive",
                },
            ));
        }
        for (field, pose) in [("location", self.location), ("rotation", self.rotation)] {
            if let Some(v) = pose {
                if !v.iter().all(|c| c.is_finite()) {
                    return Err(reject(
                        field,
                        OptionValue::Vector(v).to_string(),
                        SensorConfigIssue::OutOfRange {
                            constraint: "finite",
                        },
                    ));
                }
            }
        }

        let mut options: IndexMap<&'static str, OptionValue> = schema::options(self.kind)
            .iter()
            .map(|spec| (spec.name, spec.default.clone()))
            .collect();
        for (field, value) in self.overrides {
            let Some(spec) = schema::lookup(self.kind, &field) else {
                return Err(reject(
                    &field,
                    value.to_string(),
                    SensorConfigIssue::UnknownOption,
                ));
            };
            if let Err(issue) = spec.check(&value) {
                return Err(reject(&field, value.to_string(), issue));
            }
            options.insert(spec.name, value);
        }

        debug!(
            sensor_type,
            name = %self.name,
            hz = self.hz,
            "built sensor descriptor"
        );
        Ok(SensorDescriptor {
            kind: self.kind,
            name: self.name,
            hz: self.hz,
            socket: self.socket,
            location: self.location,
            rotation: self.rotation,
            options,
        })
    }
}

/// Hands out [`SensorBuilder`]s with default names unique per factory.
///
/// The first sensor of a kind is named after the kind label
/// (`"DepthSensor"`); later ones get a numeric suffix (`"DepthSensor1"`).
/// Counters live in the factory, so two fresh factories fed the same calls
/// produce the same names.
#[derive(Clone, Debug, Default)]
pub struct SensorFactory {
    issued: [u32; 23],
}

macro_rules! kind_constructors {
    ($($(#[$doc:meta])* $method:ident => $kind:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $method(&mut self) -> SensorBuilder {
                self.sensor(SensorKind::$kind)
            }
        )*
    };
}

impl SensorFactory {
    /// A factory with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a sensor of any kind.
    pub fn sensor(&mut self, kind: SensorKind) -> SensorBuilder {
        let count = &mut self.issued[kind.index()];
        let name = match *count {
            0 => kind.sensor_type().to_string(),
            n => format!("{}{n}", kind.sensor_type()),
        };
        *count += 1;
        SensorBuilder::with_default_name(kind, name)
    }

    kind_constructors! {
        /// Ground-truth pose sensor. No options.
        pose => Pose;
        /// Depth sensor. Options: `Sigma`.
        depth => Depth;
        /// IMU. Options: `AccSigma`, `GyroSigma`.
        imu => Imu;
        /// RGB camera, 640x480 at 10 Hz.
        rgb_camera => RgbCamera;
        /// Stereo camera pair.
        stereo_camera => StereoCamera;
        /// RGB-D camera.
        rgbd_camera => RgbdCamera;
        /// Semantic segmentation camera.
        semantic_segmentation_camera => SemanticSegmentationCamera;
        /// Single-beam sonar.
        singlebeam_sonar => SinglebeamSonar;
        /// Side-scan sonar.
        sidescan_sonar => SidescanSonar;
        /// Imaging sonar: 10 Hz, 90 degree azimuth, 15 m range, 128 bins.
        imaging_sonar => ImagingSonar;
        /// Profiling sonar.
        profiling_sonar => ProfilingSonar;
        /// Doppler velocity log.
        dvl => Dvl;
        /// Magnetometer.
        magnetometer => Magnetometer;
        /// GPS receiver.
        gps => Gps;
        /// Acoustic beacon.
        acoustic_beacon => AcousticBeacon;
        /// Optical modem.
        optical_modem => OpticalModem;
        /// Biomass, salinity and temperature sensor.
        bst => Bst;
        /// Dynamics sensor.
        dynamics => Dynamics;
        /// Laser range finder.
        range_finder => RangeFinder;
        /// Collision sensor. No options.
        collision => Collision;
        /// Velocity sensor. No options.
        velocity => Velocity;
        /// Raycast lidar.
        raycast_lidar => RaycastLidar;
        /// Raycast semantic lidar.
        raycast_semantic_lidar => RaycastSemanticLidar;
    }
}
