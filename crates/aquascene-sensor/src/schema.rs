//! Per-kind option schemas: names, types, defaults and accepted ranges.
//!
//! The tables mirror the host's sensor documentation. Order matters: the
//! exported `configuration` mapping lists options in table order.

use aquascene_core::{OptionValue, SensorConfigIssue, Vec3};

use crate::kind::SensorKind;

/// The type an option value must have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionType {
    /// Any finite number. Integers are accepted as-is.
    Float,
    /// Like [`Float`](Self::Float), but may also be `null` (unset).
    NullableFloat,
    /// An integer. Floats are rejected.
    Int,
    /// A boolean flag.
    Bool,
    /// Three finite numbers.
    Vector,
}

impl OptionType {
    fn name(self) -> &'static str {
        match self {
            Self::Float => "number",
            Self::NullableFloat => "number or null",
            Self::Int => "integer",
            Self::Bool => "bool",
            Self::Vector => "3-vector",
        }
    }
}

/// Range restriction on a numeric option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    /// `> 0`: rates, ranges, resolutions, bin counts.
    Positive,
    /// `>= 0`: noise sigmas, identifiers.
    NonNegative,
    /// Angular field of view in `(0, 360]` degrees.
    FieldOfView,
    /// Any finite value.
    Unbounded,
}

impl Constraint {
    fn admits(self, v: f64) -> bool {
        match self {
            Self::Positive => v > 0.0,
            Self::NonNegative => v >= 0.0,
            Self::FieldOfView => v > 0.0 && v <= 360.0,
            Self::Unbounded => true,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Positive => "strictly positive",
            Self::NonNegative => "non-negative",
            Self::FieldOfView => "in (0, 360] degrees",
            Self::Unbounded => "finite",
        }
    }
}

/// One entry of a sensor kind's option table.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionSpec {
    /// Key in the exported `configuration` mapping.
    pub name: &'static str,
    /// Required value type.
    pub ty: OptionType,
    /// Value used when the caller does not override it.
    pub default: OptionValue,
    /// Accepted range for numeric values.
    pub constraint: Constraint,
}

impl OptionSpec {
    /// Check `value` against this option's type and range.
    pub fn check(&self, value: &OptionValue) -> Result<(), SensorConfigIssue> {
        let wrong_type = SensorConfigIssue::WrongType {
            expected: self.ty.name(),
        };
        match (self.ty, value) {
            (OptionType::Bool, OptionValue::Bool(_)) => Ok(()),
            (OptionType::NullableFloat, OptionValue::Null) => Ok(()),
            (OptionType::Vector, OptionValue::Vector(v)) => {
                if v.iter().all(|c| c.is_finite()) {
                    Ok(())
                } else {
                    Err(SensorConfigIssue::OutOfRange {
                        constraint: Constraint::Unbounded.describe(),
                    })
                }
            }
            (OptionType::Int, OptionValue::Int(v)) => self.check_range(*v as f64),
            (
                OptionType::Float | OptionType::NullableFloat,
                OptionValue::Int(_) | OptionValue::Float(_),
            ) => match value.as_f64() {
                Some(v) if v.is_finite() => self.check_range(v),
                _ => Err(SensorConfigIssue::OutOfRange {
                    constraint: Constraint::Unbounded.describe(),
                }),
            },
            _ => Err(wrong_type),
        }
    }

    fn check_range(&self, v: f64) -> Result<(), SensorConfigIssue> {
        if self.constraint.admits(v) {
            Ok(())
        } else {
            Err(SensorConfigIssue::OutOfRange {
                constraint: self.constraint.describe(),
            })
        }
    }
}

use Constraint::{FieldOfView, NonNegative, Positive, Unbounded};

const fn float(name: &'static str, default: f64, constraint: Constraint) -> OptionSpec {
    OptionSpec {
        name,
        ty: OptionType::Float,
        default: OptionValue::Float(default),
        constraint,
    }
}

const fn nullable(name: &'static str, constraint: Constraint) -> OptionSpec {
    OptionSpec {
        name,
        ty: OptionType::NullableFloat,
        default: OptionValue::Null,
        constraint,
    }
}

const fn int(name: &'static str, default: i64, constraint: Constraint) -> OptionSpec {
    OptionSpec {
        name,
        ty: OptionType::Int,
        default: OptionValue::Int(default),
        constraint,
    }
}

const fn flag(name: &'static str, default: bool) -> OptionSpec {
    OptionSpec {
        name,
        ty: OptionType::Bool,
        default: OptionValue::Bool(default),
        constraint: Unbounded,
    }
}

const fn vector(name: &'static str, default: Vec3) -> OptionSpec {
    OptionSpec {
        name,
        ty: OptionType::Vector,
        default: OptionValue::Vector(default),
        constraint: Unbounded,
    }
}

// ── Cameras ────────────────────────────────────────────────────────

static RGB_CAMERA: [OptionSpec; 2] = [
    int("CaptureWidth", 640, Positive),
    int("CaptureHeight", 480, Positive),
];

static STEREO_CAMERA: [OptionSpec; 9] = [
    int("CaptureWidth", 640, Positive),
    int("CaptureHeight", 480, Positive),
    float("FOV", 90.0, FieldOfView),
    float("Baseline", 0.3, Positive),
    float("DisparityScale", 1.0, Positive),
    float("Gain", 1.0, Positive),
    float("Exposure", 0.01, Positive),
    float("Gamma", 1.0, Positive),
    flag("UseNoise", false),
];

static RGBD_CAMERA: [OptionSpec; 4] = [
    int("CaptureWidth", 640, Positive),
    int("CaptureHeight", 480, Positive),
    float("FovAngle", 90.0, FieldOfView),
    float("TargetGamma", 1.0, Positive),
];

static SEGMENTATION_CAMERA: [OptionSpec; 2] = [
    int("CaptureWidth", 640, Positive),
    int("CaptureHeight", 480, Positive),
];

// ── Sonars ─────────────────────────────────────────────────────────

static SINGLEBEAM_SONAR: [OptionSpec; 14] = [
    float("OpeningAngle", 30.0, FieldOfView),
    float("RangeMin", 0.5, Positive),
    float("RangeMax", 30.0, Positive),
    int("RangeBins", 200, Positive),
    float("AddSigma", 0.0, NonNegative),
    float("MultSigma", 0.0, NonNegative),
    float("RangeSigma", 0.1, NonNegative),
    flag("ShowWarning", true),
    float("InitOctreeRange", 40.0, Positive),
    flag("ViewRegion", false),
    float("ViewOctree", -10.0, Unbounded),
    float("WaterDensity", 997.0, Positive),
    float("WaterSpeedSound", 1480.0, Positive),
    flag("UseApprox", true),
];

static SIDESCAN_SONAR: [OptionSpec; 14] = [
    float("Azimuth", 170.0, FieldOfView),
    float("Elevation", 0.25, FieldOfView),
    float("RangeMin", 0.5, Positive),
    float("RangeMax", 40.0, Positive),
    int("RangeBins", 2000, Positive),
    float("AddSigma", 0.05, NonNegative),
    float("MultSigma", 0.05, NonNegative),
    flag("ShowWarning", true),
    float("InitOctreeRange", 50.0, Positive),
    flag("ViewRegion", false),
    float("ViewOctree", -10.0, Unbounded),
    float("WaterDensity", 997.0, Positive),
    float("WaterSpeedSound", 1480.0, Positive),
    flag("UseApprox", true),
];

static IMAGING_SONAR: [OptionSpec; 20] = [
    float("Azimuth", 90.0, FieldOfView),
    float("Elevation", 20.0, FieldOfView),
    float("RangeMin", 1.0, Positive),
    float("RangeMax", 15.0, Positive),
    int("RangeBins", 128, Positive),
    int("AzimuthBins", 128, Positive),
    float("AddSigma", 0.15, NonNegative),
    float("MultSigma", 0.2, NonNegative),
    flag("MultiPath", true),
    int("ClusterSize", 5, Positive),
    flag("ScaleNoise", true),
    int("AzimuthStreaks", -1, Unbounded),
    float("RangeSigma", 0.1, NonNegative),
    flag("ShowWarning", true),
    float("InitOctreeRange", 50.0, Positive),
    flag("ViewRegion", false),
    float("ViewOctree", -10.0, Unbounded),
    float("WaterDensity", 997.0, Positive),
    float("WaterSpeedSound", 1480.0, Positive),
    flag("UseApprox", true),
];

static PROFILING_SONAR: [OptionSpec; 17] = [
    float("Azimuth", 120.0, FieldOfView),
    float("Elevation", 1.0, FieldOfView),
    float("RangeMin", 1.0, Positive),
    float("RangeMax", 60.0, Positive),
    int("RangeBins", 512, Positive),
    int("AzimuthBins", 512, Positive),
    float("AddSigma", 0.15, NonNegative),
    float("MultSigma", 0.2, NonNegative),
    flag("MultiPath", true),
    int("ClusterSize", 5, Positive),
    flag("ScaleNoise", true),
    int("AzimuthStreaks", -1, Unbounded),
    float("RangeSigma", 0.1, NonNegative),
    flag("ShowWarning", true),
    float("InitOctreeRange", 70.0, Positive),
    flag("ViewRegion", false),
    float("ViewOctree", -10.0, Unbounded),
];

// ── Navigation and communication ──────────────────────────────────

static DEPTH: [OptionSpec; 1] = [float("Sigma", 0.0, NonNegative)];

static IMU: [OptionSpec; 2] = [
    float("AccSigma", 0.0, NonNegative),
    float("GyroSigma", 0.0, NonNegative),
];

static DVL: [OptionSpec; 6] = [
    float("Elevation", 22.5, FieldOfView),
    flag("DebugLines", false),
    float("VelSigma", 0.02626, NonNegative),
    flag("ReturnRange", true),
    float("MaxRange", 50.0, Positive),
    float("RangeSigma", 0.1, NonNegative),
];

static MAGNETOMETER: [OptionSpec; 2] = [
    float("Sigma", 0.0, NonNegative),
    vector("MagneticVector", [1.0, 0.0, 0.0]),
];

static GPS: [OptionSpec; 3] = [
    float("Sigma", 0.0, NonNegative),
    float("Depth", 2.0, Positive),
    float("DepthSigma", 0.0, NonNegative),
];

static ACOUSTIC_BEACON: [OptionSpec; 5] = [
    int("id", 0, NonNegative),
    flag("CheckVisible", false),
    nullable("MaxDistance", Positive),
    float("DistanceSigma", 0.0, NonNegative),
    float("DistanceCov", 0.0, NonNegative),
];

static OPTICAL_MODEM: [OptionSpec; 7] = [
    int("id", 0, NonNegative),
    float("MaxDistance", 50.0, Positive),
    float("DistanceSigma", 0.0, NonNegative),
    float("LaserAngle", 60.0, FieldOfView),
    float("AngleSigma", 0.0, NonNegative),
    flag("LaserDebug", false),
    int("DebugNumSides", 72, Positive),
];

// ── Environment and vehicle state ─────────────────────────────────

static BST: [OptionSpec; 14] = [
    float("max_biomass", 1.0, NonNegative),
    float("surface_biomass", 0.2, NonNegative),
    float("peak_depth", 20.0, Positive),
    float("biocline_sharpness", 3.0, Positive),
    float("photic_zone_depth", 40.0, Positive),
    float("deep_biomass", 0.05, NonNegative),
    float("surface_psu", 35.0, Positive),
    float("deep_psu", 37.0, Positive),
    float("halocline_depth", 50.0, Positive),
    float("halocline_thickness", 15.0, Positive),
    float("surface_temp", 20.0, Unbounded),
    float("deep_temp", 4.0, Unbounded),
    float("thermocline_depth", 40.0, Positive),
    float("thermocline_thickness", 10.0, Positive),
];

static DYNAMICS: [OptionSpec; 2] = [flag("UseCOM", true), flag("UseRPY", true)];

static RANGE_FINDER: [OptionSpec; 4] = [
    float("LaserMaxDistance", 10.0, Positive),
    int("LaserCount", 1, Positive),
    float("LaserAngle", 0.0, Unbounded),
    flag("LaserDebug", false),
];

// ── Lidars ─────────────────────────────────────────────────────────

static RAYCAST_LIDAR: [OptionSpec; 14] = [
    int("Channels", 32, Positive),
    float("Range", 500.0, Positive),
    int("PointsPerSecond", 56000, Positive),
    float("RotationFrequency", 10.0, Positive),
    float("UpperFovLimit", 10.0, Unbounded),
    float("LowerFovLimit", -30.0, Unbounded),
    float("HorizontalFov", 360.0, FieldOfView),
    float("AtmospAttenRate", 0.004, NonNegative),
    int("RandomSeed", 0, Unbounded),
    float("DropOffGenRate", 0.45, NonNegative),
    float("DropOffIntensityLimit", 0.8, NonNegative),
    float("DropOffAtZeroIntensity", 0.4, NonNegative),
    flag("ShowDebugPoints", false),
    float("NoiseStdDev", 0.0, NonNegative),
];

static RAYCAST_SEMANTIC_LIDAR: [OptionSpec; 8] = [
    int("Channels", 32, Positive),
    float("Range", 500.0, Positive),
    int("PointsPerSecond", 56000, Positive),
    float("RotationFrequency", 10.0, Positive),
    float("UpperFovLimit", 10.0, Unbounded),
    float("LowerFovLimit", -30.0, Unbounded),
    float("HorizontalFov", 360.0, FieldOfView),
    flag("ShowDebugPoints", false),
];

/// The option table for `kind`, in export order.
///
/// Pose, collision and velocity sensors have no options.
pub fn options(kind: SensorKind) -> &'static [OptionSpec] {
    match kind {
        SensorKind::Pose | SensorKind::Collision | SensorKind::Velocity => &[],
        SensorKind::Depth => &DEPTH,
        SensorKind::Imu => &IMU,
        SensorKind::RgbCamera => &RGB_CAMERA,
        SensorKind::StereoCamera => &STEREO_CAMERA,
        SensorKind::RgbdCamera => &RGBD_CAMERA,
        SensorKind::SemanticSegmentationCamera => &SEGMENTATION_CAMERA,
        SensorKind::SinglebeamSonar => &SINGLEBEAM_SONAR,
        SensorKind::SidescanSonar => &SIDESCAN_SONAR,
        SensorKind::ImagingSonar => &IMAGING_SONAR,
        SensorKind::ProfilingSonar => &PROFILING_SONAR,
        SensorKind::Dvl => &DVL,
        SensorKind::Magnetometer => &MAGNETOMETER,
        SensorKind::Gps => &GPS,
        SensorKind::AcousticBeacon => &ACOUSTIC_BEACON,
        SensorKind::OpticalModem => &OPTICAL_MODEM,
        SensorKind::Bst => &BST,
        SensorKind::Dynamics => &DYNAMICS,
        SensorKind::RangeFinder => &RANGE_FINDER,
        SensorKind::RaycastLidar => &RAYCAST_LIDAR,
        SensorKind::RaycastSemanticLidar => &RAYCAST_SEMANTIC_LIDAR,
    }
}

/// Find the table entry for option `name` of `kind`.
pub fn lookup(kind: SensorKind, name: &str) -> Option<&'static OptionSpec> {
    options(kind).iter().find(|spec| spec.name == name)
}
