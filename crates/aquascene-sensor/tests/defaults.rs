//! Exported default configurations and out-of-range rejection across every
//! sensor kind.

use aquascene_core::{OptionValue, SensorConfigIssue};
use aquascene_sensor::{schema, Constraint, OptionType, SensorBuilder, SensorKind};
use serde_json::json;

fn exported_json(kind: SensorKind) -> serde_json::Value {
    let sensor = SensorBuilder::new(kind).build().unwrap();
    serde_json::to_value(sensor.export()).unwrap()
}

#[test]
fn every_kind_exports_exactly_its_defaults() {
    for &kind in SensorKind::all() {
        let sensor = SensorBuilder::new(kind).build().unwrap();
        let entry = sensor.export();
        assert_eq!(entry.sensor_type, kind.sensor_type());
        assert_eq!(entry.sensor_name, kind.sensor_type());
        assert_eq!(entry.hz, kind.default_hz());
        assert_eq!(entry.socket, kind.default_socket());

        let expected: Vec<(String, OptionValue)> = schema::options(kind)
            .iter()
            .map(|spec| (spec.name.to_string(), spec.default.clone()))
            .collect();
        let actual: Vec<(String, OptionValue)> = entry.configuration.into_iter().collect();
        assert_eq!(actual, expected, "{kind:?}");
    }
}

#[test]
fn imaging_sonar_defaults() {
    assert_eq!(
        exported_json(SensorKind::ImagingSonar),
        json!({
            "sensor_type": "ImagingSonar",
            "sensor_name": "ImagingSonar",
            "socket": "SonarSocket",
            "Hz": 10,
            "configuration": {
                "Azimuth": 90.0,
                "Elevation": 20.0,
                "RangeMin": 1.0,
                "RangeMax": 15.0,
                "RangeBins": 128,
                "AzimuthBins": 128,
                "AddSigma": 0.15,
                "MultSigma": 0.2,
                "MultiPath": true,
                "ClusterSize": 5,
                "ScaleNoise": true,
                "AzimuthStreaks": -1,
                "RangeSigma": 0.1,
                "ShowWarning": true,
                "InitOctreeRange": 50.0,
                "ViewRegion": false,
                "ViewOctree": -10.0,
                "WaterDensity": 997.0,
                "WaterSpeedSound": 1480.0,
                "UseApprox": true
            }
        })
    );
}

#[test]
fn dvl_and_depth_defaults() {
    assert_eq!(
        exported_json(SensorKind::Dvl)["configuration"],
        json!({
            "Elevation": 22.5,
            "DebugLines": false,
            "VelSigma": 0.02626,
            "ReturnRange": true,
            "MaxRange": 50.0,
            "RangeSigma": 0.1
        })
    );
    assert_eq!(
        exported_json(SensorKind::Depth),
        json!({
            "sensor_type": "DepthSensor",
            "sensor_name": "DepthSensor",
            "socket": "DepthSocket",
            "Hz": 30,
            "configuration": { "Sigma": 0.0 }
        })
    );
}

#[test]
fn optionless_kinds_export_empty_configuration() {
    for kind in [SensorKind::Pose, SensorKind::Collision, SensorKind::Velocity] {
        assert_eq!(exported_json(kind)["configuration"], json!({}));
    }
}

#[test]
fn rgb_camera_defaults() {
    assert_eq!(
        exported_json(SensorKind::RgbCamera),
        json!({
            "sensor_type": "RGBCamera",
            "sensor_name": "RGBCamera",
            "socket": "CameraSocket",
            "Hz": 10,
            "configuration": {
                "CaptureWidth": 640,
                "CaptureHeight": 480
            }
        })
    );
}

#[test]
fn stereo_camera_defaults() {
    assert_eq!(
        exported_json(SensorKind::StereoCamera),
        json!({
            "sensor_type": "StereoCamera",
            "sensor_name": "StereoCamera",
            "socket": "CameraSocket",
            "Hz": 10,
            "configuration": {
                "CaptureWidth": 640,
                "CaptureHeight": 480,
                "FOV": 90.0,
                "Baseline": 0.3,
                "DisparityScale": 1.0,
                "Gain": 1.0,
                "Exposure": 0.01,
                "Gamma": 1.0,
                "UseNoise": false
            }
        })
    );
}

#[test]
fn stereo_camera_fov_override() {
    let stereo = SensorBuilder::new(SensorKind::StereoCamera)
        .set("FOV", 60.0)
        .build()
        .unwrap();
    assert_eq!(stereo.option("FOV"), Some(&OptionValue::Float(60.0)));

    let err = SensorBuilder::new(SensorKind::RgbCamera)
        .set("FovAngle", 60.0)
        .build()
        .unwrap_err();
    assert_eq!(err.issue, SensorConfigIssue::UnknownOption);
}

#[test]
fn beacon_unlimited_range_exports_null() {
    assert_eq!(
        exported_json(SensorKind::AcousticBeacon)["configuration"]["MaxDistance"],
        serde_json::Value::Null
    );
}

#[test]
fn mounting_pose_exported_only_when_set() {
    let mounted = SensorBuilder::new(SensorKind::RgbCamera)
        .location([0.2, 0.0, 0.1])
        .build()
        .unwrap();
    let json = serde_json::to_value(mounted.export()).unwrap();
    assert_eq!(json["location"], json!([0.2, 0.0, 0.1]));
    assert!(json.get("rotation").is_none());
}

#[test]
fn every_kind_rejects_zero_rate() {
    for &kind in SensorKind::all() {
        let err = SensorBuilder::new(kind).hz(0).build().unwrap_err();
        assert_eq!(err.field, "Hz", "{kind:?}");
    }
}

#[test]
fn every_constrained_numeric_option_rejects_out_of_range() {
    for &kind in SensorKind::all() {
        for spec in schema::options(kind) {
            let bad = match (spec.ty, spec.constraint) {
                (OptionType::Int, Constraint::Positive) => OptionValue::Int(0),
                (OptionType::Int, Constraint::NonNegative) => OptionValue::Int(-1),
                (_, Constraint::Positive) => OptionValue::Float(-1.0),
                (_, Constraint::NonNegative) => OptionValue::Float(-0.5),
                (_, Constraint::FieldOfView) => OptionValue::Float(0.0),
                (_, Constraint::Unbounded) => continue,
            };
            let err = SensorBuilder::new(kind)
                .set(spec.name, bad.clone())
                .build()
                .unwrap_err();
            assert_eq!(err.field, spec.name, "{kind:?}");
            assert!(
                matches!(err.issue, SensorConfigIssue::OutOfRange { .. }),
                "{kind:?}.{} accepted {bad}",
                spec.name
            );
        }
    }
}

#[test]
fn negative_range_max_and_zero_fov_rejected() {
    let err = SensorBuilder::new(SensorKind::ImagingSonar)
        .set("RangeMax", -15.0)
        .build()
        .unwrap_err();
    assert_eq!(err.sensor_type, "ImagingSonar");
    assert_eq!(err.value, "-15.0");

    let err = SensorBuilder::new(SensorKind::RaycastLidar)
        .set("HorizontalFov", 0.0)
        .build()
        .unwrap_err();
    assert_eq!(err.field, "HorizontalFov");
}

#[test]
fn non_numeric_value_for_numeric_option_rejected() {
    let err = SensorBuilder::new(SensorKind::Gps)
        .set("Depth", [1.0, 2.0, 3.0])
        .build()
        .unwrap_err();
    assert!(matches!(err.issue, SensorConfigIssue::WrongType { .. }));
}
