//! Exported document shape, round-tripping and determinism.

use aquascene_agent::{AgentDescriptor, AgentType, VehiclePreset};
use aquascene_core::{ScenarioError, ValidationFailure, WorldId};
use aquascene_scenario::{FrameRate, ScenarioBuilder, ScenarioExport};
use aquascene_sensor::{SensorFactory, SensorKind};
use proptest::prelude::*;
use serde_json::json;

fn inspection_scenario() -> ScenarioBuilder {
    let mut sensors = SensorFactory::new();
    let sonar = sensors
        .imaging_sonar()
        .set("RangeMax", 30.0)
        .location([0.0, 0.0, -0.3])
        .build()
        .unwrap();
    let dvl = sensors.dvl().build().unwrap();
    let mut rov = VehiclePreset::bluerov2("rov0").build().unwrap();
    rov.add_sensor(sonar).unwrap().add_sensor(dvl).unwrap();

    let mut scenario = ScenarioBuilder::new("dam-inspection");
    scenario
        .set_world(WorldId::Dam)
        .add_agent(rov)
        .unwrap()
        .set_main_agent("rov0");
    scenario
}

#[test]
fn top_level_keys_in_host_order() {
    let value = inspection_scenario().export().unwrap().to_value().unwrap();
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        [
            "name",
            "world",
            "package_name",
            "main_agent",
            "ticks_per_sec",
            "frames_per_sec",
            "agents"
        ]
    );
    assert_eq!(value["world"], "Dam");
    assert_eq!(value["package_name"], "Ocean");
    assert_eq!(value["ticks_per_sec"], 30);
    assert_eq!(value["frames_per_sec"], 30);
}

#[test]
fn agent_and_sensor_entries() {
    let value = inspection_scenario().export().unwrap().to_value().unwrap();
    let agent = &value["agents"][0];
    assert_eq!(agent["agent_name"], "rov0");
    assert_eq!(agent["agent_type"], "BlueROV2");
    assert_eq!(agent["location"], json!([0.0, 0.0, -4.0]));
    assert_eq!(agent["sensors"].as_array().unwrap().len(), 6);

    let sonar = &agent["sensors"][4];
    assert_eq!(sonar["sensor_type"], "ImagingSonar");
    assert_eq!(sonar["sensor_name"], "ImagingSonar");
    assert_eq!(sonar["socket"], "SonarSocket");
    assert_eq!(sonar["Hz"], 10);
    assert_eq!(sonar["location"], json!([0.0, 0.0, -0.3]));
    assert!(sonar.get("rotation").is_none());
    assert_eq!(sonar["configuration"]["RangeMax"], 30.0);
    assert_eq!(sonar["configuration"]["Azimuth"], 90.0);
    assert_eq!(sonar["configuration"]["RangeBins"], 128);
}

#[test]
fn uncapped_frames_export_as_false() {
    let mut scenario = inspection_scenario();
    scenario.set_frames_per_second(FrameRate::Uncapped);
    let value = scenario.export().unwrap().to_value().unwrap();
    assert_eq!(value["frames_per_sec"], json!(false));
}

#[test]
fn missing_world_fails_export() {
    let mut scenario = ScenarioBuilder::new("nowhere");
    scenario
        .add_agent(VehiclePreset::bluerov2("rov0").build().unwrap())
        .unwrap();
    assert_eq!(
        scenario.export().unwrap_err(),
        ScenarioError::Validation(ValidationFailure::NoWorld)
    );
}

#[test]
fn round_trip_matches_builder_state() {
    let scenario = inspection_scenario();
    let json = scenario.export().unwrap().to_json().unwrap();
    let parsed = ScenarioExport::from_json(&json).unwrap();
    assert_eq!(parsed.agents.len(), scenario.agent_count());
    assert_eq!(Some(parsed.world), scenario.world());
    assert_eq!(Some(parsed.main_agent.as_str()), scenario.main_agent());
    assert_eq!(parsed, scenario.export().unwrap());
}

#[test]
fn multi_agent_order_is_insertion_order() {
    let mut scenario = ScenarioBuilder::with_world("fleet", WorldId::OpenWater);
    for (name, ty) in [
        ("torpedo", AgentType::TorpedoAuv),
        ("hover", AgentType::HoveringAuv),
        ("boat", AgentType::SurfaceVessel),
    ] {
        scenario
            .add_agent(AgentDescriptor::new(name, ty).unwrap())
            .unwrap();
    }
    let export = scenario.export().unwrap();
    let names: Vec<_> = export.agents.iter().map(|a| a.agent_name.as_str()).collect();
    assert_eq!(names, ["torpedo", "hover", "boat"]);
    assert_eq!(export.agent("boat").unwrap().agent_type, AgentType::SurfaceVessel);
}

fn build_from(picks: &[(usize, bool)]) -> String {
    let mut sensors = SensorFactory::new();
    let mut scenario = ScenarioBuilder::with_world("generated", WorldId::PierHarbor);
    for (i, &(kind, preset)) in picks.iter().enumerate() {
        let name = format!("agent{i}");
        let mut agent = if preset {
            VehiclePreset::bluerov2(name).build().unwrap()
        } else {
            AgentDescriptor::new(name, AgentType::HoveringAuv).unwrap()
        };
        let sensor = sensors
            .sensor(SensorKind::all()[kind])
            .name("extra")
            .build()
            .unwrap();
        agent.add_sensor(sensor).unwrap();
        scenario.add_agent(agent).unwrap();
    }
    scenario.export().unwrap().to_json().unwrap()
}

proptest! {
    #[test]
    fn identical_calls_give_identical_bytes(
        picks in prop::collection::vec((0usize..23, any::<bool>()), 1..6)
    ) {
        prop_assert_eq!(build_from(&picks), build_from(&picks));
    }

    #[test]
    fn every_export_parses_back(
        picks in prop::collection::vec((0usize..23, any::<bool>()), 1..6)
    ) {
        let json = build_from(&picks);
        let parsed = ScenarioExport::from_json(&json).unwrap();
        prop_assert_eq!(parsed.agents.len(), picks.len());
        prop_assert_eq!(parsed.main_agent.as_str(), "agent0");
    }
}
