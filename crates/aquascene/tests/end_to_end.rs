//! Building, exporting and flying a scenario through the facade.

use aquascene::prelude::*;
use aquascene_test_utils::{fixtures, RecordingHost};
use crossbeam_channel::unbounded;

fn build_dam_scenario() -> Result<ScenarioExport, BuildError> {
    let mut sensors = SensorFactory::new();
    let sonar = sensors.imaging_sonar().name("FrontSonar").build()?;
    let mut rov = VehiclePreset::bluerov2("rov0").build()?;
    rov.add_sensor(sonar)?;
    let mut scenario = ScenarioBuilder::new("dam");
    scenario
        .set_world_name("Dam")?
        .add_agent(rov)?
        .set_main_agent("rov0");
    Ok(scenario.export()?)
}

#[test]
fn question_mark_chains_across_crates() {
    let export = build_dam_scenario().unwrap();
    assert_eq!(export.world, WorldId::Dam);
    assert_eq!(export.main_agent, "rov0");
    assert_eq!(export.agents[0].sensors.len(), 5);
}

#[test]
fn each_layer_maps_into_build_error() {
    let world: Result<WorldId, BuildError> = WorldId::resolve("Atlantis").map_err(Into::into);
    assert!(matches!(world, Err(BuildError::World(_))));

    let sensor: Result<SensorDescriptor, BuildError> = SensorFactory::new()
        .imaging_sonar()
        .set("RangeMax", -1.0)
        .build()
        .map_err(Into::into);
    assert!(matches!(sensor, Err(BuildError::Sensor(_))));

    let agent = AgentDescriptor::from_type_name("rov0", "Submarine");
    assert!(matches!(agent, Err(BuildError::AgentType(_))));

    let mut scenario = ScenarioBuilder::new("empty");
    scenario.set_world(WorldId::Rooms);
    let export: Result<ScenarioExport, BuildError> = scenario.export().map_err(Into::into);
    assert_eq!(
        export,
        Err(BuildError::Scenario(ScenarioError::Validation(
            ValidationFailure::NoAgents
        )))
    );
}

#[test]
fn identical_builds_export_identical_bytes() {
    let a = build_dam_scenario().unwrap().to_json().unwrap();
    let b = build_dam_scenario().unwrap().to_json().unwrap();
    assert_eq!(a, b);
}

#[test]
fn fleet_fixture_exports_every_agent() {
    let mut fleet = fixtures::survey_fleet(3);
    fleet.set_main_agent("rov1");
    let export = fleet.export().unwrap();
    let value: serde_json::Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();
    assert_eq!(value["agents"].as_array().unwrap().len(), 4);
    assert_eq!(value["agents"][3]["agent_type"], "SurfaceVessel");
    assert_eq!(value["agents"][0]["agent_type"], "BlueROVHeavy");
}

#[test]
fn fly_the_exported_vehicle() {
    assert!(fixtures::bluerov_dam().export().is_ok());

    let (tx, rx) = unbounded();
    let mut control = ControlLoop::new(KeyboardMapper::default(), RecordingHost::new(), rx);
    tx.send(InputEvent::KeyPress(Key::ArrowDown)).unwrap();
    control.run_tick().unwrap();
    tx.send(InputEvent::WindowClose).unwrap();
    control.run_tick().unwrap();

    let host = control.into_host();
    assert_eq!(&host.commands()[0].channels()[..4], &[-1.0; 4]);
    assert!(host.commands()[1].is_zero());
}
