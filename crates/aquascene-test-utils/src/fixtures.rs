//! Ready-made scenarios for tests and benchmarks.

use aquascene_agent::{AgentDescriptor, AgentType, VehiclePreset};
use aquascene_core::WorldId;
use aquascene_scenario::ScenarioBuilder;
use aquascene_sensor::SensorFactory;

/// A BlueROV2 with the default suite in the Dam world, as the main agent.
pub fn bluerov_dam() -> ScenarioBuilder {
    let mut scenario = ScenarioBuilder::new("bluerov-dam");
    scenario
        .set_world(WorldId::Dam)
        .add_agent(VehiclePreset::bluerov2("rov0").build().unwrap())
        .unwrap()
        .set_main_agent("rov0");
    scenario
}

/// A survey ROV carrying sonar and navigation sensors.
pub fn sonar_rov(name: &str) -> AgentDescriptor {
    let mut sensors = SensorFactory::new();
    VehiclePreset::bluerov_heavy(name)
        .sensors([
            sensors.pose().build().unwrap(),
            sensors.dvl().build().unwrap(),
            sensors.imaging_sonar().hz(15).build().unwrap(),
            sensors.sidescan_sonar().build().unwrap(),
            sensors.profiling_sonar().build().unwrap(),
        ])
        .build()
        .unwrap()
}

/// `count` sonar ROVs and one passive surface vessel in open water.
pub fn survey_fleet(count: usize) -> ScenarioBuilder {
    let mut scenario = ScenarioBuilder::new("survey-fleet");
    scenario.set_world(WorldId::OpenWater);
    for i in 0..count {
        scenario.add_agent(sonar_rov(&format!("rov{i}"))).unwrap();
    }
    let boat = AgentDescriptor::builder("tender", AgentType::SurfaceVessel)
        .controllable(false)
        .location([0.0, 0.0, 0.0])
        .build()
        .unwrap();
    scenario.add_agent(boat).unwrap();
    scenario
}
