//! Build the BlueROV2 Dam scenario, print its export, then fly a scripted
//! key sequence against an in-process host.
//!
//! ```text
//! RUST_LOG=debug cargo run -p aquascene --example bluerov_keyboard
//! ```

use std::error::Error;

use aquascene::prelude::*;
use aquascene_test_utils::RecordingHost;
use crossbeam_channel::unbounded;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut sensors = SensorFactory::new();
    let sonar = sensors
        .imaging_sonar()
        .name("FrontSonar")
        .location([0.25, 0.0, -0.1])
        .set("RangeMax", 20.0)
        .build()?;

    let mut rov = VehiclePreset::bluerov2("rov0").build()?;
    rov.add_sensor(sonar)?;

    let mut scenario = ScenarioBuilder::new("bluerov-dam");
    scenario
        .set_world_name("Dam")?
        .add_agent(rov)?
        .set_main_agent("rov0");
    let export = scenario.export()?;
    println!("{}", export.to_json_pretty()?);

    let (tx, rx) = unbounded();
    let script = [
        InputEvent::KeyPress(Key::ArrowDown),
        InputEvent::KeyRelease(Key::ArrowDown),
        InputEvent::KeyPress(Key::char('w')),
        InputEvent::KeyPress(Key::char('e')),
        InputEvent::KeyRelease(Key::char('e')),
        InputEvent::KeyRelease(Key::char('w')),
        InputEvent::KeyPress(Key::Escape),
    ];

    let mapper = KeyboardMapper::new(TeleopConfig::default())?;
    let mut control = ControlLoop::new(mapper, RecordingHost::new(), rx);
    for event in script {
        tx.send(event)?;
        let outcome = control.run_tick()?;
        info!(
            tick = outcome.tick,
            ?event,
            command = ?outcome.command.channels(),
            "stepped host"
        );
        if outcome.state == MapperState::Stopped {
            break;
        }
    }

    let host = control.into_host();
    info!(steps = host.steps(), "demo finished");
    Ok(())
}
