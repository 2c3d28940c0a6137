use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use std::{path::PathBuf, time::Duration};

use glider::{
    components::{
        ExternalController, GliderBundle, GliderConfig, GliderControls, GliderDebugText,
        GliderPose, GliderPreset, GliderSource, GliderState, Thermal,
    },
    plugins::{GliderPlugin, ThermalOverlapEvent},
    resources::ExternalControls,
};

/// Fly a glider headless with fixed inputs and report where it ends up.
#[derive(Parser, Debug, Clone)]
#[command(name = "glider_replay", version, about)]
struct ReplayArgs {
    /// Glider config file (YAML or JSON), the arcade preset when omitted
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Frame delta in seconds
    #[arg(long, default_value_t = 1.0 / 60.0, value_parser = parse_dt)]
    dt: f64,

    /// Held pitch axis, positive pushes the nose down
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    up: f64,

    /// Held roll axis, positive banks right
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    right: f64,

    /// Frame at which the glider enters a thermal
    #[arg(long)]
    thermal_from: Option<u32>,

    /// Frame at which the glider leaves the thermal
    #[arg(long)]
    thermal_to: Option<u32>,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,
}

const MAX_DT: f64 = 60.0;

fn parse_dt(value: &str) -> Result<f64, String> {
    let dt: f64 = value
        .parse()
        .map_err(|err| format!("`{}` is not a number: {}", value, err))?;
    if dt > 0.0 && dt <= MAX_DT {
        Ok(dt)
    } else {
        Err(format!("must be in (0, {}] seconds, got {}", MAX_DT, dt))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ReplayArgs::parse();

    let source = match &args.config {
        Some(path) => GliderSource::File(path.clone()),
        None => GliderSource::Programmed(GliderPreset::Arcade),
    };
    let config = GliderConfig::new(source)?;

    let step = Duration::from_secs_f64(args.dt);
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        .add_plugins(GliderPlugin::new())
        .insert_resource(TimeUpdateStrategy::ManualDuration(step))
        .insert_resource(ExternalControls(GliderControls::new(args.up, args.right)));

    // Large steps would otherwise be clamped by virtual time
    app.world_mut()
        .resource_mut::<Time<Virtual>>()
        .set_max_delta(step.max(Duration::from_millis(250)));

    let glider = app
        .world_mut()
        .spawn((GliderBundle::new(config), ExternalController))
        .id();
    let thermal = app
        .world_mut()
        .spawn((Thermal, Name::new("Replay Thermal")))
        .id();

    // First update only primes the clock
    app.update();

    let log_every = (1.0 / args.dt).round().max(1.0) as u32;
    for frame in 0..args.frames {
        if args.thermal_from == Some(frame) {
            app.world_mut()
                .send_event(ThermalOverlapEvent::Begin { glider, thermal });
        }
        if args.thermal_to == Some(frame) {
            app.world_mut()
                .send_event(ThermalOverlapEvent::End { glider, thermal });
        }

        app.update();

        if frame % log_every == 0 {
            if let Some(text) = app.world().get::<GliderDebugText>(glider) {
                info!("frame {}: {}", frame, text.0.replace('\n', ", "));
            }
        }
    }

    let world = app.world();
    let (Some(state), Some(pose)) = (world.get::<GliderState>(glider), world.get::<GliderPose>(glider))
    else {
        return Err("glider entity disappeared during replay".into());
    };

    if args.json {
        let report = serde_json::json!({
            "frames": args.frames,
            "dt": args.dt,
            "state": state,
            "pose": pose,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", state.debug_string());
        println!(
            "Roll: {:.6}\nYaw: {:.6}\nThermal lift: {:.6}",
            state.roll, state.yaw, state.thermal_lift
        );
        println!(
            "Position: ({:.3}, {:.3}, {:.3})\nAltitude: {:.3}",
            pose.position.x,
            pose.position.y,
            pose.position.z,
            pose.altitude()
        );
    }

    Ok(())
}
