use approx::assert_relative_eq;
use glider::components::{GliderConfig, GliderDebugText, GliderPose, GliderState};

use crate::common::{
    assert_pose_valid, assert_state_within_limits, create_level_config, create_test_config,
    TestAppBuilder,
};

#[test]
fn test_level_flight_holds_altitude() {
    let mut app = TestAppBuilder::new().build();
    let glider = app.spawn_glider(create_level_config());

    // Run for 1 second of simulation time
    app.run_for(1.0);

    let state = app.get::<GliderState>(glider).expect("glider state");
    let pose = app.get::<GliderPose>(glider).expect("glider pose");
    assert_relative_eq!(state.pitch, 0.0);
    assert_relative_eq!(state.velocity, 0.5);
    assert_relative_eq!(pose.altitude(), 100_000.0, epsilon = 1e-6);

    // Heading north at half airspeed, 0.5 * 3500 cm/s
    assert_relative_eq!(pose.position.x, 1750.0, epsilon = 1e-3);
    assert_relative_eq!(pose.position.y, 0.0, epsilon = 1e-9);
}

#[test]
fn test_glider_noses_down_at_rest() {
    let mut app = TestAppBuilder::new().build();
    let glider = app.spawn_glider(create_test_config());

    app.run_for(2.0);

    let state = app.get::<GliderState>(glider).expect("glider state");
    let pose = app.get::<GliderPose>(glider).expect("glider pose");
    assert!(state.pitch < 0.0, "pitch {} should sink toward neutral", state.pitch);
    assert!(state.neutral_pitch < 0.0);
    assert!(pose.altitude() < 100_000.0);
    // Diving trades height for speed
    assert!(state.velocity > 0.5);
}

#[test]
fn test_right_input_banks_and_turns_east() {
    let mut app = TestAppBuilder::new().build();
    let config = create_test_config();
    let glider = app.spawn_glider(config.clone());

    app.set_controls(0.0, 1.0);
    app.run_for(1.5);

    let state = app.get::<GliderState>(glider).expect("glider state");
    assert!(state.roll > 0.0, "roll {} should be positive", state.roll);
    assert!(state.yaw > 0.0 && state.yaw < 180.0, "yaw {}", state.yaw);
    assert_state_within_limits(state, &config);

    let pose = app.get::<GliderPose>(glider).expect("glider pose");
    assert!(pose.position.y > 0.0, "should drift east, got {:?}", pose.position);
}

#[test]
fn test_left_input_turns_west() {
    let mut app = TestAppBuilder::new().build();
    let glider = app.spawn_glider(create_test_config());

    app.set_controls(0.0, -1.0);
    app.run_for(1.5);

    let state = app.get::<GliderState>(glider).expect("glider state");
    assert!(state.roll < 0.0);
    // Heading wraps below north
    assert!(state.yaw > 180.0 && state.yaw < 360.0, "yaw {}", state.yaw);

    let pose = app.get::<GliderPose>(glider).expect("glider pose");
    assert!(pose.position.y < 0.0);
}

#[test]
fn test_pull_back_raises_nose() {
    let mut app = TestAppBuilder::new().build();
    let glider = app.spawn_glider(create_test_config());

    app.set_controls(-1.0, 0.0);
    app.run_for(1.0);

    let state = app.get::<GliderState>(glider).expect("glider state");
    assert!(state.pitch > 0.0, "pitch {} should be nose up", state.pitch);
    assert!(state.slewed_input_pitch > 0.0);
}

#[test]
fn test_releasing_roll_levels_wings() {
    let mut app = TestAppBuilder::new().build();
    let glider = app.spawn_glider(create_level_config());

    app.set_controls(0.0, 1.0);
    app.run_for(2.0);
    let banked = app.get::<GliderState>(glider).expect("glider state").roll;

    app.set_controls(0.0, 0.0);
    app.run_for(5.0);
    let state = app.get::<GliderState>(glider).expect("glider state");
    assert!(state.roll.abs() < banked.abs() * 0.1, "roll {} after release", state.roll);
}

#[test]
fn test_limits_hold_over_long_flight() {
    let mut app = TestAppBuilder::new().build();
    let config = GliderConfig::trainer();
    let glider = app.spawn_glider(config.clone());

    let inputs = [(1.0, 1.0), (-1.0, -1.0), (0.0, 0.5), (-1.0, 1.0), (1.0, 0.0)];
    for (up, right) in inputs {
        app.set_controls(up, right);
        app.run_for(4.0);

        assert_state_within_limits(app.get::<GliderState>(glider).expect("glider state"), &config);
        assert_pose_valid(app.get::<GliderPose>(glider).expect("glider pose"));
    }
}

#[test]
fn test_debug_text_tracks_state() {
    let mut app = TestAppBuilder::new().build();
    let glider = app.spawn_glider(create_test_config());

    app.run_steps(10);

    let state = *app.get::<GliderState>(glider).expect("glider state");
    let text = app.get::<GliderDebugText>(glider).expect("debug text");
    assert_eq!(text.0, state.debug_string());
    assert!(text.0.starts_with("Velocity: "));
    assert!(text.0.contains("\nPitch: "));
}

#[test]
fn test_gliders_fly_independently() {
    let mut app = TestAppBuilder::new().build();
    let level = app.spawn_glider(create_level_config());
    let sinking = app.spawn_glider(create_test_config());

    app.run_for(1.0);

    let level_altitude = app.get::<GliderPose>(level).expect("pose").altitude();
    let sinking_altitude = app.get::<GliderPose>(sinking).expect("pose").altitude();
    assert_relative_eq!(level_altitude, 100_000.0, epsilon = 1e-6);
    assert!(sinking_altitude < level_altitude);
}
