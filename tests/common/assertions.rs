use glider::components::{GliderConfig, GliderPose, GliderState};

/// Assert that a glider's flight state respects its configured limits
#[track_caller]
pub fn assert_state_within_limits(state: &GliderState, config: &GliderConfig) {
    assert!(
        (0.01..=1.0).contains(&state.velocity),
        "Velocity {} outside [0.01, 1]",
        state.velocity
    );
    assert!(
        state.roll.abs() <= config.max_roll,
        "Roll {} exceeds {}",
        state.roll,
        config.max_roll
    );
    assert!(
        (0.0..360.0).contains(&state.yaw),
        "Yaw {} outside [0, 360)",
        state.yaw
    );
    assert!(
        (0.0..=config.thermal_lift_max_velocity).contains(&state.thermal_lift),
        "Thermal lift {} outside [0, {}]",
        state.thermal_lift,
        config.thermal_lift_max_velocity
    );
    assert!(state.pitch.is_finite(), "Pitch is not finite");
}

/// Assert that a pose is finite and its attitude is normalised
#[track_caller]
pub fn assert_pose_valid(pose: &GliderPose) {
    assert!(
        pose.position.iter().all(|v| v.is_finite()),
        "Position contains non-finite values"
    );
    assert!(
        (pose.attitude.quaternion().norm() - 1.0).abs() < 1e-9,
        "Attitude is not normalised"
    );
}
