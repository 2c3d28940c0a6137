use bevy::prelude::*;

use crate::components::{
    FlightOutput, GliderConfig, GliderControls, GliderDebugText, GliderPose, GliderState,
    ResponseCurve, ThermalOverlaps,
};
use crate::utils::{
    deg_to_rad, is_nearly_zero, lerp, signed_square, wrap_degrees, MAX_VELOCITY, MIN_VELOCITY,
};

/// System advancing every glider by one frame.
///
/// Reads the latched axes and thermal overlaps, updates the flight state, then
/// applies the result to the glider pose and refreshes the diagnostic text.
pub fn glider_flight_system(
    mut query: Query<(
        &mut GliderState,
        &GliderControls,
        &ThermalOverlaps,
        &GliderConfig,
        &mut GliderPose,
        Option<&mut GliderDebugText>,
    )>,
    time: Res<Time>,
) {
    let dt = time.delta_secs_f64();

    for (mut state, controls, thermals, config, mut pose, debug_text) in query.iter_mut() {
        let output = update_glider(&mut state, controls, thermals.count(), config, dt);
        output.apply(&mut *pose);

        if let Some(mut debug_text) = debug_text {
            debug_text.0 = state.debug_string();
        }

        trace!(
            "{}: pitch {:.2} roll {:.2} yaw {:.2} velocity {:.3} lift {:.1}",
            config.name,
            state.pitch,
            state.roll,
            state.yaw,
            state.velocity,
            state.thermal_lift
        );
    }
}

/// Advances a glider's flight state by `dt` seconds.
///
/// Every slew is a lerp whose fraction (`rate * dt`) is clamped to `[0, 1]`, so a
/// long frame or a steep rate curve lands exactly on the target instead of
/// overshooting it.
///
/// # Arguments
/// * `state` - The flight state to update.
/// * `controls` - Latched input axes.
/// * `thermal_count` - Number of thermal volumes currently overlapped.
/// * `config` - Response curves and tuning constants.
/// * `dt` - Elapsed time (s).
///
/// # Returns
/// The orientation and displacement to apply to the glider's transform.
pub fn update_glider(
    state: &mut GliderState,
    controls: &GliderControls,
    thermal_count: usize,
    config: &GliderConfig,
    dt: f64,
) -> FlightOutput {
    let curves = &config.curves;

    // Pitch
    state.neutral_pitch = curves.neutral_pitch_by_velocity.evaluate(state.velocity)
        + curves.neutral_pitch_by_roll.evaluate(state.roll.abs());
    let max_pitch = curves.max_pitch_by_velocity.evaluate(state.velocity);

    let up = controls.up_axis();
    let input_pitch = if up < 0.0 {
        lerp(state.neutral_pitch, max_pitch, -up)
    } else {
        lerp(state.neutral_pitch, config.min_pitch, up)
    };

    state.slewed_input_pitch = if is_nearly_zero(up) {
        lerp(
            state.slewed_input_pitch,
            input_pitch,
            config.pitch_no_input_slew * dt,
        )
    } else {
        slew_toward(
            state.slewed_input_pitch,
            input_pitch,
            config.min_pitch,
            max_pitch,
            curves.pitch_input_slew_by_amount_to_limit.as_ref(),
            dt,
        )
    };

    state.pitch = slew_toward(
        state.pitch,
        state.slewed_input_pitch,
        config.min_pitch,
        max_pitch,
        curves.pitch_slew_by_amount_to_limit.as_ref(),
        dt,
    );

    // Roll
    let right = controls.right_axis();
    let max_roll = config.max_roll;
    let input_roll = right * max_roll;

    state.slewed_input_roll = if is_nearly_zero(right) {
        lerp(
            state.slewed_input_roll,
            input_roll,
            config.roll_no_input_slew * dt,
        )
    } else {
        slew_toward(
            state.slewed_input_roll,
            input_roll,
            -max_roll,
            max_roll,
            curves.roll_input_slew_by_amount_to_limit.as_ref(),
            dt,
        )
    };

    state.roll = slew_toward(
        state.roll,
        state.slewed_input_roll,
        -max_roll,
        max_roll,
        curves.roll_slew_by_amount_to_limit.as_ref(),
        dt,
    )
    .max(-max_roll)
    .min(max_roll);

    // Yaw, the curve is authored for non-negative roll
    let turn_rate = curves.delta_yaw_by_roll.evaluate(state.roll.abs());
    let delta_yaw = if state.roll < 0.0 { -turn_rate } else { turn_rate };
    state.yaw = wrap_degrees(state.yaw + delta_yaw * dt);

    // Velocity: diving speeds up, climbing slows down
    let sin_pitch = deg_to_rad(state.pitch).sin();
    let vertical_velocity = sin_pitch * state.velocity;
    state.velocity += curves
        .delta_velocity_by_vertical_velocity
        .evaluate(vertical_velocity)
        * dt;
    state.velocity -= signed_square(sin_pitch) * config.gravity * dt;
    state.velocity = state.velocity.clamp(MIN_VELOCITY, MAX_VELOCITY);

    // Thermals
    let lift_step = config.thermal_lift_acceleration * dt;
    let thermal_lift = if thermal_count > 0 {
        state.thermal_lift + lift_step
    } else {
        state.thermal_lift - lift_step
    };
    state.thermal_lift = thermal_lift
        .min(config.thermal_lift_max_velocity)
        .max(0.0);

    FlightOutput {
        pitch: state.pitch,
        yaw: state.yaw,
        roll: state.roll,
        forward: state.velocity * config.velocity_scale * dt,
        climb: state.thermal_lift * dt,
    }
}

/// Moves `current` toward `target`, slowing as it nears the limit it is heading for.
///
/// The slew rate is looked up from `slew_by_amount_to_limit` using the distance
/// between `current` and `max` (moving up) or `min` (moving down).
pub fn slew_toward(
    current: f64,
    target: f64,
    min: f64,
    max: f64,
    slew_by_amount_to_limit: &dyn ResponseCurve,
    dt: f64,
) -> f64 {
    let amount_to_limit = if target > current {
        max - current
    } else {
        current - min
    };
    let slew = slew_by_amount_to_limit.evaluate(amount_to_limit);
    lerp(current, target, slew * dt)
}
