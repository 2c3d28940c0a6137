use bevy::prelude::*;
use glider::{
    components::{GliderControls, GliderState, PlayerController},
    resources::ExternalControls,
};

use crate::common::{create_test_config, TestAppBuilder};

#[test]
fn test_player_glider_spawned_on_startup() {
    let mut app = TestAppBuilder::new()
        .with_player(create_test_config())
        .build();

    assert_eq!(app.query_all::<PlayerController>().len(), 1);
    let name = app.query_single::<Name>().expect("player name");
    assert_eq!(name.as_str(), "test_glider");
}

#[test]
fn test_keyboard_latches_axes() {
    let mut app = TestAppBuilder::new()
        .with_player(create_test_config())
        .build();

    {
        let mut keyboard = app
            .get_state_mut::<ButtonInput<KeyCode>>()
            .expect("keyboard input");
        keyboard.press(KeyCode::KeyS);
        keyboard.press(KeyCode::KeyD);
    }
    app.run_frame();

    let controls = app.query_single::<GliderControls>().expect("controls");
    assert_eq!(controls.up_axis(), -1.0);
    assert_eq!(controls.right_axis(), 1.0);

    // Releasing every key returns both axes to zero
    app.get_state_mut::<ButtonInput<KeyCode>>()
        .expect("keyboard input")
        .release_all();
    app.run_frame();

    let controls = app.query_single::<GliderControls>().expect("controls");
    assert_eq!(*controls, GliderControls::default());
}

#[test]
fn test_inactive_player_ignores_keyboard() {
    let mut app = TestAppBuilder::new().build();
    let glider = app
        .app
        .world_mut()
        .spawn((
            glider::components::GliderBundle::new(create_test_config()),
            PlayerController::disabled(),
        ))
        .id();

    app.get_state_mut::<ButtonInput<KeyCode>>()
        .expect("keyboard input")
        .press(KeyCode::ArrowRight);
    app.run_frame();

    let controls = app.get::<GliderControls>(glider).expect("controls");
    assert_eq!(controls.right_axis(), 0.0);
}

#[test]
fn test_external_controls_are_clamped() {
    let mut app = TestAppBuilder::new().build();
    let glider = app.spawn_glider(create_test_config());

    app.set_controls(-3.0, 2.5);
    app.run_frame();

    let controls = app.get::<GliderControls>(glider).expect("controls");
    assert_eq!(controls.up_axis(), -1.0);
    assert_eq!(controls.right_axis(), 1.0);

    let external = app.get_state::<ExternalControls>().expect("external controls");
    assert_eq!(external.right_axis(), 1.0);
}

#[test]
fn test_external_controls_leave_player_alone() {
    let mut app = TestAppBuilder::new()
        .with_player(create_test_config())
        .build();
    let external = app.spawn_glider(create_test_config());

    app.set_controls(0.0, 1.0);
    app.run_for(1.0);

    let external_roll = app.get::<GliderState>(external).expect("state").roll;
    assert!(external_roll > 0.0);

    let mut query = app
        .app
        .world_mut()
        .query_filtered::<&GliderState, With<PlayerController>>();
    let player = query.single(app.app.world());
    assert_eq!(player.roll, 0.0);
}
