use bevy::prelude::*;
use glider::{components::GliderPose, resources::RenderFrame};

use crate::common::{create_level_config, create_test_config, TestAppBuilder};

#[test]
fn test_transform_follows_pose() {
    let mut app = TestAppBuilder::new().build();
    let glider = app.spawn_glider(create_test_config());

    app.set_controls(-0.5, 0.7);
    app.run_for(1.0);

    let pose = *app.get::<GliderPose>(glider).expect("pose");
    let transform = *app.get::<Transform>(glider).expect("transform");
    let frame = app.get_state::<RenderFrame>().expect("render frame");

    assert_eq!(transform.translation, frame.render_position(&pose.position));
    assert_eq!(transform.rotation, frame.render_rotation(&pose.attitude));
}

#[test]
fn test_render_uses_metres_and_y_up() {
    let mut app = TestAppBuilder::new().build();
    let glider = app.spawn_glider(create_level_config());

    app.run_frame();

    let transform = app.get::<Transform>(glider).expect("transform");
    // 1 km above the origin, heading north along -Z
    assert!((transform.translation.y - 1000.0).abs() < 1e-3);
    let forward = transform.rotation * Vec3::NEG_Z;
    assert!(forward.abs_diff_eq(Vec3::NEG_Z, 1e-6), "forward {:?}", forward);
}

#[test]
fn test_custom_render_scale() {
    let frame = RenderFrame::new(1.0).expect("valid scale");
    let mut app = TestAppBuilder::new().with_render_frame(frame).build();
    let glider = app.spawn_glider(create_level_config());

    app.run_frame();

    let transform = app.get::<Transform>(glider).expect("transform");
    assert!((transform.translation.y - 100_000.0).abs() < 1e-1);
}
