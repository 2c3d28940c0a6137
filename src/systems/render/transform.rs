use bevy::prelude::*;

use crate::components::GliderPose;
use crate::resources::RenderFrame;

/// Mirrors each changed glider pose onto its render `Transform`.
pub fn sync_render_transform_system(
    mut query: Query<(&GliderPose, &mut Transform), Changed<GliderPose>>,
    frame: Res<RenderFrame>,
) {
    for (pose, mut transform) in query.iter_mut() {
        transform.translation = frame.render_position(&pose.position);
        transform.rotation = frame.render_rotation(&pose.attitude);
    }
}
