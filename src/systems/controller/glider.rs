use bevy::prelude::*;

use crate::components::{ExternalController, GliderControls, PlayerController};
use crate::resources::ExternalControls;

/// System latching keyboard input into the axes of player-controlled gliders.
///
/// With no key held both axes return to zero.
pub fn glider_keyboard_system(
    mut query: Query<(&mut GliderControls, &PlayerController)>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    for (mut controls, player) in query.iter_mut() {
        if !player.active {
            continue;
        }
        let (up, right) = player.bindings.axes(&keyboard);
        controls.set_up_axis(up);
        controls.set_right_axis(right);
    }
}

/// System for driving gliders from an external source (scripts, replays, agents).
///
/// Copies the axes held in [`ExternalControls`] onto every glider marked with
/// [`ExternalController`].
pub fn glider_external_control_system(
    mut query: Query<&mut GliderControls, With<ExternalController>>,
    action: Res<ExternalControls>,
) {
    for mut controls in query.iter_mut() {
        controls.set_up_axis(action.up_axis());
        controls.set_right_axis(action.right_axis());
    }
}
