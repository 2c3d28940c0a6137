use bevy::prelude::*;

use crate::components::{GliderBundle, GliderConfig, PlayerController};
use crate::plugins::ThermalOverlapEvent;
use crate::resources::{ExternalControls, RenderFrame};
use crate::systems::{
    glider_external_control_system, glider_flight_system, glider_keyboard_system,
    sync_render_transform_system, thermal_overlap_system, thermal_removal_system,
};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GliderSet {
    /// Keyboard, external axes, thermal overlaps and removed thermals
    Input,
    /// Per-frame flight update
    Flight,
    /// Pose to `Transform`
    Render,
}

/// Registers glider input, flight and render systems.
///
/// Optionally spawns a keyboard-driven player glider at startup.
#[derive(Default)]
pub struct GliderPlugin {
    player: Option<GliderConfig>,
    frame: RenderFrame,
}

impl GliderPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a keyboard-controlled glider using `config` on startup.
    pub fn with_player(mut self, config: GliderConfig) -> Self {
        self.player = Some(config);
        self
    }

    pub fn with_render_frame(mut self, frame: RenderFrame) -> Self {
        self.frame = frame;
        self
    }

    fn setup_player(mut commands: Commands, config: GliderConfig) {
        info!("Spawning player glider '{}'", config.name);
        commands.spawn((GliderBundle::new(config), PlayerController::new()));
    }
}

impl Plugin for GliderPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ThermalOverlapEvent>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ExternalControls>()
            .insert_resource(self.frame.clone())
            .configure_sets(
                Update,
                (GliderSet::Input, GliderSet::Flight, GliderSet::Render).chain(),
            )
            .add_systems(
                Update,
                (
                    (
                        glider_keyboard_system,
                        glider_external_control_system,
                        (thermal_overlap_system, thermal_removal_system).chain(),
                    )
                        .in_set(GliderSet::Input),
                    glider_flight_system.in_set(GliderSet::Flight),
                    sync_render_transform_system.in_set(GliderSet::Render),
                ),
            );

        if let Some(config) = self.player.clone() {
            app.add_systems(
                Startup,
                move |commands: Commands| Self::setup_player(commands, config.clone()),
            );
        }
    }
}
