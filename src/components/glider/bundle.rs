use bevy::prelude::*;

use crate::components::glider::{
    GliderConfig, GliderControls, GliderDebugText, GliderState, ThermalOverlaps,
};
use crate::components::GliderPose;

/// Everything a glider entity needs to fly.
#[derive(Bundle)]
pub struct GliderBundle {
    pub name: Name,
    pub state: GliderState,
    pub controls: GliderControls,
    pub thermals: ThermalOverlaps,
    pub pose: GliderPose,
    pub debug_text: GliderDebugText,
    pub transform: Transform,
    pub config: GliderConfig,
}

impl GliderBundle {
    /// Builds a glider at the start position of `config`.
    pub fn new(config: GliderConfig) -> Self {
        Self {
            name: Name::new(config.name.clone()),
            state: GliderState::from_start(&config.start),
            controls: GliderControls::default(),
            thermals: ThermalOverlaps::default(),
            pose: GliderPose::from_start(&config.start),
            debug_text: GliderDebugText::default(),
            transform: Transform::default(),
            config,
        }
    }
}
