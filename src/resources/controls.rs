use bevy::prelude::*;

use crate::components::GliderControls;

/// Axes applied to every glider marked `ExternalController`.
#[derive(Resource, Debug, Clone, Copy, Default, Deref, DerefMut)]
pub struct ExternalControls(pub GliderControls);
