mod events;
mod glider;

pub use events::ThermalOverlapEvent;
pub use glider::{GliderPlugin, GliderSet};
