mod controller;
pub mod glider;
mod render;

pub use controller::{glider_external_control_system, glider_keyboard_system};
pub use glider::{
    glider_flight_system, slew_toward, thermal_overlap_system, thermal_removal_system,
    update_glider,
};
pub use render::sync_render_transform_system;
