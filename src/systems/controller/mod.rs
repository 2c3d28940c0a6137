mod glider;

pub use glider::{glider_external_control_system, glider_keyboard_system};
