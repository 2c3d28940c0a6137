mod controls;
mod frames;

pub use controls::ExternalControls;
pub use frames::{FrameError, RenderFrame};
