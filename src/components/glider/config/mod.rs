mod glider;
mod loader;
mod start;

pub use glider::{CurveHandle, GliderConfig, GliderCurves, GliderPreset, GliderSource};
pub use loader::{ConfigError, CurveName, RawGliderConfig, RawGliderCurves};
pub use start::GliderStartConfig;
