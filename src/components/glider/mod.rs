pub mod bundle;
pub mod config;
pub mod state;
pub mod thermal;
pub mod traits;

pub use bundle::GliderBundle;
pub use config::{
    ConfigError, CurveHandle, CurveName, GliderConfig, GliderCurves, GliderPreset, GliderSource,
    GliderStartConfig, RawGliderConfig, RawGliderCurves,
};
pub use state::{GliderControls, GliderDebugText, GliderState};
pub use thermal::{Thermal, ThermalOverlaps};
pub use traits::{FlightOutput, GliderHost};
