pub mod controller;
pub mod curve;
pub mod glider;
pub mod spatial;

pub use controller::{ExternalController, KeyBindings, PlayerController};
pub use curve::{
    CurveDefinition, CurveError, CurveInterpolation, CurvePoint, PiecewiseLinearCurve,
    ResponseCurve,
};
pub use glider::{
    ConfigError, CurveHandle, CurveName, FlightOutput, GliderBundle, GliderConfig,
    GliderControls, GliderCurves, GliderDebugText, GliderHost, GliderPreset, GliderSource,
    GliderStartConfig, GliderState, RawGliderConfig, RawGliderCurves, Thermal, ThermalOverlaps,
};
pub use spatial::GliderPose;
