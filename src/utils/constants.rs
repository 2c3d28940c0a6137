pub const SMALL_NUMBER: f64 = 1.0e-8; // tolerance for "no input"

// Normalised airspeed limits
pub const MIN_VELOCITY: f64 = 0.01;
pub const MAX_VELOCITY: f64 = 1.0;

pub const DEFAULT_VELOCITY_SCALE: f64 = 3500.0; // cm/s at full airspeed, ~80 mph
pub const DEFAULT_THERMAL_LIFT_MAX_VELOCITY: f64 = 500.0; // cm/s
pub const DEFAULT_THERMAL_LIFT_ACCELERATION: f64 = 1000.0; // cm/s^2

pub const CENTIMETERS_PER_METER: f64 = 100.0;
