mod flight;
mod thermal;

pub use flight::{glider_flight_system, slew_toward, update_glider};
pub use thermal::{thermal_overlap_system, thermal_removal_system};
