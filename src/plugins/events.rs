use bevy::prelude::*;

/// Overlap notification between a glider and a thermal volume.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalOverlapEvent {
    Begin { glider: Entity, thermal: Entity },
    End { glider: Entity, thermal: Entity },
}

impl ThermalOverlapEvent {
    pub fn glider(&self) -> Entity {
        match *self {
            ThermalOverlapEvent::Begin { glider, .. } | ThermalOverlapEvent::End { glider, .. } => {
                glider
            }
        }
    }

    pub fn thermal(&self) -> Entity {
        match *self {
            ThermalOverlapEvent::Begin { thermal, .. }
            | ThermalOverlapEvent::End { thermal, .. } => thermal,
        }
    }
}
