use bevy::prelude::*;

use crate::components::{Thermal, ThermalOverlaps};
use crate::plugins::ThermalOverlapEvent;

/// Applies thermal begin/end overlap notifications to the gliders they name.
pub fn thermal_overlap_system(
    mut events: EventReader<ThermalOverlapEvent>,
    mut query: Query<&mut ThermalOverlaps>,
) {
    for event in events.read() {
        let glider = event.glider();
        let thermal = event.thermal();
        let Ok(mut overlaps) = query.get_mut(glider) else {
            warn!("Thermal overlap for entity {:?} which is not a glider", glider);
            continue;
        };

        match event {
            ThermalOverlapEvent::Begin { .. } => {
                overlaps.enter(thermal);
                debug!(
                    "Glider {:?} entered thermal {:?} ({} overlapping)",
                    glider,
                    thermal,
                    overlaps.count()
                );
            }
            ThermalOverlapEvent::End { .. } => {
                if overlaps.exit(thermal) {
                    debug!(
                        "Glider {:?} left thermal {:?} ({} overlapping)",
                        glider,
                        thermal,
                        overlaps.count()
                    );
                } else {
                    warn!(
                        "Glider {:?} left thermal {:?} without entering it, ignoring",
                        glider, thermal
                    );
                }
            }
        }
    }
}

/// Ends the overlaps of thermals that were despawned or lost their marker.
pub fn thermal_removal_system(
    mut removed: RemovedComponents<Thermal>,
    mut query: Query<(Entity, &mut ThermalOverlaps)>,
) {
    for thermal in removed.read() {
        for (glider, mut overlaps) in query.iter_mut() {
            if !overlaps.contains(thermal) {
                continue;
            }
            let dropped = overlaps.forget(thermal);
            debug!(
                "Thermal {:?} removed, glider {:?} dropped {} overlap(s) ({} overlapping)",
                thermal,
                glider,
                dropped,
                overlaps.count()
            );
        }
    }
}
