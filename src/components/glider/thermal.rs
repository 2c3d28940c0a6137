use bevy::prelude::*;
use bevy::utils::HashMap;

/// Marks an entity as a thermal volume. Removing it (or despawning the entity)
/// ends every overlap gliders hold with that volume.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Thermal;

/// Thermal volumes a glider currently overlaps.
///
/// Kept as a multiset: entering the same volume twice needs two exits before
/// it stops counting. Exits for volumes never entered are ignored.
#[derive(Component, Debug, Clone, Default)]
pub struct ThermalOverlaps {
    volumes: HashMap<Entity, u32>,
    count: usize,
}

impl ThermalOverlaps {
    pub fn enter(&mut self, thermal: Entity) {
        *self.volumes.entry(thermal).or_insert(0) += 1;
        self.count += 1;
    }

    /// Returns `false` if `thermal` was not being overlapped.
    pub fn exit(&mut self, thermal: Entity) -> bool {
        let Some(overlaps) = self.volumes.get_mut(&thermal) else {
            return false;
        };
        *overlaps -= 1;
        if *overlaps == 0 {
            self.volumes.remove(&thermal);
        }
        self.count -= 1;
        true
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_in_thermal(&self) -> bool {
        self.count > 0
    }

    pub fn contains(&self, thermal: Entity) -> bool {
        self.volumes.contains_key(&thermal)
    }

    /// Drops every overlap with `thermal`, returning how many were held.
    pub fn forget(&mut self, thermal: Entity) -> u32 {
        let overlaps = self.volumes.remove(&thermal).unwrap_or(0);
        self.count -= overlaps as usize;
        overlaps
    }
}
