//! Fleet manager: owns the vehicles and dispatches travel ticks to them.
//!
//! There is no process-wide instance. Callers construct a [FleetManager] and
//! pass it around, or insert it into the ECS world where
//! [crate::systems::travel::travel_system] drives it once per tick.

use bevy_ecs::prelude::Resource;
use tracing::{debug, trace};

use crate::error::{FleetError, Rejected};
use crate::travel::TravelContext;
use crate::vehicle::Vehicle;

/// Default fleet size limit.
pub const MAX_VEHICLES: usize = 10;

#[derive(Debug, Resource)]
pub struct FleetManager {
    vehicles: Vec<Box<dyn Vehicle>>,
    capacity: usize,
}

impl Default for FleetManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FleetManager {
    pub fn new() -> Self {
        Self::with_capacity(MAX_VEHICLES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vehicles: Vec::new(),
            capacity,
        }
    }

    /// Takes ownership of `vehicle`, or hands it back when the fleet is full.
    pub fn add_vehicle(
        &mut self,
        vehicle: Box<dyn Vehicle>,
    ) -> Result<(), Rejected<Box<dyn Vehicle>>> {
        if self.is_full() {
            debug!(
                kind = %vehicle.kind(),
                capacity = self.capacity,
                "vehicle rejected: fleet full"
            );
            return Err(Rejected::new(
                FleetError::FleetFull {
                    capacity: self.capacity,
                },
                vehicle,
            ));
        }

        debug!(kind = %vehicle.kind(), index = self.vehicles.len(), "vehicle added");
        self.vehicles.push(vehicle);
        Ok(())
    }

    /// Drops the vehicle at `index`; later vehicles shift down by one.
    pub fn remove_vehicle(&mut self, index: usize) -> Result<(), FleetError> {
        if index >= self.vehicles.len() {
            return Err(FleetError::IndexOutOfRange {
                index,
                len: self.vehicles.len(),
            });
        }

        let removed = self.vehicles.remove(index);
        debug!(kind = %removed.kind(), index, "vehicle removed");
        Ok(())
    }

    pub fn vehicle(&self, index: usize) -> Option<&dyn Vehicle> {
        self.vehicles.get(index).map(|v| &**v)
    }

    pub fn vehicle_mut(&mut self, index: usize) -> Option<&mut (dyn Vehicle + 'static)> {
        self.vehicles.get_mut(index).map(|v| &mut **v)
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &dyn Vehicle> + '_ {
        self.vehicles.iter().map(|v| &**v)
    }

    /// Advances every vehicle one tick, in fleet order. Returns the total
    /// distance covered by the fleet on this tick.
    pub fn travel(&mut self, context: &TravelContext) -> u64 {
        let mut covered = 0;
        for (index, vehicle) in self.vehicles.iter_mut().enumerate() {
            let distance = vehicle.travel(context);
            trace!(index, kind = %vehicle.kind(), distance, "vehicle ticked");
            covered += u64::from(distance);
        }
        covered
    }

    /// Index of the vehicle with the highest odometer; ties go to the earliest.
    pub fn furthest_travelled_index(&self) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for (index, vehicle) in self.vehicles.iter().enumerate() {
            let odometer = vehicle.state().odometer();
            match best {
                Some((_, best_odometer)) if odometer <= best_odometer => {}
                _ => best = Some((index, odometer)),
            }
        }
        best.map(|(index, _)| index)
    }

    pub fn furthest_travelled(&self) -> Option<&dyn Vehicle> {
        self.furthest_travelled_index()
            .and_then(|index| self.vehicle(index))
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.vehicles.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Sum of all odometers.
    pub fn total_distance(&self) -> u64 {
        self.vehicles.iter().map(|v| v.state().odometer()).sum()
    }
}
