//! Vehicles: shared passenger/odometer state, the move/idle duty cycle, and
//! the six concrete variants.
//!
//! Each variant owns a [VehicleState] plus the capabilities its speed formula
//! reads. [Vehicle::travel] is the per-tick transition: the vehicle covers its
//! current max speed while Moving, then sits out the Idling phase, repeating.

mod airplane;
mod boat;
mod boatplane;
mod merge;
mod motorcycle;
mod sedan;
mod uboat;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FleetError, Rejected};
use crate::passenger::Passenger;
use crate::travel::TravelContext;

pub use airplane::Airplane;
pub use boat::Boat;
pub use boatplane::Boatplane;
pub use merge::Merged;
pub use motorcycle::Motorcycle;
pub use sedan::{Sedan, Trailer};
pub use uboat::UBoat;

/// Default capacity for variants whose capacity is chosen at construction.
pub const DEFAULT_CAPACITY: usize = 5;

/// Length of each phase of a vehicle's duty cycle, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyCycle {
    pub move_ticks: u32,
    pub idle_ticks: u32,
}

impl DutyCycle {
    pub const fn new(move_ticks: u32, idle_ticks: u32) -> Self {
        Self {
            move_ticks,
            idle_ticks,
        }
    }

    pub fn period(&self) -> u32 {
        self.move_ticks + self.idle_ticks
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DutyPhase {
    Moving,
    Idling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    Airplane,
    Boat,
    Boatplane,
    Motorcycle,
    Sedan,
    #[serde(rename = "uboat")]
    UBoat,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 6] = [
        VehicleKind::Airplane,
        VehicleKind::Boat,
        VehicleKind::Boatplane,
        VehicleKind::Motorcycle,
        VehicleKind::Sedan,
        VehicleKind::UBoat,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VehicleKind::Airplane => "airplane",
            VehicleKind::Boat => "boat",
            VehicleKind::Boatplane => "boatplane",
            VehicleKind::Motorcycle => "motorcycle",
            VehicleKind::Sedan => "sedan",
            VehicleKind::UBoat => "uboat",
        }
    }

    /// Capacity of variants built with a fixed seat count, `None` otherwise.
    pub fn fixed_capacity(self) -> Option<usize> {
        match self {
            VehicleKind::Motorcycle => Some(Motorcycle::CAPACITY),
            VehicleKind::Sedan => Some(Sedan::CAPACITY),
            VehicleKind::UBoat => Some(UBoat::CAPACITY),
            VehicleKind::Airplane | VehicleKind::Boat | VehicleKind::Boatplane => None,
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Passenger manifest, odometer and duty-cycle counters shared by every vehicle.
///
/// Invariants: `passengers.len() <= max_passengers` and the cached weight
/// equals the sum of the weights of the passengers currently held.
#[derive(Debug)]
pub struct VehicleState {
    max_passengers: usize,
    passengers: Vec<Box<dyn Passenger>>,
    passengers_weight: u64,
    odometer: u64,
    move_ticks: u32,
    idle_ticks: u32,
}

impl VehicleState {
    pub fn new(max_passengers: usize) -> Self {
        Self {
            max_passengers,
            passengers: Vec::new(),
            passengers_weight: 0,
            odometer: 0,
            move_ticks: 0,
            idle_ticks: 0,
        }
    }

    /// Takes ownership of `passenger`, or hands it back when the vehicle is full.
    pub fn add_passenger(
        &mut self,
        passenger: Box<dyn Passenger>,
    ) -> Result<(), Rejected<Box<dyn Passenger>>> {
        if self.passengers.len() >= self.max_passengers {
            debug!(
                passenger = passenger.name(),
                capacity = self.max_passengers,
                "passenger rejected: vehicle full"
            );
            return Err(Rejected::new(
                FleetError::VehicleFull {
                    capacity: self.max_passengers,
                },
                passenger,
            ));
        }

        self.passengers_weight += u64::from(passenger.weight());
        self.passengers.push(passenger);
        Ok(())
    }

    /// Drops the passenger at `index`.
    pub fn remove_passenger(&mut self, index: usize) -> Result<(), FleetError> {
        let len = self.passengers.len();
        match self.release_passenger(index) {
            Some(_) => Ok(()),
            None => Err(FleetError::IndexOutOfRange { index, len }),
        }
    }

    /// Removes the passenger at `index` and returns ownership to the caller.
    pub fn release_passenger(&mut self, index: usize) -> Option<Box<dyn Passenger>> {
        if index >= self.passengers.len() {
            return None;
        }

        let released = self.passengers.remove(index);
        self.passengers_weight -= u64::from(released.weight());
        Some(released)
    }

    /// Empties the manifest, returning every passenger in boarding order.
    pub fn release_all_passengers(&mut self) -> Vec<Box<dyn Passenger>> {
        self.passengers_weight = 0;
        std::mem::take(&mut self.passengers)
    }

    pub fn passenger(&self, index: usize) -> Option<&dyn Passenger> {
        self.passengers.get(index).map(|p| &**p)
    }

    pub fn passengers(&self) -> impl Iterator<Item = &dyn Passenger> + '_ {
        self.passengers.iter().map(|p| &**p)
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    pub fn max_passengers(&self) -> usize {
        self.max_passengers
    }

    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.max_passengers
    }

    pub fn passengers_weight(&self) -> u64 {
        self.passengers_weight
    }

    pub fn odometer(&self) -> u64 {
        self.odometer
    }

    pub fn add_odometer(&mut self, distance: u32) {
        self.odometer = self.odometer.saturating_add(u64::from(distance));
    }

    pub fn move_ticks(&self) -> u32 {
        self.move_ticks
    }

    pub fn add_move_tick(&mut self) {
        self.move_ticks += 1;
    }

    pub fn reset_move_ticks(&mut self) {
        self.move_ticks = 0;
    }

    pub fn idle_ticks(&self) -> u32 {
        self.idle_ticks
    }

    pub fn add_idle_tick(&mut self) {
        self.idle_ticks += 1;
    }

    pub fn reset_idle_ticks(&mut self) {
        self.idle_ticks = 0;
    }

    /// Phase the next tick will run in.
    pub fn phase(&self, cycle: DutyCycle) -> DutyPhase {
        if self.move_ticks < cycle.move_ticks {
            DutyPhase::Moving
        } else {
            DutyPhase::Idling
        }
    }

    /// Advances one tick of the duty cycle. Returns the distance covered.
    ///
    /// The idle phase ends once `idle_ticks` reaches the cycle's idle length,
    /// resetting both counters so the next tick moves again. A cycle with no
    /// idle ticks restarts straight after its last move tick.
    pub fn advance_duty_cycle(&mut self, cycle: DutyCycle, speed: u32) -> u32 {
        if self.move_ticks < cycle.move_ticks {
            self.add_move_tick();
            self.add_odometer(speed);
            if cycle.idle_ticks == 0 && self.move_ticks >= cycle.move_ticks {
                self.reset_move_ticks();
            }
            return speed;
        }

        self.add_idle_tick();
        if self.idle_ticks >= cycle.idle_ticks {
            self.reset_move_ticks();
            self.reset_idle_ticks();
        }
        0
    }
}

/// A concrete vehicle: its speed formula and duty-cycle timing over a [VehicleState].
pub trait Vehicle: fmt::Debug + Send + Sync {
    fn kind(&self) -> VehicleKind;

    fn state(&self) -> &VehicleState;

    fn state_mut(&mut self) -> &mut VehicleState;

    /// Current top speed, recomputed from the passenger load.
    fn max_speed(&self) -> u32;

    fn duty_cycle(&self) -> DutyCycle;

    fn phase(&self) -> DutyPhase {
        self.state().phase(self.duty_cycle())
    }

    /// One travel tick. Returns the distance added to the odometer.
    fn travel(&mut self, _context: &TravelContext) -> u32 {
        let speed = self.max_speed();
        let cycle = self.duty_cycle();
        self.state_mut().advance_duty_cycle(cycle, speed)
    }
}

/// Builds an empty vehicle of `kind`. `capacity` only applies to variants
/// without a fixed seat count and falls back to [DEFAULT_CAPACITY].
pub fn build_vehicle(kind: VehicleKind, capacity: Option<usize>) -> Box<dyn Vehicle> {
    let capacity = capacity.unwrap_or(DEFAULT_CAPACITY);
    match kind {
        VehicleKind::Airplane => Box::new(Airplane::new(capacity)),
        VehicleKind::Boat => Box::new(Boat::new(capacity)),
        VehicleKind::Boatplane => Box::new(Boatplane::new(capacity)),
        VehicleKind::Motorcycle => Box::new(Motorcycle::new()),
        VehicleKind::Sedan => Box::new(Sedan::new()),
        VehicleKind::UBoat => Box::new(UBoat::new()),
    }
}

/// Rounds a formula result half-up to a whole speed; negative values clamp to 0.
pub(crate) fn round_speed(value: f64) -> u32 {
    if value <= 0.0 {
        0
    } else {
        (value + 0.5).floor() as u32
    }
}
