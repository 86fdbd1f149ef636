use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FleetError, Rejected};

use super::{DutyCycle, Vehicle, VehicleKind, VehicleState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer {
    weight: u32,
}

impl Trailer {
    pub fn new(weight: u32) -> Self {
        Self { weight }
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// Upper weight bound (inclusive) of each speed tier, with the tier's speed.
const SPEED_TIERS: [(u64, u32); 4] = [(80, 480), (160, 458), (260, 400), (350, 380)];
const OVERLOADED_SPEED: u32 = 300;

/// A car that can tow one trailer. Towing adds the trailer's weight to the
/// load and lengthens the idle phase.
#[derive(Debug)]
pub struct Sedan {
    state: VehicleState,
    trailer: Option<Trailer>,
}

impl Sedan {
    pub const CAPACITY: usize = 4;
    pub const DUTY_CYCLE: DutyCycle = DutyCycle::new(5, 1);
    pub const DUTY_CYCLE_WITH_TRAILER: DutyCycle = DutyCycle::new(5, 2);

    pub fn new() -> Self {
        Self {
            state: VehicleState::new(Self::CAPACITY),
            trailer: None,
        }
    }

    /// Hitches `trailer`, or hands it back if one is already attached.
    pub fn add_trailer(&mut self, trailer: Trailer) -> Result<(), Rejected<Trailer>> {
        if self.trailer.is_some() {
            debug!(weight = trailer.weight(), "trailer rejected: slot occupied");
            return Err(Rejected::new(FleetError::TrailerAttached, trailer));
        }

        self.trailer = Some(trailer);
        Ok(())
    }

    /// Unhitches the current trailer and returns it.
    pub fn remove_trailer(&mut self) -> Result<Trailer, FleetError> {
        self.trailer.take().ok_or(FleetError::NoTrailer)
    }

    pub fn trailer(&self) -> Option<&Trailer> {
        self.trailer.as_ref()
    }

    /// Passenger weight plus the trailer, if any.
    pub fn total_weight(&self) -> u64 {
        let trailer = self.trailer.map_or(0, |t| u64::from(t.weight()));
        self.state.passengers_weight() + trailer
    }

    pub fn drive_speed(&self) -> u32 {
        let weight = self.total_weight();
        SPEED_TIERS
            .iter()
            .find(|(limit, _)| weight <= *limit)
            .map_or(OVERLOADED_SPEED, |(_, speed)| *speed)
    }
}

impl Default for Sedan {
    fn default() -> Self {
        Self::new()
    }
}

impl Vehicle for Sedan {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Sedan
    }

    fn state(&self) -> &VehicleState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut VehicleState {
        &mut self.state
    }

    fn max_speed(&self) -> u32 {
        self.drive_speed()
    }

    fn duty_cycle(&self) -> DutyCycle {
        if self.trailer.is_some() {
            Self::DUTY_CYCLE_WITH_TRAILER
        } else {
            Self::DUTY_CYCLE
        }
    }
}
