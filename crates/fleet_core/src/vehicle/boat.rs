use crate::capability::SailingCapability;

use super::{DutyCycle, Vehicle, VehicleKind, VehicleState};

#[derive(Debug)]
pub struct Boat {
    state: VehicleState,
    sailing: SailingCapability,
}

impl Boat {
    pub const DUTY_CYCLE: DutyCycle = DutyCycle::new(2, 1);
    pub const BASE_SAIL_SPEED: u32 = 800;
    pub const MIN_SAIL_SPEED: u32 = 20;

    pub fn new(max_passengers: usize) -> Self {
        Self {
            state: VehicleState::new(max_passengers),
            sailing: SailingCapability::new(Self::BASE_SAIL_SPEED),
        }
    }

    /// Linear decay of 10 per unit of weight, floored at [Self::MIN_SAIL_SPEED].
    pub fn sail_speed(&self) -> u32 {
        let load = 10 * self.state.passengers_weight() as i64;
        let speed = i64::from(self.sailing.base_speed()) - load;
        speed.max(i64::from(Self::MIN_SAIL_SPEED)) as u32
    }

    pub fn sailing(&self) -> &SailingCapability {
        &self.sailing
    }

    pub fn sailing_mut(&mut self) -> &mut SailingCapability {
        &mut self.sailing
    }
}

impl Vehicle for Boat {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Boat
    }

    fn state(&self) -> &VehicleState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut VehicleState {
        &mut self.state
    }

    fn max_speed(&self) -> u32 {
        self.sail_speed()
    }

    fn duty_cycle(&self) -> DutyCycle {
        Self::DUTY_CYCLE
    }
}
