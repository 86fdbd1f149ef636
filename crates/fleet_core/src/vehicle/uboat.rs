use crate::capability::{DivingCapability, SailingCapability};

use super::{round_speed, DutyCycle, Vehicle, VehicleKind, VehicleState};

#[derive(Debug)]
pub struct UBoat {
    state: VehicleState,
    sailing: SailingCapability,
    diving: DivingCapability,
}

impl UBoat {
    pub const CAPACITY: usize = 50;
    pub const DUTY_CYCLE: DutyCycle = DutyCycle::new(2, 4);
    pub const BASE_SAIL_SPEED: u32 = 550;
    pub const BASE_DIVE_SPEED: u32 = 150;
    pub const MIN_SAIL_SPEED: u32 = 200;

    pub fn new() -> Self {
        Self {
            state: VehicleState::new(Self::CAPACITY),
            sailing: SailingCapability::new(Self::BASE_SAIL_SPEED),
            diving: DivingCapability::new(Self::BASE_DIVE_SPEED),
        }
    }

    pub fn sail_speed(&self) -> u32 {
        let base = f64::from(self.sailing.base_speed());
        let weight = self.state.passengers_weight() as f64;
        round_speed(base - weight / 10.0).max(Self::MIN_SAIL_SPEED)
    }

    /// Grows logarithmically with load: ballast helps the dive.
    pub fn dive_speed(&self) -> u32 {
        let base = f64::from(self.diving.base_speed());
        let weight = self.state.passengers_weight() as f64;
        round_speed(500.0 * ((weight + base) / base).ln() + 30.0)
    }

    pub fn sailing(&self) -> &SailingCapability {
        &self.sailing
    }

    pub fn sailing_mut(&mut self) -> &mut SailingCapability {
        &mut self.sailing
    }

    pub fn diving(&self) -> &DivingCapability {
        &self.diving
    }

    pub fn diving_mut(&mut self) -> &mut DivingCapability {
        &mut self.diving
    }
}

impl Default for UBoat {
    fn default() -> Self {
        Self::new()
    }
}

impl Vehicle for UBoat {
    fn kind(&self) -> VehicleKind {
        VehicleKind::UBoat
    }

    fn state(&self) -> &VehicleState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut VehicleState {
        &mut self.state
    }

    fn max_speed(&self) -> u32 {
        self.sail_speed().max(self.dive_speed())
    }

    fn duty_cycle(&self) -> DutyCycle {
        Self::DUTY_CYCLE
    }
}
