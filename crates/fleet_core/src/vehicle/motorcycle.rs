use crate::capability::DrivingCapability;

use super::{round_speed, DutyCycle, Vehicle, VehicleKind, VehicleState};

#[derive(Debug)]
pub struct Motorcycle {
    state: VehicleState,
    driving: DrivingCapability,
}

impl Motorcycle {
    pub const CAPACITY: usize = 2;
    pub const DUTY_CYCLE: DutyCycle = DutyCycle::new(5, 1);
    pub const BASE_DRIVE_SPEED: u32 = 400;

    pub fn new() -> Self {
        Self {
            state: VehicleState::new(Self::CAPACITY),
            driving: DrivingCapability::new(Self::BASE_DRIVE_SPEED),
        }
    }

    /// `base + 2w - (w/15)^3`: a light rider helps, a heavy load tips the bike over.
    pub fn drive_speed(&self) -> u32 {
        let base = f64::from(self.driving.base_speed());
        let weight = self.state.passengers_weight() as f64;
        round_speed(base + 2.0 * weight - (weight / 15.0).powi(3))
    }

    pub fn driving(&self) -> &DrivingCapability {
        &self.driving
    }

    pub fn driving_mut(&mut self) -> &mut DrivingCapability {
        &mut self.driving
    }
}

impl Default for Motorcycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Vehicle for Motorcycle {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Motorcycle
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
        Self::DUTY_CYCLE
    }
}
