use crate::capability::{FlyingCapability, SailingCapability};

use super::{round_speed, DutyCycle, Vehicle, VehicleKind, VehicleState};

/// Hybrid of an airplane and a boat, usually produced by merging the two.
#[derive(Debug)]
pub struct Boatplane {
    state: VehicleState,
    flying: FlyingCapability,
    sailing: SailingCapability,
}

impl Boatplane {
    pub const DUTY_CYCLE: DutyCycle = DutyCycle::new(1, 3);
    pub const BASE_FLY_SPEED: u32 = 500;
    pub const BASE_SAIL_SPEED: u32 = 800;
    pub const MIN_SAIL_SPEED: u32 = 20;

    pub fn new(max_passengers: usize) -> Self {
        Self {
            state: VehicleState::new(max_passengers),
            flying: FlyingCapability::new(Self::BASE_FLY_SPEED),
            sailing: SailingCapability::new(Self::BASE_SAIL_SPEED),
        }
    }

    pub fn fly_speed(&self) -> u32 {
        let base = f64::from(self.flying.base_speed());
        let weight = self.state.passengers_weight() as f64;
        round_speed(150.0 * ((base - weight) / 300.0).exp())
    }

    pub fn sail_speed(&self) -> u32 {
        let base = f64::from(self.sailing.base_speed());
        let weight = self.state.passengers_weight() as f64;
        round_speed(base - 1.7 * weight).max(Self::MIN_SAIL_SPEED)
    }

    pub fn flying(&self) -> &FlyingCapability {
        &self.flying
    }

    pub fn flying_mut(&mut self) -> &mut FlyingCapability {
        &mut self.flying
    }

    pub fn sailing(&self) -> &SailingCapability {
        &self.sailing
    }

    pub fn sailing_mut(&mut self) -> &mut SailingCapability {
        &mut self.sailing
    }
}

impl Vehicle for Boatplane {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Boatplane
    }

    fn state(&self) -> &VehicleState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut VehicleState {
        &mut self.state
    }

    fn max_speed(&self) -> u32 {
        self.fly_speed().max(self.sail_speed())
    }

    fn duty_cycle(&self) -> DutyCycle {
        Self::DUTY_CYCLE
    }
}
