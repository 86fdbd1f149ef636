use crate::capability::{DrivingCapability, FlyingCapability};

use super::{round_speed, DutyCycle, Vehicle, VehicleKind, VehicleState};

#[derive(Debug)]
pub struct Airplane {
    state: VehicleState,
    flying: FlyingCapability,
    driving: DrivingCapability,
}

impl Airplane {
    pub const DUTY_CYCLE: DutyCycle = DutyCycle::new(1, 3);
    pub const BASE_FLY_SPEED: u32 = 800;
    pub const BASE_DRIVE_SPEED: u32 = 400;

    pub fn new(max_passengers: usize) -> Self {
        Self {
            state: VehicleState::new(max_passengers),
            flying: FlyingCapability::new(Self::BASE_FLY_SPEED),
            driving: DrivingCapability::new(Self::BASE_DRIVE_SPEED),
        }
    }

    /// Exponential decay with load: `200 * e^((base - weight) / 500)`.
    pub fn fly_speed(&self) -> u32 {
        let base = f64::from(self.flying.base_speed());
        let weight = self.state.passengers_weight() as f64;
        round_speed(200.0 * ((base - weight) / 500.0).exp())
    }

    /// Taxiing speed, decaying much faster with load: `4 * e^((base - weight) / 70)`.
    pub fn drive_speed(&self) -> u32 {
        let base = f64::from(self.driving.base_speed());
        let weight = self.state.passengers_weight() as f64;
        round_speed(4.0 * ((base - weight) / 70.0).exp())
    }

    pub fn flying(&self) -> &FlyingCapability {
        &self.flying
    }

    pub fn flying_mut(&mut self) -> &mut FlyingCapability {
        &mut self.flying
    }

    pub fn driving(&self) -> &DrivingCapability {
        &self.driving
    }

    pub fn driving_mut(&mut self) -> &mut DrivingCapability {
        &mut self.driving
    }
}

impl Vehicle for Airplane {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Airplane
    }

    fn state(&self) -> &VehicleState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut VehicleState {
        &mut self.state
    }

    fn max_speed(&self) -> u32 {
        self.fly_speed().max(self.drive_speed())
    }

    fn duty_cycle(&self) -> DutyCycle {
        Self::DUTY_CYCLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passenger::Person;
    use crate::travel::TravelContext;

    fn loaded_airplane() -> Airplane {
        let mut airplane = Airplane::new(5);
        for (name, weight) in [("Bob", 85), ("James", 75), ("Tina", 52)] {
            airplane
                .state_mut()
                .add_passenger(Person::boxed(name, weight))
                .expect("room");
        }
        airplane
    }

    #[test]
    fn speeds_for_reference_load() {
        let airplane = loaded_airplane();
        assert_eq!(airplane.state().max_passengers(), 5);
        assert_eq!(airplane.state().passenger_count(), 3);
        assert_eq!(airplane.state().passenger(1).map(|p| p.name()), Some("James"));
        assert_eq!(airplane.fly_speed(), 648);
        assert_eq!(airplane.drive_speed(), 59);
        assert_eq!(airplane.max_speed(), 648);
    }

    #[test]
    fn empty_airplane_is_faster_on_the_ground() {
        let airplane = Airplane::new(5);
        assert_eq!(airplane.fly_speed(), 991);
        assert_eq!(airplane.drive_speed(), 1213);
        assert_eq!(airplane.max_speed(), 1213);
    }

    #[test]
    fn retuned_capability_changes_speed() {
        let mut airplane = loaded_airplane();
        airplane.flying_mut().set_base_speed(212);
        assert_eq!(airplane.fly_speed(), 200);
        assert_eq!(airplane.flying().base_speed(), 212);
    }

    #[test]
    fn moves_one_tick_then_idles_three() {
        let mut airplane = loaded_airplane();
        let context = TravelContext::default();
        let covered: Vec<u32> = (0..8).map(|_| airplane.travel(&context)).collect();
        assert_eq!(covered, vec![648, 0, 0, 0, 648, 0, 0, 0]);
        assert_eq!(airplane.state().odometer(), 1296);
    }
}
