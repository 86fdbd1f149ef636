//! Airplane + Boat composition.
//!
//! Merging builds a [Boatplane] sized for both manifests and moves every
//! passenger into it. The airplane's passengers board first whichever side
//! of the `+` it is on, so both operand orders produce the same manifest.
//! Passengers the boatplane refuses go back to the caller.

use std::ops::Add;

use tracing::{debug, warn};

use crate::passenger::Passenger;

use super::{Airplane, Boat, Boatplane, Vehicle, VehicleState};

/// The merged boatplane and any passengers it could not seat.
pub type Merged = (Boatplane, Vec<Box<dyn Passenger>>);

fn merge_manifests(plane: &mut VehicleState, boat: &mut VehicleState) -> Merged {
    let capacity = plane.max_passengers().saturating_add(boat.max_passengers());
    let mut merged = Boatplane::new(capacity);
    let mut refused = Vec::new();

    let boarding = plane
        .release_all_passengers()
        .into_iter()
        .chain(boat.release_all_passengers());
    for passenger in boarding {
        if let Err(rejected) = merged.state_mut().add_passenger(passenger) {
            warn!(
                passenger = rejected.item.name(),
                reason = %rejected.reason,
                "passenger left behind while merging"
            );
            refused.push(rejected.into_inner());
        }
    }

    debug!(
        passengers = merged.state().passenger_count(),
        refused = refused.len(),
        capacity = merged.state().max_passengers(),
        "merged airplane and boat into boatplane"
    );
    (merged, refused)
}

impl Airplane {
    /// Moves this airplane's and `boat`'s passengers into a new [Boatplane].
    /// Both sources are left empty; passengers that do not fit are returned.
    pub fn merge_with_boat(&mut self, boat: &mut Boat) -> Merged {
        merge_manifests(self.state_mut(), boat.state_mut())
    }
}

impl Boat {
    /// Same as [Airplane::merge_with_boat] with the operands swapped.
    pub fn merge_with_airplane(&mut self, plane: &mut Airplane) -> Merged {
        merge_manifests(plane.state_mut(), self.state_mut())
    }
}

impl<'a> Add<&'a mut Boat> for &mut Airplane {
    type Output = Merged;

    fn add(self, boat: &'a mut Boat) -> Merged {
        self.merge_with_boat(boat)
    }
}

impl<'a> Add<&'a mut Airplane> for &mut Boat {
    type Output = Merged;

    fn add(self, plane: &'a mut Airplane) -> Merged {
        self.merge_with_airplane(plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passenger::Person;

    fn board(state: &mut VehicleState, passengers: &[(&str, u32)]) {
        for (name, weight) in passengers {
            state
                .add_passenger(Person::boxed(*name, *weight))
                .expect("room");
        }
    }

    fn reference_pair() -> (Airplane, Boat) {
        let mut plane = Airplane::new(5);
        board(
            plane.state_mut(),
            &[("Bob", 85), ("James", 75), ("Tina", 52)],
        );
        let mut boat = Boat::new(5);
        board(
            boat.state_mut(),
            &[("Peter", 78), ("Jane", 48), ("Steve", 88)],
        );
        (plane, boat)
    }

    fn names(boatplane: &Boatplane) -> Vec<String> {
        boatplane
            .state()
            .passengers()
            .map(|p| p.name().to_string())
            .collect()
    }

    #[test]
    fn merge_transfers_every_passenger() {
        let (mut plane, mut boat) = reference_pair();
        let (boatplane, refused) = &mut plane + &mut boat;

        assert!(refused.is_empty());
        assert_eq!(boatplane.state().passenger_count(), 6);
        assert_eq!(boatplane.state().max_passengers(), 10);
        assert_eq!(boatplane.state().passengers_weight(), 426);
        assert_eq!(plane.state().passenger_count(), 0);
        assert_eq!(plane.state().passengers_weight(), 0);
        assert_eq!(boat.state().passenger_count(), 0);
        assert_eq!(boat.state().passengers_weight(), 0);
    }

    #[test]
    fn both_operand_orders_board_airplane_passengers_first() {
        let (mut plane, mut boat) = reference_pair();
        let (forward, _) = &mut plane + &mut boat;

        let (mut plane, mut boat) = reference_pair();
        let (backward, _) = &mut boat + &mut plane;

        let expected = vec!["Bob", "James", "Tina", "Peter", "Jane", "Steve"];
        assert_eq!(names(&forward), expected);
        assert_eq!(names(&backward), expected);
    }

    #[test]
    fn merging_empty_vehicles_yields_empty_boatplane() {
        let mut plane = Airplane::new(2);
        let mut boat = Boat::new(3);
        let (boatplane, refused) = boat.merge_with_airplane(&mut plane);
        assert_eq!(boatplane.state().passenger_count(), 0);
        assert_eq!(boatplane.state().max_passengers(), 5);
        assert!(refused.is_empty());
    }

    #[test]
    fn combined_capacity_saturates_instead_of_overflowing() {
        let mut plane = Airplane::new(usize::MAX);
        board(plane.state_mut(), &[("Bob", 85)]);
        let mut boat = Boat::new(1);
        board(boat.state_mut(), &[("Jane", 48)]);

        let (boatplane, refused) = &mut plane + &mut boat;

        assert_eq!(boatplane.state().max_passengers(), usize::MAX);
        assert_eq!(names(&boatplane), vec!["Bob", "Jane"]);
        assert!(refused.is_empty());
        assert_eq!(plane.state().passenger_count(), 0);
        assert_eq!(boat.state().passenger_count(), 0);
    }
}
