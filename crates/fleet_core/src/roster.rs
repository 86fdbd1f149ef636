//! Seeded generator of random passengers for scenarios and experiments.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::FleetError;
use crate::passenger::{Passenger, Person};

const FIRST_NAMES: [&str; 12] = [
    "Ada", "Bob", "Cleo", "Dan", "Eve", "Finn", "Gus", "Hana", "Ivo", "Jane", "Kai", "Lena",
];

pub const DEFAULT_WEIGHT_MIN: u32 = 45;
pub const DEFAULT_WEIGHT_MAX: u32 = 110;

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Produces [Person]s with uniformly distributed weights in `weight_min..=weight_max`.
/// Names cycle through a fixed list with a running suffix so they stay unique.
#[derive(Debug)]
pub struct PassengerRoster {
    rng: StdRng,
    weight_min: u32,
    weight_max: u32,
    issued: usize,
}

impl PassengerRoster {
    /// `seed: None` draws the seed from entropy.
    pub fn new(seed: Option<u64>, weight_min: u32, weight_max: u32) -> Result<Self, FleetError> {
        if weight_min > weight_max {
            return Err(FleetError::InvalidWeightRange {
                min: weight_min,
                max: weight_max,
            });
        }

        Ok(Self {
            rng: seeded_rng(seed),
            weight_min,
            weight_max,
            issued: 0,
        })
    }

    pub fn with_default_weights(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed),
            weight_min: DEFAULT_WEIGHT_MIN,
            weight_max: DEFAULT_WEIGHT_MAX,
            issued: 0,
        }
    }

    pub fn next_person(&mut self) -> Person {
        let name = FIRST_NAMES[self.issued % FIRST_NAMES.len()];
        let name = format!("{name}-{}", self.issued);
        let weight = self.rng.gen_range(self.weight_min..=self.weight_max);
        self.issued += 1;
        Person::new(name, weight)
    }

    pub fn next_passenger(&mut self) -> Box<dyn Passenger> {
        Box::new(self.next_person())
    }

    pub fn issued(&self) -> usize {
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_weight_range() {
        let err = PassengerRoster::new(Some(1), 90, 60).expect_err("empty range");
        assert_eq!(err, FleetError::InvalidWeightRange { min: 90, max: 60 });
    }

    #[test]
    fn same_seed_yields_same_passengers() {
        let mut a = PassengerRoster::new(Some(42), 50, 100).expect("valid range");
        let mut b = PassengerRoster::new(Some(42), 50, 100).expect("valid range");
        for _ in 0..20 {
            let (pa, pb) = (a.next_person(), b.next_person());
            assert_eq!(pa, pb);
            assert!((50..=100).contains(&pa.weight()));
        }
        assert_eq!(a.issued(), 20);
    }

    #[test]
    fn names_are_unique() {
        let mut roster = PassengerRoster::with_default_weights(Some(7));
        let names: std::collections::HashSet<String> = (0..30)
            .map(|_| roster.next_passenger().name().to_string())
            .collect();
        assert_eq!(names.len(), 30);
    }

    #[test]
    fn single_value_range_is_fixed_weight() {
        let mut roster = PassengerRoster::new(None, 70, 70).expect("valid range");
        assert_eq!(roster.next_person().weight(), 70);
    }
}
