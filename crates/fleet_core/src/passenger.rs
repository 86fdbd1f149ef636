use std::fmt;

use serde::{Deserialize, Serialize};

/// Anything a vehicle can carry: it has a name and a weight.
pub trait Passenger: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;
    fn weight(&self) -> u32;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
    weight: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    /// Boxed form accepted by [crate::vehicle::VehicleState::add_passenger].
    pub fn boxed(name: impl Into<String>, weight: u32) -> Box<dyn Passenger> {
        Box::new(Self::new(name, weight))
    }
}

impl Passenger for Person {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> u32 {
        self.weight
    }
}

/// Serializable description of a person, used by scenario files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSpec {
    pub name: String,
    pub weight: u32,
}

impl PersonSpec {
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    pub fn to_passenger(&self) -> Box<dyn Passenger> {
        Person::boxed(self.name.clone(), self.weight)
    }
}
