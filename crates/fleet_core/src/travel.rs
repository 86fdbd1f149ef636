use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Conditions for one travel tick.
///
/// Every vehicle receives the context on each tick. Speed formulas do not read
/// it yet; the fields are carried so drivers can already supply them.
#[derive(Debug, Clone, Copy, PartialEq, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelContext {
    /// Travel duration in hours.
    pub hours: u32,
    /// Weather impact (1.0 = normal conditions).
    pub weather_multiplier: f32,
    pub is_emergency: bool,
}

impl Default for TravelContext {
    fn default() -> Self {
        Self {
            hours: 1,
            weather_multiplier: 1.0,
            is_emergency: false,
        }
    }
}

impl TravelContext {
    pub fn new(hours: u32) -> Self {
        Self {
            hours,
            ..Default::default()
        }
    }

    pub fn with_weather_multiplier(mut self, multiplier: f32) -> Self {
        self.weather_multiplier = multiplier;
        self
    }

    pub fn with_emergency(mut self, is_emergency: bool) -> Self {
        self.is_emergency = is_emergency;
        self
    }
}
