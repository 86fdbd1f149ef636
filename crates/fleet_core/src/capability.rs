//! Capability parameters: one tunable base speed per mode of travel.
//!
//! Vehicles hold the capabilities they support and read the base value in
//! their speed formulas, so retuning a capability changes the next tick's speed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlyingCapability {
    base_speed: u32,
}

impl FlyingCapability {
    pub fn new(base_speed: u32) -> Self {
        Self { base_speed }
    }

    pub fn base_speed(&self) -> u32 {
        self.base_speed
    }

    pub fn set_base_speed(&mut self, speed: u32) {
        self.base_speed = speed;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrivingCapability {
    base_speed: u32,
}

impl DrivingCapability {
    pub fn new(base_speed: u32) -> Self {
        Self { base_speed }
    }

    pub fn base_speed(&self) -> u32 {
        self.base_speed
    }

    pub fn set_base_speed(&mut self, speed: u32) {
        self.base_speed = speed;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SailingCapability {
    base_speed: u32,
}

impl SailingCapability {
    pub fn new(base_speed: u32) -> Self {
        Self { base_speed }
    }

    pub fn base_speed(&self) -> u32 {
        self.base_speed
    }

    pub fn set_base_speed(&mut self, speed: u32) {
        self.base_speed = speed;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivingCapability {
    base_speed: u32,
}

impl DivingCapability {
    pub fn new(base_speed: u32) -> Self {
        Self { base_speed }
    }

    pub fn base_speed(&self) -> u32 {
        self.base_speed
    }

    pub fn set_base_speed(&mut self, speed: u32) {
        self.base_speed = speed;
    }
}
