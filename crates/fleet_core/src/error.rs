//! Failure taxonomy for fleet and vehicle operations.
//!
//! Every failure is local and leaves state untouched. Operations that take
//! ownership of an object return it inside [Rejected] so the caller keeps it.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FleetError {
    #[error("vehicle is full ({capacity} passengers)")]
    VehicleFull { capacity: usize },
    #[error("fleet is full ({capacity} vehicles)")]
    FleetFull { capacity: usize },
    #[error("index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("a trailer is already attached")]
    TrailerAttached,
    #[error("no trailer is attached")]
    NoTrailer,
    #[error("passenger weight range {min}..={max} is empty")]
    InvalidWeightRange { min: u32, max: u32 },
}

/// An object refused by a capacity-bounded container, handed back to the caller.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct Rejected<T: fmt::Debug> {
    pub reason: FleetError,
    pub item: T,
}

impl<T: fmt::Debug> Rejected<T> {
    pub fn new(reason: FleetError, item: T) -> Self {
        Self { reason, item }
    }

    /// Take back ownership of the refused object.
    pub fn into_inner(self) -> T {
        self.item
    }
}
