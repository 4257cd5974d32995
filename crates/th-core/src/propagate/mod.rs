//! The propagation capability consumed by the driver.
//!
//! The harness never depends on a concrete propagator. A backend builds one
//! model per record; the model answers "state at offset" queries or signals
//! that no valid state exists there.

pub mod sgp4_backend;

use thiserror::Error;

use crate::scan::ElementRecord;

pub use sgp4_backend::{Sgp4Backend, Sgp4Model};

/// Position (km) and velocity (km/s) at one offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

/// Failures signalled by a propagation backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropagationError {
    /// The record could not be turned into a model.
    #[error("{0}")]
    Init(String),

    /// No valid state exists at the requested offset (e.g. decay).
    #[error("{0}")]
    Failed(String),
}

/// A propagation model built from one record.
pub trait Propagate {
    fn sample(&self, offset_minutes: f64) -> Result<StateVector, PropagationError>;
}

/// Builds a fresh [`Propagate`] model for each record.
pub trait PropagationBackend {
    type Model: Propagate;

    fn initialise(&self, record: &ElementRecord) -> Result<Self::Model, PropagationError>;
}
