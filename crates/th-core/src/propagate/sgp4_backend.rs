//! SGP4 backend built on the `sgp4` crate.

use sgp4::{Constants, Elements, MinutesSinceEpoch};
use tracing::trace;

use th_common::LINE_LENGTH;

use super::{PropagationBackend, PropagationError, Propagate, StateVector};
use crate::scan::{checksum, ElementRecord};

/// Backend producing SGP4 models (TEME frame, km and km/s).
///
/// The `sgp4` parser always checks the column 69 checksum. With
/// `verify_checksum` off the column is recomputed before parsing, so records
/// the scanner accepted with stale checksums still propagate.
#[derive(Debug, Clone, Copy)]
pub struct Sgp4Backend {
    verify_checksum: bool,
}

impl Sgp4Backend {
    pub fn new(verify_checksum: bool) -> Self {
        Self { verify_checksum }
    }
}

impl Default for Sgp4Backend {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Copy of `line` with its checksum column recomputed.
fn with_fresh_checksum(line: &str) -> Vec<u8> {
    let mut bytes = line.as_bytes().to_vec();
    if bytes.len() == LINE_LENGTH {
        bytes[LINE_LENGTH - 1] = b'0' + checksum(&bytes[..LINE_LENGTH - 1]);
    }
    bytes
}

/// Initialised SGP4 constants for one element set.
pub struct Sgp4Model {
    constants: Constants,
}

impl PropagationBackend for Sgp4Backend {
    type Model = Sgp4Model;

    fn initialise(&self, record: &ElementRecord) -> Result<Sgp4Model, PropagationError> {
        let (line1, line2) = if self.verify_checksum {
            (record.line1.as_bytes().to_vec(), record.line2.as_bytes().to_vec())
        } else {
            (with_fresh_checksum(&record.line1), with_fresh_checksum(&record.line2))
        };
        let elements = Elements::from_tle(Some(record.name.clone()), &line1, &line2)
            .map_err(|e| PropagationError::Init(e.to_string()))?;
        let constants =
            Constants::from_elements(&elements).map_err(|e| PropagationError::Init(e.to_string()))?;
        trace!(catalog_number = record.catalog_number, "sgp4 model initialised");
        Ok(Sgp4Model { constants })
    }
}

impl Propagate for Sgp4Model {
    fn sample(&self, offset_minutes: f64) -> Result<StateVector, PropagationError> {
        let prediction = self
            .constants
            .propagate(MinutesSinceEpoch(offset_minutes))
            .map_err(|e| PropagationError::Failed(e.to_string()))?;
        Ok(StateVector {
            position: prediction.position,
            velocity: prediction.velocity,
        })
    }
}
