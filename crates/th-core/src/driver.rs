//! Per-record propagation driver.
//!
//! Initialises one model for the record, walks its [`SamplePlan`] and
//! writes one line per sample. The first propagation failure ends the
//! record: its message is written in place of the remaining samples.

use std::io::Write;

use th_common::Error;
use tracing::{debug, warn};

use crate::output::{render_header, render_sample};
use crate::plan::SamplePlan;
use crate::propagate::{Propagate, PropagationBackend};
use crate::scan::ScannedRecord;

/// How one record's sampling ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// Every planned offset was sampled.
    Completed { samples: usize },
    /// Sampling stopped at `offset` after `samples` successes.
    Aborted {
        samples: usize,
        offset: f64,
        message: String,
    },
    /// The backend could not build a model; nothing was written.
    InitFailed { message: String },
}

impl RecordOutcome {
    pub fn samples(&self) -> usize {
        match self {
            RecordOutcome::Completed { samples } | RecordOutcome::Aborted { samples, .. } => {
                *samples
            }
            RecordOutcome::InitFailed { .. } => 0,
        }
    }
}

/// Run one record through `backend`, writing its block to `out`.
///
/// Only write failures are returned as errors; propagation problems are
/// reported on the diagnostic channel and folded into the outcome.
pub fn drive_record<B, W>(
    backend: &B,
    scanned: &ScannedRecord,
    out: &mut W,
) -> Result<RecordOutcome, Error>
where
    B: PropagationBackend,
    W: Write,
{
    let record = &scanned.record;
    let model = match backend.initialise(record) {
        Ok(model) => model,
        Err(e) => {
            let err = Error::PropagatorInit {
                catalog_number: record.catalog_number,
                message: e.to_string(),
            };
            warn!(
                code = err.code(),
                line_number = scanned.line_number,
                "{err}"
            );
            return Ok(RecordOutcome::InitFailed {
                message: e.to_string(),
            });
        }
    };

    writeln!(out, "{}", render_header(record.catalog_number))?;
    debug!(
        catalog_number = record.catalog_number,
        start = scanned.params.start,
        end = scanned.params.end,
        increment = scanned.params.increment,
        "sampling record"
    );

    let mut samples = 0;
    for offset in SamplePlan::new(scanned.params) {
        match model.sample(offset) {
            Ok(state) => {
                writeln!(out, "{}", render_sample(offset, &state))?;
                samples += 1;
            }
            Err(e) => {
                let message = e.to_string();
                writeln!(out, "{message}")?;
                let err = Error::Propagation {
                    offset,
                    message: message.clone(),
                };
                warn!(
                    code = err.code(),
                    catalog_number = record.catalog_number,
                    samples,
                    "{err}"
                );
                return Ok(RecordOutcome::Aborted {
                    samples,
                    offset,
                    message,
                });
            }
        }
    }

    Ok(RecordOutcome::Completed { samples })
}
