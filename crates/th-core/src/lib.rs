//! TLE regression harness core.
//!
//! Scans a two-line element test file, plans sample offsets for each
//! record and drives a propagation backend across them:
//!
//! ```text
//! file ─► RecordScanner ─► ScannedRecord ─► SamplePlan ─► drive_record ─► stdout
//!               │                                             │
//!               └──── rejected lines ──► tracing (stderr) ◄───┘ failures
//! ```

pub mod cli;
pub mod driver;
pub mod exit_codes;
pub mod logging;
pub mod output;
pub mod plan;
pub mod propagate;
pub mod runner;
pub mod scan;

pub use driver::{drive_record, RecordOutcome};
pub use plan::SamplePlan;
pub use propagate::{PropagationBackend, PropagationError, Propagate, Sgp4Backend, StateVector};
pub use runner::{Harness, RunSummary};
pub use scan::{ElementRecord, RecordScanner, ScanEvent, ScannedRecord};
