//! Element-set file scanning.
//!
//! Turns a line-oriented text stream into validated two-line records with
//! their sampling parameters, reporting malformed lines without stopping.

pub mod scanner;
pub mod tokenize;
pub mod validate;

pub use scanner::{
    ElementRecord, RecordScanner, Rejection, ScanEvent, ScannedRecord, COMMENT_MARKER,
};
pub use tokenize::tokenize;
pub use validate::{checksum, LineError, LineNumber, LineValidator, ValidLine};
