//! The harness run loop: scan, then drive each record as it is found.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use th_common::{Error, SampleParameters};
use th_config::HarnessConfig;
use tracing::{info, warn};

use crate::driver::{drive_record, RecordOutcome};
use crate::propagate::PropagationBackend;
use crate::scan::{LineValidator, RecordScanner, ScanEvent};

/// Totals for one run. Logged, never written to the sample stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records accepted by the scanner.
    pub records: usize,
    /// Lines rejected by structural validation.
    pub rejected: usize,
    /// Sample lines written.
    pub samples: usize,
    /// Records cut short by a propagation failure.
    pub failures: usize,
    /// Records whose model could not be built.
    pub init_failures: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &RecordOutcome) {
        self.records += 1;
        self.samples += outcome.samples();
        match outcome {
            RecordOutcome::Completed { .. } => {}
            RecordOutcome::Aborted { .. } => self.failures += 1,
            RecordOutcome::InitFailed { .. } => self.init_failures += 1,
        }
    }
}

/// Scanner settings plus the backend used for every record.
pub struct Harness<B> {
    backend: B,
    validator: LineValidator,
    defaults: SampleParameters,
}

impl<B: PropagationBackend> Harness<B> {
    pub fn new(backend: B, config: &HarnessConfig) -> Self {
        Self {
            backend,
            validator: LineValidator::new(config.validation.verify_checksum),
            defaults: config.sampling,
        }
    }

    /// Open `path` and run every record in it.
    pub fn run_path<W: Write>(&self, path: &Path, out: &mut W) -> Result<RunSummary, Error> {
        let file = File::open(path).map_err(|source| Error::InputOpen {
            path: path.to_path_buf(),
            source,
        })?;
        info!(input = %path.display(), "scanning element sets");
        self.run_reader(BufReader::new(file), out)
    }

    /// Run every record read from `reader`, writing sample blocks to `out`.
    pub fn run_reader<R: BufRead, W: Write>(
        &self,
        reader: R,
        out: &mut W,
    ) -> Result<RunSummary, Error> {
        let mut summary = RunSummary::default();
        let scanner = RecordScanner::new(reader, self.validator, self.defaults);

        for event in scanner {
            match event? {
                ScanEvent::Record(scanned) => {
                    let outcome = drive_record(&self.backend, &scanned, out)?;
                    summary.record(&outcome);
                }
                ScanEvent::Rejected(rejection) => {
                    summary.rejected += 1;
                    warn!(
                        code = rejection.error.code(),
                        line_number = rejection.line_number,
                        line = %rejection.line,
                        "Error: {}",
                        rejection.error
                    );
                }
            }
        }
        out.flush()?;

        info!(
            records = summary.records,
            rejected = summary.rejected,
            samples = summary.samples,
            failures = summary.failures,
            init_failures = summary.init_failures,
            "run complete"
        );
        Ok(summary)
    }
}
