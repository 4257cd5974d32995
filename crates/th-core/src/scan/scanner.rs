//! Two-line lookahead scanner over an element-set file.
//!
//! ```text
//!            blank / '#' / any rejection
//!        ┌──────────────────────────────────┐
//!        ▼                                  │
//!  ExpectingFirstLine ──valid line 1──► ExpectingSecondLine
//!        ▲                                  │
//!        └──────── any other line ──────────┘   (record or rejection)
//! ```
//!
//! The scanner is lazy: each call to `next` reads only as many lines as it
//! takes to produce one record or one rejection.

use std::io::BufRead;

use th_common::{Error, SampleParameters, LINE_LENGTH, RECORD_NAME};
use tracing::trace;

use super::tokenize::tokenize;
use super::validate::{LineNumber, LineValidator};

/// Lines starting with this marker are comments.
pub const COMMENT_MARKER: char = '#';

/// A validated pair of element lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRecord {
    pub name: String,
    pub catalog_number: u32,
    pub line1: String,
    pub line2: String,
}

/// A record together with the sampling parameters found on its second line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedRecord {
    pub record: ElementRecord,
    pub params: SampleParameters,
    /// 1-based line number of the second element line.
    pub line_number: usize,
}

/// A line that failed structural validation.
#[derive(Debug)]
pub struct Rejection {
    pub line_number: usize,
    pub line: String,
    pub error: Error,
}

#[derive(Debug)]
pub enum ScanEvent {
    Record(ScannedRecord),
    Rejected(Rejection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    ExpectingFirstLine,
    ExpectingSecondLine { line1: String, catalog_number: u32 },
}

/// Lazy iterator of [`ScanEvent`]s read from `R`.
pub struct RecordScanner<R> {
    reader: R,
    validator: LineValidator,
    defaults: SampleParameters,
    state: ScanState,
    line_number: usize,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: BufRead> RecordScanner<R> {
    pub fn new(reader: R, validator: LineValidator, defaults: SampleParameters) -> Self {
        Self {
            reader,
            validator,
            defaults,
            state: ScanState::ExpectingFirstLine,
            line_number: 0,
            buf: Vec::new(),
            finished: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Whether a first line is buffered waiting for its partner.
    pub fn is_pairing(&self) -> bool {
        matches!(self.state, ScanState::ExpectingSecondLine { .. })
    }

    fn read_line(&mut self) -> Option<Result<String, Error>> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                Some(Ok(String::from_utf8_lossy(&self.buf).trim().to_string()))
            }
            Err(source) => Some(Err(Error::InputRead {
                line_number: self.line_number + 1,
                source,
            })),
        }
    }

    /// Advance the state machine by one trimmed line.
    fn feed(&mut self, line: &str) -> Option<ScanEvent> {
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            if self.is_pairing() {
                trace!(line_number = self.line_number, "separator dropped unpaired first line");
            }
            self.state = ScanState::ExpectingFirstLine;
            return None;
        }

        // Every branch below leaves the scanner expecting a first line
        // unless it explicitly buffers one.
        match std::mem::replace(&mut self.state, ScanState::ExpectingFirstLine) {
            ScanState::ExpectingFirstLine => match self.validator.validate(line, LineNumber::One) {
                Ok(valid) => {
                    self.state = ScanState::ExpectingSecondLine {
                        line1: valid.text.to_string(),
                        catalog_number: valid.catalog_number,
                    };
                    None
                }
                Err(err) => Some(self.reject(line, err.into())),
            },
            ScanState::ExpectingSecondLine {
                line1,
                catalog_number,
            } => {
                let params = self.parameters(line);
                match self.validator.validate(line, LineNumber::Two) {
                    Ok(valid) if valid.catalog_number != catalog_number => Some(self.reject(
                        line,
                        Error::CatalogMismatch {
                            line1: catalog_number,
                            line2: valid.catalog_number,
                        },
                    )),
                    Ok(valid) => Some(ScanEvent::Record(ScannedRecord {
                        record: ElementRecord {
                            name: RECORD_NAME.to_string(),
                            catalog_number,
                            line1,
                            line2: valid.text.to_string(),
                        },
                        params,
                        line_number: self.line_number,
                    })),
                    Err(err) => Some(self.reject(line, err.into())),
                }
            }
        }
    }

    /// Parameters start one separator column after the fixed-width head.
    fn parameters(&self, line: &str) -> SampleParameters {
        if line.len() <= LINE_LENGTH {
            return self.defaults;
        }
        match line.get(LINE_LENGTH + 1..) {
            Some(tail) => SampleParameters::from_tokens(&tokenize(tail), self.defaults),
            None => self.defaults,
        }
    }

    fn reject(&self, line: &str, error: Error) -> ScanEvent {
        ScanEvent::Rejected(Rejection {
            line_number: self.line_number,
            line: line.to_string(),
            error,
        })
    }
}

impl<R: BufRead> Iterator for RecordScanner<R> {
    type Item = Result<ScanEvent, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            match self.read_line() {
                None => {
                    self.finished = true;
                    return None;
                }
                Some(Err(err)) => {
                    self.finished = true;
                    return Some(Err(err));
                }
                Some(Ok(line)) => {
                    if let Some(event) = self.feed(&line) {
                        return Some(Ok(event));
                    }
                }
            }
        }
    }
}
