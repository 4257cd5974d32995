//! Structural validation of single element lines.
//!
//! Only the fixed-width head of a line is inspected. Field contents beyond
//! the catalog number are left to the propagator, which parses them.

use std::fmt;

use th_common::LINE_LENGTH;
use thiserror::Error;

/// Which half of a two-line element set a line claims to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineNumber {
    One,
    Two,
}

impl LineNumber {
    fn tag(self) -> u8 {
        match self {
            LineNumber::One => b'1',
            LineNumber::Two => b'2',
        }
    }

    /// Zero-based columns that must be blank in the standard layout.
    fn separator_columns(self) -> &'static [usize] {
        match self {
            LineNumber::One => &[1, 8, 17, 32, 43, 52, 61, 63],
            LineNumber::Two => &[1, 7, 16, 25, 33, 42, 51],
        }
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag() as char)
    }
}

/// Columns 3-7 hold the catalog number.
const CATALOG_COLUMNS: std::ops::Range<usize> = 2..7;
const CHECKSUM_COLUMN: usize = LINE_LENGTH - 1;

/// Why a line failed structural validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("invalid length for line {line}: expected at least {expected} characters, got {actual}")]
    TooShort {
        line: LineNumber,
        expected: usize,
        actual: usize,
    },

    #[error("line {line} contains non-ASCII characters")]
    NonAscii { line: LineNumber },

    #[error("invalid line beginning: expected '{expected}', found '{found}'")]
    BadTag { expected: char, found: char },

    #[error("line {line}: expected blank in column {column}")]
    MissingSeparator { line: LineNumber, column: usize },

    #[error("line {line}: invalid catalog number '{field}'")]
    BadCatalogNumber { line: LineNumber, field: String },

    #[error("line {line}: invalid checksum, expected {expected} but computed {computed}")]
    BadChecksum {
        line: LineNumber,
        expected: char,
        computed: u8,
    },
}

impl From<LineError> for th_common::Error {
    fn from(err: LineError) -> Self {
        th_common::Error::InvalidLine(err.to_string())
    }
}

/// The accepted fixed-width head of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidLine<'a> {
    pub text: &'a str,
    pub catalog_number: u32,
}

/// Structural checker for element lines.
#[derive(Debug, Clone, Copy)]
pub struct LineValidator {
    verify_checksum: bool,
}

impl Default for LineValidator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl LineValidator {
    pub fn new(verify_checksum: bool) -> Self {
        Self { verify_checksum }
    }

    /// Validate the leading [`LINE_LENGTH`] characters of `line`.
    pub fn validate<'a>(
        &self,
        line: &'a str,
        number: LineNumber,
    ) -> Result<ValidLine<'a>, LineError> {
        let bytes = line.as_bytes();
        if bytes.len() < LINE_LENGTH {
            return Err(LineError::TooShort {
                line: number,
                expected: LINE_LENGTH,
                actual: line.chars().count(),
            });
        }
        let head = &bytes[..LINE_LENGTH];
        if !head.is_ascii() {
            return Err(LineError::NonAscii { line: number });
        }

        if head[0] != number.tag() {
            return Err(LineError::BadTag {
                expected: number.tag() as char,
                found: head[0] as char,
            });
        }

        if let Some(&column) = number
            .separator_columns()
            .iter()
            .find(|&&c| head[c] != b' ')
        {
            return Err(LineError::MissingSeparator {
                line: number,
                column: column + 1,
            });
        }

        // ASCII head, so byte slicing lands on char boundaries.
        let text = &line[..LINE_LENGTH];
        let catalog_number = parse_catalog_number(&text[CATALOG_COLUMNS]).ok_or_else(|| {
            LineError::BadCatalogNumber {
                line: number,
                field: text[CATALOG_COLUMNS].to_string(),
            }
        })?;

        if self.verify_checksum {
            let expected = head[CHECKSUM_COLUMN];
            let computed = checksum(&head[..CHECKSUM_COLUMN]);
            if expected != b'0' + computed {
                return Err(LineError::BadChecksum {
                    line: number,
                    expected: expected as char,
                    computed,
                });
            }
        }

        Ok(ValidLine {
            text,
            catalog_number,
        })
    }
}

/// Leading blanks are allowed; the rest must be digits.
fn parse_catalog_number(field: &str) -> Option<u32> {
    let digits = field.trim_start();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Modulo-10 sum: digits count their value, '-' counts one.
pub fn checksum(bytes: &[u8]) -> u8 {
    let sum: u32 = bytes
        .iter()
        .map(|&b| match b {
            b'0'..=b'9' => u32::from(b - b'0'),
            b'-' => 1,
            _ => 0,
        })
        .sum();
    (sum % 10) as u8
}
