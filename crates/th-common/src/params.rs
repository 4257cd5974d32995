//! Sampling parameters for a single record.

use serde::{Deserialize, Serialize};

/// `(start, end, increment)` in minutes from the record's epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleParameters {
    pub start: f64,
    pub end: f64,
    pub increment: f64,
}

impl SampleParameters {
    pub const DEFAULT_START: f64 = 0.0;
    pub const DEFAULT_END: f64 = 1440.0;
    pub const DEFAULT_INCREMENT: f64 = 120.0;

    pub fn new(start: f64, end: f64, increment: f64) -> Self {
        Self {
            start,
            end,
            increment,
        }
    }

    /// Build parameters from trailing tokens of a second element line.
    ///
    /// Fewer than three tokens never partially override: `fallback` is
    /// returned whole. Tokens past the third are ignored.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], fallback: SampleParameters) -> Self {
        match tokens {
            [start, end, increment, ..] => Self {
                start: parse_minutes(start.as_ref()),
                end: parse_minutes(end.as_ref()),
                increment: parse_minutes(increment.as_ref()),
            },
            _ => fallback,
        }
    }

    /// Check the parameters are usable as configuration defaults.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("start", self.start),
            ("end", self.end),
            ("increment", self.increment),
        ] {
            if !value.is_finite() {
                return Err(format!("{name} must be finite, got {value}"));
            }
        }
        if self.increment <= 0.0 {
            return Err(format!(
                "increment must be positive, got {}",
                self.increment
            ));
        }
        Ok(())
    }
}

impl Default for SampleParameters {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_START,
            Self::DEFAULT_END,
            Self::DEFAULT_INCREMENT,
        )
    }
}

/// Read the longest leading decimal number of `token`, so `"1440.0,"` is
/// `1440.0` and `"120min"` is `120.0`. No leading number, or a non-finite
/// one, reads as `0.0`.
fn parse_minutes(token: &str) -> f64 {
    numeric_prefix(token.trim_start())
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa digit.
/// An exponent marker without digits after it is not part of the number.
fn numeric_prefix(token: &str) -> &str {
    let bytes = token.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &token[..end]
}
