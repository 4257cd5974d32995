//! Sample-time planning.
//!
//! A plan walks `start..=end` in `increment` steps, with two twists:
//!
//! - The first offset is always `0.0`. When `start` is not zero the forced
//!   zero sample is extra and does not consume a step, so `start` itself is
//!   still sampled second.
//! - The last step is clamped so the final offset lands exactly on `end`.
//!
//! The state is `(current, first_run)`; see [`SamplePlan::next`].

use th_common::SampleParameters;

/// Iterator over the offsets (minutes) to sample for one record.
#[derive(Debug, Clone)]
pub struct SamplePlan {
    current: f64,
    end: f64,
    increment: f64,
    first_run: bool,
    clamped: bool,
    running: bool,
}

impl SamplePlan {
    pub fn new(params: SampleParameters) -> Self {
        Self {
            current: params.start,
            end: params.end,
            increment: params.increment,
            first_run: true,
            clamped: false,
            running: true,
        }
    }

    fn advance(&mut self) {
        if self.current == self.end || self.clamped {
            self.running = false;
            return;
        }
        let next = self.current + self.increment;
        // A step that does not move forward (non-positive increment, or an
        // increment below the precision of `current`) clamps to `end` so
        // every plan terminates.
        if next > self.end || !(next > self.current) || !self.end.is_finite() {
            self.current = self.end;
            self.clamped = true;
        } else {
            self.current = next;
        }
    }
}

impl Iterator for SamplePlan {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if !self.running {
            return None;
        }
        let forced_zero = self.first_run && self.current != 0.0;
        let sampled = if forced_zero { 0.0 } else { self.current };
        if !forced_zero {
            self.advance();
        }
        self.first_run = false;
        Some(sampled)
    }
}
