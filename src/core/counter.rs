//! Numeric counter ramp for stat blocks
//!
//! A [`CounterRamp`] yields the text of every frame of a linear count-up from
//! zero to a target. The last frame is always the exact target, whatever the
//! rounding of the final increment.

use std::time::Duration;

/// Time between two frames (~60 frames per second)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Default length of a count-up
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// Parse stat text into a count-up target.
///
/// Only plain digit strings qualify; decorated values such as `"2-3"`,
/// `"+20%"` or `"3 часа"` are left alone, and so is zero.
pub fn stat_target(text: &str) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u64>().ok().filter(|target| *target > 0)
}

/// Linear count-up from zero to `target`
#[derive(Debug, Clone, PartialEq)]
pub struct CounterRamp {
    target: u64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterRamp {
    /// Create a ramp, or `None` when there is nothing to animate (target 0)
    pub fn new(target: u64, duration: Duration) -> Option<Self> {
        if target == 0 {
            return None;
        }
        let steps = duration.as_millis() as f64 / FRAME_INTERVAL.as_millis() as f64;
        Some(Self {
            target,
            increment: target as f64 / steps,
            current: 0.0,
            finished: false,
        })
    }

    /// Create a ramp from a raw target value; non-numeric or zero targets yield `None`
    pub fn from_value(target: f64, duration: Duration) -> Option<Self> {
        if !target.is_finite() || target <= 0.0 || target.fract() != 0.0 {
            return None;
        }
        Self::new(target as u64, duration)
    }

    #[cfg(test)]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[cfg(test)]
    pub fn increment(&self) -> f64 {
        self.increment
    }
}

impl Iterator for CounterRamp {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            Some(self.target)
        } else {
            Some(self.current.floor() as u64)
        }
    }
}
