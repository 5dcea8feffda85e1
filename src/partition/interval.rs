use std::fmt;

use nalgebra::DVector;
use serde::Serialize;

/// Closed interval `[lo, hi]` with `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    lo: f64,
    hi: f64
}

impl Interval {
    /// Builds the interval from two bounds in either order.
    pub fn new(a: f64, b: f64) -> Interval {
        if a > b {
            Interval { lo: b, hi: a }
        } else {
            Interval { lo: a, hi: b }
        }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// False when a bound is not finite, or when finite bounds are so far
    /// apart that the width overflows.
    pub fn is_bounded(&self) -> bool {
        self.width().is_finite()
    }

    /// True when there is nothing to integrate over: zero width, or an
    /// interval that is not bounded.
    pub fn is_degenerate(&self) -> bool {
        let width = self.width();
        !(width.is_finite() && width > 0.0)
    }

    /// `num` evenly spaced points from `lo` to `hi` inclusive.
    pub fn linspace(&self, num: usize) -> DVector<f64> {
        match num {
            0 => DVector::zeros(0),
            1 => DVector::from_element(1, self.lo),
            _ => {
                let last = num - 1;
                let width = self.width();
                DVector::from_fn(num, |i, _| {
                    if i == last {
                        self.hi
                    } else {
                        self.lo + width * (i as f64) / (last as f64)
                    }
                })
            }
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
