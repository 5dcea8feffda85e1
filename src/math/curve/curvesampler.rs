use serde::Serialize;

use crate::partition::interval::Interval;

use super::curve::Curve;

pub const DEFAULT_CURVE_RESOLUTION: usize = 500;

/// Dense uniform sample of a curve, for drawing only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSample {
    xs: Vec<f64>,
    ys: Vec<f64>
}

impl CurveSample {
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CurveSampler {
    resolution: usize
}

impl CurveSampler {
    pub fn new(resolution: usize) -> CurveSampler {
        CurveSampler { resolution }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn sample(&self, curve: &dyn Curve, interval: &Interval) -> CurveSample {
        let xs: Vec<f64> = interval.linspace(self.resolution).iter().copied().collect();
        let ys = xs.iter().map(|x| curve.value(*x)).collect();
        CurveSample { xs, ys }
    }
}

impl Default for CurveSampler {
    fn default() -> Self {
        CurveSampler::new(DEFAULT_CURVE_RESOLUTION)
    }
}
