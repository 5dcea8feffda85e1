use nalgebra::DVector;
use tracing::warn;

use crate::math::curve::curve::Curve;
use crate::partition::partition::Partition;

use super::samplingdensity::SamplingDensity;
use super::sumvariant::SumVariant;

/// Bars and aggregate value of one variant over one partition.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantSums {
    variant: SumVariant,
    centers: DVector<f64>,
    heights: DVector<f64>,
    width: f64,
    value: f64
}

impl VariantSums {
    pub fn variant(&self) -> SumVariant {
        self.variant
    }

    pub fn centers(&self) -> &DVector<f64> {
        &self.centers
    }

    pub fn heights(&self) -> &DVector<f64> {
        &self.heights
    }

    /// Bar width, equal to the partition width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// `sum(height_i * width)`, the approximation of the definite integral.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn count(&self) -> usize {
        self.heights.len()
    }

    /// Indices of bars whose height is NaN or infinite.
    pub fn non_finite_bars(&self) -> Vec<usize> {
        self.heights
            .iter()
            .enumerate()
            .filter(|(_, h)| !h.is_finite())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_non_finite(&self) -> bool {
        self.heights.iter().any(|h| !h.is_finite())
    }
}

// ─────────────────────────────────────────────
// SumEvaluator
// ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct SumEvaluator {
    density: SamplingDensity
}

impl SumEvaluator {
    pub fn new(density: SamplingDensity) -> SumEvaluator {
        SumEvaluator { density }
    }

    pub fn density(&self) -> &SamplingDensity {
        &self.density
    }

    pub fn evaluate(&self,
                    variant: SumVariant,
                    curve: &dyn Curve,
                    partition: &Partition) -> VariantSums {
        let count = partition.count();
        let width = partition.width();
        let samples = self.density.samples_for(count);

        let bars: Vec<(f64, f64)> = partition
            .subintervals()
            .map(|(lhs, rhs)| self.bar(variant, curve, lhs, rhs, width, samples))
            .collect();

        let centers = DVector::from_iterator(count, bars.iter().map(|bar| bar.0));
        let heights = DVector::from_iterator(count, bars.iter().map(|bar| bar.1));
        let value: f64 = heights.iter().map(|h| h * width).sum();

        let sums = VariantSums { variant, centers, heights, width, value };
        if sums.has_non_finite() {
            warn!(
                variant = variant.tag(),
                bars = sums.non_finite_bars().len(),
                "function is not finite on part of the partition"
            );
        }
        sums
    }

    fn bar(&self,
           variant: SumVariant,
           curve: &dyn Curve,
           lhs: f64,
           rhs: f64,
           width: f64,
           samples: usize) -> (f64, f64) {
        match variant {
            SumVariant::Right => (rhs - width / 2.0, curve.value(rhs)),
            SumVariant::Left => (lhs + width / 2.0, curve.value(lhs)),
            SumVariant::Midpoint => {
                let center = lhs + width / 2.0;
                (center, curve.value(center))
            },
            SumVariant::Upper => (lhs + width / 2.0, sampled_extremum(curve, lhs, rhs, samples, f64::max)),
            SumVariant::Lower => (lhs + width / 2.0, sampled_extremum(curve, lhs, rhs, samples, f64::min))
        }
    }
}

/// Folds `pick` over `samples` evenly spaced values of the curve on
/// `[lhs, rhs]`. The first non-finite value met is returned as is.
fn sampled_extremum(curve: &dyn Curve,
                    lhs: f64,
                    rhs: f64,
                    samples: usize,
                    pick: fn(f64, f64) -> f64) -> f64 {
    let last = samples.max(2) - 1;
    let step = (rhs - lhs) / last as f64;
    let mut best: Option<f64> = None;
    for k in 0..=last {
        let x = if k == last { rhs } else { lhs + step * k as f64 };
        let y = curve.value(x);
        if !y.is_finite() {
            return y;
        }
        best = Some(best.map_or(y, |b| pick(b, y)));
    }
    best.unwrap_or(f64::NAN)
}
