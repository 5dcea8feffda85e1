use serde::{
    Deserialize,
    Serialize
};

pub const DEFAULT_DENSITY_THRESHOLD: usize = 100;
pub const DEFAULT_DENSE_SAMPLES: usize = 21;
pub const DEFAULT_COARSE_SAMPLES: usize = 11;

/// Number of grid points per subinterval used by the upper and lower sums.
///
/// Partitions with at most `threshold` subintervals are sampled with `dense`
/// points each, finer partitions with `coarse` points. The defaults are odd so
/// that every grid contains both endpoints and the midpoint of its
/// subinterval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingDensity {
    threshold: usize,
    dense: usize,
    coarse: usize
}

impl SamplingDensity {
    pub fn new(threshold: usize, dense: usize, coarse: usize) -> SamplingDensity {
        SamplingDensity { threshold, dense, coarse }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn dense(&self) -> usize {
        self.dense
    }

    pub fn coarse(&self) -> usize {
        self.coarse
    }

    /// Grid size for a partition of `count` subintervals, never below two.
    pub fn samples_for(&self, count: usize) -> usize {
        let samples = if count <= self.threshold {
            self.dense
        } else {
            self.coarse
        };
        samples.max(2)
    }
}

impl Default for SamplingDensity {
    fn default() -> Self {
        SamplingDensity::new(
            DEFAULT_DENSITY_THRESHOLD,
            DEFAULT_DENSE_SAMPLES,
            DEFAULT_COARSE_SAMPLES
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coarsens_past_threshold() {
        let density = SamplingDensity::default();
        assert_eq!(density.samples_for(1), 21);
        assert_eq!(density.samples_for(100), 21);
        assert_eq!(density.samples_for(101), 11);
        assert_eq!(density.samples_for(10_000), 11);
    }

    #[test]
    fn never_below_two() {
        let density = SamplingDensity::new(10, 1, 0);
        assert_eq!(density.samples_for(5), 2);
        assert_eq!(density.samples_for(50), 2);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let density: SamplingDensity = serde_json::from_str(r#"{"coarse": 5}"#).unwrap();
        assert_eq!(density.threshold(), 100);
        assert_eq!(density.dense(), 21);
        assert_eq!(density.coarse(), 5);
    }
}
