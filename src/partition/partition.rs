use nalgebra::DVector;

use super::interval::Interval;

/// Uniform partition of an interval into `count` subintervals.
///
/// Holds exactly `count + 1` points; the first is `lo` and the last is `hi`.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    interval: Interval,
    points: DVector<f64>,
    width: f64
}

impl Partition {
    /// `None` when there is nothing to partition: `count == 0` or a
    /// degenerate interval.
    pub fn new(interval: Interval, count: usize) -> Option<Partition> {
        if count == 0 || interval.is_degenerate() {
            return None;
        }
        let points = interval.linspace(count + 1);
        let width = interval.width() / count as f64;
        Some(Partition { interval, points, width })
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn points(&self) -> &DVector<f64> {
        &self.points
    }

    /// Common width of every subinterval.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Number of subintervals.
    pub fn count(&self) -> usize {
        self.points.len() - 1
    }

    /// Bounds of the `i`-th subinterval.
    pub fn subinterval(&self, i: usize) -> (f64, f64) {
        (self.points[i], self.points[i + 1])
    }

    pub fn subintervals(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.count()).map(|i| self.subinterval(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_parts_of_zero_to_ten() {
        let partition = Partition::new(Interval::new(0.0, 10.0), 5).unwrap();
        assert_eq!(partition.count(), 5);
        assert_eq!(partition.points().len(), 6);
        assert_eq!(partition.width(), 2.0);
        let expected = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0];
        for (p, e) in partition.points().iter().zip(expected.iter()) {
            assert!((p - e).abs() < 1e-12);
        }
    }

    #[test]
    fn uniform_spacing() {
        let partition = Partition::new(Interval::new(-1.3, 2.9), 37).unwrap();
        let w = partition.width();
        for (a, b) in partition.subintervals() {
            assert!((b - a - w).abs() < 1e-12);
        }
        assert_eq!(partition.points()[0], -1.3);
        assert_eq!(partition.points()[37], 2.9);
    }

    #[test]
    fn swapped_bounds_are_normalized() {
        let partition = Partition::new(Interval::new(10.0, 0.0), 2).unwrap();
        assert_eq!(partition.subinterval(0), (0.0, 5.0));
        assert_eq!(partition.subinterval(1), (5.0, 10.0));
    }

    #[test]
    fn degenerate_partitions() {
        assert!(Partition::new(Interval::new(3.0, 3.0), 4).is_none());
        assert!(Partition::new(Interval::new(0.0, 1.0), 0).is_none());
    }
}
