use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::round::round_to_count;

use super::interval::Interval;

/// How the caller asked for the interval to be split.
///
/// `Fixed` carries the raw user count, which may be zero or negative; both
/// mean "nothing to compute" rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PartitionSpec {
    Fixed { count: i64 },
    Refine
}

impl PartitionSpec {
    pub fn fixed(count: i64) -> PartitionSpec {
        PartitionSpec::Fixed { count }
    }

    /// The count used for evaluation. `Refine` derives it from the interval
    /// width as `round(width * refine_density)`, ignoring any explicit count.
    pub fn effective_count(&self, interval: &Interval, refine_density: f64) -> Option<usize> {
        let count = match self {
            PartitionSpec::Fixed { count } => usize::try_from(*count).unwrap_or(0),
            PartitionSpec::Refine => round_to_count(interval.width().abs() * refine_density)
        };
        if count == 0 {
            None
        } else {
            Some(count)
        }
    }

    pub fn label(&self, count: usize) -> PartitionLabel {
        match self {
            PartitionSpec::Fixed { .. } => PartitionLabel::Count(count),
            PartitionSpec::Refine => PartitionLabel::Infinite
        }
    }
}

/// What the user sees as the partition count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionLabel {
    Count(usize),
    Infinite
}

impl fmt::Display for PartitionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionLabel::Count(count) => write!(f, "{}", count),
            PartitionLabel::Infinite => write!(f, "∞")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_count_passes_through() {
        let interval = Interval::new(0.0, 10.0);
        assert_eq!(PartitionSpec::fixed(5).effective_count(&interval, 1000.0), Some(5));
    }

    #[test]
    fn non_positive_fixed_count_is_nothing() {
        let interval = Interval::new(0.0, 10.0);
        assert_eq!(PartitionSpec::fixed(0).effective_count(&interval, 1000.0), None);
        assert_eq!(PartitionSpec::fixed(-4).effective_count(&interval, 1000.0), None);
    }

    #[test]
    fn refine_derives_from_width() {
        assert_eq!(
            PartitionSpec::Refine.effective_count(&Interval::new(0.0, 10.0), 1000.0),
            Some(10_000)
        );
        assert_eq!(
            PartitionSpec::Refine.effective_count(&Interval::new(1.0, 1.5), 1000.0),
            Some(500)
        );
        assert_eq!(PartitionSpec::Refine.effective_count(&Interval::new(3.0, 3.0), 1000.0), None);
        assert_eq!(
            PartitionSpec::Refine.effective_count(&Interval::new(0.0, 0.0001), 1000.0),
            None
        );
    }

    #[test]
    fn labels() {
        assert_eq!(PartitionSpec::fixed(5).label(5).to_string(), "5");
        assert_eq!(PartitionSpec::Refine.label(10_000).to_string(), "∞");
    }

    #[test]
    fn deserializes_tagged() {
        let fixed: PartitionSpec = serde_json::from_str(r#"{"mode":"fixed","count":8}"#).unwrap();
        assert_eq!(fixed, PartitionSpec::fixed(8));
        let refine: PartitionSpec = serde_json::from_str(r#"{"mode":"refine"}"#).unwrap();
        assert_eq!(refine, PartitionSpec::Refine);
    }
}
