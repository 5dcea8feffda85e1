use serde::Serialize;

pub const DEFAULT_SCHEDULE_END: usize = 1000;
pub const DEFAULT_SCHEDULE_SAMPLES: usize = 15;

/// Increasing partition counts for the convergence animation.
///
/// Counts are `samples` geometrically spaced values from `start` to `end`
/// inclusive, truncated to integers, with duplicates dropped. The first count
/// is always `start`.
///
/// When `start >= end` there is nothing to refine towards and the schedule is
/// the single count `start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefinementSchedule {
    counts: Vec<usize>
}

impl RefinementSchedule {
    /// `None` for a start count of zero.
    pub fn new(start: usize, end: usize, samples: usize) -> Option<RefinementSchedule> {
        if start == 0 {
            return None;
        }
        if start >= end || samples < 2 {
            return Some(RefinementSchedule { counts: vec![start] });
        }

        let log_start = (start as f64).ln();
        let log_end = (end as f64).ln();
        let last = samples - 1;
        let mut counts: Vec<usize> = Vec::with_capacity(samples);
        for k in 0..samples {
            let count = if k == 0 {
                start
            } else if k == last {
                end
            } else {
                (log_start + (log_end - log_start) * (k as f64) / (last as f64)).exp() as usize
            };
            if counts.last().map_or(true, |prev| count > *prev) {
                counts.push(count);
            }
        }
        Some(RefinementSchedule { counts })
    }

    pub fn with_defaults(start: usize) -> Option<RefinementSchedule> {
        RefinementSchedule::new(start, DEFAULT_SCHEDULE_END, DEFAULT_SCHEDULE_SAMPLES)
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn start(&self) -> usize {
        self.counts[0]
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts.iter().copied()
    }
}
