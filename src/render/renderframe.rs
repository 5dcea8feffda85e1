use std::fmt;

use serde::Serialize;

use crate::math::curve::curvesampler::CurveSample;
use crate::partition::interval::Interval;
use crate::partition::partitionspec::PartitionLabel;
use crate::sum::sumevaluator::VariantSums;
use crate::sum::sumvariant::SumVariant;

/// Bar chart overlay of one variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bars {
    centers: Vec<f64>,
    heights: Vec<f64>,
    width: f64
}

impl Bars {
    pub fn from_sums(sums: &VariantSums) -> Bars {
        Bars {
            centers: sums.centers().iter().copied().collect(),
            heights: sums.heights().iter().copied().collect(),
            width: sums.width()
        }
    }

    pub fn centers(&self) -> &[f64] {
        &self.centers
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

/// One chart: the curve, one variant's bars and the approximation value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    variant: SumVariant,
    count: usize,
    label: PartitionLabel,
    curve: CurveSample,
    bars: Bars,
    value: f64,
    title: String,
    non_finite: bool
}

impl RenderFrame {
    pub fn new(sums: &VariantSums,
               curve: CurveSample,
               label: PartitionLabel,
               title: String) -> RenderFrame {
        RenderFrame {
            variant: sums.variant(),
            count: sums.count(),
            label,
            curve,
            bars: Bars::from_sums(sums),
            value: sums.value(),
            title,
            non_finite: sums.has_non_finite()
        }
    }

    pub fn variant(&self) -> SumVariant {
        self.variant
    }

    /// Partition count the bars were computed with.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn label(&self) -> PartitionLabel {
        self.label
    }

    pub fn curve(&self) -> &CurveSample {
        &self.curve
    }

    pub fn bars(&self) -> &Bars {
        &self.bars
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether any bar height is NaN or infinite.
    pub fn non_finite(&self) -> bool {
        self.non_finite
    }

    /// Unique name of the frame within an animation, `<variant>_<count>`.
    pub fn name(&self) -> String {
        format!("{}_{}", self.variant.tag(), self.count)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Frames of one variant in ascending partition count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSequence {
    variant: SumVariant,
    frames: Vec<RenderFrame>
}

impl FrameSequence {
    /// `None` when there are no frames.
    pub fn new(variant: SumVariant, frames: Vec<RenderFrame>) -> Option<FrameSequence> {
        if frames.is_empty() {
            None
        } else {
            Some(FrameSequence { variant, frames })
        }
    }

    pub fn variant(&self) -> SumVariant {
        self.variant
    }

    pub fn frames(&self) -> &[RenderFrame] {
        &self.frames
    }

    /// The frame shown before playback starts.
    pub fn initial(&self) -> &RenderFrame {
        &self.frames[0]
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderFrame> {
        self.frames.iter()
    }

    /// Slider step labels, one per frame.
    pub fn slider_labels(&self) -> Vec<String> {
        self.frames.iter().map(|frame| frame.count().to_string()).collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Header shown above the charts of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    formula_text: String,
    label: PartitionLabel,
    interval: Interval
}

impl RunSummary {
    pub fn new(formula_text: String, label: PartitionLabel, interval: Interval) -> RunSummary {
        RunSummary { formula_text, label, interval }
    }

    pub fn formula_text(&self) -> &str {
        &self.formula_text
    }

    pub fn label(&self) -> PartitionLabel {
        self.label
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "f(x) = {}", self.formula_text)?;
        writeln!(f, "partitions: {}", self.label)?;
        write!(f, "interval: {} to {}", self.interval.lo(), self.interval.hi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_shows_infinity_for_refine() {
        let summary = RunSummary::new("x^2".to_owned(), PartitionLabel::Infinite, Interval::new(1.0, 0.0));
        assert_eq!(summary.to_string(), "f(x) = x^2\npartitions: ∞\ninterval: 0 to 1");
    }

    #[test]
    fn empty_sequence_is_none() {
        assert!(FrameSequence::new(SumVariant::Left, Vec::new()).is_none());
    }
}
