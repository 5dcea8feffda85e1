use tracing::debug;

use crate::math::curve::curvesampler::{
    CurveSample,
    CurveSampler
};
use crate::formula::formula::Formula;
use crate::partition::interval::Interval;
use crate::partition::partition::Partition;
use crate::partition::partitionspec::PartitionLabel;
use crate::partition::refinementschedule::RefinementSchedule;
use crate::sum::sumevaluator::SumEvaluator;
use crate::sum::sumvariant::SumVariant;

use super::renderframe::{
    FrameSequence,
    RenderFrame
};

/// Chart title: variant, formula and value to five decimals.
pub fn title(variant: SumVariant, formula_text: &str, value: f64) -> String {
    format!("{} (f(x) = {})\nvalue = {:.5}", variant.name(), formula_text, value)
}

/// Combines curve samples and sums into frames for the rendering layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultAssembler {
    evaluator: SumEvaluator,
    sampler: CurveSampler
}

impl ResultAssembler {
    pub fn new(evaluator: SumEvaluator, sampler: CurveSampler) -> ResultAssembler {
        ResultAssembler { evaluator, sampler }
    }

    pub fn evaluator(&self) -> &SumEvaluator {
        &self.evaluator
    }

    pub fn sampler(&self) -> &CurveSampler {
        &self.sampler
    }

    /// One frame at `count` subintervals; `None` when the interval or the
    /// count is degenerate.
    pub fn assemble(&self,
                    variant: SumVariant,
                    formula: &Formula,
                    interval: &Interval,
                    count: usize,
                    label: PartitionLabel) -> Option<RenderFrame> {
        let partition = Partition::new(*interval, count)?;
        let curve = self.sampler.sample(formula, interval);
        Some(self.frame(variant, formula, &partition, curve, label))
    }

    /// One frame per schedule entry, in schedule order. The curve is sampled
    /// once and shared by every frame.
    pub fn assemble_sequence(&self,
                             variant: SumVariant,
                             formula: &Formula,
                             interval: &Interval,
                             schedule: &RefinementSchedule) -> Option<FrameSequence> {
        if interval.is_degenerate() {
            return None;
        }
        let curve = self.sampler.sample(formula, interval);
        let frames: Vec<RenderFrame> = schedule
            .iter()
            .filter_map(|count| {
                let partition = Partition::new(*interval, count)?;
                Some(self.frame(variant, formula, &partition, curve.clone(), PartitionLabel::Count(count)))
            })
            .collect();
        debug!(variant = variant.tag(), frames = frames.len(), "frame sequence assembled");
        FrameSequence::new(variant, frames)
    }

    fn frame(&self,
             variant: SumVariant,
             formula: &Formula,
             partition: &Partition,
             curve: CurveSample,
             label: PartitionLabel) -> RenderFrame {
        let sums = self.evaluator.evaluate(variant, formula, partition);
        let title = title(variant, formula.text(), sums.value());
        RenderFrame::new(&sums, curve, label, title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::formulacompiler::compile;

    fn formula(text: &str) -> Formula {
        compile(text).unwrap().unwrap()
    }

    #[test]
    fn right_sum_frame_of_identity() {
        let frame = ResultAssembler::default()
            .assemble(SumVariant::Right, &formula("x"), &Interval::new(0.0, 10.0), 5, PartitionLabel::Count(5))
            .unwrap();
        assert!((frame.value() - 60.0).abs() < 1e-9);
        assert_eq!(frame.count(), 5);
        assert_eq!(frame.bars().len(), 5);
        assert_eq!(frame.bars().width(), 2.0);
        assert_eq!(frame.curve().len(), 500);
        assert_eq!(frame.title(), "Right Riemann sum (f(x) = x)\nvalue = 60.00000");
        assert_eq!(frame.name(), "right_5");
        assert!(!frame.non_finite());
    }

    #[test]
    fn degenerate_interval_gives_no_frame() {
        let assembler = ResultAssembler::default();
        let f = formula("x");
        assert!(assembler.assemble(SumVariant::Left, &f, &Interval::new(3.0, 3.0), 4, PartitionLabel::Count(4)).is_none());
        assert!(assembler.assemble(SumVariant::Left, &f, &Interval::new(0.0, 3.0), 0, PartitionLabel::Count(0)).is_none());
        let schedule = RefinementSchedule::with_defaults(5).unwrap();
        assert!(assembler.assemble_sequence(SumVariant::Left, &f, &Interval::new(3.0, 3.0), &schedule).is_none());
    }

    #[test]
    fn sequence_follows_schedule() {
        let schedule = RefinementSchedule::with_defaults(5).unwrap();
        let sequence = ResultAssembler::default()
            .assemble_sequence(SumVariant::Midpoint, &formula("x^2"), &Interval::new(0.0, 3.0), &schedule)
            .unwrap();
        assert_eq!(sequence.len(), schedule.len());
        assert_eq!(sequence.initial().count(), 5);
        let counts: Vec<usize> = sequence.iter().map(|frame| frame.count()).collect();
        assert_eq!(counts, schedule.counts());
        for frame in sequence.iter() {
            assert_eq!(frame.bars().len(), frame.count());
            assert_eq!(frame.label(), PartitionLabel::Count(frame.count()));
        }
        // midpoint sums of x^2 on [0, 3] approach 9 from below
        let last = sequence.frames().last().unwrap();
        assert!((last.value() - 9.0).abs() < 1e-4);
        assert!(sequence.initial().value() < last.value());
        assert_eq!(sequence.slider_labels()[0], "5");
    }

    #[test]
    fn title_formats_five_decimals() {
        assert_eq!(
            title(SumVariant::Upper, "sin(x)", 1.0 / 3.0),
            "Upper Riemann sum (f(x) = sin(x))\nvalue = 0.33333"
        );
        assert_eq!(title(SumVariant::Lower, "1/x", f64::NAN), "Lower Riemann sum (f(x) = 1/x)\nvalue = NaN");
    }

    #[test]
    fn frames_serialize_to_json() {
        let frame = ResultAssembler::default()
            .assemble(SumVariant::Left, &formula("x"), &Interval::new(0.0, 1.0), 2, PartitionLabel::Infinite)
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&frame.to_json().unwrap()).unwrap();
        assert_eq!(json["variant"], "left");
        assert_eq!(json["label"], "infinite");
        assert_eq!(json["bars"]["heights"], serde_json::json!([0.0, 0.5]));
        assert_eq!(json["count"], 2);
    }
}
