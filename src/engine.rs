use serde::{
    Deserialize,
    Serialize
};
use tracing::{
    debug,
    warn
};

use crate::configuration::EngineConfiguration;
use crate::degenerateinput::DegenerateInput;
use crate::formula::formula::Formula;
use crate::formula::formulacompiler::compile;
use crate::formula::parsefailure::ParseFailure;
use crate::math::curve::curvesampler::CurveSample;
use crate::partition::interval::Interval;
use crate::partition::partition::Partition;
use crate::partition::partitionspec::PartitionSpec;
use crate::partition::refinementschedule::RefinementSchedule;
use crate::render::renderframe::{
    FrameSequence,
    RenderFrame,
    RunSummary
};
use crate::render::resultassembler::ResultAssembler;
use crate::sum::sumevaluator::VariantSums;
use crate::sum::sumvariant::SumVariant;

/// Everything the UI layer collects for one recomputation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiemannRequest {
    pub formula: String,
    pub lo: f64,
    pub hi: f64,
    pub partition: PartitionSpec,
    pub variants: Vec<SumVariant>,
    #[serde(default)]
    pub animate: bool
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RiemannResponse {
    /// The formula text is blank.
    NoFormula,
    ParseFailed { message: String, failure: ParseFailureKind },
    Nothing { reason: DegenerateInput },
    Frames { summary: RunSummary, frames: Vec<RenderFrame> },
    Animation { summary: RunSummary, sequences: Vec<FrameSequence> }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseFailureKind {
    Malformed,
    Other
}

impl From<&ParseFailure> for ParseFailureKind {
    fn from(failure: &ParseFailure) -> Self {
        match failure {
            ParseFailure::Malformed => ParseFailureKind::Malformed,
            ParseFailure::Other(_) => ParseFailureKind::Other
        }
    }
}

impl RiemannResponse {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Stateless front door of the crate; every call recomputes from its
/// arguments.
#[derive(Debug, Clone)]
pub struct RiemannEngine {
    configuration: EngineConfiguration,
    assembler: ResultAssembler
}

impl RiemannEngine {
    pub fn new(configuration: EngineConfiguration) -> RiemannEngine {
        let assembler = configuration.assembler();
        RiemannEngine { configuration, assembler }
    }

    pub fn configuration(&self) -> &EngineConfiguration {
        &self.configuration
    }

    pub fn compile_formula(&self, text: &str) -> Result<Option<Formula>, ParseFailure> {
        compile(text)
    }

    /// Partition count actually used for `spec` over `interval`, capped at
    /// the configured maximum.
    pub fn resolve_count(&self, interval: &Interval, spec: &PartitionSpec) -> Result<usize, DegenerateInput> {
        check_interval(interval)?;
        let count = spec
            .effective_count(interval, self.configuration.refine_density())
            .ok_or(DegenerateInput::NonPositiveCount)?;
        Ok(self.cap(count))
    }

    fn cap(&self, count: usize) -> usize {
        let max = self.configuration.max_partition_count();
        if count > max {
            warn!(requested = count, max, "partition count capped");
            max
        } else {
            count
        }
    }

    pub fn build_partition(&self, lo: f64, hi: f64, n: i64) -> Result<Partition, DegenerateInput> {
        let interval = Interval::new(lo, hi);
        let count = self.resolve_count(&interval, &PartitionSpec::fixed(n))?;
        Partition::new(interval, count).ok_or(DegenerateInput::NonPositiveCount)
    }

    /// Schedule from `start_n` up to the configured end count.
    pub fn refinement_schedule(&self, start_n: i64) -> Result<RefinementSchedule, DegenerateInput> {
        self.refinement_schedule_to(start_n, self.configuration.schedule_end())
    }

    pub fn refinement_schedule_to(&self, start_n: i64, end_n: usize) -> Result<RefinementSchedule, DegenerateInput> {
        let start = usize::try_from(start_n).map_err(|_| DegenerateInput::NonPositiveCount)?;
        RefinementSchedule::new(self.cap(start), self.cap(end_n), self.configuration.schedule_samples())
            .ok_or(DegenerateInput::NonPositiveCount)
    }

    pub fn evaluate_variant(&self, variant: SumVariant, formula: &Formula, partition: &Partition) -> VariantSums {
        self.assembler.evaluator().evaluate(variant, formula, partition)
    }

    pub fn sample_curve(&self, formula: &Formula, lo: f64, hi: f64) -> Result<CurveSample, DegenerateInput> {
        let interval = Interval::new(lo, hi);
        check_interval(&interval)?;
        Ok(self.assembler.sampler().sample(formula, &interval))
    }

    pub fn build_frame(&self,
                       variant: SumVariant,
                       formula: &Formula,
                       lo: f64,
                       hi: f64,
                       spec: PartitionSpec) -> Result<RenderFrame, DegenerateInput> {
        let interval = Interval::new(lo, hi);
        let count = self.resolve_count(&interval, &spec)?;
        self.assembler
            .assemble(variant, formula, &interval, count, spec.label(count))
            .ok_or(DegenerateInput::NonPositiveCount)
    }

    /// Animation frames for `variant`, refining from the count `spec`
    /// resolves to.
    pub fn build_frame_sequence(&self,
                                variant: SumVariant,
                                formula: &Formula,
                                lo: f64,
                                hi: f64,
                                spec: PartitionSpec) -> Result<FrameSequence, DegenerateInput> {
        let interval = Interval::new(lo, hi);
        let count = self.resolve_count(&interval, &spec)?;
        let end = self.cap(self.configuration.schedule_end());
        let schedule = RefinementSchedule::new(count, end, self.configuration.schedule_samples())
            .ok_or(DegenerateInput::NonPositiveCount)?;
        self.assembler
            .assemble_sequence(variant, formula, &interval, &schedule)
            .ok_or(DegenerateInput::NonPositiveCount)
    }

    /// Runs one full recomputation for the UI layer.
    pub fn run(&self, request: &RiemannRequest) -> RiemannResponse {
        let formula = match self.compile_formula(&request.formula) {
            Ok(Some(formula)) => formula,
            Ok(None) => return RiemannResponse::NoFormula,
            Err(failure) => {
                return RiemannResponse::ParseFailed {
                    message: failure.to_string(),
                    failure: ParseFailureKind::from(&failure)
                }
            }
        };

        match self.run_formula(&formula, request) {
            Ok(response) => response,
            Err(reason) => {
                debug!(%reason, "nothing to compute");
                RiemannResponse::Nothing { reason }
            }
        }
    }

    fn run_formula(&self, formula: &Formula, request: &RiemannRequest) -> Result<RiemannResponse, DegenerateInput> {
        let interval = Interval::new(request.lo, request.hi);
        let count = self.resolve_count(&interval, &request.partition)?;
        let variants = selected(&request.variants);
        if variants.is_empty() {
            return Err(DegenerateInput::EmptySelection);
        }
        let summary = RunSummary::new(formula.text().to_owned(), request.partition.label(count), interval);

        if request.animate {
            let sequences = variants
                .iter()
                .map(|variant| self.build_frame_sequence(*variant, formula, request.lo, request.hi, request.partition))
                .collect::<Result<Vec<FrameSequence>, DegenerateInput>>()?;
            Ok(RiemannResponse::Animation { summary, sequences })
        } else {
            let frames = variants
                .iter()
                .map(|variant| self.build_frame(*variant, formula, request.lo, request.hi, request.partition))
                .collect::<Result<Vec<RenderFrame>, DegenerateInput>>()?;
            Ok(RiemannResponse::Frames { summary, frames })
        }
    }
}

impl Default for RiemannEngine {
    fn default() -> Self {
        RiemannEngine::new(EngineConfiguration::default())
    }
}

fn check_interval(interval: &Interval) -> Result<(), DegenerateInput> {
    if !interval.is_bounded() {
        Err(DegenerateInput::UnboundedInterval)
    } else if interval.is_degenerate() {
        Err(DegenerateInput::ZeroWidthInterval)
    } else {
        Ok(())
    }
}

/// Selected variants without repeats, in selection order.
fn selected(variants: &[SumVariant]) -> Vec<SumVariant> {
    let mut unique: Vec<SumVariant> = Vec::with_capacity(variants.len());
    for variant in variants {
        if !unique.contains(variant) {
            unique.push(*variant);
        }
    }
    unique
}

// ─────────────────────────────────────────────
// Free functions with the default configuration
// ─────────────────────────────────────────────

pub fn compile_formula(text: &str) -> Result<Option<Formula>, ParseFailure> {
    compile(text)
}

pub fn normalize_interval(lo: f64, hi: f64) -> (f64, f64) {
    let interval = Interval::new(lo, hi);
    (interval.lo(), interval.hi())
}

pub fn build_partition(lo: f64, hi: f64, n: i64) -> Option<Partition> {
    RiemannEngine::default().build_partition(lo, hi, n).ok()
}

pub fn compute_refinement_schedule(start_n: i64, end_n: usize) -> Option<RefinementSchedule> {
    RiemannEngine::default().refinement_schedule_to(start_n, end_n).ok()
}

/// `None` for an unknown variant tag.
pub fn evaluate_variant(variant_tag: &str, formula: &Formula, partition: &Partition) -> Option<VariantSums> {
    let variant: SumVariant = variant_tag.parse().ok()?;
    Some(RiemannEngine::default().evaluate_variant(variant, formula, partition))
}

pub fn sample_curve(formula: &Formula, lo: f64, hi: f64) -> Option<CurveSample> {
    RiemannEngine::default().sample_curve(formula, lo, hi).ok()
}

pub fn build_frame(variant: SumVariant,
                   formula: &Formula,
                   lo: f64,
                   hi: f64,
                   spec: PartitionSpec) -> Option<RenderFrame> {
    RiemannEngine::default().build_frame(variant, formula, lo, hi, spec).ok()
}

pub fn build_frame_sequence(variant: SumVariant,
                            formula: &Formula,
                            lo: f64,
                            hi: f64,
                            spec: PartitionSpec) -> Option<FrameSequence> {
    RiemannEngine::default().build_frame_sequence(variant, formula, lo, hi, spec).ok()
}
