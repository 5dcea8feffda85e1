use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::math::curve::curvesampler::{
    CurveSampler,
    DEFAULT_CURVE_RESOLUTION
};
use crate::partition::refinementschedule::{
    DEFAULT_SCHEDULE_END,
    DEFAULT_SCHEDULE_SAMPLES
};
use crate::render::resultassembler::ResultAssembler;
use crate::sum::samplingdensity::SamplingDensity;
use crate::sum::sumevaluator::SumEvaluator;

pub const DEFAULT_REFINE_DENSITY: f64 = 1000.0;
pub const DEFAULT_MAX_PARTITION_COUNT: usize = 200_000;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunables of the engine. Every field may be omitted from the JSON document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfiguration {
    curve_resolution: usize,
    refine_density: f64,
    schedule_end: usize,
    schedule_samples: usize,
    sampling_density: SamplingDensity,
    max_partition_count: usize
}

impl Default for EngineConfiguration {
    fn default() -> Self {
        EngineConfiguration {
            curve_resolution: DEFAULT_CURVE_RESOLUTION,
            refine_density: DEFAULT_REFINE_DENSITY,
            schedule_end: DEFAULT_SCHEDULE_END,
            schedule_samples: DEFAULT_SCHEDULE_SAMPLES,
            sampling_density: SamplingDensity::default(),
            max_partition_count: DEFAULT_MAX_PARTITION_COUNT
        }
    }
}

impl EngineConfiguration {
    pub fn new() -> EngineConfiguration {
        EngineConfiguration::default()
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<EngineConfiguration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration: EngineConfiguration = serde_json::from_reader(reader)?;
        configuration.validate()
    }

    pub fn from_json_str(json: &str) -> Result<EngineConfiguration, ConfigurationError> {
        let configuration: EngineConfiguration = serde_json::from_str(json)?;
        configuration.validate()
    }

    fn validate(self) -> Result<EngineConfiguration, ConfigurationError> {
        if self.curve_resolution < 2 {
            return Err(invalid("curve_resolution", "must be at least 2"));
        }
        if !(self.refine_density.is_finite() && self.refine_density > 0.0) {
            return Err(invalid("refine_density", "must be a positive number"));
        }
        if self.schedule_end == 0 {
            return Err(invalid("schedule_end", "must be at least 1"));
        }
        if self.schedule_samples == 0 {
            return Err(invalid("schedule_samples", "must be at least 1"));
        }
        if self.sampling_density.dense() < 2 || self.sampling_density.coarse() < 2 {
            return Err(invalid("sampling_density", "dense and coarse must be at least 2"));
        }
        if self.max_partition_count == 0 {
            return Err(invalid("max_partition_count", "must be at least 1"));
        }
        Ok(self)
    }

    pub fn curve_resolution(&self) -> usize {
        self.curve_resolution
    }

    pub fn refine_density(&self) -> f64 {
        self.refine_density
    }

    pub fn schedule_end(&self) -> usize {
        self.schedule_end
    }

    pub fn schedule_samples(&self) -> usize {
        self.schedule_samples
    }

    pub fn sampling_density(&self) -> &SamplingDensity {
        &self.sampling_density
    }

    pub fn max_partition_count(&self) -> usize {
        self.max_partition_count
    }

    pub fn assembler(&self) -> ResultAssembler {
        ResultAssembler::new(
            SumEvaluator::new(self.sampling_density),
            CurveSampler::new(self.curve_resolution)
        )
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigurationError {
    ConfigurationError::Invalid { field, reason: reason.to_owned() }
}
