use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::LabelError;
use crate::util::is_non_decreasing;

/// Closed numeric range `[min, max]` with finite bounds and `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Result<Self, LabelError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(LabelError::NonFiniteBound { min, max });
        }
        if min > max {
            return Err(LabelError::InvertedInterval { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// Spacing of generated samples.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Scale {
    #[default]
    Linear,
    Log,
}

impl Scale {
    pub fn from_flag(log_scale: bool) -> Self {
        if log_scale {
            Scale::Log
        } else {
            Scale::Linear
        }
    }

    pub fn sampler(&self) -> Box<dyn Sampler> {
        match self {
            Scale::Linear => Box::new(LinearSampler),
            Scale::Log => Box::new(LogSampler),
        }
    }
}

/// Strategy producing `count` ordered sample points spanning an interval.
///
/// Implementations return exactly `count` values, the first equal to
/// `interval.min()` and the last equal to `interval.max()`.
pub trait Sampler {
    fn sample(&self, interval: &Interval, count: usize) -> Result<Vec<f64>, LabelError>;
}

/// Evenly spaced samples in value space.
pub struct LinearSampler;

impl Sampler for LinearSampler {
    fn sample(&self, interval: &Interval, count: usize) -> Result<Vec<f64>, LabelError> {
        if count == 0 {
            return Err(LabelError::ZeroTickCount);
        }
        if count == 1 || interval.is_degenerate() {
            return Ok(vec![interval.min(); count]);
        }

        let last = count - 1;
        let span = interval.span();
        // A finite interval can still be wider than f64::MAX.
        let step = if span.is_finite() {
            span / last as f64
        } else {
            interval.max() / last as f64 - interval.min() / last as f64
        };
        debug!(
            "linear sampling [{}, {}] with {count} ticks, step {step}",
            interval.min(),
            interval.max()
        );

        let samples: Vec<f64> = (0..count)
            .map(|i| match i {
                0 => interval.min(),
                i if i == last => interval.max(),
                i => (i as f64)
                    .mul_add(step, interval.min())
                    .min(interval.max()),
            })
            .collect();
        debug_assert!(is_non_decreasing(&samples));
        Ok(samples)
    }
}

/// Evenly spaced samples in log10 space, i.e. multiplicative spacing.
pub struct LogSampler;

impl Sampler for LogSampler {
    fn sample(&self, interval: &Interval, count: usize) -> Result<Vec<f64>, LabelError> {
        if interval.min() <= 0.0 {
            return Err(LabelError::NonPositiveLogBound {
                min: interval.min(),
            });
        }
        if count == 0 {
            return Err(LabelError::ZeroTickCount);
        }
        if count == 1 || interval.is_degenerate() {
            return Ok(vec![interval.min(); count]);
        }

        let last = count - 1;
        let log_min = interval.min().log10();
        let log_max = interval.max().log10();
        let step = (log_max - log_min) / last as f64;
        debug!(
            "log sampling [{}, {}] with {count} ticks, log10 step {step}",
            interval.min(),
            interval.max()
        );

        let samples: Vec<f64> = (0..count)
            .map(|i| match i {
                0 => interval.min(),
                i if i == last => interval.max(),
                i => 10f64
                    .powf(log_min + i as f64 * step)
                    .clamp(interval.min(), interval.max()),
            })
            .collect();
        debug_assert!(is_non_decreasing(&samples));
        Ok(samples)
    }
}

/// Samples `count` points over `interval` using the spacing of `scale`.
pub fn generate_samples(
    interval: &Interval,
    count: usize,
    scale: Scale,
) -> Result<Vec<f64>, LabelError> {
    scale.sampler().sample(interval, count)
}
