use serde::{Deserialize, Serialize};

use crate::core::mapper::AxisMapper;
use crate::core::nice::nice_number;
use crate::core::ticks::TickWalk;
use crate::error::{AxisError, AxisResult};

/// Tuning controls for nice-number axis derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScaleTuning {
    /// Upper bound on labeled major ticks, both ends included.
    pub max_major_ticks: usize,
    /// Upper bound on minor subdivisions per major interval, both ends included.
    pub max_minor_ticks: usize,
    /// Span substituted when the data range collapses to a single value.
    pub min_span_absolute: f64,
}

impl Default for AxisScaleTuning {
    fn default() -> Self {
        Self {
            max_major_ticks: 10,
            max_minor_ticks: 10,
            min_span_absolute: 0.000_001,
        }
    }
}

impl AxisScaleTuning {
    fn validate(self) -> AxisResult<Self> {
        if self.max_major_ticks < 2 {
            return Err(AxisError::InvalidTickCount {
                count: self.max_major_ticks,
            });
        }
        if self.max_minor_ticks < 2 {
            return Err(AxisError::InvalidTickCount {
                count: self.max_minor_ticks,
            });
        }
        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(AxisError::InvalidData(
                "axis min span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Derived axis bounds and tick spacing.
///
/// Pure value object: recomputed from the source range whenever an input
/// changes, never mutated in place. The nice range always fully contains
/// the data range it was derived from, and both steps are nice numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    nice_min: f64,
    nice_max: f64,
    major_step: f64,
    minor_step: f64,
}

impl AxisScale {
    /// Derives nice bounds and tick spacing from a raw data range.
    pub fn from_range(data_min: f64, data_max: f64) -> AxisResult<Self> {
        Self::from_range_tuned(data_min, data_max, AxisScaleTuning::default())
    }

    pub fn from_range_tuned(
        data_min: f64,
        data_max: f64,
        tuning: AxisScaleTuning,
    ) -> AxisResult<Self> {
        let tuning = tuning.validate()?;
        let (data_min, data_max) = normalize_range(data_min, data_max, tuning.min_span_absolute)?;

        let raw_range = data_max - data_min;
        let nice_range = nice_number(raw_range, false)?;
        let major_step = nice_number(nice_range / (tuning.max_major_ticks - 1) as f64, true)?;
        let nice_min = (data_min / major_step).floor() * major_step;
        let nice_max = (data_max / major_step).ceil() * major_step;
        let minor_step = nice_number(major_step / (tuning.max_minor_ticks - 1) as f64, true)?;

        Ok(Self {
            nice_min,
            nice_max,
            major_step,
            minor_step,
        })
    }

    /// Keeps the caller's explicit bounds and derives only tick spacing.
    ///
    /// Used when auto-scaling is off: the visible range stays exactly as
    /// set, so major ticks are not guaranteed to land on the bounds.
    pub fn from_fixed_range(min: f64, max: f64, tuning: AxisScaleTuning) -> AxisResult<Self> {
        let tuning = tuning.validate()?;
        let (min, max) = normalize_range(min, max, tuning.min_span_absolute)?;

        let span = max - min;
        let major_step = nice_number(span / (tuning.max_major_ticks - 1) as f64, true)?;
        let minor_step = nice_number(major_step / (tuning.max_minor_ticks - 1) as f64, true)?;

        Ok(Self {
            nice_min: min,
            nice_max: max,
            major_step,
            minor_step,
        })
    }

    /// Derives a scale from the min/max envelope of raw samples.
    pub fn from_values(values: &[f64]) -> AxisResult<Self> {
        Self::from_values_tuned(values, AxisScaleTuning::default())
    }

    pub fn from_values_tuned(values: &[f64], tuning: AxisScaleTuning) -> AxisResult<Self> {
        if values.is_empty() {
            return Err(AxisError::InvalidData(
                "axis scale cannot be built from empty data".to_owned(),
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in values {
            if !value.is_finite() {
                return Err(AxisError::InvalidData(
                    "axis data values must be finite".to_owned(),
                ));
            }
            min = min.min(*value);
            max = max.max(*value);
        }

        Self::from_range_tuned(min, max, tuning)
    }

    #[must_use]
    pub fn nice_min(self) -> f64 {
        self.nice_min
    }

    #[must_use]
    pub fn nice_max(self) -> f64 {
        self.nice_max
    }

    #[must_use]
    pub fn major_step(self) -> f64 {
        self.major_step
    }

    #[must_use]
    pub fn minor_step(self) -> f64 {
        self.minor_step
    }

    #[must_use]
    /// Returns the nice bounds kept by the scale.
    pub fn range(self) -> (f64, f64) {
        (self.nice_min, self.nice_max)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.nice_max - self.nice_min
    }

    #[must_use]
    /// Number of major grid lines across the nice range, both ends included.
    pub fn major_tick_count(self) -> usize {
        (self.span() / self.major_step).round() as usize + 1
    }

    /// Builds the minor-step tick walk across the nice range.
    pub fn ticks(self) -> AxisResult<TickWalk> {
        TickWalk::new(self)
    }

    /// Builds a projection of the nice range onto a pixel extent.
    pub fn mapper(self, extent_px: f64) -> AxisResult<AxisMapper> {
        AxisMapper::new(self, extent_px)
    }
}

fn normalize_range(min: f64, max: f64, min_span: f64) -> AxisResult<(f64, f64)> {
    if !min.is_finite() || !max.is_finite() || max < min {
        return Err(AxisError::InvalidRange { min, max });
    }

    if min == max {
        let half = min_span / 2.0;
        return Ok((min - half, max + half));
    }

    Ok((min, max))
}
