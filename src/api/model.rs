use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::api::axis_config::{AxisModelConfig, TickLabelConfig};
use crate::api::label_format::format_tick_label;
use crate::core::{AxisScale, AxisScaleTuning};
use crate::error::{AxisError, AxisResult};

/// Change notification delivered to [`AxisModel`] subscribers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisEvent {
    /// The backing data range was replaced.
    DataUpdated { sample_count: usize },
    /// The derived scale changed.
    ScaleChanged { scale: AxisScale },
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub auto_scale: bool,
    pub tuning: AxisScaleTuning,
    pub data_range: Option<(f64, f64)>,
    pub scale: Option<AxisScale>,
}

type AxisSubscriber = Box<dyn FnMut(AxisEvent)>;

/// Axis state holder: owns the raw data range and recomputes the derived
/// scale eagerly and synchronously on every change.
///
/// There is no caching and no deferral; every setter that affects the
/// derivation rescales before it returns, so subscribers always observe the
/// state a paint callback would read.
pub struct AxisModel {
    config: AxisModelConfig,
    data_range: Option<(f64, f64)>,
    scale: Option<AxisScale>,
    subscribers: Vec<AxisSubscriber>,
}

impl AxisModel {
    #[must_use]
    pub fn new(config: AxisModelConfig) -> Self {
        Self {
            config,
            data_range: None,
            scale: None,
            subscribers: Vec::new(),
        }
    }

    /// Replaces the backing samples and rescales from their envelope.
    pub fn set_values(&mut self, values: &[f64]) -> AxisResult<()> {
        if values.is_empty() {
            return Err(AxisError::InvalidData(
                "axis data must not be empty".to_owned(),
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

        debug!(sample_count = values.len(), min, max, "set axis data values");
        self.data_range = Some((min, max));
        self.emit(AxisEvent::DataUpdated {
            sample_count: values.len(),
        });
        self.rescale()
    }

    /// Replaces the backing data range directly.
    pub fn set_data_range(&mut self, min: f64, max: f64) -> AxisResult<()> {
        if !min.is_finite() || !max.is_finite() || max < min {
            return Err(AxisError::InvalidRange { min, max });
        }

        trace!(min, max, "set axis data range");
        self.data_range = Some((min, max));
        self.rescale()
    }

    /// Disables auto-scaling and pins the axis to explicit bounds.
    pub fn set_fixed_bounds(&mut self, min: f64, max: f64) -> AxisResult<()> {
        if !min.is_finite() || !max.is_finite() || max < min {
            return Err(AxisError::InvalidRange { min, max });
        }

        debug!(min, max, "set fixed axis bounds");
        self.config.auto_scale = false;
        self.data_range = Some((min, max));
        self.rescale()
    }

    /// Toggles auto-scaling; rescales immediately when data is present.
    pub fn set_auto_scale(&mut self, auto_scale: bool) -> AxisResult<()> {
        if self.config.auto_scale == auto_scale {
            return Ok(());
        }
        trace!(auto_scale, "toggle axis auto-scale");
        self.config.auto_scale = auto_scale;
        self.rescale()
    }

    pub fn set_tuning(&mut self, tuning: AxisScaleTuning) -> AxisResult<()> {
        trace!(
            max_major_ticks = tuning.max_major_ticks,
            max_minor_ticks = tuning.max_minor_ticks,
            "set axis tuning"
        );
        self.config.tuning = tuning;
        self.rescale()
    }

    #[must_use]
    pub fn scale(&self) -> Option<AxisScale> {
        self.scale
    }

    #[must_use]
    pub fn data_range(&self) -> Option<(f64, f64)> {
        self.data_range
    }

    #[must_use]
    pub fn auto_scale(&self) -> bool {
        self.config.auto_scale
    }

    #[must_use]
    pub fn tuning(&self) -> AxisScaleTuning {
        self.config.tuning
    }

    #[must_use]
    pub fn label_config(&self) -> TickLabelConfig {
        self.config.label
    }

    /// Formats a tick value with the model's label configuration.
    #[must_use]
    pub fn format_tick(&self, value: f64) -> String {
        let major_step = self.scale.map_or(1.0, |scale| scale.major_step());
        format_tick_label(value, major_step, self.config.label)
    }

    /// Registers an observer for data and scale changes.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(AxisEvent) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    #[must_use]
    pub fn snapshot(&self) -> AxisSnapshot {
        AxisSnapshot {
            auto_scale: self.config.auto_scale,
            tuning: self.config.tuning,
            data_range: self.data_range,
            scale: self.scale,
        }
    }

    pub fn snapshot_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|err| AxisError::InvalidData(format!("snapshot serialization failed: {err}")))
    }

    fn rescale(&mut self) -> AxisResult<()> {
        let Some((min, max)) = self.data_range else {
            return Ok(());
        };

        if min == max {
            warn!(
                value = min,
                substitute_span = self.config.tuning.min_span_absolute,
                "degenerate axis range widened before scaling"
            );
        }

        let scale = if self.config.auto_scale {
            AxisScale::from_range_tuned(min, max, self.config.tuning)?
        } else {
            AxisScale::from_fixed_range(min, max, self.config.tuning)?
        };

        if self.scale != Some(scale) {
            self.scale = Some(scale);
            debug!(
                nice_min = scale.nice_min(),
                nice_max = scale.nice_max(),
                major_step = scale.major_step(),
                minor_step = scale.minor_step(),
                "axis rescaled"
            );
            self.emit(AxisEvent::ScaleChanged { scale });
        }
        Ok(())
    }

    fn emit(&mut self, event: AxisEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }
}
