use serde::{Deserialize, Serialize};

use crate::core::AxisScaleTuning;

/// Locale preset used by tick label formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisLabelLocale {
    #[default]
    EnUs,
    EsEs,
}

/// Built-in policy used for tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickLabelPolicy {
    /// Render tick values with a fixed number of decimals.
    FixedDecimals { precision: u8 },
    /// Derive the decimal count from the major step magnitude, so every
    /// label on one axis shares a precision.
    Adaptive,
}

impl Default for TickLabelPolicy {
    fn default() -> Self {
        Self::Adaptive
    }
}

/// Runtime formatter configuration for tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TickLabelConfig {
    pub locale: AxisLabelLocale,
    pub policy: TickLabelPolicy,
}

/// Initial configuration for an [`crate::api::AxisModel`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisModelConfig {
    pub auto_scale: bool,
    pub tuning: AxisScaleTuning,
    pub label: TickLabelConfig,
}

impl Default for AxisModelConfig {
    fn default() -> Self {
        Self {
            auto_scale: true,
            tuning: AxisScaleTuning::default(),
            label: TickLabelConfig::default(),
        }
    }
}

impl AxisModelConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_auto_scale(mut self, auto_scale: bool) -> Self {
        self.auto_scale = auto_scale;
        self
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: AxisScaleTuning) -> Self {
        self.tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: TickLabelConfig) -> Self {
        self.label = label;
        self
    }
}
