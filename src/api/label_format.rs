use crate::api::axis_config::{AxisLabelLocale, TickLabelConfig, TickLabelPolicy};

const MAX_ADAPTIVE_DECIMALS: usize = 12;

/// Formats a tick value for display.
///
/// `major_step` drives the decimal count under the adaptive policy.
#[must_use]
pub fn format_tick_label(value: f64, major_step: f64, config: TickLabelConfig) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    let precision = match config.policy {
        TickLabelPolicy::FixedDecimals { precision } => usize::from(precision),
        TickLabelPolicy::Adaptive => adaptive_precision(major_step),
    };
    format_axis_decimal(value, precision, config.locale)
}

fn adaptive_precision(major_step: f64) -> usize {
    if !major_step.is_finite() || major_step <= 0.0 || major_step >= 1.0 {
        return 0;
    }
    let places = (-major_step.log10()).ceil() as usize;
    places.min(MAX_ADAPTIVE_DECIMALS)
}

fn format_axis_decimal(value: f64, precision: usize, locale: AxisLabelLocale) -> String {
    let text = format!("{value:.precision$}");
    match locale {
        AxisLabelLocale::EnUs => text,
        AxisLabelLocale::EsEs => text.replace('.', ","),
    }
}
