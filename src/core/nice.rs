use crate::error::{AxisError, AxisResult};

/// Rounds a raw span to a "nice" value of the form `{1, 2, 5, 10} * 10^k`.
///
/// `round` selects the mapping: `true` picks the nice fraction closest to
/// the input, `false` picks the smallest nice fraction that covers it
/// (ceiling mode), so the result is always `>= range`.
pub fn nice_number(range: f64, round: bool) -> AxisResult<f64> {
    if !range.is_finite() || range <= 0.0 {
        return Err(AxisError::InvalidSpan { span: range });
    }

    let exponent = range.log10().floor();
    let fraction = range / 10_f64.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    let nice = nice_fraction * 10_f64.powf(exponent);
    if !nice.is_finite() {
        return Err(AxisError::InvalidSpan { span: range });
    }
    Ok(nice)
}
