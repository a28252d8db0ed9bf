use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use smallvec::SmallVec;

use crate::core::scale::AxisScale;
use crate::error::{AxisError, AxisResult};

/// Decimal places retained for exact-multiple tests during the walk.
const TICK_DECIMAL_PLACES: u32 = 12;

/// Upper bound on grid positions for a single walk.
const MAX_WALK_TICKS: u64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Labeled primary interval: the position is an exact multiple of the
    /// major step.
    Major,
    /// Intermediate subdivision at half-major positions, emitted only when
    /// the minor step splits the major step into an even integer count.
    Medium,
    /// Fine unlabeled subdivision.
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub kind: TickKind,
}

/// Iterator over grid positions from `nice_min` to `nice_max` in minor-step
/// increments.
///
/// Positions are produced as `nice_min + index * minor_step` in decimal
/// arithmetic, so no floating-point error accumulates across long walks.
/// Major/medium classification uses decimal remainder tests quantized to
/// `TICK_DECIMAL_PLACES`; raw floating-point modulo drifts after a few
/// hundred iterations and is never used here.
#[derive(Debug, Clone)]
pub struct TickWalk {
    start: Decimal,
    end: Decimal,
    minor_step: Decimal,
    major_step: Decimal,
    half_major: Option<Decimal>,
    index: u64,
    last_index: u64,
}

impl TickWalk {
    pub(crate) fn new(scale: AxisScale) -> AxisResult<Self> {
        let start = quantized_decimal(scale.nice_min(), "nice min")?;
        let end = quantized_decimal(scale.nice_max(), "nice max")?;
        let minor_step = quantized_decimal(scale.minor_step(), "minor step")?;
        let major_step = quantized_decimal(scale.major_step(), "major step")?;

        if minor_step <= Decimal::ZERO || major_step <= Decimal::ZERO {
            return Err(AxisError::InvalidData(
                "tick steps must remain positive after decimal quantization".to_owned(),
            ));
        }
        if end < start {
            return Err(AxisError::InvalidRange {
                min: scale.nice_min(),
                max: scale.nice_max(),
            });
        }

        let last_index = ((end - start) / minor_step)
            .floor()
            .to_u64()
            .ok_or_else(|| AxisError::InvalidData("tick walk length overflow".to_owned()))?;
        if last_index > MAX_WALK_TICKS {
            return Err(AxisError::InvalidData(format!(
                "tick walk would emit {last_index} positions (limit {MAX_WALK_TICKS})"
            )));
        }

        // Medium marks exist only when the minor step splits the major step
        // into an even integer count; the odd five-per-major layout and
        // non-integer ratios emit none.
        let ratio = major_step / minor_step;
        let half_major = if ratio.fract().is_zero() && (ratio % Decimal::TWO).is_zero() {
            Some(major_step / Decimal::TWO)
        } else {
            None
        };

        Ok(Self {
            start,
            end,
            minor_step,
            major_step,
            half_major,
            index: 0,
            last_index,
        })
    }

    /// Exact major-step multiples within the walked range, independent of
    /// the minor grid.
    ///
    /// Fixed-bounds scales may place majors off the minor grid; label layout
    /// uses this list rather than filtering the walk.
    #[must_use]
    pub fn major_positions(&self) -> SmallVec<[f64; 16]> {
        let mut positions = SmallVec::new();

        let first = (self.start / self.major_step).ceil().to_i64();
        let last = (self.end / self.major_step).floor().to_i64();
        let (Some(first), Some(last)) = (first, last) else {
            return positions;
        };

        for multiple in first..=last {
            if let Some(value) = (self.major_step * Decimal::from(multiple)).to_f64() {
                positions.push(value);
            }
        }
        positions
    }
}

impl Iterator for TickWalk {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.index > self.last_index {
            return None;
        }

        let offset = self.minor_step * Decimal::from(self.index);
        let position = (self.start + offset).round_dp(TICK_DECIMAL_PLACES);
        self.index += 1;

        let Some(value) = position.to_f64() else {
            self.index = self.last_index + 1;
            return None;
        };

        let kind = if (position % self.major_step)
            .round_dp(TICK_DECIMAL_PLACES)
            .is_zero()
        {
            TickKind::Major
        } else if self.half_major.is_some_and(|half| {
            (position % half).round_dp(TICK_DECIMAL_PLACES).is_zero()
        }) {
            TickKind::Medium
        } else {
            TickKind::Minor
        };

        Some(Tick { value, kind })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last_index + 1).saturating_sub(self.index) as usize;
        (remaining, Some(remaining))
    }
}

fn quantized_decimal(value: f64, field_name: &str) -> AxisResult<Decimal> {
    let decimal = Decimal::from_f64(value).ok_or_else(|| {
        AxisError::InvalidData(format!("{field_name} cannot be represented as a decimal"))
    })?;
    Ok(decimal.round_dp(TICK_DECIMAL_PLACES))
}
