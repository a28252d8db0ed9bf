use serde::{Deserialize, Serialize};

use crate::core::scale::AxisScale;
use crate::error::{AxisError, AxisResult};

/// Projection of a nice axis range onto a pixel extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisMapper {
    nice_min: f64,
    nice_max: f64,
    extent_px: f64,
}

impl AxisMapper {
    pub fn new(scale: AxisScale, extent_px: f64) -> AxisResult<Self> {
        if !extent_px.is_finite() || extent_px <= 0.0 {
            return Err(AxisError::InvalidExtent { extent: extent_px });
        }

        Ok(Self {
            nice_min: scale.nice_min(),
            nice_max: scale.nice_max(),
            extent_px,
        })
    }

    #[must_use]
    pub fn extent_px(self) -> f64 {
        self.extent_px
    }

    #[must_use]
    /// Pixels spanned by one data unit on this axis.
    pub fn pixels_per_unit(self) -> f64 {
        self.extent_px / (self.nice_max - self.nice_min)
    }

    /// Maps a data value to a pixel offset from the nice minimum.
    ///
    /// Out-of-range values map beyond the extent; the renderer decides how
    /// to handle them.
    pub fn value_to_pixel(self, value: f64) -> AxisResult<f64> {
        if !value.is_finite() {
            return Err(AxisError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.nice_max - self.nice_min;
        let normalized = (value - self.nice_min) / span;
        Ok(normalized * self.extent_px)
    }

    pub fn pixel_to_value(self, pixel: f64) -> AxisResult<f64> {
        if !pixel.is_finite() {
            return Err(AxisError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.nice_max - self.nice_min;
        let normalized = pixel / self.extent_px;
        Ok(self.nice_min + normalized * span)
    }
}
