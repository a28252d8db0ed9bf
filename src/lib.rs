//! axis-scale-rs: nice-number axis auto-scaling and tick generation.
//!
//! This crate provides the toolkit-neutral numeric core a chart renderer
//! needs to place human-readable axis ticks: nice-number rounding,
//! auto-scaled bounds and tick spacing, a drift-free tick walk, and pixel
//! projection, plus a thin model/formatting layer for hosts that want
//! recompute-on-change wiring.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{AxisEvent, AxisModel, AxisModelConfig};
pub use error::{AxisError, AxisResult};
