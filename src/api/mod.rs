pub mod axis_config;
pub mod label_format;
pub mod model;

pub use axis_config::{AxisLabelLocale, AxisModelConfig, TickLabelConfig, TickLabelPolicy};
pub use label_format::format_tick_label;
pub use model::{AxisEvent, AxisModel, AxisSnapshot};
