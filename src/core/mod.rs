pub mod mapper;
pub mod nice;
pub mod scale;
pub mod ticks;

pub use mapper::AxisMapper;
pub use nice::nice_number;
pub use scale::{AxisScale, AxisScaleTuning};
pub use ticks::{Tick, TickKind, TickWalk};
