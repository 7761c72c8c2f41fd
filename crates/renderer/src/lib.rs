//! Display-sink implementations the window draws from.
//!
//! Both types only store what the refresh loop hands them; the drawing
//! itself lives in `aqua-widgets`.

pub mod chart;
pub mod log;

pub use chart::{Axis, ChartModel, Panel};
pub use log::LogBuffer;
