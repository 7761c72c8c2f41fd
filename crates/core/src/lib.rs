pub mod error;
pub mod event;
pub mod sink;
pub mod state;

pub use error::{AquaError, Result};
pub use event::{DetailKind, Message};
pub use sink::{ChartSink, Series, TextSink};
pub use state::{
    CpuFrequency, DiskUsage, FallbackCause, HostInfo, MemoryUsage, Sample, SensorGroup,
    Temperature,
};
