pub mod actions;
pub mod chart;
pub mod host;
pub mod log;
pub mod panel;
pub mod status;

pub use actions::ActionsWidget;
pub use chart::ChartWidget;
pub use host::HostWidget;
pub use log::LogWidget;
pub use panel::panel;
pub use status::StatusWidget;
