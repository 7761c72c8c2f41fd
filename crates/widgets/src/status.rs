use aqua_core::Message;
use aqua_system::TickReport;
use aqua_theme::Theme;
use iced::{
    widget::{column, text},
    Element,
};

/// Disk usage and temperature labels under the charts.
///
/// Shows `N/A` until the first refresh cycle completes.
#[derive(Debug, Default)]
pub struct StatusWidget;

impl StatusWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, last: Option<&TickReport>, theme: &'a Theme) -> Element<'a, Message> {
        let (disk, temp) = labels(last);
        let accent = theme.accent.to_iced();
        let size = theme.font_size + 2.0;

        column![
            text(disk).size(size).color(accent),
            text(temp).size(size).color(accent),
        ]
        .spacing(theme.gap as f32 / 2.0)
        .into()
    }
}

/// `(disk, temperature)` label text for the latest cycle.
pub fn labels(last: Option<&TickReport>) -> (String, String) {
    match last {
        Some(r) => (
            format!("Disk Usage: {:.1}%", r.sample.disk_percent),
            format!(
                "CPU Temperature: {:.1} °C, Avg CPU: {:.1}%",
                r.sample.temperature.celsius(),
                r.avg_cpu
            ),
        ),
        None => ("Disk Usage: N/A".to_string(), "CPU Temperature: N/A".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqua_core::{FallbackCause, Sample, Temperature};

    #[test]
    fn placeholder_before_first_tick() {
        let (disk, temp) = labels(None);
        assert_eq!(disk, "Disk Usage: N/A");
        assert_eq!(temp, "CPU Temperature: N/A");
    }

    #[test]
    fn labels_from_report() {
        let report = TickReport {
            sample: Sample {
                timestamp:    chrono::NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                cpu_percent:  80.0,
                mem_percent:  30.0,
                disk_percent: 61.3,
                temperature:  Temperature::synthetic(80.0, FallbackCause::NoSensors),
            },
            avg_cpu: 42.04,
            avg_mem: 30.0,
        };
        let (disk, temp) = labels(Some(&report));
        assert_eq!(disk, "Disk Usage: 61.3%");
        assert_eq!(temp, "CPU Temperature: 69.0 °C, Avg CPU: 42.0%");
    }
}
