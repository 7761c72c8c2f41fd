use chrono::NaiveTime;
use std::fmt;

const GIB: f64 = (1u64 << 30) as f64;

/// One instantaneous reading of every tracked metric.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Local wall-clock time the sample was taken (second resolution).
    pub timestamp: NaiveTime,
    /// Global CPU usage (0.0 – 100.0).
    pub cpu_percent: f32,
    /// Used memory (0.0 – 100.0).
    pub mem_percent: f32,
    /// Used space on the monitored mount (0.0 – 100.0).
    pub disk_percent: f32,
    pub temperature: Temperature,
}

impl Sample {
    /// `HH:MM:SS` label used for log lines and chart ticks.
    pub fn clock_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// CPU temperature as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Temperature {
    /// Read from a hardware sensor, in °C.
    Sensor(f32),
    /// Derived from CPU load because no sensor value could be used.
    Synthetic { celsius: f32, cause: FallbackCause },
}

/// Why a synthetic temperature was substituted.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackCause {
    /// The provider reported no sensor with a reading.
    NoSensors,
    /// The sensor read returned an error.
    ReadFailed(String),
}

impl Temperature {
    /// `45 + (cpu / 100) * 30`: keeps the display loosely tied to load.
    pub fn synthetic(cpu_percent: f32, cause: FallbackCause) -> Self {
        Temperature::Synthetic {
            celsius: 45.0 + (cpu_percent / 100.0) * 30.0,
            cause,
        }
    }

    pub fn celsius(&self) -> f32 {
        match self {
            Temperature::Sensor(c) => *c,
            Temperature::Synthetic { celsius, .. } => *celsius,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, Temperature::Synthetic { .. })
    }
}

impl fmt::Display for FallbackCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackCause::NoSensors     => f.write_str("no temperature sensors"),
            FallbackCause::ReadFailed(e) => write!(f, "sensor read failed: {e}"),
        }
    }
}

/// System memory, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemoryUsage {
    pub total:     u64,
    pub available: u64,
    pub used:      u64,
    /// `(total - available) / total`, as a percentage rounded to 0.1.
    pub percent:   f32,
}

impl MemoryUsage {
    pub fn new(total: u64, available: u64, used: u64) -> Self {
        Self {
            total,
            available,
            used,
            percent: percent_of(total.saturating_sub(available), total),
        }
    }
}

/// Space on one mounted filesystem, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiskUsage {
    pub total:   u64,
    pub used:    u64,
    /// Space available to unprivileged users.
    pub free:    u64,
    pub percent: f32,
}

impl DiskUsage {
    /// Build from the two figures filesystems report: capacity and available space.
    ///
    /// Blocks reserved for root count as used, so on filesystems with a
    /// reserve (ext4 keeps 5% by default) the percentage reads a few points
    /// higher than `df`, which divides by `used + available` instead.
    pub fn from_space(total: u64, available: u64) -> Self {
        let used = total.saturating_sub(available);
        Self {
            total,
            used,
            free: available,
            percent: percent_of(used, total),
        }
    }
}

/// CPU clock speeds in MHz.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CpuFrequency {
    pub current: f64,
    pub min:     f64,
    pub max:     f64,
}

/// Temperature readings of one hardware monitor chip (e.g. `coretemp`).
#[derive(Debug, Clone, PartialEq)]
pub struct SensorGroup {
    pub name:     String,
    /// Readings in °C, in the order the chip reports them.
    pub readings: Vec<f32>,
}

/// Static description of the host, read once at startup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostInfo {
    pub os:           String,
    pub os_version:   String,
    pub architecture: String,
    pub processor:    String,
    pub hostname:     String,
    pub ip_address:   String,
    /// Total RAM in bytes.
    pub ram_total:    u64,
}

impl HostInfo {
    /// Label/value pairs in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("OS",           self.os.clone()),
            ("OS Version",   self.os_version.clone()),
            ("Architecture", self.architecture.clone()),
            ("Processor",    self.processor.clone()),
            ("Hostname",     self.hostname.clone()),
            ("IP Address",   self.ip_address.clone()),
            ("RAM Size",     format!("{:.2} GB", gib(self.ram_total))),
        ]
    }
}

/// Bytes → GiB as a float, the unit every detail report uses.
pub fn gib(bytes: u64) -> f64 {
    bytes as f64 / GIB
}

fn percent_of(part: u64, whole: u64) -> f32 {
    if whole == 0 {
        return 0.0;
    }
    let pct = part as f64 / whole as f64 * 100.0;
    ((pct * 10.0).round() / 10.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_temperature_tracks_cpu() {
        let t = Temperature::synthetic(80.0, FallbackCause::NoSensors);
        assert!((t.celsius() - 69.0).abs() < 1e-4);
        assert!(t.is_synthetic());

        let idle = Temperature::synthetic(0.0, FallbackCause::ReadFailed("eio".into()));
        assert_eq!(idle.celsius(), 45.0);
    }

    #[test]
    fn disk_usage_from_space() {
        let d = DiskUsage::from_space(1000, 250);
        assert_eq!(d.used, 750);
        assert_eq!(d.free, 250);
        assert_eq!(d.percent, 75.0);
    }

    #[test]
    fn reserved_blocks_count_as_used() {
        // 100 GiB filesystem, 5 GiB root reserve, 45 GiB written.
        let d = DiskUsage::from_space(100 << 30, 50 << 30);
        assert_eq!(d.used, 50 << 30);
        assert_eq!(d.percent, 50.0);
    }

    #[test]
    fn memory_percent_uses_available() {
        let m = MemoryUsage::new(8 << 30, 6 << 30, 1 << 30);
        assert_eq!(m.percent, 25.0);
    }

    #[test]
    fn zero_capacity_is_zero_percent() {
        assert_eq!(DiskUsage::from_space(0, 0).percent, 0.0);
        assert_eq!(MemoryUsage::new(0, 0, 0).percent, 0.0);
    }

    #[test]
    fn clock_label_is_hms() {
        let s = Sample {
            timestamp:    NaiveTime::from_hms_opt(9, 5, 7).unwrap(),
            cpu_percent:  0.0,
            mem_percent:  0.0,
            disk_percent: 0.0,
            temperature:  Temperature::Sensor(40.0),
        };
        assert_eq!(s.clock_label(), "09:05:07");
    }

    #[test]
    fn host_rows_format_ram_in_gb() {
        let info = HostInfo { ram_total: 16 << 30, ..HostInfo::default() };
        let rows = info.rows();
        assert_eq!(rows.last().unwrap(), &("RAM Size", "16.00 GB".to_string()));
    }
}
