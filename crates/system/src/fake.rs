//! Scripted provider and recording sinks for unit tests.

use crate::provider::MetricsProvider;
use aqua_core::{
    AquaError, ChartSink, CpuFrequency, DiskUsage, HostInfo, MemoryUsage, Result, SensorGroup,
    Series, TextSink,
};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

/// What `sensors_temperatures` returns.
#[derive(Debug, Clone)]
pub enum Sensors {
    Groups(Vec<SensorGroup>),
    Fail,
}

/// Plays back queued CPU values (repeating the last one) and fixed
/// memory, disk and sensor figures.
#[derive(Debug, Clone)]
pub struct FakeProvider {
    cpu:           VecDeque<f32>,
    last_cpu:      f32,
    pub mem:       MemoryUsage,
    pub disk:      DiskUsage,
    pub disk_path: PathBuf,
    pub sensors:   Sensors,
    pub freq:      CpuFrequency,
    pub fail_cpu:  bool,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            cpu:       VecDeque::new(),
            last_cpu:  0.0,
            mem:       MemoryUsage::new(16 << 30, 12 << 30, 4 << 30),
            disk:      DiskUsage::from_space(500 << 30, 125 << 30),
            disk_path: PathBuf::from("/"),
            sensors:   Sensors::Groups(vec![SensorGroup {
                name:     "coretemp".into(),
                readings: vec![48.0, 47.0],
            }]),
            freq:      CpuFrequency { current: 2400.0, min: 800.0, max: 4200.0 },
            fail_cpu:  false,
        }
    }

    pub fn with_cpu(mut self, values: impl IntoIterator<Item = f32>) -> Self {
        self.cpu.extend(values);
        self
    }

    /// Fix the memory percentage, keeping the byte figures.
    pub fn with_mem(mut self, percent: f32) -> Self {
        self.mem.percent = percent;
        self
    }

    pub fn with_sensors(mut self, sensors: Sensors) -> Self {
        self.sensors = sensors;
        self
    }
}

impl MetricsProvider for FakeProvider {
    fn cpu_percent(&mut self) -> Result<f32> {
        if self.fail_cpu {
            return Err(AquaError::System("cpu counters unavailable".into()));
        }
        if let Some(v) = self.cpu.pop_front() {
            self.last_cpu = v;
        }
        Ok(self.last_cpu)
    }

    fn virtual_memory(&mut self) -> Result<MemoryUsage> {
        Ok(self.mem)
    }

    fn disk_usage(&mut self, path: &Path) -> Result<DiskUsage> {
        if path == self.disk_path {
            Ok(self.disk)
        } else {
            Err(AquaError::System(format!("no filesystem mounted at '{}'", path.display())))
        }
    }

    fn sensors_temperatures(&mut self) -> Result<Vec<SensorGroup>> {
        match &self.sensors {
            Sensors::Groups(groups) => Ok(groups.clone()),
            Sensors::Fail => Err(AquaError::Sensor("permission denied".into())),
        }
    }

    fn cpu_freq(&mut self) -> Result<CpuFrequency> {
        Ok(self.freq)
    }

    fn cpu_count(&mut self, logical: bool) -> Option<usize> {
        Some(if logical { 8 } else { 4 })
    }

    fn host_info(&mut self) -> HostInfo {
        HostInfo {
            os:        "Linux".into(),
            hostname:  "aquarium".into(),
            ram_total: self.mem.total,
            ..HostInfo::default()
        }
    }
}

/// Chart sink that keeps whatever it was last given.
#[derive(Debug, Default)]
pub struct RecordingChart {
    pub series:  HashMap<Series, (Vec<f32>, Vec<f32>)>,
    pub x_range: Option<(f32, f32)>,
    pub y_range: Option<(f32, f32)>,
    pub labels:  Vec<String>,
}

impl ChartSink for RecordingChart {
    fn set_series(&mut self, series: Series, xs: &[f32], ys: &[f32]) {
        self.series.insert(series, (xs.to_vec(), ys.to_vec()));
    }

    fn set_x_range(&mut self, min: f32, max: f32) {
        self.x_range = Some((min, max));
    }

    fn set_y_range(&mut self, min: f32, max: f32) {
        self.y_range = Some((min, max));
    }

    fn set_tick_labels(&mut self, labels: &[String]) {
        self.labels = labels.to_vec();
    }
}

/// Text sink that keeps every line and counts scroll requests.
#[derive(Debug, Default)]
pub struct RecordingLog {
    pub lines:   Vec<String>,
    pub scrolls: usize,
}

impl TextSink for RecordingLog {
    fn append_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn scroll_to_end(&mut self) {
        self.scrolls += 1;
    }
}
