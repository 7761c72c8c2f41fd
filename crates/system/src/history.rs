use aqua_core::{Sample, Series};
use chrono::NaiveTime;
use std::collections::VecDeque;

/// Default number of samples kept for charts and rolling averages.
pub const DEFAULT_CAPACITY: usize = 20;

/// Rolling window of the most recent samples, kept as three parallel series.
///
/// All three sequences always have the same length, never more than
/// `capacity`, oldest first.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    timestamps: VecDeque<NaiveTime>,
    cpu:        VecDeque<f32>,
    mem:        VecDeque<f32>,
    capacity:   usize,
}

impl HistoryBuffer {
    /// `capacity` is raised to 1 if zero.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            timestamps: VecDeque::with_capacity(capacity),
            cpu:        VecDeque::with_capacity(capacity),
            mem:        VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest if at capacity.
    pub fn record(&mut self, sample: &Sample) {
        if self.cpu.len() == self.capacity {
            self.timestamps.pop_front();
            self.cpu.pop_front();
            self.mem.pop_front();
        }
        self.timestamps.push_back(sample.timestamp);
        self.cpu.push_back(sample.cpu_percent);
        self.mem.push_back(sample.mem_percent);
    }

    pub fn len(&self) -> usize {
        self.cpu.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn values(&self, series: Series) -> &VecDeque<f32> {
        match series {
            Series::Cpu    => &self.cpu,
            Series::Memory => &self.mem,
        }
    }

    /// Average of all samples in the history window (0.0 when empty).
    pub fn average(&self, series: Series) -> f32 {
        let values = self.values(series);
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f32>() / values.len() as f32
    }

    /// `HH:MM:SS` labels, one per retained sample.
    pub fn labels(&self) -> Vec<String> {
        self.timestamps
            .iter()
            .map(|t| t.format("%H:%M:%S").to_string())
            .collect()
    }

    /// Chart x positions: `0, 1, …, len-1`.
    pub fn x_values(&self) -> Vec<f32> {
        (0..self.len()).map(|i| i as f32).collect()
    }
}

/// X-axis domain for `len` points.  Fewer than two points would give an empty
/// range, so the domain is clamped to `[0, 1]`.
pub fn x_domain(len: usize) -> (f32, f32) {
    if len < 2 {
        (0.0, 1.0)
    } else {
        (0.0, (len - 1) as f32)
    }
}
