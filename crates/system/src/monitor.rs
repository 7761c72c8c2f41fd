use crate::{
    detail,
    history::{x_domain, HistoryBuffer},
    provider::MetricsProvider,
    sampler,
};
use aqua_core::{AquaError, ChartSink, DetailKind, HostInfo, Result, Sample, Series, TextSink};
use chrono::{Local, NaiveTime, Timelike};
use std::path::PathBuf;
use tracing::{debug, error};

/// Where the refresh loop is within one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the next timer tick.
    Idle,
    Sampling,
    Recording,
    Rendering,
    /// A cycle failed; no further cycles run.
    Stopped,
}

/// Result of one completed refresh cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub sample:  Sample,
    pub avg_cpu: f32,
    pub avg_mem: f32,
}

impl TickReport {
    /// The line appended to the text log for this cycle.
    pub fn log_line(&self) -> String {
        let s = &self.sample;
        format!(
            "[{}] CPU: {:.1}% (Avg: {:.1}%) | Memory: {:.1}% (Avg: {:.1}%) | Disk: {:.1}% | Temp: {:.1}°C",
            s.clock_label(),
            s.cpu_percent,
            self.avg_cpu,
            s.mem_percent,
            self.avg_mem,
            s.disk_percent,
            s.temperature.celsius(),
        )
    }
}

/// Owns everything the refresh loop mutates: the provider, the history
/// and both display sinks.
///
/// One call to [`Monitor::tick`] runs a full `Sampling → Recording →
/// Rendering` cycle.  Scheduling the next tick is the caller's job.
pub struct Monitor<P, C, T> {
    provider:  P,
    history:   HistoryBuffer,
    chart:     C,
    log:       T,
    disk_path: PathBuf,
    phase:     Phase,
    /// Phase the cycle was in when the monitor stopped.
    failed_in: Option<Phase>,
    last:      Option<TickReport>,
}

impl<P, C, T> Monitor<P, C, T>
where
    P: MetricsProvider,
    C: ChartSink,
    T: TextSink,
{
    pub fn new(
        provider: P,
        mut chart: C,
        log: T,
        history_len: usize,
        disk_path: impl Into<PathBuf>,
    ) -> Self {
        chart.set_x_range(0.0, 1.0);
        chart.set_y_range(0.0, 100.0);

        Self {
            provider,
            history: HistoryBuffer::new(history_len),
            chart,
            log,
            disk_path: disk_path.into(),
            phase: Phase::Idle,
            failed_in: None,
            last: None,
        }
    }

    /// Run one cycle stamped with the current local time.
    pub fn tick(&mut self) -> Result<&TickReport> {
        let now = Local::now().time();
        self.tick_at(now.with_nanosecond(0).unwrap_or(now))
    }

    /// Run one cycle stamped with `now`.
    ///
    /// Any failure stops the monitor for good: later calls return an error
    /// without touching the provider.
    pub fn tick_at(&mut self, now: NaiveTime) -> Result<&TickReport> {
        if self.phase == Phase::Stopped {
            return Err(AquaError::System("refresh loop has stopped".into()));
        }

        self.phase = Phase::Sampling;
        let sample = match sampler::sample(&mut self.provider, &self.disk_path, now) {
            Ok(s) => s,
            Err(e) => return Err(self.stop(e)),
        };

        self.phase = Phase::Recording;
        self.history.record(&sample);
        let report = TickReport {
            avg_cpu: self.history.average(Series::Cpu),
            avg_mem: self.history.average(Series::Memory),
            sample,
        };

        self.phase = Phase::Rendering;
        self.render(&report);
        debug!(
            "tick {}: cpu={:.1} mem={:.1} n={}",
            report.sample.clock_label(),
            report.sample.cpu_percent,
            report.sample.mem_percent,
            self.history.len()
        );

        self.phase = Phase::Idle;
        Ok(&*self.last.insert(report))
    }

    fn stop(&mut self, e: AquaError) -> AquaError {
        error!("Refresh failed during {:?}; loop stopped: {e}", self.phase);
        self.failed_in = Some(self.phase);
        self.phase = Phase::Stopped;
        e
    }

    fn render(&mut self, report: &TickReport) {
        self.log.append_line(&report.log_line());
        self.log.scroll_to_end();

        let xs = self.history.x_values();
        for series in [Series::Cpu, Series::Memory] {
            let ys: Vec<f32> = self.history.values(series).iter().copied().collect();
            self.chart.set_series(series, &xs, &ys);
        }

        let (min, max) = x_domain(self.history.len());
        self.chart.set_x_range(min, max);
        self.chart.set_y_range(0.0, 100.0);
        self.chart.set_tick_labels(&self.history.labels());
    }

    /// Append the on-demand report for `kind` to the text log.
    pub fn detail(&mut self, kind: DetailKind) -> Result<()> {
        detail::report(kind, &mut self.provider, &self.disk_path, &mut self.log)
    }

    pub fn host_info(&mut self) -> HostInfo {
        self.provider.host_info()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Stopped
    }

    /// The phase a failed cycle was in, once the monitor has stopped.
    pub fn failed_in(&self) -> Option<Phase> {
        self.failed_in
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// The most recent successful cycle.
    pub fn last_report(&self) -> Option<&TickReport> {
        self.last.as_ref()
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    pub fn log(&self) -> &T {
        &self.log
    }

    /// Resize or otherwise adjust the text sink (e.g. on config reload).
    pub fn log_mut(&mut self) -> &mut T {
        &mut self.log
    }
}
