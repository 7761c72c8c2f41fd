/// The two series drawn by the chart sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Cpu,
    Memory,
}

/// A two-panel line chart.  Sinks only store what they are given;
/// all values are computed by the refresh loop.
pub trait ChartSink {
    /// Replace the points of one series.  `xs` and `ys` have equal length.
    fn set_series(&mut self, series: Series, xs: &[f32], ys: &[f32]);

    /// Set the x-axis domain of both panels.
    fn set_x_range(&mut self, min: f32, max: f32);

    /// Set the y-axis domain of both panels.
    fn set_y_range(&mut self, min: f32, max: f32);

    /// Categorical tick labels, one per x index.
    fn set_tick_labels(&mut self, labels: &[String]);
}

/// An append-only scrolling text log.
pub trait TextSink {
    fn append_line(&mut self, line: &str);

    /// Bring the newest line into view.
    fn scroll_to_end(&mut self);
}
