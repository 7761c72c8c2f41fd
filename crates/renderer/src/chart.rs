use aqua_core::{ChartSink, Series};

/// Inclusive axis domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub min: f32,
    pub max: f32,
}

impl Axis {
    /// Build a domain, widening an empty or inverted one to unit width so
    /// projection never divides by zero.
    pub fn new(min: f32, max: f32) -> Self {
        if max > min {
            Self { min, max }
        } else {
            Self { min, max: min + 1.0 }
        }
    }

    /// Position of `value` along the axis in `[0, 1]` (unclamped).
    pub fn fraction(&self, value: f32) -> f32 {
        (value - self.min) / (self.max - self.min)
    }
}

/// One line-chart panel: a titled series of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title:  &'static str,
    pub legend: &'static str,
    pub points: Vec<(f32, f32)>,
}

impl Panel {
    fn new(title: &'static str, legend: &'static str) -> Self {
        Self { title, legend, points: Vec::new() }
    }
}

/// Two stacked panels (CPU over memory) sharing one x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub cpu:    Panel,
    pub memory: Panel,
    pub x:      Axis,
    pub y:      Axis,
    /// Categorical labels; `labels[i]` belongs to x = i.
    pub labels: Vec<String>,
}

impl Default for ChartModel {
    fn default() -> Self {
        Self {
            cpu:    Panel::new("CPU Usage (%)", "CPU Usage"),
            memory: Panel::new("Memory Usage (%)", "Memory Usage"),
            x:      Axis::new(0.0, 1.0),
            y:      Axis::new(0.0, 100.0),
            labels: Vec::new(),
        }
    }
}

impl ChartModel {
    pub fn panel(&self, series: Series) -> &Panel {
        match series {
            Series::Cpu    => &self.cpu,
            Series::Memory => &self.memory,
        }
    }

    /// Tick positions paired with their labels.
    pub fn ticks(&self) -> impl Iterator<Item = (f32, &str)> {
        self.labels.iter().enumerate().map(|(i, l)| (i as f32, l.as_str()))
    }
}

impl ChartSink for ChartModel {
    fn set_series(&mut self, series: Series, xs: &[f32], ys: &[f32]) {
        let panel = match series {
            Series::Cpu    => &mut self.cpu,
            Series::Memory => &mut self.memory,
        };
        panel.points = xs.iter().copied().zip(ys.iter().copied()).collect();
    }

    fn set_x_range(&mut self, min: f32, max: f32) {
        self.x = Axis::new(min, max);
    }

    fn set_y_range(&mut self, min: f32, max: f32) {
        self.y = Axis::new(min, max);
    }

    fn set_tick_labels(&mut self, labels: &[String]) {
        self.labels = labels.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_are_zipped_into_points() {
        let mut chart = ChartModel::default();
        chart.set_series(Series::Memory, &[0.0, 1.0], &[40.0, 50.0]);
        assert_eq!(chart.panel(Series::Memory).points, vec![(0.0, 40.0), (1.0, 50.0)]);
        assert!(chart.panel(Series::Cpu).points.is_empty());
    }

    #[test]
    fn degenerate_range_is_widened() {
        let mut chart = ChartModel::default();
        chart.set_x_range(0.0, 0.0);
        assert_eq!(chart.x, Axis { min: 0.0, max: 1.0 });
        assert_eq!(chart.x.fraction(0.0), 0.0);
        assert!(chart.x.fraction(0.5).is_finite());
    }

    #[test]
    fn fraction_maps_domain_to_unit() {
        let y = Axis::new(0.0, 100.0);
        assert_eq!(y.fraction(25.0), 0.25);
        assert_eq!(y.fraction(100.0), 1.0);
    }

    #[test]
    fn ticks_follow_labels() {
        let mut chart = ChartModel::default();
        chart.set_tick_labels(&["10:00:00".to_string(), "10:00:01".to_string()]);
        let ticks: Vec<_> = chart.ticks().collect();
        assert_eq!(ticks, vec![(0.0, "10:00:00"), (1.0, "10:00:01")]);
    }
}
