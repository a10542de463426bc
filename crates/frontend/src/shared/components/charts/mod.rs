//! Small SVG charts for the dashboard, with the geometry kept in plain
//! functions so it can be tested without a DOM.

pub mod bar_chart;
pub mod donut_chart;
pub mod horizontal_bar_chart;

pub use bar_chart::BarChart;
pub use donut_chart::DonutChart;
pub use horizontal_bar_chart::HorizontalBarChart;

/// `count / max` in `0.0..=1.0`; zero when `max` is zero.
pub fn bar_ratio(count: usize, max: usize) -> f64 {
    if max == 0 {
        0.0
    } else {
        (count as f64 / max as f64).clamp(0.0, 1.0)
    }
}

/// One arc of a donut drawn as a dashed circle stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    /// Visible length of the stroke.
    pub dash: f64,
    /// Offset along the circumference where the arc starts.
    pub offset: f64,
    /// Share of the total, 0..=100.
    pub percent: f64,
}

impl DonutSegment {
    pub fn dasharray(&self, circumference: f64) -> String {
        format!("{:.3} {:.3}", self.dash, (circumference - self.dash).max(0.0))
    }

    /// SVG `stroke-dashoffset` (negative to walk clockwise from the start).
    pub fn dashoffset(&self) -> String {
        format!("{:.3}", -self.offset)
    }
}

pub fn circumference(radius: f64) -> f64 {
    2.0 * std::f64::consts::PI * radius
}

/// Splits the circle of `radius` into consecutive arcs proportional to
/// `counts`. An all-zero input yields zero-length arcs.
pub fn donut_segments(counts: &[usize], radius: f64) -> Vec<DonutSegment> {
    let total: usize = counts.iter().sum();
    let full = circumference(radius);
    let mut offset = 0.0;
    counts
        .iter()
        .map(|&count| {
            let share = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            };
            let segment = DonutSegment {
                dash: share * full,
                offset,
                percent: share * 100.0,
            };
            offset += segment.dash;
            segment
        })
        .collect()
}
