//! SVG geometry for the dashboard and review charts.
//!
//! Components only map these coordinates and path strings into `<svg>`
//! elements; all scaling happens here so it can be tested natively.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::f64::consts::PI;

use assessments::RiskLevel;
use assessments::stats::RiskDistribution;

/// Drawing area with padding reserved for axes and labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

pub const LINE_FRAME: Frame = Frame {
    width: 600.0,
    height: 260.0,
    pad_left: 44.0,
    pad_right: 16.0,
    pad_top: 16.0,
    pad_bottom: 36.0,
};

impl Frame {
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        (self.width - self.pad_left - self.pad_right).max(0.0)
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        (self.height - self.pad_top - self.pad_bottom).max(0.0)
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.height - self.pad_bottom
    }

    /// X of the `index`th of `count` evenly spaced points. A single point sits
    /// in the middle.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.pad_left + self.plot_width() / 2.0;
        }
        self.pad_left + self.plot_width() * index as f64 / (count - 1) as f64
    }

    /// Y of `value` within `bounds`, growing upward.
    #[must_use]
    pub fn y_at(&self, value: f64, bounds: (f64, f64)) -> f64 {
        let (min, max) = bounds;
        let span = max - min;
        let ratio = if span > 0.0 { (value - min) / span } else { 0.5 };
        self.bottom() - self.plot_height() * ratio.clamp(0.0, 1.0)
    }
}

/// Min and max of `values`, widened so a flat series still has height.
#[must_use]
pub fn value_bounds(values: &[f64]) -> (f64, f64) {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min > max {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    (min, max)
}

/// Screen coordinates for a series.
#[must_use]
pub fn points(frame: &Frame, values: &[f64], bounds: (f64, f64)) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (frame.x_at(i, values.len()), frame.y_at(*v, bounds)))
        .collect()
}

/// `M x,y L x,y ...` path through the points.
#[must_use]
pub fn line_path(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| format!("{}{x:.1},{y:.1}", if i == 0 { "M" } else { " L" }))
        .collect()
}

/// `count` evenly spaced axis values from min to max.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ticks(bounds: (f64, f64), count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![bounds.0];
    }
    let step = (bounds.1 - bounds.0) / (count - 1) as f64;
    (0..count).map(|i| bounds.0 + step * i as f64).collect()
}

/// One wedge of the risk pie.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub level: RiskLevel,
    pub count: usize,
    pub percent: u32,
    pub path: String,
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Wedges for non-empty risk bands, clockwise from twelve o'clock.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn pie_slices(dist: &RiskDistribution, cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let total = dist.total();
    if total == 0 {
        return Vec::new();
    }
    let mut start = -PI / 2.0;
    let mut slices = Vec::new();
    for level in RiskLevel::ALL {
        let count = dist.count(level);
        if count == 0 {
            continue;
        }
        let fraction = count as f64 / total as f64;
        let end = start + fraction * 2.0 * PI;
        let path = if count == total {
            format!(
                "M{:.1},{cy:.1} A{r:.1},{r:.1} 0 1,1 {:.1},{cy:.1} A{r:.1},{r:.1} 0 1,1 {:.1},{cy:.1} Z",
                cx - r,
                cx + r,
                cx - r
            )
        } else {
            let (x1, y1) = polar(cx, cy, r, start);
            let (x2, y2) = polar(cx, cy, r, end);
            let large = i32::from(fraction > 0.5);
            format!("M{cx:.1},{cy:.1} L{x1:.1},{y1:.1} A{r:.1},{r:.1} 0 {large},1 {x2:.1},{y2:.1} Z")
        };
        slices.push(PieSlice { level, count, percent: (fraction * 100.0).round() as u32, path });
        start = end;
    }
    slices
}

/// Height of a bar for `value` on a 0..=`max` axis.
#[must_use]
pub fn bar_height(value: f64, max: f64, plot_height: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    plot_height * (value / max).clamp(0.0, 1.0)
}
