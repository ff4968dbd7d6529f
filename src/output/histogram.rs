//! SVG histogram rendering.
//!
//! Hand-assembled SVG, no charting dependency: bars over a linear time
//! axis, labeled axes, and optional minor ticks. The renderer is pure
//! string assembly; persisting the result is the svg writer's job.

use crate::aggregator::summary::Histogram;
use crate::utils::config::HISTOGRAM_BIN_WIDTH_SECS;
use chrono::Utc;
use log::info;
use std::fmt::Write;

const MARGIN_LEFT: usize = 70;
const MARGIN_RIGHT: usize = 30;
const MARGIN_TOP: usize = 30;
const MARGIN_BOTTOM: usize = 60;

/// Histogram rendering configuration
#[derive(Debug, Clone)]
pub struct HistogramConfig {
    pub width: usize,
    pub height: usize,
    /// Draw a minor x-axis tick every bin-width seconds
    pub minor_ticks: bool,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            minor_ticks: true,
        }
    }
}

impl HistogramConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minor_ticks(mut self, minor_ticks: bool) -> Self {
        self.minor_ticks = minor_ticks;
        self
    }
}

/// Render a histogram as an SVG document
///
/// **Public** - main entry point for histogram rendering
pub fn render_histogram(histogram: &Histogram, config: Option<&HistogramConfig>) -> String {
    let config = config.cloned().unwrap_or_default();

    info!(
        "Rendering histogram with {} bins ({}x{})",
        histogram.counts.len(),
        config.width,
        config.height
    );

    let bin_count = histogram.counts.len();
    let max_count = histogram.counts.iter().copied().max().unwrap_or(1).max(1);

    let plot_w = (config.width - MARGIN_LEFT - MARGIN_RIGHT) as f64;
    let plot_h = (config.height - MARGIN_TOP - MARGIN_BOTTOM) as f64;
    let bar_w = plot_w / bin_count as f64;
    let axis_y = (MARGIN_TOP as f64) + plot_h;

    let mut svg = String::new();

    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = config.width,
        h = config.height
    );
    let _ = write!(svg, "<!-- generated at {} -->", Utc::now().to_rfc3339());

    svg.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);
    svg.push_str(
        r#"<style>text { font: 12px sans-serif; fill: #333; } .axis { stroke: #333; stroke-width: 1; }</style>"#,
    );

    // Bars
    for (i, &count) in histogram.counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let bar_h = (count as f64 / max_count as f64) * plot_h;
        let x = MARGIN_LEFT as f64 + i as f64 * bar_w;
        let y = axis_y - bar_h;
        let _ = write!(
            svg,
            r##"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="#4878a8" stroke="white" stroke-width="0.5"/>"##,
            w = bar_w,
            h = bar_h
        );
    }

    // Axis lines
    let _ = write!(
        svg,
        r#"<line class="axis" x1="{left}" y1="{y}" x2="{right}" y2="{y}"/>"#,
        left = MARGIN_LEFT,
        right = MARGIN_LEFT as f64 + plot_w,
        y = axis_y
    );
    let _ = write!(
        svg,
        r#"<line class="axis" x1="{x}" y1="{top}" x2="{x}" y2="{y}"/>"#,
        x = MARGIN_LEFT,
        top = MARGIN_TOP,
        y = axis_y
    );

    // X tick labels at bin edges, thinned when there are many bins
    let label_step = (bin_count / 10).max(1);
    for i in (0..=bin_count).step_by(label_step) {
        let value = histogram.min + i as f64 * histogram.bin_width;
        let x = MARGIN_LEFT as f64 + i as f64 * bar_w;
        let _ = write!(
            svg,
            r#"<line class="axis" x1="{x:.1}" y1="{y0}" x2="{x:.1}" y2="{y1}"/>"#,
            y0 = axis_y,
            y1 = axis_y + 6.0
        );
        let _ = write!(
            svg,
            r#"<text x="{x:.1}" y="{ty:.1}" text-anchor="middle">{label}</text>"#,
            ty = axis_y + 20.0,
            label = format_tick(value)
        );
    }

    // Minor x ticks every bin-width seconds
    if config.minor_ticks && histogram.bin_width > 0.0 {
        let px_per_sec = bar_w / histogram.bin_width;
        let span_secs = bin_count as f64 * histogram.bin_width;
        let mut sec = HISTOGRAM_BIN_WIDTH_SECS;
        while sec < span_secs {
            let x = MARGIN_LEFT as f64 + sec * px_per_sec;
            let _ = write!(
                svg,
                r#"<line class="axis" x1="{x:.1}" y1="{y0}" x2="{x:.1}" y2="{y1}"/>"#,
                y0 = axis_y,
                y1 = axis_y + 3.0
            );
            sec += HISTOGRAM_BIN_WIDTH_SECS;
        }
    }

    // Y tick labels at integer module counts
    let y_step = (max_count / 5).max(1);
    let mut count = 0;
    while count <= max_count {
        let y = axis_y - (count as f64 / max_count as f64) * plot_h;
        let _ = write!(
            svg,
            r#"<line class="axis" x1="{x0}" y1="{y:.1}" x2="{x1}" y2="{y:.1}"/>"#,
            x0 = MARGIN_LEFT - 6,
            x1 = MARGIN_LEFT
        );
        let _ = write!(
            svg,
            r#"<text x="{tx}" y="{ty:.1}" text-anchor="end">{count}</text>"#,
            tx = MARGIN_LEFT - 10,
            ty = y + 4.0
        );
        count += y_step;
    }

    // Axis labels
    let _ = write!(
        svg,
        r#"<text x="{x:.1}" y="{y}" text-anchor="middle">Module Validation Time (s)</text>"#,
        x = MARGIN_LEFT as f64 + plot_w / 2.0,
        y = config.height - 15
    );
    let _ = write!(
        svg,
        r#"<text x="20" y="{y:.1}" text-anchor="middle" transform="rotate(-90 20 {y:.1})"># of Modules</text>"#,
        y = MARGIN_TOP as f64 + plot_h / 2.0
    );

    svg.push_str("</svg>");
    svg
}

/// Format an axis tick value, dropping a trailing `.0`
fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_histogram() -> Histogram {
        Histogram {
            min: 10.0,
            max: 20.0,
            bin_width: 5.0,
            counts: vec![2, 1],
        }
    }

    #[test]
    fn test_render_contains_axis_labels() {
        let svg = render_histogram(&sample_histogram(), None);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Module Validation Time (s)"));
        assert!(svg.contains("# of Modules"));
    }

    #[test]
    fn test_render_one_bar_per_nonempty_bin() {
        let histogram = Histogram {
            min: 0.0,
            max: 15.0,
            bin_width: 5.0,
            counts: vec![1, 0, 3],
        };
        let svg = render_histogram(&histogram, None);
        let bars = svg.matches(r##"fill="#4878a8""##).count();
        assert_eq!(bars, 2);
    }

    #[test]
    fn test_minor_ticks_toggle() {
        // Minor ticks are 3px tall; the sample spans 10s so exactly one
        // lands at 5s when enabled.
        let config = HistogramConfig::new().with_minor_ticks(false);
        let with_ticks = render_histogram(&sample_histogram(), None);
        let without_ticks = render_histogram(&sample_histogram(), Some(&config));
        assert_eq!(with_ticks.matches(r#"y2="443""#).count(), 1);
        assert_eq!(without_ticks.matches(r#"y2="443""#).count(), 0);
    }
}
