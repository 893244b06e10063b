//! Line chart renderer
//!
//! Draws one of the fixed sample series as a gridded line chart with a
//! filled area and sample markers.

use serde::Serialize;
use tracing::debug;

use super::surface::{Color, Font, Point, Rect, Stroke, Surface, TextAlign};
use crate::data::SeriesKind;

/// Number of bands the horizontal gridlines divide the plot into
pub const GRID_BANDS: usize = 5;

/// Baseline of the title text
const TITLE_Y: f64 = 25.0;

/// Visual parameters for the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub padding: f64,
    pub plot_background: Color,
    pub grid: Stroke,
    pub line: Stroke,
    pub area_fill: Color,
    pub point_radius: f64,
    pub title_font: Font,
    pub title_color: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            padding: 40.0,
            plot_background: Color::rgba(255, 255, 255, 0.05),
            grid: Stroke::new(Color::rgba(255, 255, 255, 0.1), 1.0),
            line: Stroke::new(Color::GOLD, 3.0),
            area_fill: Color::rgba(255, 215, 0, 0.1),
            point_radius: 4.0,
            title_font: Font::new("Inter", 16.0).bold(),
            title_color: Color::WHITE,
        }
    }
}

/// Geometry of a rendered chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFrame {
    /// Series whose samples were plotted
    pub series: SeriesKind,
    pub title: String,
    /// Plot area inside the padding
    pub plot: Rect,
    /// Polyline vertices, one per sample
    pub vertices: Vec<Point>,
}

impl ChartFrame {
    /// Vertex of the largest sample (first one on ties)
    pub fn peak(&self) -> Option<Point> {
        let samples = self.series.samples();
        let (index, _) = samples
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
                Some((_, bv)) if bv >= v => best,
                _ => Some((i, v)),
            })?;
        self.vertices.get(index).copied()
    }
}

/// Renders sample series onto a `Surface`
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    style: ChartStyle,
}

impl ChartRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Draw the series named `name` on a `width` x `height` surface.
    ///
    /// Unknown names plot the `views` samples; the title still derives from
    /// `name`.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        name: &str,
        width: f64,
        height: f64,
    ) -> ChartFrame {
        let series = SeriesKind::resolve(name);
        let style = &self.style;
        let plot = plot_area(width, height, style.padding);

        surface.clear(width, height);
        surface.fill_rect(plot, style.plot_background);

        for i in 0..=GRID_BANDS {
            let y = plot.y + plot.height / GRID_BANDS as f64 * i as f64;
            surface.stroke_path(
                &[Point::new(plot.x, y), Point::new(plot.right(), y)],
                style.grid,
            );
        }

        let vertices = plot_vertices(series.samples(), plot);
        surface.stroke_path(&vertices, style.line);

        let mut area = vertices.clone();
        area.push(Point::new(plot.right(), plot.bottom()));
        area.push(Point::new(plot.x, plot.bottom()));
        surface.fill_path(&area, style.area_fill);

        for vertex in &vertices {
            surface.fill_circle(*vertex, style.point_radius, style.line.color);
        }

        let title = chart_title(name);
        surface.fill_text(
            &title,
            Point::new(width / 2.0, TITLE_Y),
            &style.title_font,
            style.title_color,
            TextAlign::Center,
        );

        debug!("Rendered {} chart ({} points) at {}x{}", series, vertices.len(), width, height);

        ChartFrame {
            series,
            title,
            plot,
            vertices,
        }
    }
}

/// Plot rectangle inside `padding`, never negative
pub fn plot_area(width: f64, height: f64, padding: f64) -> Rect {
    Rect::new(
        padding,
        padding,
        (width - padding * 2.0).max(0.0),
        (height - padding * 2.0).max(0.0),
    )
}

/// Map samples into `plot`: evenly spaced in x, the maximum at the plot top
/// and zero at the plot bottom.
pub fn plot_vertices(samples: &[f64], plot: Rect) -> Vec<Point> {
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let step = if samples.len() > 1 {
        plot.width / (samples.len() - 1) as f64
    } else {
        0.0
    };

    samples
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let ratio = if max > 0.0 { value / max } else { 0.0 };
            Point::new(
                plot.x + step * i as f64,
                plot.y + plot.height * (1.0 - ratio),
            )
        })
        .collect()
}

/// `"engagement"` -> `"Engagement Performance"`
pub fn chart_title(name: &str) -> String {
    let mut chars = name.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{} Performance", capitalized)
}
