//! SVG export surface

use std::fmt::Write;

use super::surface::{Color, Font, Point, Rect, Stroke, Surface, TextAlign};

/// Builds a standalone SVG document from drawing commands
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish the document
    pub fn finish(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    fn fill_attrs(color: Color) -> String {
        if color.a >= 1.0 {
            format!("fill=\"{}\"", color.to_css())
        } else {
            format!(
                "fill=\"{}\" fill-opacity=\"{}\"",
                Color::rgb(color.r, color.g, color.b).to_css(),
                color.a
            )
        }
    }

    fn stroke_attrs(stroke: Stroke) -> String {
        let color = stroke.color;
        let mut attrs = format!(
            "fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"",
            Color::rgb(color.r, color.g, color.b).to_css(),
            stroke.width
        );
        if color.a < 1.0 {
            let _ = write!(attrs, " stroke-opacity=\"{}\"", color.a);
        }
        attrs
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl Surface for SvgSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.body.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            Self::fill_attrs(color)
        );
    }

    fn stroke_path(&mut self, points: &[Point], stroke: Stroke) {
        if points.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            "  <polyline points=\"{}\" {}/>",
            points_attr(points),
            Self::stroke_attrs(stroke)
        );
    }

    fn fill_path(&mut self, points: &[Point], color: Color) {
        if points.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            "  <polygon points=\"{}\" {}/>",
            points_attr(points),
            Self::fill_attrs(color)
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>",
            center.x,
            center.y,
            radius,
            Self::fill_attrs(color)
        );
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &Font, color: Color, align: TextAlign) {
        let anchor = match align {
            TextAlign::Start => "start",
            TextAlign::Center => "middle",
            TextAlign::End => "end",
        };
        let weight = if font.bold { "bold" } else { "normal" };
        let _ = writeln!(
            self.body,
            "  <text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\" text-anchor=\"{}\" {}>{}</text>",
            at.x,
            at.y,
            escape(&font.family),
            font.size,
            weight,
            anchor,
            Self::fill_attrs(color),
            escape(text)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartRenderer;

    #[test]
    fn test_rendered_chart_document() {
        let mut svg = SvgSurface::new();
        ChartRenderer::default().render(&mut svg, "revenue", 600.0, 300.0);
        let doc = svg.finish();

        assert!(doc.starts_with("<svg"));
        assert!(doc.contains("width=\"600\""));
        assert_eq!(doc.matches("<circle").count(), 12);
        assert_eq!(doc.matches("<polygon").count(), 1);
        assert!(doc.contains(">Revenue Performance</text>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut svg = SvgSurface::new();
        svg.clear(10.0, 10.0);
        svg.fill_text(
            "<b>&",
            Point::new(0.0, 0.0),
            &Font::new("Inter", 12.0),
            Color::WHITE,
            TextAlign::Start,
        );
        assert!(svg.finish().contains("&lt;b&gt;&amp;"));
    }

    #[test]
    fn test_clear_discards_previous_drawing() {
        let mut svg = SvgSurface::new();
        svg.clear(10.0, 10.0);
        svg.fill_circle(Point::new(1.0, 1.0), 1.0, Color::GOLD);
        svg.clear(20.0, 20.0);

        let doc = svg.finish();
        assert!(!doc.contains("<circle"));
        assert!(doc.contains("width=\"20\""));
    }
}
