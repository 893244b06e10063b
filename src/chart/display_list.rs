//! Recorded drawing commands
//!
//! The controller renders into a `DisplayList`; front-ends replay it onto
//! their real surface whenever the chart revision changes.

use serde::{Deserialize, Serialize};

use super::surface::{Color, Font, Point, Rect, Stroke, Surface, TextAlign};

/// A single recorded drawing command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Clear { width: f64, height: f64 },
    FillRect { rect: Rect, color: Color },
    StrokePath { points: Vec<Point>, stroke: Stroke },
    FillPath { points: Vec<Point>, color: Color },
    FillCircle { center: Point, radius: f64, color: Color },
    FillText {
        text: String,
        at: Point,
        font: Font,
        color: Color,
        align: TextAlign,
    },
}

/// A surface that records commands instead of drawing them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Issue every recorded command against `target`, in order
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for op in &self.ops {
            match op {
                DrawOp::Clear { width, height } => target.clear(*width, *height),
                DrawOp::FillRect { rect, color } => target.fill_rect(*rect, *color),
                DrawOp::StrokePath { points, stroke } => target.stroke_path(points, *stroke),
                DrawOp::FillPath { points, color } => target.fill_path(points, *color),
                DrawOp::FillCircle {
                    center,
                    radius,
                    color,
                } => target.fill_circle(*center, *radius, *color),
                DrawOp::FillText {
                    text,
                    at,
                    font,
                    color,
                    align,
                } => target.fill_text(text, *at, font, *color, *align),
            }
        }
    }

    /// Text of every `FillText` command
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_path(&mut self, points: &[Point], stroke: Stroke) {
        self.ops.push(DrawOp::StrokePath {
            points: points.to_vec(),
            stroke,
        });
    }

    fn fill_path(&mut self, points: &[Point], color: Color) {
        self.ops.push(DrawOp::FillPath {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &Font, color: Color, align: TextAlign) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            at,
            font: font.clone(),
            color,
            align,
        });
    }
}
