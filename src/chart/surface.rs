//! Drawing surface abstraction
//!
//! The renderer only talks to `Surface`, so the same drawing code targets a
//! recorded display list, an SVG document, or a browser canvas.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in surface pixels, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// RGBA color, alpha in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GOLD: Color = Color::rgb(255, 215, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string (`#rrggbb` when opaque)
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Line style for stroked paths
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Font used for text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: f64,
    pub bold: bool,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// CSS font shorthand, e.g. `bold 16px Inter`
    pub fn to_css(&self) -> String {
        if self.bold {
            format!("bold {}px {}", self.size, self.family)
        } else {
            format!("{}px {}", self.size, self.family)
        }
    }
}

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// A 2D drawing target
pub trait Surface {
    /// Erase everything and size the surface
    fn clear(&mut self, width: f64, height: f64);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke an open path through `points`
    fn stroke_path(&mut self, points: &[Point], stroke: Stroke);

    /// Fill the closed polygon through `points`
    fn fill_path(&mut self, points: &[Point], color: Color);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    fn fill_text(&mut self, text: &str, at: Point, font: &Font, color: Color, align: TextAlign);
}
