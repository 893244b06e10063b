//! Chart Rendering
//!
//! Draws the sample series onto any `Surface`:
//! - `surface`: the drawing trait and geometry/color primitives
//! - `renderer`: the line chart itself
//! - `display_list`: a recording surface that can be replayed later
//! - `svg`: an SVG export surface

pub mod display_list;
pub mod renderer;
pub mod surface;
pub mod svg;

pub use display_list::{DisplayList, DrawOp};
pub use renderer::{chart_title, ChartFrame, ChartRenderer, ChartStyle, GRID_BANDS};
pub use surface::{Color, Font, Point, Rect, Stroke, Surface, TextAlign};
pub use svg::SvgSurface;
