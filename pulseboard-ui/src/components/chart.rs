//! Chart Component
//!
//! Performance chart drawn on an HTML5 canvas. The dashboard renders into a
//! display list; this component replays it whenever the chart revision moves.

use leptos::*;
use pulseboard::{Color, Font, Point, Rect, SeriesKind, Stroke, Surface, TextAlign};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::GlobalState;

/// `Surface` backed by a browser 2D context
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    fn trace(&self, points: &[Point]) {
        self.ctx.begin_path();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                self.ctx.move_to(p.x, p.y);
            } else {
                self.ctx.line_to(p.x, p.y);
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style(&color.to_css().into());
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_path(&mut self, points: &[Point], stroke: Stroke) {
        self.ctx.set_stroke_style(&stroke.color.to_css().into());
        self.ctx.set_line_width(stroke.width);
        self.trace(points);
        self.ctx.stroke();
    }

    fn fill_path(&mut self, points: &[Point], color: Color) {
        self.ctx.set_fill_style(&color.to_css().into());
        self.trace(points);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ctx.set_fill_style(&color.to_css().into());
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &Font, color: Color, align: TextAlign) {
        self.ctx.set_fill_style(&color.to_css().into());
        self.ctx.set_font(&font.to_css());
        self.ctx.set_text_align(match align {
            TextAlign::Start => "start",
            TextAlign::Center => "center",
            TextAlign::End => "end",
        });
        let _ = self.ctx.fill_text(text, at.x, at.y);
    }
}

/// Performance chart with series selector
#[component]
pub fn Chart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Tell the dashboard about the real canvas once it is mounted
    canvas_ref.on_load(move |canvas| {
        let (width, height) = (canvas.width() as f64, canvas.height() as f64);
        state.act(|d| d.attach_canvas(width, height));
    });

    // Replay the display list whenever the chart is redrawn
    let revision = create_memo(move |_| state.dashboard.with(|d| d.canvas().map(|c| c.revision)));
    create_effect(move |_| {
        revision.track();
        let display = state
            .dashboard
            .with_untracked(|d| d.canvas().map(|c| c.display.clone()));

        if let (Some(canvas), Some(display)) = (canvas_ref.get(), display) {
            if let Some(mut surface) = CanvasSurface::from_canvas(&canvas) {
                display.replay(&mut surface);
            }
        }
    });

    let resize = window_event_listener(ev::resize, move |_| {
        if let Some(canvas) = canvas_ref.get_untracked() {
            let (width, height) = (canvas.width() as f64, canvas.height() as f64);
            state.act(|d| d.resize_canvas(width, height));
        }
    });
    on_cleanup(move || {
        resize.remove();
        // later redraws are skipped until a canvas is attached again
        state.dashboard.try_update(|d| d.detach_canvas());
    });

    view! {
        <div class="dashboard-card chart-card">
            <div class="chart-header">
                <h3>"Performance"</h3>
                <div class="chart-controls">
                    {SeriesKind::ALL.into_iter().map(|kind| view! { <ChartButton kind=kind /> }).collect_view()}
                </div>
            </div>
            <canvas
                id="performanceChart"
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />
        </div>
    }
}

/// Chart series selection button
#[component]
fn ChartButton(kind: SeriesKind) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let is_active = create_memo(move |_| state.dashboard.with(|d| d.chart_name() == kind.as_str()));

    view! {
        <button
            class=move || if is_active.get() { "chart-btn active" } else { "chart-btn" }
            data-chart=kind.as_str()
            on:click=move |_| state.act(|d| d.set_chart(kind.as_str()))
        >
            {capitalize(kind.as_str())}
        </button>
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
