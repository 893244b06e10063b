//! Benchmarks for chart rendering and dashboard stepping
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pulseboard::{ChartRenderer, Config, Dashboard, DisplayList, SeriesKind, SvgSurface};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let renderer = ChartRenderer::default();

    for kind in SeriesKind::ALL {
        group.bench_function(format!("display_list_{}", kind), |b| {
            b.iter(|| {
                let mut display = DisplayList::new();
                renderer.render(&mut display, black_box(kind.as_str()), 800.0, 400.0)
            })
        });
    }

    group.bench_function("svg_views", |b| {
        b.iter(|| {
            let mut svg = SvgSurface::new();
            renderer.render(&mut svg, black_box("views"), 800.0, 400.0);
            svg.finish()
        })
    });

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let config = Config::default();

    c.bench_function("session_settle", |b| {
        b.iter(|| {
            let mut dashboard = Dashboard::new(&config);
            dashboard.settle();
            dashboard.set_filter(black_box("week"));
            dashboard.navigate(black_box("analytics"));
            dashboard.click_stats_card(0);
            dashboard.settle();
            dashboard.now()
        })
    });
}

criterion_group!(benches, bench_render, bench_session);
criterion_main!(benches);
