use skycast_chart::{HourlyChart, RecordingSurface, Sample, Theme};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart() -> HourlyChart {
    let samples = (0..8)
        .map(|i| Sample::new(format!("{} PM", i + 1), ((i as f64 * 0.9).sin() * 8.0) as i32 + 12))
        .collect();
    HourlyChart::new(samples)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("hourly_chart");
    let chart = build_chart();
    for &width in &[320.0f32, 1280.0f32] {
        group.bench_function(format!("layout_{width}"), |b| {
            b.iter(|| black_box(chart.layout(black_box(width))))
        });
        group.bench_function(format!("render_recording_{width}"), |b| {
            let mut surface = RecordingSurface::new(width, 2.0);
            let theme = Theme::dark();
            b.iter(|| black_box(chart.render(&mut surface, &theme)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
