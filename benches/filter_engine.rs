use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hyperping_provider::filter::{Diagnostics, FilterEngine, MonitorFilter};
use hyperping_provider::{FilterSettings, Monitor, OptionalValue};
use std::time::Duration;

fn seed_monitors(count: usize) -> Vec<Monitor> {
    (0..count)
        .map(|i| {
            let (env, protocol) = match i % 3 {
                0 => ("PROD", "https"),
                1 => ("DEV", "https"),
                _ => ("PROD", "port"),
            };
            Monitor::new(format!("mon_{}", i), format!("[{}]-service-{}", env, i), protocol)
                .with_paused(i % 10 == 0)
                .with_status("up")
        })
        .collect()
}

fn production_filter() -> MonitorFilter {
    MonitorFilter {
        name_regex: OptionalValue::known(r"\[PROD\]-.*"),
        protocol: OptionalValue::known("https"),
        paused: OptionalValue::Known(false),
        ..Default::default()
    }
}

fn bench_filter_monitors(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_engine");
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(50);

    let filter = production_filter();
    let cached = FilterEngine::new(&FilterSettings::default());
    let uncached = FilterEngine::new(&FilterSettings {
        cache_patterns: false,
        ..Default::default()
    });

    for count in [100, 1000].iter() {
        let monitors = seed_monitors(*count);

        group.bench_with_input(BenchmarkId::new("cached", count), count, |b, &_count| {
            b.iter(|| {
                let diagnostics = Diagnostics::new();
                let kept = cached.filter_records(monitors.iter().cloned(), Some(&filter), &diagnostics);
                black_box(kept.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("uncached", count), count, |b, &_count| {
            b.iter(|| {
                let diagnostics = Diagnostics::new();
                let kept = uncached.filter_records(monitors.iter().cloned(), Some(&filter), &diagnostics);
                black_box(kept.len())
            });
        });
    }

    group.finish();
}

fn bench_no_filter(c: &mut Criterion) {
    let monitors = seed_monitors(1000);
    let engine = FilterEngine::default();

    c.bench_function("filter_engine/no_filter_1000", |b| {
        b.iter(|| {
            let diagnostics = Diagnostics::new();
            let kept =
                engine.filter_records(monitors.iter().cloned(), None::<&MonitorFilter>, &diagnostics);
            black_box(kept.len())
        });
    });
}

criterion_group!(benches, bench_filter_monitors, bench_no_filter);
criterion_main!(benches);
