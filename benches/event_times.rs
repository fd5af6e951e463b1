use criterion::{criterion_group, criterion_main, Criterion};
use solar_events::{events, sun, Event, JulianDay, Zenith};
use std::hint::black_box;

fn benchmark_solar_series(c: &mut Criterion) {
    let t = JulianDay::from_calendar(1992, 10, 13.0).century();

    c.bench_function("declination", |b| {
        b.iter(|| sun::declination(black_box(t)))
    });

    c.bench_function("equation_of_time", |b| {
        b.iter(|| sun::equation_of_time(black_box(t)))
    });
}

fn benchmark_event_solver(c: &mut Criterion) {
    let day = JulianDay::from_utc(2012, 1, 2, 0, 0, 0.0);

    c.bench_function("event_time_single", |b| {
        b.iter(|| {
            events::event_time_utc(
                black_box(Event::Rise),
                black_box(day),
                black_box(51.5),
                black_box(Zenith::RiseSet),
            )
        })
    });

    c.bench_function("day_events_latitude_sweep", |b| {
        b.iter(|| {
            for latitude in -60..=72 {
                let result = events::day_events(
                    black_box(day),
                    black_box(f64::from(latitude)),
                    black_box(Zenith::RiseSet),
                );
                black_box(result).unwrap();
            }
        })
    });
}

criterion_group!(benches, benchmark_solar_series, benchmark_event_solver);
criterion_main!(benches);
