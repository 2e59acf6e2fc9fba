// ABOUTME: Criterion benchmarks for the outfit recommendation engine
// ABOUTME: Measures felt temperature, single recommendations and temperature grid sweeps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the outfit engine.
//!
//! Measures the effective temperature calculation, one full recommendation
//! and a sweep over a grid of temperatures and wind speeds.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_outfit::models::{
    PersonalizationBias, WeatherSnapshot, WorkoutContext, WorkoutIntensity,
};
use pierre_outfit::{
    compute_effective_temperature, EffectiveTemperatureCalculator, OutfitEngine,
    OutfitRecommender,
};

/// Temperature grid from -20 to 40 °C in half degree steps
fn temperature_grid() -> Vec<f64> {
    (-40..=80).map(|step| f64::from(step) * 0.5).collect()
}

fn bench_effective_temperature(c: &mut Criterion) {
    let mut group = c.benchmark_group("effective_temperature");
    let workout = WorkoutContext::new(WorkoutIntensity::Tempo, 150);

    let cases = [
        ("wind_chill_cold_formula", WeatherSnapshot::new(-5.0, 70, 15.0)),
        ("wind_chill_linear", WeatherSnapshot::new(10.0, 60, 20.0)),
        ("heat_index", WeatherSnapshot::new(28.0, 80, 5.0)),
        ("calm", WeatherSnapshot::new(16.0, 40, 2.0)),
    ];
    for (name, weather) in cases {
        group.bench_with_input(BenchmarkId::new("compute", name), &weather, |b, weather| {
            b.iter(|| compute_effective_temperature(black_box(weather), black_box(&workout)));
        });
    }

    let calculator = EffectiveTemperatureCalculator::new();
    group.bench_function("breakdown", |b| {
        let weather = WeatherSnapshot::new(-5.0, 70, 15.0);
        b.iter(|| calculator.breakdown(black_box(&weather), black_box(&workout)));
    });

    group.finish();
}

fn bench_single_recommendation(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendation");
    let engine = OutfitEngine::new();
    let bias = PersonalizationBias::new(-1.5);

    for intensity in WorkoutIntensity::ALL {
        let workout = WorkoutContext::new(intensity, 90);
        group.bench_with_input(
            BenchmarkId::new("freezing_ride", intensity),
            &workout,
            |b, workout| {
                let weather = WeatherSnapshot::new(-5.0, 70, 15.0);
                b.iter(|| engine.recommend(black_box(&weather), black_box(workout), &bias));
            },
        );
    }

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_temperature_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("temperature_sweep");
    let engine = OutfitEngine::new();
    let workout = WorkoutContext::new(WorkoutIntensity::Recreational, 120);
    let bias = PersonalizationBias::default();
    let temperatures = temperature_grid();

    for wind in [0.0, 15.0, 30.0] {
        group.throughput(Throughput::Elements(temperatures.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("recommend_grid_wind_kmh", wind),
            &temperatures,
            |b, temperatures| {
                b.iter(|| {
                    temperatures
                        .iter()
                        .map(|&t| engine.recommend(&WeatherSnapshot::new(t, 60, wind), &workout, &bias))
                        .map(|outfit| outfit.len())
                        .sum::<usize>()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_effective_temperature,
    bench_single_recommendation,
    bench_temperature_sweep,
);
criterion_main!(benches);
