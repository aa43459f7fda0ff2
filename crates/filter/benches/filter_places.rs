//! Benchmarks for the place filtering pipeline
//!
//! Run with: cargo bench --package filter

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use filter::{filter_places, FilterCriteria};
use place_data::Place;

fn synthetic_places(count: usize) -> Vec<Place> {
    let categories = ["food", "heritage", "cafe", "nature"];
    (0..count)
        .map(|i| Place {
            id: format!("place-{i:05}"),
            name: format!("Andong Spot {i}"),
            address: format!("{}-gil {}, Andong-si", i % 40, i),
            description: (i % 3 == 0).then(|| "Riverside view with hanok architecture".to_string()),
            cuisine: (i % 4 == 0).then(|| "korean".to_string()),
            category_id: categories[i % categories.len()].to_string(),
            is_active: i % 7 != 0,
            latitude: 36.5 + (i as f64) * 1e-4,
            longitude: 128.7 + (i as f64) * 1e-4,
            image_url: None,
        })
        .collect()
}

fn bench_text_query(c: &mut Criterion) {
    let places = synthetic_places(5_000);
    let criteria = FilterCriteria::new().with_query("hanok");

    c.bench_function("filter_places_text_query", |b| {
        b.iter(|| black_box(filter_places(black_box(&places), black_box(&criteria))))
    });
}

fn bench_query_with_category(c: &mut Criterion) {
    let places = synthetic_places(5_000);
    let criteria = FilterCriteria::new().with_query("andong").with_category("food");

    c.bench_function("filter_places_query_and_category", |b| {
        b.iter(|| black_box(filter_places(black_box(&places), black_box(&criteria))))
    });
}

fn bench_active_only(c: &mut Criterion) {
    let places = synthetic_places(5_000);
    let criteria = FilterCriteria::new();

    c.bench_function("filter_places_active_only", |b| {
        b.iter(|| black_box(filter_places(black_box(&places), black_box(&criteria))))
    });
}

criterion_group!(
    benches,
    bench_text_query,
    bench_query_with_category,
    bench_active_only
);
criterion_main!(benches);
