//! Benchmark tests for the booking grid packer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seatplan_core::{Booking, TimeOfDay};
use seatplan_layout::{layout_day, LayoutParams};

/// Deterministic pseudo-random bookings across the dinner service.
fn service_bookings(count: usize) -> Vec<Booking> {
    let mut state = 0x9e37_79b9_u32;
    (0..count)
        .map(|i| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let start = 1080 + state % 235;
            let party = 1 + (state >> 8) % 12;
            Booking::new(TimeOfDay::from_minutes(start), party, format!("guest {i}"))
        })
        .collect()
}

fn bench_layout_service_period(c: &mut Criterion) {
    let params = LayoutParams::new(1080, 1320, 120);

    for count in [10usize, 50, 200] {
        let bookings = service_bookings(count);
        c.bench_function(&format!("layout_day_{count}_bookings"), |b| {
            b.iter(|| layout_day(black_box(&bookings), black_box(&params)));
        });
    }
}

fn bench_layout_all_overlapping(c: &mut Criterion) {
    let params = LayoutParams::new(1080, 1320, 120);
    let bookings: Vec<Booking> = (0..100)
        .map(|i| Booking::new(TimeOfDay::from_minutes(1140), 4, format!("guest {i}")))
        .collect();

    // Worst case for the row search: every booking conflicts with every
    // other, so candidate rows are probed all the way down.
    c.bench_function("layout_day_100_all_overlapping", |b| {
        b.iter(|| layout_day(black_box(&bookings), black_box(&params)));
    });
}

criterion_group!(
    benches,
    bench_layout_service_period,
    bench_layout_all_overlapping
);
criterion_main!(benches);
