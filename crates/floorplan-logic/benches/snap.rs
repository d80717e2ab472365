//! Per-frame cost of snapping and seating on a dense floor plan.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use floorplan_logic::bounds::Rect;
use floorplan_logic::seating::distribute_seats_on_perimeter;
use floorplan_logic::snap::snap;

/// `n × n` grid of 80px tables with 4px aisles.
fn grid_plan(n: u64) -> Vec<Rect> {
    (0..n * n)
        .map(|i| {
            let col = (i % n) as f32;
            let row = (i / n) as f32;
            Rect::new(i + 1, col * 84.0, row * 84.0, 80.0, 80.0)
        })
        .collect()
}

fn bench_snap(c: &mut Criterion) {
    let plan = grid_plan(6);
    let dragging = Rect::new(999, 170.0, 170.0, 80.0, 80.0);
    c.bench_function("snap_36_tables", |b| {
        b.iter(|| snap(black_box(&dragging), black_box(&plan)))
    });
}

fn bench_seating(c: &mut Criterion) {
    let group = grid_plan(3);
    c.bench_function("seats_9_tables_x24", |b| {
        b.iter(|| distribute_seats_on_perimeter(black_box(&group), 24))
    });
}

criterion_group!(benches, bench_snap, bench_seating);
criterion_main!(benches);
