use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grid_core::{DataGrid, Key, MemoryDimension};
use serde::Serialize;

#[derive(Clone, Serialize)]
struct Row {
    tier: u32,
    value: f64,
}

fn gen_rows(n: usize) -> Vec<Row> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        v.push(Row {
            tier: (i % 20) as u32,
            // simple waveform with drift
            value: (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001),
        });
    }
    v
}

fn bench_nest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nest_entries");
    for &n in &[10_000usize, 50_000usize] {
        let dim = Rc::new(MemoryDimension::new(gen_rows(n), |a: &Row, b: &Row| {
            b.value.total_cmp(&a.value)
        }));
        for &size in &[999usize, 5_000usize] {
            let mut grid = DataGrid::new("grid", Rc::clone(&dim));
            grid.set_section(|r: &Row| Key::from(r.tier))
                .set_sort_by(|r: &Row| Key::from(r.value))
                .set_size(size);
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("n{n}_s{size}")),
                &size,
                |b, _| {
                    b.iter(|| {
                        let entries = grid.nest_entries();
                        black_box(entries.len());
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_nest);
criterion_main!(benches);
