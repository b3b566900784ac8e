//! Benchmarks for tile padding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use padding::{pad, Colour, Pixmap};

fn sheet(width: u32, height: u32) -> Pixmap {
    Pixmap::from_fn(width, height, |x, y| {
        Colour::new(x as u8, y as u8, (x ^ y) as u8, 255)
    })
}

fn bench_pad(c: &mut Criterion) {
    let mut group = c.benchmark_group("pad");

    // 16x16 tiles at typical tileset sizes
    for &size in &[128u32, 512, 1024] {
        let source = sheet(size, size);
        group.bench_with_input(BenchmarkId::new("tiles_16_pad_1", size), &source, |b, s| {
            b.iter(|| pad(black_box(s), 16, 16, 1).unwrap())
        });
    }

    // Wide padding exercises the repeated column/row walk
    let source = sheet(512, 512);
    for &padding in &[0u32, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("tiles_32_512px", padding),
            &padding,
            |b, &p| b.iter(|| pad(black_box(&source), 32, 32, p).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pad);
criterion_main!(benches);
