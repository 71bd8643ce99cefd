// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_point_tree::PointTree;

use rstar::primitives::GeomWithData;
use rstar::{AABB, RTree};

type RstarPoint = GeomWithData<[f64; 2], u32>;

const WORLD: Rect = Rect::new(-180.0, -90.0, 180.0, 90.0);

fn gen_points(count: usize) -> Vec<Point> {
    let mut x = 0xCAFE_F00D_DEAD_BEEF_u64;
    let mut next = move || {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        ((x >> 11) as f64) / ((1u64 << 53) as f64)
    };
    (0..count)
        .map(|_| {
            Point::new(
                WORLD.x0 + next() * WORLD.width(),
                WORLD.y0 + next() * WORLD.height(),
            )
        })
        .collect()
}

fn to_rstar(points: &[Point]) -> Vec<RstarPoint> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| GeomWithData::new([p.x, p.y], i as u32))
        .collect()
}

fn bench_point_tree_vs_rstar(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_tree_vs_rstar");
    let query = Rect::new(-20.0, -20.0, 25.0, 25.0);
    let envelope = AABB::from_corners([query.x0, query.y0], [query.x1, query.y1]);

    for &n in &[10_000usize, 100_000] {
        let points = gen_points(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("point_tree_build_query_n{}", n), |b| {
            b.iter_batched(
                || PointTree::<u32>::new(WORLD),
                |mut tree| {
                    for (i, p) in points.iter().copied().enumerate() {
                        let _ = tree.insert(p, i as u32);
                    }
                    black_box(tree.query_rect(query).count());
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("rstar_build_query_n{}", n), |b| {
            b.iter_batched(
                || to_rstar(&points),
                |items| {
                    let mut tree = RTree::new();
                    for item in items {
                        tree.insert(item);
                    }
                    black_box(tree.locate_in_envelope(&envelope).count());
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("rstar_bulk_build_query_n{}", n), |b| {
            b.iter_batched(
                || to_rstar(&points),
                |items| {
                    let tree = RTree::bulk_load(items);
                    black_box(tree.locate_in_envelope(&envelope).count());
                },
                BatchSize::LargeInput,
            )
        });

        let mut tree = PointTree::new(WORLD);
        for (i, p) in points.iter().copied().enumerate() {
            let _ = tree.insert(p, i as u32);
        }
        let rtree = RTree::bulk_load(to_rstar(&points));

        group.bench_function(format!("point_tree_query_n{}", n), |b| {
            b.iter(|| black_box(tree.query_rect(query).count()))
        });
        group.bench_function(format!("rstar_query_n{}", n), |b| {
            b.iter(|| black_box(rtree.locate_in_envelope(&envelope).count()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_point_tree_vs_rstar);
criterion_main!(benches);
