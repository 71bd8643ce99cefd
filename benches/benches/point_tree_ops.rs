// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_point_tree::PointTree;

const WORLD: Rect = Rect::new(-180.0, -90.0, 180.0, 90.0);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn point_in(&mut self, r: Rect) -> Point {
        Point::new(
            r.x0 + self.next_f64() * r.width(),
            r.y0 + self.next_f64() * r.height(),
        )
    }
}

fn gen_uniform_points(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count).map(|_| rng.point_in(WORLD)).collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let centers: Vec<_> = (0..n_clusters)
        .map(|_| rng.point_in(WORLD.inset(-spread)))
        .collect();
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for c in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(c.x + dx, c.y + dy));
        }
    }
    out
}

fn build(points: &[Point]) -> PointTree<u32> {
    let mut tree = PointTree::new(WORLD);
    for (i, p) in points.iter().copied().enumerate() {
        let _ = tree.insert(p, i as u32);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_tree_insert");
    for &n in &[10_000usize, 100_000] {
        let points = gen_uniform_points(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{}", n), |b| {
            b.iter_batched(
                || PointTree::<u32>::new(WORLD),
                |mut tree| {
                    for (i, p) in points.iter().copied().enumerate() {
                        let _ = tree.insert(p, i as u32);
                    }
                    black_box(tree.len());
                },
                BatchSize::LargeInput,
            )
        });
    }
    let points = gen_clustered_points(64, 1_500, 2.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("clustered", |b| {
        b.iter_batched(
            || PointTree::<u32>::new(WORLD),
            |mut tree| {
                for (i, p) in points.iter().copied().enumerate() {
                    let _ = tree.insert(p, i as u32);
                }
                black_box(tree.depth());
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_tree_search");
    let points = gen_uniform_points(100_000);
    let tree = build(&points);

    group.bench_function("point_n100000", |b| {
        let mut i = 0;
        b.iter(|| {
            let p = points[i % points.len()];
            i += 1;
            let mut hits = 0usize;
            tree.search(Rect::from_points(p, p), |_, _| {
                hits += 1;
                true
            });
            black_box(hits);
        })
    });

    for &side in &[1.0f64, 10.0, 45.0] {
        let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
        let queries: Vec<_> = (0..256)
            .map(|_| {
                let p = rng.point_in(WORLD);
                Rect::new(p.x, p.y, p.x + side, p.y + side)
            })
            .collect();
        group.bench_function(format!("rect_side{}_n100000", side), |b| {
            let mut i = 0;
            b.iter(|| {
                let q = queries[i % queries.len()];
                i += 1;
                black_box(tree.query_rect(q).count());
            })
        });
    }

    group.bench_function("scan_n100000", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            tree.scan(|_, id| {
                sum += u64::from(*id);
                true
            });
            black_box(sum);
        })
    });

    group.bench_function("min_bounds_n100000", |b| {
        b.iter(|| black_box(tree.min_bounds()))
    });
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_tree_remove");
    let points = gen_uniform_points(100_000);
    let tree = build(&points);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("all_n100000", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for (i, p) in points.iter().copied().enumerate() {
                    black_box(tree.remove(p, &(i as u32)));
                }
                black_box(tree.is_empty());
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_search, bench_remove);
criterion_main!(benches);
