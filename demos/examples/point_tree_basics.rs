// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point tree basics.
//!
//! Insert a few thousand points, search a region, remove some, and watch the tree split
//! and compact. Structural events are logged at `trace` level.
//!
//! Run:
//! - `cargo run -p understory_point_tree_demos --example point_tree_basics`
//! - `RUST_LOG=trace cargo run -p understory_point_tree_demos --example point_tree_basics`

use kurbo::{Point, Rect};
use understory_point_tree::{BoxIndex, PointIndex, PointTree};

fn main() {
    colog::basic_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let world = Rect::new(-180.0, -90.0, 180.0, 90.0);
    let mut tree = PointTree::new(world);

    // A spiral of points, dense enough to split the root a few times.
    for i in 0..4_000_u32 {
        let t = f64::from(i) * 0.05;
        let r = f64::from(i) / 4_000.0 * 80.0;
        let p = Point::new(r * t.cos() * 2.0, r * t.sin());
        tree.insert(p, i).expect("spiral stays inside the world");
    }
    log::info!(
        "inserted {} points, depth {}, bounds {:?}",
        tree.len(),
        tree.depth(),
        tree.min_bounds()
    );

    // Rejected points leave the tree untouched.
    if let Err(err) = tree.insert(Point::new(200.0, 0.0), u32::MAX) {
        log::warn!("{err}");
    }

    let region = Rect::new(-10.0, -10.0, 10.0, 10.0);
    let near_origin = tree.query_rect(region).count();
    log::info!("{near_origin} points within {region:?}");

    let first_three: Vec<_> = {
        let mut out = Vec::new();
        tree.search(world, |p, id| {
            out.push((p, *id));
            out.len() < 3
        });
        out
    };
    log::info!("search stopped early after {:?}", first_three);

    // Keep every 40th point; the root compacts once few points remain.
    let mut removed = 0;
    for i in 0..4_000_u32 {
        let t = f64::from(i) * 0.05;
        let r = f64::from(i) / 4_000.0 * 80.0;
        let p = Point::new(r * t.cos() * 2.0, r * t.sin());
        if i % 40 != 0 && tree.remove(p, &i).is_some() {
            removed += 1;
        }
    }
    log::info!(
        "removed {removed}, {} left, depth {}, bounds {:?}",
        tree.len(),
        tree.depth(),
        tree.min_bounds()
    );

    // The rectangle adapter stores each rectangle at its min corner.
    let mut boxes = PointIndex::new(world);
    boxes
        .insert(Rect::new(-122.5, 37.7, -122.3, 37.9), "San Francisco")
        .expect("inside the world");
    boxes
        .insert(Rect::new(2.2, 48.8, 2.5, 48.9), "Paris")
        .expect("inside the world");
    boxes.visit_rect(Rect::new(-180.0, 0.0, 0.0, 90.0), |r, name| {
        log::info!("{name} at {:?}", r.origin());
        true
    });
}
