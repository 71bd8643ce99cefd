// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a point tree as SVG.
//!
//! Walks the tree with `children`, drawing each node's cell and each point. Deeper
//! cells are drawn lighter. Output goes to stdout.
//!
//! Run:
//! - `cargo run -p understory_point_tree_demos --example point_tree_svg > tree.svg`

use std::fmt::Write as _;

use kurbo::{Point, Rect};
use understory_point_tree::{Child, NodeRef, PointTree};

const SCALE: f64 = 4.0;

fn clusters(world: Rect) -> Vec<Point> {
    let mut x = 0x9E37_79B9_7F4A_7C15_u64;
    let mut next = move || {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        ((x >> 11) as f64) / ((1u64 << 53) as f64)
    };
    let mut out = Vec::new();
    for _ in 0..12 {
        let cx = world.x0 + next() * world.width();
        let cy = world.y0 + next() * world.height();
        let spread = 2.0 + next() * 30.0;
        for _ in 0..600 {
            let p = Point::new(
                cx + (next() - 0.5) * spread,
                cy + (next() - 0.5) * spread,
            );
            if world.contains(p) {
                out.push(p);
            }
        }
    }
    out
}

/// Map world coordinates (y up) to SVG coordinates (y down).
fn to_svg(world: Rect, p: Point) -> Point {
    Point::new((p.x - world.x0) * SCALE, (world.y1 - p.y) * SCALE)
}

fn draw(tree: &PointTree<usize>, svg: &mut String) -> std::fmt::Result {
    let world = tree.bounds();
    let mut stack: Vec<(Option<NodeRef<'_, usize>>, usize)> = vec![(None, 0)];
    let mut points = 0;
    while let Some((parent, depth)) = stack.pop() {
        for child in tree.children(parent) {
            match child {
                Child::Node { rect, node } => {
                    let a = to_svg(world, Point::new(rect.x0, rect.y1));
                    let shade = 64 + (depth * 40).min(180);
                    writeln!(
                        svg,
                        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="rgb({shade},{shade},255)" stroke-width="0.5"/>"#,
                        a.x,
                        a.y,
                        rect.width() * SCALE,
                        rect.height() * SCALE,
                    )?;
                    stack.push((Some(node), depth + 1));
                }
                Child::Item { point, .. } => {
                    let p = to_svg(world, point);
                    writeln!(svg, r#"<circle cx="{:.2}" cy="{:.2}" r="0.8" fill="black"/>"#, p.x, p.y)?;
                    points += 1;
                }
            }
        }
    }
    log::info!("drew {points} points from a tree of depth {}", tree.depth());
    Ok(())
}

fn main() -> std::fmt::Result {
    colog::basic_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let world = Rect::new(-180.0, -90.0, 180.0, 90.0);
    let mut tree = PointTree::new(world);
    for (i, p) in clusters(world).into_iter().enumerate() {
        if let Err(err) = tree.insert(p, i) {
            log::warn!("skipping: {err}");
        }
    }

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        world.width() * SCALE,
        world.height() * SCALE
    )?;
    draw(&tree, &mut svg)?;
    if let Some(b) = tree.min_bounds() {
        let a = to_svg(world, Point::new(b.x0, b.y1));
        writeln!(
            svg,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="red"/>"#,
            a.x,
            a.y,
            b.width() * SCALE,
            b.height() * SCALE,
        )?;
    }
    svg.push_str("</svg>\n");
    print!("{svg}");
    Ok(())
}
