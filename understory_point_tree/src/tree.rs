// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public tree API.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect};

use crate::error::OutOfBounds;
use crate::node::{Entry, Node};
use crate::types::{Axis, clip, is_empty, rect_contains};

/// A point tree: a spatial B-tree over points with payloads.
///
/// Every node covers a rectangle, derived from the tree's bounds and never stored.
/// A leaf keeps up to [`MAX_ENTRIES`](crate::MAX_ENTRIES) points; an internal node
/// divides its rectangle into a [`ROWS`](crate::ROWS) × [`ROWS`](crate::ROWS) grid of
/// children and routes each point to the cell it falls in.
///
/// Reads (`search`, `scan`, `min_bounds`, `children`) take `&self` and may run
/// concurrently; `insert` and `remove` take `&mut self`.
#[derive(Clone)]
pub struct PointTree<P> {
    bounds: Rect,
    root: Node<P>,
}

impl<P> Debug for PointTree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointTree")
            .field("bounds", &self.bounds)
            .field("len", &self.root.count)
            .field("depth", &self.root.depth())
            .finish_non_exhaustive()
    }
}

impl<P> PointTree<P> {
    /// Create an empty tree that accepts points within `bounds` (edges included).
    ///
    /// `bounds` must not be inverted; this is only checked in debug builds.
    pub fn new(bounds: Rect) -> Self {
        debug_assert!(
            bounds.x0 <= bounds.x1 && bounds.y0 <= bounds.y1,
            "tree bounds must not be inverted"
        );
        Self {
            bounds,
            root: Node::new(),
        }
    }

    /// The rectangle this tree was created with.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub(crate) fn root(&self) -> &Node<P> {
        &self.root
    }

    /// Whether `point` can be stored in this tree.
    pub fn in_bounds(&self, point: Point) -> bool {
        rect_contains(&self.bounds, point)
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.root.count
    }

    /// Whether the tree stores no points.
    pub fn is_empty(&self) -> bool {
        self.root.count == 0
    }

    /// Number of node levels, counting the root. An empty tree has depth 1.
    ///
    /// Leaves stop splitting below [`MAX_DEPTH`](crate::MAX_DEPTH), so this never
    /// exceeds `MAX_DEPTH + 1`.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        log::debug!("clearing point tree of {} entries", self.root.count);
        self.root = Node::new();
    }

    /// Insert a point with its payload.
    ///
    /// Duplicate points, and even duplicate point/payload pairs, are stored separately.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `point` lies outside [`bounds`](Self::bounds); the tree
    /// is left unchanged.
    pub fn insert(&mut self, point: Point, payload: P) -> Result<(), OutOfBounds> {
        if !self.in_bounds(point) {
            return Err(OutOfBounds {
                point,
                bounds: self.bounds,
            });
        }
        self.root.insert(self.bounds, Entry { point, payload }, 1);
        Ok(())
    }

    /// Remove one entry whose point and payload both equal the arguments.
    ///
    /// Points are compared exactly. Returns the stored payload, or `None` if nothing
    /// matched, in which case the tree is unchanged.
    pub fn remove(&mut self, point: Point, payload: &P) -> Option<P>
    where
        P: PartialEq,
    {
        if !self.in_bounds(point) {
            return None;
        }
        self.root.remove(self.bounds, point, payload)
    }

    /// Visit every point contained in `rect` (edges included) until `visit` returns `false`.
    ///
    /// Order is unspecified.
    pub fn search<'a, F>(&'a self, rect: Rect, mut visit: F)
    where
        F: FnMut(Point, &'a P) -> bool,
    {
        // Every stored point lies in the bounds, so this clip is exact.
        let clipped = clip(&rect, &self.bounds);
        if is_empty(&clipped) {
            return;
        }
        self.root.search(self.bounds, &clipped, &mut visit);
    }

    /// Points contained in `rect` (edges included), with their payloads.
    pub fn query_rect(&self, rect: Rect) -> impl Iterator<Item = (Point, &P)> + '_ {
        let mut out = Vec::new();
        self.search(rect, |point, payload| {
            out.push((point, payload));
            true
        });
        out.into_iter()
    }

    /// Visit every stored point until `visit` returns `false`.
    ///
    /// Points are visited depth-first, cells in row-major order.
    pub fn scan<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(Point, &'a P) -> bool,
    {
        self.root.scan(&mut visit);
    }

    /// Every stored point with its payload, in [`scan`](Self::scan) order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &P)> + '_ {
        let mut out = Vec::with_capacity(self.len());
        self.scan(|point, payload| {
            out.push((point, payload));
            true
        });
        out.into_iter()
    }

    /// The smallest rectangle containing every stored point, or `None` if the tree is empty.
    ///
    /// This walks the tree on every call; nothing is cached.
    pub fn min_bounds(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        Some(Rect::new(
            self.root.min_along(Axis::X, f64::INFINITY),
            self.root.min_along(Axis::Y, f64::INFINITY),
            self.root.max_along(Axis::X, f64::NEG_INFINITY),
            self.root.max_along(Axis::Y, f64::NEG_INFINITY),
        ))
    }
}
