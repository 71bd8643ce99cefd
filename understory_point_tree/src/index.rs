// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle-keyed index interface and a point-tree adapter for it.
//!
//! Callers that manage rectangles (for example, a generic benchmark or visualization
//! harness) can program against [`BoxIndex`] and swap implementations freely.

use core::fmt::Debug;

use kurbo::{Point, Rect};

use crate::error::OutOfBounds;
use crate::tree::PointTree;

/// A spatial index keyed by rectangles.
pub trait BoxIndex<P> {
    /// Insert `payload` under `rect`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if the index cannot store `rect`; nothing is modified.
    fn insert(&mut self, rect: Rect, payload: P) -> Result<(), OutOfBounds>;

    /// Remove one item stored under `rect` with an equal payload.
    fn remove(&mut self, rect: Rect, payload: &P) -> Option<P>
    where
        P: PartialEq;

    /// Move an item: remove `old_payload` under `old_rect`, then insert `payload` under `new_rect`.
    ///
    /// Returns the removed payload, if any.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `new_rect` cannot be stored; nothing is removed.
    fn replace(
        &mut self,
        old_rect: Rect,
        old_payload: &P,
        new_rect: Rect,
        payload: P,
    ) -> Result<Option<P>, OutOfBounds>
    where
        P: PartialEq;

    /// Visit items whose stored rectangle intersects `rect` until `visit` returns `false`.
    fn visit_rect<F>(&self, rect: Rect, visit: F)
    where
        F: FnMut(Rect, &P) -> bool;

    /// Visit every item until `visit` returns `false`.
    fn visit_all<F>(&self, visit: F)
    where
        F: FnMut(Rect, &P) -> bool;

    /// Number of stored items.
    fn len(&self) -> usize;

    /// Whether no items are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The smallest rectangle covering every stored item, or `None` when empty.
    fn bounds(&self) -> Option<Rect>;
}

/// A [`BoxIndex`] backed by a [`PointTree`].
///
/// Each rectangle is stored at its minimum corner and reported back as a zero-size
/// rectangle at that corner. This suits data that is naturally point-like.
#[derive(Clone)]
pub struct PointIndex<P> {
    tree: PointTree<P>,
}

impl<P> Debug for PointIndex<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointIndex").field("tree", &self.tree).finish()
    }
}

fn key(rect: Rect) -> Point {
    Point::new(rect.min_x(), rect.min_y())
}

fn degenerate(point: Point) -> Rect {
    Rect::from_points(point, point)
}

impl<P> PointIndex<P> {
    /// Create an empty index accepting rectangles whose minimum corner lies in `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self {
            tree: PointTree::new(bounds),
        }
    }

    /// The underlying tree.
    pub fn tree(&self) -> &PointTree<P> {
        &self.tree
    }

    /// Consume the index, returning the underlying tree.
    pub fn into_tree(self) -> PointTree<P> {
        self.tree
    }
}

impl<P> From<PointTree<P>> for PointIndex<P> {
    fn from(tree: PointTree<P>) -> Self {
        Self { tree }
    }
}

impl<P> BoxIndex<P> for PointIndex<P> {
    fn insert(&mut self, rect: Rect, payload: P) -> Result<(), OutOfBounds> {
        self.tree.insert(key(rect), payload)
    }

    fn remove(&mut self, rect: Rect, payload: &P) -> Option<P>
    where
        P: PartialEq,
    {
        self.tree.remove(key(rect), payload)
    }

    fn replace(
        &mut self,
        old_rect: Rect,
        old_payload: &P,
        new_rect: Rect,
        payload: P,
    ) -> Result<Option<P>, OutOfBounds>
    where
        P: PartialEq,
    {
        let point = key(new_rect);
        if !self.tree.in_bounds(point) {
            return Err(OutOfBounds {
                point,
                bounds: self.tree.bounds(),
            });
        }
        let removed = self.tree.remove(key(old_rect), old_payload);
        self.tree.insert(point, payload)?;
        Ok(removed)
    }

    fn visit_rect<F>(&self, rect: Rect, mut visit: F)
    where
        F: FnMut(Rect, &P) -> bool,
    {
        self.tree.search(rect, |point, payload| visit(degenerate(point), payload));
    }

    fn visit_all<F>(&self, mut visit: F)
    where
        F: FnMut(Rect, &P) -> bool,
    {
        self.tree.scan(|point, payload| visit(degenerate(point), payload));
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn bounds(&self) -> Option<Rect> {
        self.tree.min_bounds()
    }
}
