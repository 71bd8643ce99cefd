// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry helpers and grid constants.
//!
//! Rectangles here are closed on every edge: a point lying exactly on `x1` or `y1`
//! is inside. Kurbo's own [`Rect::contains`] is half-open, so the tree never uses it.

use core::cmp::Ordering;

use kurbo::{Point, Rect};

/// Number of grid cells along each axis of an internal node.
pub const ROWS: usize = 16;

/// Maximum number of entries a leaf holds before it is split.
pub const MAX_ENTRIES: usize = 256;

/// A node whose subtree drops below this many entries is compacted back into a leaf.
///
/// This is 40% of [`MAX_ENTRIES`], so a node never flips between leaf and
/// internal on every other insert/remove near the split point.
pub const MIN_ENTRIES: usize = MAX_ENTRIES * 40 / 100;

/// Depth beyond which leaves stop enforcing [`MAX_ENTRIES`].
///
/// Without a cap, coincident points (or clusters narrower than `f64` resolution)
/// would split forever.
pub const MAX_DEPTH: usize = 16;

/// Total number of cells in an internal node's grid.
pub(crate) const CELLS: usize = ROWS * ROWS;

/// Whether the closed rectangle contains the point. Never true for NaN coordinates.
#[inline]
pub fn rect_contains(rect: &Rect, pt: Point) -> bool {
    le(rect.x0, pt.x) && le(rect.y0, pt.y) && le(pt.x, rect.x1) && le(pt.y, rect.y1)
}

/// Clip `a` to `b` componentwise. The result may be empty (inverted); see [`is_empty`].
#[inline]
pub(crate) fn clip(a: &Rect, b: &Rect) -> Rect {
    Rect::new(
        max_t(a.x0, b.x0),
        max_t(a.y0, b.y0),
        min_t(a.x1, b.x1),
        min_t(a.y1, b.y1),
    )
}

/// Whether the closed rectangle covers no point at all. Zero-area rectangles are not empty.
#[inline]
pub(crate) fn is_empty(r: &Rect) -> bool {
    lt(r.x1, r.x0) || lt(r.y1, r.y0)
}

/// Grid coordinate of `v` along an edge spanning `[lo, hi]`.
///
/// The float-to-int cast saturates, so negative ratios and NaN (degenerate edges) land
/// on cell 0. Values on the far edge would map to `ROWS`; they are clamped into the last cell.
#[inline]
fn cell_coord(v: f64, lo: f64, hi: f64) -> usize {
    let t = (v - lo) / (hi - lo) * ROWS as f64;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Flooring into a small grid coordinate is the point of this cast."
    )]
    let c = t as usize;
    c.min(ROWS - 1)
}

/// A cell in an internal node's grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) x: usize,
    pub(crate) y: usize,
}

impl Cell {
    pub(crate) const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The cell of `rect` that `pt` routes to.
    #[inline]
    pub(crate) fn of(rect: &Rect, pt: Point) -> Self {
        Self::new(
            cell_coord(pt.x, rect.x0, rect.x1),
            cell_coord(pt.y, rect.y0, rect.y1),
        )
    }

    /// Inclusive cell ranges covered by `query` within `rect`, as `(min, max)` cells.
    #[inline]
    pub(crate) fn span(rect: &Rect, query: &Rect) -> (Self, Self) {
        (
            Self::of(rect, Point::new(query.x0, query.y0)),
            Self::of(rect, Point::new(query.x1, query.y1)),
        )
    }

    /// Row-major index into the grid.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.y * ROWS + self.x
    }

    /// This cell's rectangle inside its parent's rectangle.
    ///
    /// The last row and column snap to the parent's far edges.
    #[inline]
    pub(crate) fn rect(self, parent: &Rect) -> Rect {
        let w = (parent.x1 - parent.x0) / ROWS as f64;
        let h = (parent.y1 - parent.y0) / ROWS as f64;
        let x0 = w * self.x as f64 + parent.x0;
        let y0 = h * self.y as f64 + parent.y0;
        let x1 = if self.x == ROWS - 1 { parent.x1 } else { x0 + w };
        let y1 = if self.y == ROWS - 1 { parent.y1 } else { y0 + h };
        Rect::new(x0, y0, x1, y1)
    }
}

/// A coordinate axis, used by the directional bounds traversals.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

impl Axis {
    /// The point's coordinate on this axis.
    #[inline]
    pub(crate) const fn of(self, pt: Point) -> f64 {
        match self {
            Self::X => pt.x,
            Self::Y => pt.y,
        }
    }

    /// Grid index of the cell at position `band` along this axis and `across` on the other.
    #[inline]
    pub(crate) const fn cell(self, band: usize, across: usize) -> Cell {
        match self {
            Self::X => Cell::new(band, across),
            Self::Y => Cell::new(across, band),
        }
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
