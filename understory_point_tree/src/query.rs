// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only traversals: range search, full scan, and directional bounds.

use kurbo::{Point, Rect};

use crate::node::{Kind, Node};
use crate::types::{Axis, Cell, ROWS, rect_contains};

impl<P> Node<P> {
    /// Visit entries contained in `query`. Returns `false` once `visit` asks to stop.
    ///
    /// Cell ranges come from the same saturating coordinate function that routes
    /// inserts, so corners outside `rect` land on its edge cells. That is equivalent to
    /// clipping `query` to `rect`, and never disagrees with where a point was stored.
    pub(crate) fn search<'a, F>(&'a self, rect: Rect, query: &Rect, visit: &mut F) -> bool
    where
        F: FnMut(Point, &'a P) -> bool,
    {
        let cells = match &self.kind {
            Kind::Leaf(entries) => {
                for e in entries {
                    if rect_contains(query, e.point) && !visit(e.point, &e.payload) {
                        return false;
                    }
                }
                return true;
            }
            Kind::Internal(cells) => cells,
        };

        let (lo, hi) = Cell::span(&rect, query);
        for cy in lo.y..=hi.y {
            for cx in lo.x..=hi.x {
                let cell = Cell::new(cx, cy);
                if let Some(child) = &cells[cell.index()]
                    && !child.search(cell.rect(&rect), query, visit)
                {
                    return false;
                }
            }
        }
        true
    }

    /// Visit every entry, pre-order. Returns `false` once `visit` asks to stop.
    pub(crate) fn scan<'a, F>(&'a self, visit: &mut F) -> bool
    where
        F: FnMut(Point, &'a P) -> bool,
    {
        match &self.kind {
            Kind::Leaf(entries) => entries.iter().all(|e| visit(e.point, &e.payload)),
            Kind::Internal(cells) => cells.iter().flatten().all(|child| child.scan(visit)),
        }
    }

    /// Smallest coordinate along `axis` in this subtree, folded into `best`.
    ///
    /// Bands of cells are visited in ascending order along `axis`; the first band holding
    /// any entry bounds the answer, since every later band lies strictly further along.
    pub(crate) fn min_along(&self, axis: Axis, mut best: f64) -> f64 {
        match &self.kind {
            Kind::Leaf(entries) => entries
                .iter()
                .fold(best, |acc, e| acc.min(axis.of(e.point))),
            Kind::Internal(cells) => {
                for band in 0..ROWS {
                    let mut found = false;
                    for across in 0..ROWS {
                        if let Some(child) = &cells[axis.cell(band, across).index()]
                            && child.count > 0
                        {
                            best = child.min_along(axis, best);
                            found = true;
                        }
                    }
                    if found {
                        break;
                    }
                }
                best
            }
        }
    }

    /// Largest coordinate along `axis` in this subtree, folded into `best`.
    pub(crate) fn max_along(&self, axis: Axis, mut best: f64) -> f64 {
        match &self.kind {
            Kind::Leaf(entries) => entries
                .iter()
                .fold(best, |acc, e| acc.max(axis.of(e.point))),
            Kind::Internal(cells) => {
                for band in (0..ROWS).rev() {
                    let mut found = false;
                    for across in (0..ROWS).rev() {
                        if let Some(child) = &cells[axis.cell(band, across).index()]
                            && child.count > 0
                        {
                            best = child.max_along(axis, best);
                            found = true;
                        }
                    }
                    if found {
                        break;
                    }
                }
                best
            }
        }
    }
}
