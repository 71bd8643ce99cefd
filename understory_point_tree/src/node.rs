// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes: leaf/internal representation, insertion with splits, and removal with compaction.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use kurbo::{Point, Rect};

use crate::types::{CELLS, Cell, MAX_DEPTH, MAX_ENTRIES, MIN_ENTRIES};

/// A stored point and its payload.
#[derive(Clone, Debug)]
pub(crate) struct Entry<P> {
    pub(crate) point: Point,
    pub(crate) payload: P,
}

pub(crate) type Cells<P> = [Option<Box<Node<P>>>; CELLS];

#[derive(Clone, Debug)]
pub(crate) enum Kind<P> {
    /// Unordered entries stored directly in this node.
    Leaf(Vec<Entry<P>>),
    /// Row-major grid of children; empty cells are `None`.
    Internal(Box<Cells<P>>),
}

/// A node in the point tree.
///
/// Nodes never store their rectangle; callers derive it from the universe and the
/// cells chosen on the way down, and pass it into every operation.
#[derive(Clone, Debug)]
pub(crate) struct Node<P> {
    /// Entries reachable from this node.
    pub(crate) count: usize,
    pub(crate) kind: Kind<P>,
}

fn empty_cells<P>() -> Box<Cells<P>> {
    Box::new(core::array::from_fn(|_| None))
}

fn insert_into_cell<P>(cells: &mut Cells<P>, rect: Rect, entry: Entry<P>, depth: usize) {
    let cell = Cell::of(&rect, entry.point);
    cells[cell.index()]
        .get_or_insert_with(|| Box::new(Node::new()))
        .insert(cell.rect(&rect), entry, depth + 1);
}

impl<P> Node<P> {
    pub(crate) const fn new() -> Self {
        Self {
            count: 0,
            kind: Kind::Leaf(Vec::new()),
        }
    }

    /// Insert `entry` into the subtree whose rectangle is `rect`.
    ///
    /// The caller has already checked that the point lies in the tree's bounds.
    pub(crate) fn insert(&mut self, rect: Rect, entry: Entry<P>, depth: usize) {
        match &mut self.kind {
            Kind::Leaf(entries) if entries.len() < MAX_ENTRIES || depth > MAX_DEPTH => {
                entries.push(entry);
            }
            Kind::Leaf(entries) => {
                // Split at the current depth; only the children sit one level deeper.
                let entries = mem::take(entries);
                log::trace!(
                    "splitting leaf of {} entries at depth {depth}",
                    entries.len()
                );
                let mut cells = empty_cells();
                for e in entries {
                    insert_into_cell(&mut cells, rect, e, depth);
                }
                insert_into_cell(&mut cells, rect, entry, depth);
                self.kind = Kind::Internal(cells);
            }
            Kind::Internal(cells) => insert_into_cell(cells, rect, entry, depth),
        }
        self.count += 1;
    }

    /// Remove the entry matching both `point` and `payload`, returning its payload.
    ///
    /// Returns `None` and leaves every count untouched when no entry matches.
    pub(crate) fn remove(&mut self, rect: Rect, point: Point, payload: &P) -> Option<P>
    where
        P: PartialEq,
    {
        let removed = match &mut self.kind {
            Kind::Leaf(entries) => {
                let pos = entries
                    .iter()
                    .position(|e| e.point == point && e.payload == *payload)?;
                self.count -= 1;
                return Some(entries.swap_remove(pos).payload);
            }
            Kind::Internal(cells) => {
                let cell = Cell::of(&rect, point);
                let slot = &mut cells[cell.index()];
                let child = slot.as_mut()?;
                let removed = child.remove(cell.rect(&rect), point, payload)?;
                if child.count == 0 {
                    *slot = None;
                }
                removed
            }
        };
        self.count -= 1;
        if self.count < MIN_ENTRIES {
            self.compact();
        }
        Some(removed)
    }

    /// Collapse an internal node into a leaf holding every entry of its subtree.
    fn compact(&mut self) {
        if let Kind::Leaf(_) = self.kind {
            return;
        }
        let mut entries = Vec::with_capacity(self.count);
        mem::replace(&mut self.kind, Kind::Leaf(Vec::new())).drain_into(&mut entries);
        log::trace!("compacted {} entries into a leaf", entries.len());
        debug_assert_eq!(entries.len(), self.count, "count must match gathered entries");
        self.kind = Kind::Leaf(entries);
    }

    /// Number of node levels in this subtree, counting this node.
    pub(crate) fn depth(&self) -> usize {
        match &self.kind {
            Kind::Leaf(_) => 1,
            Kind::Internal(cells) => {
                1 + cells
                    .iter()
                    .flatten()
                    .map(|child| child.depth())
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

impl<P> Kind<P> {
    /// Move every entry of this subtree into `out`, pre-order, cells in index order.
    fn drain_into(self, out: &mut Vec<Entry<P>>) {
        match self {
            Self::Leaf(entries) => out.extend(entries),
            Self::Internal(cells) => {
                let cells: Cells<P> = *cells;
                for child in cells.into_iter().flatten() {
                    child.kind.drain_into(out);
                }
            }
        }
    }
}

impl<P> Default for Node<P> {
    fn default() -> Self {
        Self::new()
    }
}
