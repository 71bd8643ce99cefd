// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Introspection: walk the tree's physical structure one level at a time.
//!
//! This is meant for debugging and visualization. Handles borrow the tree, so the
//! tree cannot be modified while any handle is alive.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect};

use crate::node::{Kind, Node};
use crate::tree::PointTree;
use crate::types::{Cell, ROWS};

/// Opaque handle to a node and the rectangle it covers.
///
/// Obtained from [`PointTree::children`]; pass it back in to descend.
pub struct NodeRef<'a, P> {
    node: &'a Node<P>,
    rect: Rect,
}

impl<P> NodeRef<'_, P> {
    /// The rectangle this node covers.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Number of points stored beneath this node.
    pub fn len(&self) -> usize {
        self.node.count
    }

    /// Whether no points are stored beneath this node.
    pub fn is_empty(&self) -> bool {
        self.node.count == 0
    }

    /// Whether this node stores points directly rather than child nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self.node.kind, Kind::Leaf(_))
    }
}

// Manual impls: deriving would demand `P: Clone`/`P: Debug`.
impl<P> Clone for NodeRef<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for NodeRef<'_, P> {}

impl<P> Debug for NodeRef<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeRef")
            .field("rect", &self.rect)
            .field("count", &self.node.count)
            .field("leaf", &self.is_leaf())
            .finish_non_exhaustive()
    }
}

/// One child of a node, as returned by [`PointTree::children`].
#[derive(Debug)]
pub enum Child<'a, P> {
    /// A stored point.
    Item {
        /// Location of the point.
        point: Point,
        /// The point's payload.
        payload: &'a P,
    },
    /// A child node covering `rect`.
    Node {
        /// Rectangle covered by the child.
        rect: Rect,
        /// Handle for descending into the child.
        node: NodeRef<'a, P>,
    },
}

impl<P> Clone for Child<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Child<'_, P> {}

impl<P> PointTree<P> {
    /// List the children of `parent`, or the root when `parent` is `None`.
    ///
    /// The root is reported as a single [`Child::Node`] covering the tree's bounds.
    /// A leaf yields one [`Child::Item`] per stored point in storage order; an internal
    /// node yields one [`Child::Node`] per non-empty cell in row-major order.
    pub fn children<'a>(&'a self, parent: Option<NodeRef<'a, P>>) -> Vec<Child<'a, P>> {
        let mut out = Vec::new();
        self.children_into(parent, &mut out);
        out
    }

    /// Like [`children`](Self::children), but reuses `out` (which is cleared first).
    pub fn children_into<'a>(&'a self, parent: Option<NodeRef<'a, P>>, out: &mut Vec<Child<'a, P>>) {
        out.clear();
        let Some(parent) = parent else {
            out.push(Child::Node {
                rect: self.bounds(),
                node: NodeRef {
                    node: self.root(),
                    rect: self.bounds(),
                },
            });
            return;
        };
        match &parent.node.kind {
            Kind::Leaf(entries) => {
                out.extend(entries.iter().map(|e| Child::Item {
                    point: e.point,
                    payload: &e.payload,
                }));
            }
            Kind::Internal(cells) => {
                for cy in 0..ROWS {
                    for cx in 0..ROWS {
                        let cell = Cell::new(cx, cy);
                        let Some(child) = &cells[cell.index()] else {
                            continue;
                        };
                        if child.count == 0 {
                            continue;
                        }
                        let rect = cell.rect(&parent.rect);
                        out.push(Child::Node {
                            rect,
                            node: NodeRef { node: child, rect },
                        });
                    }
                }
            }
        }
    }
}
