// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by tree operations.

use kurbo::{Point, Rect};

/// A point was offered to a tree whose bounds do not contain it.
///
/// Returned by [`PointTree::insert`](crate::PointTree::insert) before anything is
/// modified, so the tree is unchanged when you see this.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
#[error("point {point:?} lies outside the tree bounds {bounds:?}")]
pub struct OutOfBounds {
    /// The rejected point.
    pub point: Point,
    /// The tree's bounds at the time of the call.
    pub bounds: Rect,
}
