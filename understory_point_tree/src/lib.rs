// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_point_tree --heading-base-level=0

//! Understory Point Tree: an in-memory spatial B-tree for 2D points.
//!
//! A [`PointTree`] stores points with arbitrary payloads inside a fixed rectangular
//! universe and answers:
//!
//! - Range searches over a closed rectangle, with early termination.
//! - Full scans.
//! - The minimum bounding rectangle of everything stored.
//! - Structural introspection for debugging and visualization, via [`PointTree::children`].
//!
//! Every internal node divides its rectangle into a [`ROWS`] × [`ROWS`] grid. Leaves hold
//! up to [`MAX_ENTRIES`] points and split into a grid when they overflow; subtrees that
//! shrink below [`MIN_ENTRIES`] collapse back into a leaf. Splitting stops at
//! [`MAX_DEPTH`], so coincident points cannot recurse without bound.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_point_tree::PointTree;
//!
//! let mut tree = PointTree::new(Rect::new(-180.0, -90.0, 180.0, 90.0));
//! tree.insert(Point::new(-122.4, 37.8), "San Francisco").unwrap();
//! tree.insert(Point::new(2.35, 48.86), "Paris").unwrap();
//! tree.insert(Point::new(139.7, 35.7), "Tokyo").unwrap();
//!
//! // Everything in the western hemisphere.
//! let west: Vec<_> = tree
//!     .query_rect(Rect::new(-180.0, -90.0, 0.0, 90.0))
//!     .map(|(_, name)| *name)
//!     .collect();
//! assert_eq!(west, ["San Francisco"]);
//!
//! // Points outside the universe are rejected.
//! assert!(tree.insert(Point::new(200.0, 0.0), "Nowhere").is_err());
//!
//! // Removal matches both point and payload.
//! assert_eq!(tree.remove(Point::new(2.35, 48.86), &"Paris"), Some("Paris"));
//! assert_eq!(tree.len(), 2);
//!
//! let bounds = tree.min_bounds().unwrap();
//! assert_eq!(bounds, Rect::new(-122.4, 35.7, 139.7, 37.8));
//! ```
//!
//! Rectangle-keyed callers can use the [`BoxIndex`] trait, implemented by [`PointIndex`],
//! which indexes each rectangle by its minimum corner.
//!
//! ### Float semantics
//!
//! Rectangles are closed: points on any edge, including the universe's far edges, are
//! contained. Points with NaN coordinates are never in bounds and are rejected on insert.

#![no_std]

extern crate alloc;

mod children;
mod error;
pub mod index;
mod node;
mod query;
mod tree;
pub mod types;

pub use children::{Child, NodeRef};
pub use error::OutOfBounds;
pub use index::{BoxIndex, PointIndex};
pub use tree::PointTree;
pub use types::{MAX_DEPTH, MAX_ENTRIES, MIN_ENTRIES, ROWS, rect_contains};
