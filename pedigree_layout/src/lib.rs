// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pedigree_layout --heading-base-level=0

//! Pedigree Layout: positions for every box of a pedigree chart.
//!
//! Given a [`FamilyTree`](pedigree_tree::FamilyTree), this crate assigns a
//! top-left corner to every reachable person box so that no two boxes at the
//! same generation overlap horizontally and generations are evenly spaced
//! vertically. It is a pure function of the tree and a [`LayoutConfig`]; the
//! tree itself is never mutated, and coordinates land in a separate [`Layout`]
//! annotation keyed by [`PersonId`](pedigree_tree::PersonId).
//!
//! The algorithm runs two passes from the focused person:
//!
//! - **Ancestor placement** recursively descends into parent couples with an
//!   accumulating horizontal offset. Each subtree reserves the full width its
//!   own ancestor fan needs before its sibling subtree starts, and every
//!   person is centered exactly between their two parents. This produces a
//!   balanced, overlap-free ancestor fan whose width is proportional to its
//!   ancestor count.
//! - **Descendant placement** positions the partner beside the focused person
//!   and lays one generation of children out as a row centered under the
//!   couple. Deeper descent is driven by re-rendering with a new focus, not by
//!   this pass.
//!
//! ## Minimal example
//!
//! ```rust
//! use pedigree_layout::{LayoutConfig, layout};
//! use pedigree_tree::{FamilyTree, PersonRecord};
//!
//! let tree = FamilyTree::from_record(&PersonRecord::individual(1)).unwrap();
//! let config = LayoutConfig::default();
//!
//! let positions = layout(&tree, &config);
//! let root = positions.position(tree.root().unwrap()).unwrap();
//! assert_eq!((root.x, root.y), (config.origin.x, config.origin.y));
//! ```
//!
//! All lengths share one coordinate space (typically logical pixels) with `y`
//! growing downward, so ancestors sit at smaller `y` than the focused person.
//! Scaling and panning are left to the renderer.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod positions;

pub use config::LayoutConfig;
pub use positions::{Layout, layout};
