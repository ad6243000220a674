// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pedigree_connectors --heading-base-level=0

//! Pedigree Connectors: the lines between the boxes of a pedigree chart.
//!
//! Given a [`FamilyTree`](pedigree_tree::FamilyTree) already positioned by
//! [`pedigree_layout`], this crate derives the connector geometry:
//!
//! - **Ancestor links**: a "⊤" per parent couple — one vertical from the
//!   child's top edge up between the generations, one horizontal spanning the
//!   parents' inner edges. Emitted for every ancestor that has parents.
//! - **Couple links**: a short horizontal between the two boxes of a couple,
//!   a fixed height above the box bottoms.
//! - **Sibling brackets**: a rail over the children row with quarter-circle
//!   corners, short stubs from interior children up to the rail, and one
//!   vertical from the rail midpoint up to the parents' couple-link height.
//!
//! Each [`Connector`] is a sequence of [`PathCmd`] drawing primitives (move,
//! vertical line, horizontal line, quarter-circle arc). Feed them to any
//! vector surface via [`Connector::svg_path_data`] (SVG `d` notation) or
//! [`Connector::to_bez_path`] (a kurbo [`BezPath`](kurbo::BezPath)).
//!
//! ## Minimal example
//!
//! ```rust
//! use pedigree_connectors::{ConnectorKind, connectors};
//! use pedigree_layout::{LayoutConfig, layout};
//! use pedigree_tree::{FamilyTree, PersonRecord};
//!
//! let mut record = PersonRecord::individual(1);
//! record.parents = vec![PersonRecord::individual(2), PersonRecord::individual(3)];
//! let tree = FamilyTree::from_record(&record).unwrap();
//!
//! let config = LayoutConfig::default();
//! let positions = layout(&tree, &config);
//! let lines = connectors(&tree, &positions, &config);
//!
//! assert_eq!(lines.len(), 1);
//! assert_eq!(lines[0].kind, ConnectorKind::AncestorLink);
//! ```
//!
//! Generation is pure and synchronous; an empty tree yields an empty list.
//! Positions must come from the same tree and
//! [`LayoutConfig`](pedigree_layout::LayoutConfig) — people a stale layout
//! does not cover are skipped rather than drawn at a guessed position.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod generate;
mod path;

pub use generate::connectors;
pub use path::{Connector, ConnectorKind, PathCmd};
