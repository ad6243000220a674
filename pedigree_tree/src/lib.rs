// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pedigree_tree --heading-base-level=0

//! Pedigree Tree: an arena-based family tree model for pedigree charts.
//!
//! This crate holds the data model shared by the pedigree layout and connector
//! crates: one [`FamilyTree`] per render, addressed by copyable [`PersonId`]
//! handles. It deliberately knows nothing about coordinates or drawing; those
//! live in `pedigree_layout` and `pedigree_connectors`.
//!
//! The core concepts are:
//!
//! - [`FamilyTree`]: a flat arena of [`Person`] entries plus an optional root.
//!   Built once per render from external data, consumed by layout, then
//!   discarded. There is no removal or incremental mutation API.
//! - [`Ancestry`]: a tagged link to a person's parents. A person either has
//!   [no known ancestors](Ancestry::Unknown) or a [full couple](Ancestry::Couple)
//!   (father and mother). The one-parent state is unrepresentable.
//! - [`PersonKind`]: a real [individual](PersonKind::Individual) or an
//!   ["add person" placeholder](PersonKind::Placeholder) slot offered where a
//!   parent is missing.
//! - [`PersonDetails`]: display attributes (name parts, year range, avatar,
//!   navigation links). Opaque to every crate in this workspace; carried
//!   through untouched for the renderer.
//! - [`PersonRecord`]: the nested record shape in which external data arrives,
//!   and [`FamilyTree::from_record`], which flattens it into the arena and is
//!   the single place where malformed ancestry (exactly one parent) is
//!   rejected with [`TreeError::MalformedAncestry`].
//!
//! ## Minimal example
//!
//! ```rust
//! use pedigree_tree::{FamilyTree, PersonDetails, PersonKind};
//!
//! let mut tree = FamilyTree::new();
//! let child = tree.insert(PersonKind::Individual { id: 1 }, PersonDetails::default());
//! let father = tree.insert(PersonKind::Individual { id: 2 }, PersonDetails::default());
//! let mother = tree.insert(PersonKind::Individual { id: 3 }, PersonDetails::default());
//! tree.set_ancestry(child, father, mother);
//! tree.set_root(child);
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.root(), Some(child));
//! ```
//!
//! The ancestor direction is a tree by contract: at most one couple above each
//! person, a single root, and no cycles. Cycle-freedom is an input guarantee
//! from the data-loading collaborator, not re-checked here.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod record;
mod tree;
mod types;

pub use record::{PersonRecord, TreeError};
pub use tree::{FamilyTree, Person};
pub use types::{Ancestry, ParentRole, PersonDetails, PersonId, PersonKind};
