// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the family tree: person identifiers, ancestry links, display data.

use alloc::string::String;

/// Identifier for a person in a [`FamilyTree`](crate::FamilyTree) arena.
///
/// Ids are plain indices: a tree is built once per render and never removes
/// entries, so there is no slot reuse to guard against. An id is only
/// meaningful for the tree that produced it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PersonId(pub(crate) u32);

impl PersonId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    /// Arena index of this id.
    ///
    /// Exposed so sibling crates can keep dense per-person side tables (for
    /// example, layout annotations) without a hash map.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which side of a couple a missing parent would occupy.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParentRole {
    /// The father slot.
    Father,
    /// The mother slot.
    Mother,
}

impl ParentRole {
    /// Lowercase label, matching the `parent_type` strings the renderer uses
    /// for element ids and the "Add …" affordance.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Father => "father",
            Self::Mother => "mother",
        }
    }
}

/// What a tree entry represents: a real person or an "add person" slot.
///
/// This replaces the sentinel id the external data uses for placeholders with
/// a tagged type, so renderers match on the kind instead of comparing ids.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PersonKind {
    /// A real person, identified by the external database id.
    Individual {
        /// External identifier; opaque to layout, used by navigation links.
        id: u64,
    },
    /// An empty parent slot offering to add a person.
    Placeholder {
        /// External id of the person this slot would be a parent of.
        child: u64,
        /// Which parent the slot stands in for.
        role: ParentRole,
    },
}

/// Display attributes carried through the pipeline untouched.
///
/// Layout and connector generation never read these; they exist so a renderer
/// receives everything it needs alongside each computed position.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PersonDetails {
    /// Given name, if known.
    pub given_name: Option<String>,
    /// Surname, if known.
    pub surname: Option<String>,
    /// Year range such as `"1891-1970"`, if known.
    pub years: Option<String>,
    /// Avatar image reference.
    pub avatar: Option<String>,
    /// Link to the person detail page.
    pub person_url: Option<String>,
    /// Link that re-roots the tree view on this person.
    pub tree_url: Option<String>,
    /// Link to the person edit form.
    pub edit_url: Option<String>,
}

/// Link from a person to their parents.
///
/// Ancestry is two-or-none: either both parents are present (possibly as
/// placeholders) or the ancestor recursion terminates here. A single known
/// parent cannot be expressed; [`FamilyTree::from_record`](crate::FamilyTree::from_record)
/// rejects records that try.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Ancestry {
    /// No known ancestors; this person is a leaf of the ancestor fan.
    #[default]
    Unknown,
    /// A full parent couple.
    Couple {
        /// The father (left of the couple in layout order).
        father: PersonId,
        /// The mother (right of the couple in layout order).
        mother: PersonId,
    },
}

impl Ancestry {
    /// Returns `true` if this person has a parent couple.
    pub const fn is_couple(self) -> bool {
        matches!(self, Self::Couple { .. })
    }
}
