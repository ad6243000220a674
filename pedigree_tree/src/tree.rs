// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The family tree arena: structure and accessors.

use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::types::{Ancestry, PersonDetails, PersonId, PersonKind};

/// One entry in the tree arena.
#[derive(Clone, Debug)]
pub struct Person {
    /// Real person or placeholder slot.
    pub kind: PersonKind,
    /// Display attributes, opaque to this workspace.
    pub details: PersonDetails,
    /// Link to the parent couple, if known.
    pub ancestry: Ancestry,
    /// Spouse/partner. Only meaningful on the root-and-below direction.
    pub partner: Option<PersonId>,
    /// Children, left to right. Only populated on the root-and-below direction.
    pub children: SmallVec<[PersonId; 4]>,
}

/// A family tree for one render pass.
///
/// The tree is a flat arena of [`Person`] entries addressed by [`PersonId`].
/// It is constructed once (typically via [`FamilyTree::from_record`]), handed
/// to layout and connector generation read-only, and then discarded; edits in
/// the hosting application trigger a full reconstruction rather than an
/// incremental update.
///
/// ## Example
///
/// ```rust
/// use pedigree_tree::{Ancestry, FamilyTree, PersonDetails, PersonKind};
///
/// let mut tree = FamilyTree::new();
/// let root = tree.insert(PersonKind::Individual { id: 7 }, PersonDetails::default());
/// tree.set_root(root);
///
/// assert_eq!(tree.get(root).unwrap().ancestry, Ancestry::Unknown);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FamilyTree {
    people: Vec<Person>,
    root: Option<PersonId>,
}

impl FamilyTree {
    /// Create an empty tree.
    ///
    /// An empty tree is a valid input everywhere downstream: layout and
    /// connector generation treat it as "nothing to draw".
    pub const fn new() -> Self {
        Self {
            people: Vec::new(),
            root: None,
        }
    }

    /// Insert a person with no links and return its id.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "PersonId uses 32-bit indices by design."
    )]
    pub fn insert(&mut self, kind: PersonKind, details: PersonDetails) -> PersonId {
        let idx = self.people.len();
        self.people.push(Person {
            kind,
            details,
            ancestry: Ancestry::Unknown,
            partner: None,
            children: SmallVec::new(),
        });
        PersonId::new(idx as u32)
    }

    /// Mark `root` as the focused person the chart is built around.
    pub fn set_root(&mut self, root: PersonId) {
        debug_assert!(self.get(root).is_some(), "root must be a live id");
        self.root = Some(root);
    }

    /// Link `child` to a full parent couple.
    ///
    /// Both parents are required by signature; a lone parent cannot be
    /// expressed. Either parent may be a placeholder entry.
    pub fn set_ancestry(&mut self, child: PersonId, father: PersonId, mother: PersonId) {
        if let Some(p) = self.people.get_mut(child.index()) {
            p.ancestry = Ancestry::Couple { father, mother };
        }
    }

    /// Link `person` to their partner.
    pub fn set_partner(&mut self, person: PersonId, partner: PersonId) {
        if let Some(p) = self.people.get_mut(person.index()) {
            p.partner = Some(partner);
        }
    }

    /// Append `child` to `person`'s children row.
    pub fn push_child(&mut self, person: PersonId, child: PersonId) {
        if let Some(p) = self.people.get_mut(person.index()) {
            p.children.push(child);
        }
    }

    /// The focused person, or `None` for an empty tree.
    pub const fn root(&self) -> Option<PersonId> {
        self.root
    }

    /// Access a person by id.
    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id.index())
    }

    /// Number of people (including placeholders) in the arena.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns `true` if the arena holds no people.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterate all entries in insertion order.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "PersonId uses 32-bit indices by design."
    )]
    pub fn people(&self) -> impl Iterator<Item = (PersonId, &Person)> {
        self.people
            .iter()
            .enumerate()
            .map(|(i, p)| (PersonId::new(i as u32), p))
    }
}
