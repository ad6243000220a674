// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Import of the external nested record shape into the arena.
//!
//! External data arrives as one tree-shaped record per render: the focused
//! person with their ancestor fan nested above and (optionally) a partner and
//! one generation of children below. [`FamilyTree::from_record`] flattens that
//! shape into the arena and is the single validation seam: a record carrying
//! exactly one parent is rejected before any downstream pass runs.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::tree::FamilyTree;
use crate::types::{PersonDetails, PersonId, PersonKind};

/// The nested record shape in which the data-loading collaborator supplies a
/// family tree.
///
/// `parents` must hold zero or exactly two entries (father first, mother
/// second). `partner` and `children` are only expected on the focused person,
/// matching the external data shape that supplies at most one descendant
/// generation at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonRecord {
    /// Real person or placeholder slot.
    pub kind: PersonKind,
    /// Display attributes, carried through untouched.
    pub details: PersonDetails,
    /// Parent records: empty, or `[father, mother]`.
    pub parents: Vec<PersonRecord>,
    /// Partner record, if any.
    pub partner: Option<Box<PersonRecord>>,
    /// Child records, left to right.
    pub children: Vec<PersonRecord>,
}

impl PersonRecord {
    /// A record with no links.
    pub const fn new(kind: PersonKind) -> Self {
        Self {
            kind,
            details: PersonDetails {
                given_name: None,
                surname: None,
                years: None,
                avatar: None,
                person_url: None,
                tree_url: None,
                edit_url: None,
            },
            parents: Vec::new(),
            partner: None,
            children: Vec::new(),
        }
    }

    /// A record for a real person with no links.
    pub const fn individual(id: u64) -> Self {
        Self::new(PersonKind::Individual { id })
    }
}

/// Errors raised while importing a [`PersonRecord`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TreeError {
    /// A record carried a parent list that is neither empty nor a full couple.
    ///
    /// Ancestry is two-or-none; a lone parent has no well-defined slot in the
    /// ancestor fan, so the import fails fast rather than guessing.
    MalformedAncestry {
        /// How many parents the offending record carried.
        parents: usize,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedAncestry { parents } => write!(
                f,
                "malformed ancestry: found {parents} parent(s), expected none or a full couple"
            ),
        }
    }
}

impl core::error::Error for TreeError {}

impl FamilyTree {
    /// Flatten a nested [`PersonRecord`] into a new tree.
    ///
    /// Fails with [`TreeError::MalformedAncestry`] at the first record whose
    /// parent list is neither empty nor a full couple; nothing downstream runs
    /// for a malformed tree. The record's structure is otherwise trusted (no
    /// cycle detection; the input contract requires a tree).
    pub fn from_record(record: &PersonRecord) -> Result<Self, TreeError> {
        let mut tree = Self::new();
        let root = import(&mut tree, record)?;
        tree.set_root(root);
        Ok(tree)
    }
}

fn import(tree: &mut FamilyTree, record: &PersonRecord) -> Result<PersonId, TreeError> {
    let id = tree.insert(record.kind.clone(), record.details.clone());
    match record.parents.as_slice() {
        [] => {}
        [father, mother] => {
            let father = import(tree, father)?;
            let mother = import(tree, mother)?;
            tree.set_ancestry(id, father, mother);
        }
        other => {
            return Err(TreeError::MalformedAncestry {
                parents: other.len(),
            });
        }
    }
    if let Some(partner) = &record.partner {
        let partner = import(tree, partner)?;
        tree.set_partner(id, partner);
    }
    for child in &record.children {
        let child = import(tree, child)?;
        tree.push_child(id, child);
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ancestry;
    use alloc::vec;

    #[test]
    fn flattens_ancestor_fan() {
        let mut root = PersonRecord::individual(1);
        let mut father = PersonRecord::individual(2);
        father.parents = vec![PersonRecord::individual(4), PersonRecord::individual(5)];
        let mother = PersonRecord::individual(3);
        root.parents = vec![father, mother];

        let tree = FamilyTree::from_record(&root).unwrap();
        assert_eq!(tree.len(), 5);

        let root_id = tree.root().unwrap();
        let Ancestry::Couple { father, mother } = tree.get(root_id).unwrap().ancestry else {
            panic!("root should have a parent couple");
        };
        assert!(tree.get(father).unwrap().ancestry.is_couple());
        assert_eq!(tree.get(mother).unwrap().ancestry, Ancestry::Unknown);
    }

    #[test]
    fn flattens_partner_and_children() {
        let mut root = PersonRecord::individual(1);
        root.partner = Some(Box::new(PersonRecord::individual(2)));
        root.children = vec![PersonRecord::individual(3), PersonRecord::individual(4)];

        let tree = FamilyTree::from_record(&root).unwrap();
        let root_id = tree.root().unwrap();
        let person = tree.get(root_id).unwrap();
        assert!(person.partner.is_some());
        assert_eq!(person.children.len(), 2);
    }

    #[test]
    fn lone_parent_is_rejected() {
        let mut root = PersonRecord::individual(1);
        root.parents = vec![PersonRecord::individual(2)];

        assert_eq!(
            FamilyTree::from_record(&root).unwrap_err(),
            TreeError::MalformedAncestry { parents: 1 }
        );
    }

    #[test]
    fn lone_parent_deep_in_the_fan_is_rejected() {
        let mut father = PersonRecord::individual(2);
        father.parents = vec![PersonRecord::individual(4)];
        let mut root = PersonRecord::individual(1);
        root.parents = vec![father, PersonRecord::individual(3)];

        assert_eq!(
            FamilyTree::from_record(&root).unwrap_err(),
            TreeError::MalformedAncestry { parents: 1 }
        );
    }

    #[test]
    fn error_message_names_the_count() {
        let err = TreeError::MalformedAncestry { parents: 3 };
        assert_eq!(
            alloc::format!("{err}"),
            "malformed ancestry: found 3 parent(s), expected none or a full couple"
        );
    }
}
