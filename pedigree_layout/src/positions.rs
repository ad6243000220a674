// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two layout passes and the resulting position table.

use alloc::vec;
use alloc::vec::Vec;
use kurbo::{Point, Rect};
use pedigree_tree::{Ancestry, FamilyTree, PersonId};

use crate::config::LayoutConfig;

/// Computed box positions for one tree, keyed by [`PersonId`].
///
/// Positions are top-left corners of person boxes. A `Layout` is only
/// meaningful together with the tree and [`LayoutConfig`] that produced it;
/// rerun [`layout`] from scratch after the tree is rebuilt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    positions: Vec<Option<Point>>,
}

impl Layout {
    /// Top-left corner of `id`'s box, if that person was reached by layout.
    pub fn position(&self, id: PersonId) -> Option<Point> {
        self.positions.get(id.index()).copied().flatten()
    }

    /// Union of all box rectangles, or `None` if nothing was positioned.
    ///
    /// Handy for sizing a drawing surface around the chart.
    pub fn bounds(&self, config: &LayoutConfig) -> Option<Rect> {
        let mut it = self
            .positions
            .iter()
            .flatten()
            .map(|p| Rect::new(p.x, p.y, p.x + config.box_width, p.y + config.box_height));
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    fn set(&mut self, id: PersonId, p: Point) {
        if let Some(slot) = self.positions.get_mut(id.index()) {
            *slot = Some(p);
        }
    }
}

/// Assign a position to every person reachable from the tree's root.
///
/// An empty tree (no root) yields an empty [`Layout`]; that is the expected
/// "nothing to draw" state, not an error. Running this twice over the same
/// tree and config yields identical positions.
pub fn layout(tree: &FamilyTree, config: &LayoutConfig) -> Layout {
    let mut out = Layout {
        positions: vec![None; tree.len()],
    };
    let Some(root) = tree.root() else {
        return out;
    };
    place_ancestors(tree, config, &mut out, root, 0, config.origin.x);
    place_family(tree, config, &mut out, root);
    out
}

/// Recursively place `id` and its ancestor fan.
///
/// `x_offset` is the left edge of the horizontal band reserved for this
/// subtree; the return value is the band's total width. A person with no
/// known ancestors sits at `x_offset` itself and consumes no extra width
/// beyond its own slot; a person with a couple above is centered between the
/// two parents after each parent subtree has claimed its band.
fn place_ancestors(
    tree: &FamilyTree,
    config: &LayoutConfig,
    out: &mut Layout,
    id: PersonId,
    depth: u32,
    x_offset: f64,
) -> f64 {
    let y = config.origin.y - f64::from(depth) * config.generation_pitch();
    let Some(person) = tree.get(id) else {
        return 0.0;
    };
    match person.ancestry {
        Ancestry::Unknown => {
            out.set(id, Point::new(x_offset, y));
            0.0
        }
        Ancestry::Couple { father, mother } => {
            let mut offset = x_offset;
            for parent in [father, mother] {
                let width = place_ancestors(tree, config, out, parent, depth + 1, offset);
                offset += width + config.slot_pitch();
            }
            // Both parents are placed now; center this person between them.
            let (Some(father), Some(mother)) = (out.position(father), out.position(mother))
            else {
                return offset - x_offset;
            };
            out.set(id, Point::new((father.x + mother.x) / 2.0, y));
            offset - x_offset
        }
    }
}

/// Place the partner and one generation of children around the root.
///
/// The children row is centered under the midpoint of the couple's box
/// centers, or under the root's own center when there is no partner. Children
/// are not recursed into; deeper descent happens by re-rendering with a new
/// focused person.
fn place_family(tree: &FamilyTree, config: &LayoutConfig, out: &mut Layout, root: PersonId) {
    let Some(person) = tree.get(root) else {
        return;
    };
    let Some(root_pos) = out.position(root) else {
        return;
    };

    let mut row_center = root_pos.x + config.box_width / 2.0;
    if let Some(partner) = person.partner {
        let partner_pos = Point::new(root_pos.x + config.slot_pitch(), root_pos.y);
        out.set(partner, partner_pos);
        row_center = (root_pos.x + partner_pos.x + config.box_width) / 2.0;
    }

    if person.children.is_empty() {
        return;
    }
    let row_y = root_pos.y + config.generation_pitch();
    let mut x = row_center - config.row_width(person.children.len()) / 2.0;
    for &child in &person.children {
        out.set(child, Point::new(x, row_y));
        x += config.slot_pitch();
    }
}
