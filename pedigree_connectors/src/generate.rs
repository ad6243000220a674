// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deriving connector paths from a positioned tree.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use pedigree_layout::{Layout, LayoutConfig};
use pedigree_tree::{Ancestry, FamilyTree, PersonId};

use crate::path::{Connector, ConnectorKind, PathCmd};

/// Derive every connector for a positioned tree.
///
/// Ancestor links are emitted deepest-first (parents before the child's own
/// link), then the couple link and children connectors of the focused person.
/// Ordering is cosmetic; every person with a parent couple is visited exactly
/// once. An empty tree, or a tree whose people the layout does not cover,
/// yields no connectors rather than an error.
pub fn connectors(tree: &FamilyTree, positions: &Layout, config: &LayoutConfig) -> Vec<Connector> {
    let mut out = Vec::new();
    let Some(root) = tree.root() else {
        return out;
    };
    ancestor_links(tree, positions, config, root, &mut out);
    family_links(tree, positions, config, root, &mut out);
    out
}

/// Emit the "⊤" link for `id`'s parent couple, recursing into parents first.
fn ancestor_links(
    tree: &FamilyTree,
    positions: &Layout,
    config: &LayoutConfig,
    id: PersonId,
    out: &mut Vec<Connector>,
) {
    let Some(person) = tree.get(id) else {
        return;
    };
    let Ancestry::Couple { father, mother } = person.ancestry else {
        return;
    };
    ancestor_links(tree, positions, config, father, out);
    ancestor_links(tree, positions, config, mother, out);

    let (Some(pos), Some(father), Some(mother)) = (
        positions.position(id),
        positions.position(father),
        positions.position(mother),
    ) else {
        return;
    };

    // The bar runs at the parents' couple-link height, which is
    // `generation_distance + couple_line_height` above the child's top edge.
    let rise = config.generation_distance + config.couple_line_height;
    out.push(Connector {
        kind: ConnectorKind::AncestorLink,
        commands: vec![
            PathCmd::MoveTo(Point::new(pos.x + config.box_width / 2.0, pos.y)),
            PathCmd::VLine(-rise),
            PathCmd::MoveTo(Point::new(father.x + config.box_width, pos.y - rise)),
            PathCmd::HLine(mother.x - father.x - config.box_width),
        ],
    });
}

/// Emit the couple link and children connectors for the focused person.
fn family_links(
    tree: &FamilyTree,
    positions: &Layout,
    config: &LayoutConfig,
    root: PersonId,
    out: &mut Vec<Connector>,
) {
    let Some(person) = tree.get(root) else {
        return;
    };
    let Some(pos) = positions.position(root) else {
        return;
    };

    let couple_y = pos.y + config.box_height - config.couple_line_height;
    if person
        .partner
        .is_some_and(|p| positions.position(p).is_some())
    {
        out.push(Connector {
            kind: ConnectorKind::CoupleLink,
            commands: vec![
                PathCmd::MoveTo(Point::new(pos.x + config.box_width, couple_y)),
                PathCmd::HLine(config.couple_distance),
            ],
        });
    }

    // Center x of each positioned child, left to right. A stale layout can
    // leave children unpositioned; those are dropped, and an empty row emits
    // nothing at all.
    let centers: Vec<(f64, f64)> = person
        .children
        .iter()
        .filter_map(|&c| positions.position(c))
        .map(|p| (p.x + config.box_width / 2.0, p.y))
        .collect();
    let (Some(&(first_cx, row_y)), Some(&(last_cx, _))) = (centers.first(), centers.last()) else {
        return;
    };

    let rail_y = if centers.len() > 1 {
        for &(cx, _) in &centers[1..centers.len() - 1] {
            out.push(Connector {
                kind: ConnectorKind::SiblingStub,
                commands: vec![
                    PathCmd::MoveTo(Point::new(cx, row_y)),
                    PathCmd::VLine(-config.children_y_path),
                ],
            });
        }
        let arc = config.path_arc;
        out.push(Connector {
            kind: ConnectorKind::SiblingBracket,
            commands: vec![
                PathCmd::MoveTo(Point::new(first_cx, row_y)),
                PathCmd::VLine(-(config.children_y_path - arc)),
                PathCmd::Arc {
                    radius: arc,
                    sweep: true,
                    to: Vec2::new(arc, -arc),
                },
                PathCmd::HLine(last_cx - first_cx - 2.0 * arc),
                PathCmd::Arc {
                    radius: arc,
                    sweep: true,
                    to: Vec2::new(arc, arc),
                },
                PathCmd::VLine(config.children_y_path - arc),
            ],
        });
        row_y - config.children_y_path
    } else {
        // A single child needs no rail; the drop starts at its top edge.
        row_y
    };

    let mid_x = (first_cx + last_cx) / 2.0;
    out.push(Connector {
        kind: ConnectorKind::ChildLink,
        commands: vec![
            PathCmd::MoveTo(Point::new(mid_x, rail_y)),
            PathCmd::VLine(couple_y - rail_y),
        ],
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::boxed::Box;
    use pedigree_layout::layout;
    use pedigree_tree::{PersonDetails, PersonKind, PersonRecord};

    fn individual(tree: &mut FamilyTree, id: u64) -> PersonId {
        tree.insert(PersonKind::Individual { id }, PersonDetails::default())
    }

    fn kinds(out: &[Connector]) -> Vec<ConnectorKind> {
        out.iter().map(|c| c.kind).collect()
    }

    #[test]
    fn lone_root_emits_nothing() {
        let tree = FamilyTree::from_record(&PersonRecord::individual(1)).unwrap();
        let config = LayoutConfig::default();
        let positions = layout(&tree, &config);
        assert!(connectors(&tree, &positions, &config).is_empty());
    }

    #[test]
    fn empty_tree_emits_nothing() {
        let config = LayoutConfig::default();
        let tree = FamilyTree::new();
        let positions = layout(&tree, &config);
        assert!(connectors(&tree, &positions, &config).is_empty());
    }

    #[test]
    fn one_parent_couple_emits_one_ancestor_link() {
        let mut record = PersonRecord::individual(1);
        record.parents = vec![PersonRecord::individual(2), PersonRecord::individual(3)];
        let tree = FamilyTree::from_record(&record).unwrap();

        let config = LayoutConfig::default();
        let positions = layout(&tree, &config);
        let out = connectors(&tree, &positions, &config);

        assert_eq!(kinds(&out), vec![ConnectorKind::AncestorLink]);
        // Root box at (184, 550); father at 100, mother at 268. The vertical
        // rises 136 from the root's top center, the bar spans the parents'
        // inner edges at that height.
        assert_eq!(
            out[0].commands,
            vec![
                PathCmd::MoveTo(Point::new(244.0, 550.0)),
                PathCmd::VLine(-136.0),
                PathCmd::MoveTo(Point::new(220.0, 414.0)),
                PathCmd::HLine(48.0),
            ]
        );
    }

    #[test]
    fn deeper_ancestor_links_come_first() {
        let mut father = PersonRecord::individual(2);
        father.parents = vec![PersonRecord::individual(4), PersonRecord::individual(5)];
        let mut record = PersonRecord::individual(1);
        record.parents = vec![father, PersonRecord::individual(3)];
        let tree = FamilyTree::from_record(&record).unwrap();

        let config = LayoutConfig::default();
        let positions = layout(&tree, &config);
        let out = connectors(&tree, &positions, &config);

        assert_eq!(
            kinds(&out),
            vec![ConnectorKind::AncestorLink, ConnectorKind::AncestorLink]
        );
        // The father's own link is emitted before the root's.
        let father_pos = {
            let Ancestry::Couple { father, .. } = tree.get(tree.root().unwrap()).unwrap().ancestry
            else {
                panic!("root should have parents");
            };
            positions.position(father).unwrap()
        };
        assert_eq!(
            out[0].commands[0],
            PathCmd::MoveTo(Point::new(father_pos.x + 60.0, father_pos.y))
        );
    }

    #[test]
    fn couple_and_three_children_emit_four_connectors() {
        let mut record = PersonRecord::individual(1);
        record.partner = Some(Box::new(PersonRecord::individual(2)));
        record.children = vec![
            PersonRecord::individual(3),
            PersonRecord::individual(4),
            PersonRecord::individual(5),
        ];
        let tree = FamilyTree::from_record(&record).unwrap();

        let config = LayoutConfig::default();
        let positions = layout(&tree, &config);
        let out = connectors(&tree, &positions, &config);

        assert_eq!(
            kinds(&out),
            vec![
                ConnectorKind::CoupleLink,
                ConnectorKind::SiblingStub,
                ConnectorKind::SiblingBracket,
                ConnectorKind::ChildLink,
            ]
        );

        // Couple link: root right edge to partner left edge, 48 above bottom.
        assert_eq!(
            out[0].commands,
            vec![
                PathCmd::MoveTo(Point::new(220.0, 662.0)),
                PathCmd::HLine(48.0),
            ]
        );

        // One interior child stub at the couple midpoint.
        assert_eq!(
            out[1].commands,
            vec![
                PathCmd::MoveTo(Point::new(244.0, 798.0)),
                PathCmd::VLine(-48.0),
            ]
        );

        // The bracket spans the outer children's centers with arced corners.
        assert_eq!(
            out[2].svg_path_data(),
            "M 76,798 v -24 a 24,24 0 0 1 24,-24 h 288 a 24,24 0 0 1 24,24 v 24"
        );

        // The drop runs from the rail midpoint up to the couple-link height.
        assert_eq!(
            out[3].commands,
            vec![
                PathCmd::MoveTo(Point::new(244.0, 750.0)),
                PathCmd::VLine(-88.0),
            ]
        );
    }

    #[test]
    fn single_child_skips_stub_and_bracket() {
        let mut record = PersonRecord::individual(1);
        record.children = vec![PersonRecord::individual(2)];
        let tree = FamilyTree::from_record(&record).unwrap();

        let config = LayoutConfig::default();
        let positions = layout(&tree, &config);
        let out = connectors(&tree, &positions, &config);

        assert_eq!(kinds(&out), vec![ConnectorKind::ChildLink]);
        // No partner: the drop rises from the child's own top center straight
        // to the root's couple-link height.
        assert_eq!(
            out[0].commands,
            vec![
                PathCmd::MoveTo(Point::new(160.0, 798.0)),
                PathCmd::VLine(-136.0),
            ]
        );
    }

    #[test]
    fn two_children_emit_bracket_but_no_stubs() {
        let mut record = PersonRecord::individual(1);
        record.children = vec![PersonRecord::individual(2), PersonRecord::individual(3)];
        let tree = FamilyTree::from_record(&record).unwrap();

        let config = LayoutConfig::default();
        let positions = layout(&tree, &config);
        let out = connectors(&tree, &positions, &config);
        assert_eq!(
            kinds(&out),
            vec![ConnectorKind::SiblingBracket, ConnectorKind::ChildLink]
        );
    }

    #[test]
    fn children_missing_from_the_layout_are_skipped() {
        // Children appended after layout ran have no positions; the row is
        // empty after filtering and must emit nothing (and not panic).
        let mut tree = FamilyTree::new();
        let root = individual(&mut tree, 1);
        let partner = individual(&mut tree, 2);
        tree.set_partner(root, partner);
        tree.set_root(root);

        let config = LayoutConfig::default();
        let positions = layout(&tree, &config);

        let late = individual(&mut tree, 3);
        tree.push_child(root, late);

        let out = connectors(&tree, &positions, &config);
        assert_eq!(kinds(&out), vec![ConnectorKind::CoupleLink]);
    }
}
