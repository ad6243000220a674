// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end chart demo: tree import + layout + connectors → SVG.
//!
//! This shows the rendering-collaborator contract: the workspace hands the
//! renderer a position and display attributes per person, plus one path per
//! connector, and the renderer decides how boxes and placeholder slots look.
//!
//! Run:
//! - `cargo run -p pedigree_demos --bin family_chart_svg > chart.svg`

use pedigree_connectors::connectors;
use pedigree_layout::{LayoutConfig, layout};
use pedigree_tree::{FamilyTree, ParentRole, PersonDetails, PersonKind, PersonRecord};

fn named(id: u64, given: &str, surname: &str, years: &str) -> PersonRecord {
    let mut record = PersonRecord::individual(id);
    record.details = PersonDetails {
        given_name: Some(given.into()),
        surname: Some(surname.into()),
        years: Some(years.into()),
        ..PersonDetails::default()
    };
    record
}

fn placeholder(child: u64, role: ParentRole) -> PersonRecord {
    PersonRecord::new(PersonKind::Placeholder { child, role })
}

/// A three-generation family: grandparents over the father's side, a
/// placeholder couple over the mother, a partner, and three children.
fn sample_family() -> PersonRecord {
    let mut father = named(2, "Karl", "Lindqvist", "1921-1988");
    father.parents = vec![
        named(4, "Per", "Lindqvist", "1890-1961"),
        named(5, "Brita", "Olsdotter", "1894-1977"),
    ];
    let mut mother = named(3, "Kerstin", "Persson", "1925-2002");
    mother.parents = vec![
        placeholder(3, ParentRole::Father),
        placeholder(3, ParentRole::Mother),
    ];

    let mut root = named(1, "Erik", "Lindqvist", "1950-");
    root.parents = vec![father, mother];
    root.partner = Some(Box::new(named(6, "Maria", "Nilsson", "1952-")));
    root.children = vec![
        named(7, "Johan", "Lindqvist", "1975-"),
        named(8, "Sofia", "Lindqvist", "1978-"),
        named(9, "Oskar", "Lindqvist", "1983-"),
    ];
    root
}

fn main() {
    let tree = match FamilyTree::from_record(&sample_family()) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("bad family data: {err}");
            std::process::exit(1);
        }
    };

    let config = LayoutConfig::default();
    let positions = layout(&tree, &config);
    let lines = connectors(&tree, &positions, &config);

    let bounds = positions
        .bounds(&config)
        .expect("a non-empty tree always has bounds")
        .inflate(20.0, 20.0);

    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        bounds.x0,
        bounds.y0,
        bounds.width(),
        bounds.height()
    );

    for connector in &lines {
        println!(
            r##"  <path d="{}" fill="none" stroke="#888" stroke-width="2"/>"##,
            connector.svg_path_data()
        );
    }

    for (id, person) in tree.people() {
        let Some(p) = positions.position(id) else {
            continue;
        };
        match &person.kind {
            PersonKind::Individual { .. } => {
                let name = [
                    person.details.given_name.as_deref(),
                    person.details.surname.as_deref(),
                ]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ");
                println!(
                    r##"  <rect x="{}" y="{}" width="{}" height="{}" rx="8" fill="#fff" stroke="#333"/>"##,
                    p.x, p.y, config.box_width, config.box_height
                );
                println!(
                    r#"  <text x="{}" y="{}" text-anchor="middle">{}</text>"#,
                    p.x + config.box_width / 2.0,
                    p.y + config.box_height / 2.0,
                    name
                );
                if let Some(years) = &person.details.years {
                    println!(
                        r#"  <text x="{}" y="{}" text-anchor="middle">{}</text>"#,
                        p.x + config.box_width / 2.0,
                        p.y + config.box_height / 2.0 + 20.0,
                        years
                    );
                }
            }
            PersonKind::Placeholder { child, role } => {
                // Distinct affordance for an empty parent slot; the id scheme
                // matches what the interactive front end expects.
                println!(
                    r##"  <rect id="{}-{}" x="{}" y="{}" width="{}" height="{}" rx="8" fill="none" stroke="#198754" stroke-dasharray="6 4"/>"##,
                    child,
                    role.as_str(),
                    p.x,
                    p.y,
                    config.box_width,
                    config.box_height
                );
                println!(
                    r#"  <text x="{}" y="{}" text-anchor="middle">Add {}</text>"#,
                    p.x + config.box_width / 2.0,
                    p.y + config.box_height / 2.0,
                    role.as_str()
                );
            }
        }
    }

    println!("</svg>");
}
