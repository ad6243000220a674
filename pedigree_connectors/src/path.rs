// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connector path primitives and conversions.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use kurbo::{BezPath, Point, Vec2};

/// Cubic Bézier approximation constant for a quarter circle.
const KAPPA: f64 = 0.552_284_749_830_793_4;

/// One drawing primitive of a connector path.
///
/// This mirrors the SVG path commands the chart uses: an absolute move and
/// relative vertical/horizontal lines and quarter-circle arcs. Relative
/// commands follow the usual screen convention (`x` right, `y` down), so a
/// negative [`VLine`](PathCmd::VLine) goes up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    /// Begin a new subpath at an absolute point.
    MoveTo(Point),
    /// Vertical line, relative.
    VLine(f64),
    /// Horizontal line, relative.
    HLine(f64),
    /// Quarter-circle arc, relative.
    ///
    /// `to` must displace by `radius` on both axes; `sweep` follows the SVG
    /// sweep flag (`true` is clockwise with `y` down).
    Arc {
        /// Circle radius.
        radius: f64,
        /// SVG sweep flag.
        sweep: bool,
        /// Displacement to the arc's end point.
        to: Vec2,
    },
}

/// Which relationship a connector draws.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConnectorKind {
    /// The "⊤" between a person and their parent couple.
    AncestorLink,
    /// The horizontal between the two boxes of a couple.
    CoupleLink,
    /// The stub from an interior child up to the sibling rail.
    SiblingStub,
    /// The rail over a children row, with arced corners.
    SiblingBracket,
    /// The vertical from the rail midpoint up to the parents.
    ChildLink,
}

/// One connector: a typed, ordered list of drawing primitives.
///
/// A connector may contain more than one subpath (an
/// [`AncestorLink`](ConnectorKind::AncestorLink) holds both the vertical and
/// the horizontal bar).
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
    /// What this connector draws.
    pub kind: ConnectorKind,
    /// The drawing primitives, in order.
    pub commands: Vec<PathCmd>,
}

impl Connector {
    /// Render the commands as SVG path data (`d` attribute notation).
    pub fn svg_path_data(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            // String formatting cannot fail.
            let _ = match *cmd {
                PathCmd::MoveTo(p) => write!(d, "M {},{}", p.x, p.y),
                PathCmd::VLine(dy) => write!(d, "v {dy}"),
                PathCmd::HLine(dx) => write!(d, "h {dx}"),
                PathCmd::Arc { radius, sweep, to } => write!(
                    d,
                    "a {},{} 0 0 {} {},{}",
                    radius,
                    radius,
                    u8::from(sweep),
                    to.x,
                    to.y
                ),
            };
        }
        d
    }

    /// Convert the commands into a kurbo [`BezPath`].
    ///
    /// Quarter-circle arcs become single cubics using the standard circle
    /// approximation, which is well below a pixel of error at chart scale.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut cursor: Option<Point> = None;
        for cmd in &self.commands {
            match *cmd {
                PathCmd::MoveTo(p) => {
                    path.move_to(p);
                    cursor = Some(p);
                }
                PathCmd::VLine(dy) => {
                    let Some(p) = cursor else { continue };
                    let q = Point::new(p.x, p.y + dy);
                    path.line_to(q);
                    cursor = Some(q);
                }
                PathCmd::HLine(dx) => {
                    let Some(p) = cursor else { continue };
                    let q = Point::new(p.x + dx, p.y);
                    path.line_to(q);
                    cursor = Some(q);
                }
                PathCmd::Arc { sweep, to, .. } => {
                    let Some(p) = cursor else { continue };
                    let q = p + to;
                    // An axis-aligned quarter arc starts tangent to one axis
                    // and ends tangent to the other; the sweep flag and the
                    // displacement signs pick which axis comes first.
                    let vertical_first = sweep == (to.x * to.y < 0.0);
                    let (c1, c2) = if vertical_first {
                        (
                            Point::new(p.x, p.y + KAPPA * to.y),
                            Point::new(q.x - KAPPA * to.x, q.y),
                        )
                    } else {
                        (
                            Point::new(p.x + KAPPA * to.x, p.y),
                            Point::new(q.x, q.y - KAPPA * to.y),
                        )
                    };
                    path.curve_to(c1, c2, q);
                    cursor = Some(q);
                }
            }
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::{PathEl, Shape};

    #[test]
    fn svg_data_matches_command_list() {
        let c = Connector {
            kind: ConnectorKind::SiblingBracket,
            commands: vec![
                PathCmd::MoveTo(Point::new(76.0, 798.0)),
                PathCmd::VLine(-24.0),
                PathCmd::Arc {
                    radius: 24.0,
                    sweep: true,
                    to: Vec2::new(24.0, -24.0),
                },
                PathCmd::HLine(288.0),
                PathCmd::Arc {
                    radius: 24.0,
                    sweep: true,
                    to: Vec2::new(24.0, 24.0),
                },
                PathCmd::VLine(24.0),
            ],
        };
        assert_eq!(
            c.svg_path_data(),
            "M 76,798 v -24 a 24,24 0 0 1 24,-24 h 288 a 24,24 0 0 1 24,24 v 24"
        );
    }

    #[test]
    fn svg_data_with_two_subpaths() {
        let c = Connector {
            kind: ConnectorKind::AncestorLink,
            commands: vec![
                PathCmd::MoveTo(Point::new(244.0, 550.0)),
                PathCmd::VLine(-136.0),
                PathCmd::MoveTo(Point::new(220.0, 414.0)),
                PathCmd::HLine(48.0),
            ],
        };
        assert_eq!(c.svg_path_data(), "M 244,550 v -136 M 220,414 h 48");
    }

    #[test]
    fn bez_path_follows_lines() {
        let c = Connector {
            kind: ConnectorKind::CoupleLink,
            commands: vec![PathCmd::MoveTo(Point::new(10.0, 20.0)), PathCmd::HLine(48.0)],
        };
        let path = c.to_bez_path();
        let els: Vec<PathEl> = path.elements().to_vec();
        assert_eq!(
            els,
            vec![
                PathEl::MoveTo(Point::new(10.0, 20.0)),
                PathEl::LineTo(Point::new(58.0, 20.0)),
            ]
        );
    }

    #[test]
    fn quarter_arc_lands_on_its_end_point() {
        let c = Connector {
            kind: ConnectorKind::SiblingBracket,
            commands: vec![
                PathCmd::MoveTo(Point::new(0.0, 24.0)),
                PathCmd::Arc {
                    radius: 24.0,
                    sweep: true,
                    to: Vec2::new(24.0, -24.0),
                },
            ],
        };
        let path = c.to_bez_path();
        let Some(PathEl::CurveTo(c1, c2, end)) = path.elements().last().copied() else {
            panic!("expected a cubic for the arc");
        };
        assert_eq!(end, Point::new(24.0, 0.0));
        // Entry tangent vertical, exit tangent horizontal.
        assert_eq!(c1.x, 0.0);
        assert_eq!(c2.y, 0.0);
        // The cubic stays close to the true circle through the midpoint.
        let mid = path.bounding_box();
        assert!(mid.width() <= 24.0 + 1e-6, "arc must not overshoot");
    }
}
