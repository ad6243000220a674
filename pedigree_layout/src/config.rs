// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart geometry configuration.

use kurbo::Point;

/// Box dimensions and spacing constants for one chart.
///
/// Both the layout pass and the connector generator take this record
/// explicitly, so several charts with different box sizes or themes can be
/// produced side by side; nothing in this workspace reads process-wide
/// constants. All lengths are in the same unit as the output coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Width of a person box.
    pub box_width: f64,
    /// Height of a person box.
    pub box_height: f64,
    /// Horizontal gap between the two boxes of a couple.
    pub couple_distance: f64,
    /// Vertical gap between the boxes of adjacent generations.
    pub generation_distance: f64,
    /// How far above a box bottom the couple connector runs.
    pub couple_line_height: f64,
    /// How far above the children row the sibling bracket rail runs.
    pub children_y_path: f64,
    /// Radius of the quarter-circle corners of the sibling bracket.
    pub path_arc: f64,
    /// Top-left corner of the focused person's box.
    pub origin: Point,
}

impl LayoutConfig {
    /// Horizontal pitch of one box slot in a row of couples or siblings.
    pub fn slot_pitch(&self) -> f64 {
        self.box_width + self.couple_distance
    }

    /// Vertical pitch of one generation.
    pub fn generation_pitch(&self) -> f64 {
        self.box_height + self.generation_distance
    }

    /// Total width of a row of `n` boxes with standard gaps.
    pub fn row_width(&self, n: usize) -> f64 {
        if n == 0 {
            return 0.0;
        }
        #[allow(
            clippy::cast_precision_loss,
            reason = "Row lengths are far below 2^52."
        )]
        let n = n as f64;
        n * self.box_width + (n - 1.0) * self.couple_distance
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            box_width: 120.0,
            box_height: 160.0,
            couple_distance: 48.0,
            generation_distance: 88.0,
            couple_line_height: 48.0,
            children_y_path: 48.0,
            path_arc: 24.0,
            origin: Point::new(100.0, 550.0),
        }
    }
}
