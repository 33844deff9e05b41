// Copyright 2026 the PieGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-sector data model.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

/// One wedge of the pie/donut, holding its data and computed angles.
///
/// Angles are in radians, in kurbo's y-down screen convention: angle `0` is
/// the positive x axis and increasing angles sweep clockwise on screen. The
/// allocator places sector spans consecutively in `[PI/2, PI/2 + 2*PI)`, so
/// the first sector starts at 12 o'clock in the original data orientation.
///
/// A `Sector` is a plain value holder; [`crate::allocate`] fills in the
/// angles and [`PieGraph::layout`](crate::PieGraph::layout) consumes them. A
/// zero-value sector occupies zero angle but keeps its place in the ordering.
#[derive(Clone, Debug)]
pub struct Sector {
    /// Label rendered along the sector's arc.
    pub title: String,
    /// Data value; must be non-negative.
    pub value: f64,
    /// Fill color for the wedge.
    pub fill: Color,
    /// Color for the curved label glyphs.
    pub text_color: Color,
    /// Start of the angular span, in radians.
    pub start_angle: f64,
    /// End of the angular span, in radians (`end_angle >= start_angle`).
    pub end_angle: f64,
    /// Whether this is the priority overlay rather than a normal sector.
    pub is_priority: bool,
    /// Sub-values driving the priority overlay's span; one per overlapped
    /// sector. Empty on normal sectors.
    pub sub_values: Vec<f64>,
}

impl Sector {
    /// Creates a sector with no computed angles yet.
    pub fn new(
        title: impl Into<String>,
        value: f64,
        fill: Color,
        text_color: Color,
    ) -> Self {
        Self {
            title: title.into(),
            value,
            fill,
            text_color,
            start_angle: 0.0,
            end_angle: 0.0,
            is_priority: false,
            sub_values: Vec::new(),
        }
    }

    /// The sector's angular span in radians.
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// The midpoint of the sector's angular span.
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}
