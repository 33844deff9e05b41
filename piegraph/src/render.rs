// Copyright 2026 the PieGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderable output of a layout pass.
//!
//! The chart never draws; it emits [`RenderOp`]s that a platform layer
//! adapts to actual canvas/scene calls. Ops are plain values, so a renderer
//! can replay them as often as it likes for one data snapshot.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{BezPath, Point};
use peniko::{Brush, Color};

use crate::curved_text::GlyphPlacement;

/// A run of glyphs placed along a circular arc.
///
/// Placements come from [`crate::CurvedLabel::place`] in a doubled-radius
/// layout space; `scale` (0.5) maps them back onto the chart, matching the
/// original renderer's double-size backing image. [`Self::glyph_position`]
/// and [`Self::rendered_font_size`] apply the scale for consumers.
#[derive(Clone, Debug)]
pub struct GlyphRun {
    /// Chart center the arc is measured from.
    pub center: Point,
    /// Arc radius in layout units.
    pub radius: f64,
    /// Layout-space to chart-space scale factor.
    pub scale: f64,
    /// Font size in layout units.
    pub font_size: f64,
    /// Glyph fill color.
    pub fill: Color,
    /// The placed glyphs, in reading order.
    pub glyphs: Vec<GlyphPlacement>,
}

impl GlyphRun {
    /// The font size to draw at, in chart units.
    pub fn rendered_font_size(&self) -> f64 {
        self.font_size * self.scale
    }

    /// The chart-space center of a placed glyph.
    ///
    /// A placement's rotation points the glyph's up axis at the chart
    /// center, so the glyph sits at `center + r * (sin t, -cos t)`.
    pub fn glyph_position(&self, placement: &GlyphPlacement) -> Point {
        let r = self.radius * self.scale;
        Point::new(
            self.center.x + r * placement.rotation.sin(),
            self.center.y - r * placement.rotation.cos(),
        )
    }
}

/// One renderable primitive produced by a layout pass.
#[derive(Clone, Debug)]
pub enum RenderOp {
    /// Fill a closed path with a brush.
    FillPath {
        /// The wedge outline.
        path: BezPath,
        /// Solid sector fill or the priority overlay's radial gradient.
        brush: Brush,
        /// Paint order hint; see [`SECTOR_FILL`](crate::SECTOR_FILL) and friends.
        z_index: i32,
    },
    /// Draw a curved label.
    GlyphArc {
        /// The glyph run.
        run: GlyphRun,
        /// Paint order hint.
        z_index: i32,
    },
}

impl RenderOp {
    /// The op's paint order hint.
    pub fn z_index(&self) -> i32 {
        match self {
            Self::FillPath { z_index, .. } | Self::GlyphArc { z_index, .. } => *z_index,
        }
    }
}
