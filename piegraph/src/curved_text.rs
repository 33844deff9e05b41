// Copyright 2026 the PieGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curved text layout.
//!
//! Sector titles are not shaped as a straight run: each glyph is rotated and
//! positioned individually along a circular arc centered within the sector's
//! angular span. When the title is wider than the arc allows, layout places
//! as many glyphs as fit and substitutes a single ellipsis for the rest.
//!
//! Layout happens on a doubled radius (the original renderer drew labels into
//! a double-size backing image and composited it down), so consumers scale
//! glyph positions and font size by the run's `scale` of `0.5`; see
//! [`crate::GlyphRun`].

extern crate alloc;

use alloc::vec::Vec;

use core::f64::consts::FRAC_PI_2;

use crate::measure::TextMeasurer;

/// The glyph substituted when a title is truncated.
pub const ELLIPSIS: char = '…';

/// One glyph placed along a label arc.
///
/// `rotation` is the glyph's upright rotation in radians; the glyph's center
/// sits at the label radius along the rotated up axis, so a rotation of
/// `angle + PI/2` puts the glyph at chart angle `angle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPlacement {
    /// The character to draw.
    pub glyph: char,
    /// Upright rotation in radians.
    pub rotation: f64,
    /// Measured advance width, in layout (doubled-radius) units.
    pub width: f64,
}

/// Layout inputs for one curved label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvedLabel {
    /// Radius the glyph centers follow, in layout (doubled) units.
    pub text_radius: f64,
    /// Start of the label's angular span.
    pub start_angle: f64,
    /// End of the label's angular span.
    pub end_angle: f64,
    /// Font size glyphs are measured at.
    pub font_size: f64,
}

impl CurvedLabel {
    /// The label geometry for a normal sector's ring.
    ///
    /// The title sits on the ring midline nudged out by half the font size:
    /// `title_radius = (outer + inner + font_size / 2) / 2`, doubled for the
    /// backing-image layout space.
    pub fn for_sector(
        outer_radius: f64,
        inner_radius: f64,
        start_angle: f64,
        end_angle: f64,
        font_size: f64,
    ) -> Self {
        let title_radius = (outer_radius + inner_radius + font_size / 2.0) / 2.0;
        Self {
            text_radius: 2.0 * title_radius,
            start_angle,
            end_angle,
            font_size,
        }
    }

    /// The label geometry for the priority overlay.
    ///
    /// The priority label hugs the overlay rim and drops the font size by 6
    /// relative to the sector labels.
    pub fn for_priority(
        priority_radius: f64,
        base_font_size: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            text_radius: 2.0 * (priority_radius - base_font_size * 0.25),
            start_angle,
            end_angle,
            font_size: base_font_size - 6.0,
        }
    }

    /// The pixel length available along the arc at the label radius.
    pub fn arc_length(&self) -> f64 {
        self.text_radius * (self.end_angle - self.start_angle)
    }

    /// Places `title`'s glyphs along the arc.
    ///
    /// The full title is centered on the sector's mid angle when it fits;
    /// otherwise layout starts at the sector's start angle and truncates.
    /// Each glyph advances by half its width before its placement angle is
    /// computed and half after, so glyphs sit at the angle of their
    /// horizontal center. A glyph that would overrun the arc is replaced by a
    /// single [`ELLIPSIS`] and layout stops; an empty title (or a degenerate
    /// span) places nothing.
    pub fn place(&self, title: &str, measurer: &dyn TextMeasurer) -> Vec<GlyphPlacement> {
        let arc_length = self.arc_length();
        if title.is_empty() || arc_length <= 0.0 || self.text_radius <= 0.0 {
            return Vec::new();
        }

        let (full_width, _) = measurer.measure(title, self.font_size);
        let angle_for_text = 1.5 * full_width / self.text_radius;
        let mid_angle = (self.start_angle + self.end_angle) / 2.0;
        let mut title_start = mid_angle + FRAC_PI_2 - angle_for_text / 2.0;
        if angle_for_text > self.end_angle - self.start_angle {
            title_start = self.start_angle + FRAC_PI_2;
        }

        let mut placed = Vec::new();
        let mut consumed = 0.0;
        for glyph in title.chars() {
            let width = measurer.glyph_width(glyph, self.font_size);
            if consumed + width > arc_length {
                let width = measurer.glyph_width(ELLIPSIS, self.font_size);
                placed.push(GlyphPlacement {
                    glyph: ELLIPSIS,
                    rotation: title_start + (consumed + width / 2.0) / self.text_radius,
                    width,
                });
                break;
            }
            consumed += width / 2.0;
            placed.push(GlyphPlacement {
                glyph,
                rotation: title_start + consumed / self.text_radius,
                width,
            });
            consumed += width / 2.0;
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;

    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use crate::measure::HeuristicTextMeasurer;

    use super::*;

    fn label(text_radius: f64, span: f64) -> CurvedLabel {
        CurvedLabel {
            text_radius,
            start_angle: FRAC_PI_2,
            end_angle: FRAC_PI_2 + span,
            font_size: 32.0,
        }
    }

    #[test]
    fn oversized_title_truncates_with_an_ellipsis() {
        // "HELLO" at 0.6em/glyph is 96px; the arc only offers 100 * PI/4.
        let placed = label(100.0, FRAC_PI_4).place("HELLO", &HeuristicTextMeasurer);

        let letters: String = placed
            .iter()
            .map(|p| p.glyph)
            .filter(|&g| g != ELLIPSIS)
            .collect();
        assert!(letters.chars().count() < 5, "must place fewer than 5 letters");
        assert_eq!(placed.last().map(|p| p.glyph), Some(ELLIPSIS));
        assert_eq!(letters, "HELL");
    }

    #[test]
    fn title_that_fits_is_complete_and_pulled_toward_the_midline() {
        let label = label(100.0, PI);
        let placed = label.place("HI", &HeuristicTextMeasurer);

        let glyphs: String = placed.iter().map(|p| p.glyph).collect();
        assert_eq!(glyphs, "HI");

        // Centering starts the run well past the left-aligned fallback
        // position, and the run never escapes the sector's span.
        assert!(placed[0].rotation > label.start_angle + FRAC_PI_2);
        assert!(placed[1].rotation <= label.end_angle + FRAC_PI_2);
    }

    #[test]
    fn rotations_increase_along_the_arc() {
        let placed = label(200.0, PI).place("ABCDE", &HeuristicTextMeasurer);
        assert_eq!(placed.len(), 5);
        for pair in placed.windows(2) {
            assert!(pair[1].rotation > pair[0].rotation, "glyphs must advance");
        }
    }

    #[test]
    fn empty_title_places_nothing() {
        assert!(label(100.0, PI).place("", &HeuristicTextMeasurer).is_empty());
    }

    #[test]
    fn degenerate_span_places_nothing() {
        assert!(label(100.0, 0.0).place("ABC", &HeuristicTextMeasurer).is_empty());
    }

    #[test]
    fn first_glyph_wider_than_the_arc_yields_only_an_ellipsis() {
        // One glyph at font 32 is 19.2px; a 0.1 radian span at radius 100
        // offers only 10px.
        let placed = label(100.0, 0.1).place("WIDE", &HeuristicTextMeasurer);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].glyph, ELLIPSIS);
    }

    #[test]
    fn sector_label_radius_doubles_the_ring_midline() {
        let label = CurvedLabel::for_sector(80.0, 20.0, 0.0, PI, 32.0);
        // (80 + 20 + 16) / 2 = 58, doubled.
        assert_eq!(label.text_radius, 116.0);
        assert_eq!(label.font_size, 32.0);
    }

    #[test]
    fn priority_label_shrinks_the_font_and_hugs_the_rim() {
        let label = CurvedLabel::for_priority(95.0, 32.0, 0.0, PI);
        // (95 - 8) doubled.
        assert_eq!(label.text_radius, 174.0);
        assert_eq!(label.font_size, 26.0);
    }
}
