// Copyright 2026 the PieGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for curved label layout.
//!
//! Curved text layout needs per-glyph advance widths to walk a title along
//! its arc, but shaping belongs downstream with the renderer. Label layout
//! therefore accepts a measurer callback; callers can plug in a real text
//! measurement backend, or use [`HeuristicTextMeasurer`].

/// A minimal text measurement interface used by curved label layout.
pub trait TextMeasurer {
    /// Returns `(width, height)` in the same coordinate system as the chart.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);

    /// Returns the advance width of a single glyph.
    ///
    /// The default forwards to [`measure`](Self::measure); backends with real
    /// glyph metrics can override it.
    fn glyph_width(&self, glyph: char, font_size: f64) -> f64 {
        let mut buf = [0_u8; 4];
        self.measure(glyph.encode_utf8(&mut buf), font_size).0
    }
}

/// A tiny heuristic text measurer suitable for demos and tests.
///
/// It assumes an average glyph width of ~0.6em and height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn glyph_width_matches_single_char_measurement() {
        let measurer = HeuristicTextMeasurer;
        let (w, _) = measurer.measure("W", 32.0);
        assert_eq!(measurer.glyph_width('W', 32.0), w);
        // Multi-byte glyphs measure as one glyph, not one byte per glyph.
        assert_eq!(measurer.glyph_width('…', 32.0), w);
    }
}
