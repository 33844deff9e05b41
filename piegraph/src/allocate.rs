// Copyright 2026 the PieGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle allocation.
//!
//! Converts sector values into a contiguous angular partition of the full
//! circle: sector `i` spans `2*PI * value[i] / total`, spans are laid out
//! consecutively starting at `PI/2` (12 o'clock in the chart's data
//! orientation, clockwise positive), and the priority overlay is resolved to
//! a single sub-span anchored on the first/last overlapped sectors.

use core::f64::consts::{FRAC_PI_2, PI};

use crate::sector::Sector;

/// The angle subtended by `value` out of `total`, i.e. `2*PI * value / total`.
///
/// Linear in `value`. Returns `0.0` when `total` is not positive so a
/// degenerate data set never produces NaN angles.
pub fn angle_for_length(value: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    2.0 * PI * value / total
}

/// Assigns consecutive angular spans to `sectors`.
///
/// `sectors[0]` starts at `PI/2` and each subsequent sector starts where the
/// previous one ends, so the spans partition `[PI/2, PI/2 + 2*PI)` with no
/// gaps or overlaps (up to floating point). When `total` is not positive the
/// sectors are left untouched; the chart renders empty in that case.
pub fn allocate(sectors: &mut [Sector], total: f64) {
    if total <= 0.0 {
        return;
    }
    let mut start = FRAC_PI_2;
    for sector in sectors {
        let span = angle_for_length(sector.value, total);
        sector.start_angle = start;
        sector.end_angle = start + span;
        start += span;
    }
}

/// Resolves the priority overlay's angular span.
///
/// `sub_values` holds one value per overlapped sector, converted to sub-arc
/// spans with [`angle_for_length`]. `from`/`to` index into `sectors` and are
/// clamped to the valid range before any access.
///
/// - Single-sector range: a sub-arc smaller than the sector's span is
///   centered within it; otherwise the overlay covers the whole sector.
/// - Multi-sector range: the overlay starts at the first sector's end minus
///   the first sub-arc (never before that sector's start) and ends at the
///   last sector's start plus the last sub-arc (never past that sector's
///   end). Intermediate sectors do not constrain the span.
///
/// Returns `None` when there is nothing to overlay (no sectors, no
/// sub-values, or a non-positive total).
pub fn resolve_priority_span(
    sectors: &[Sector],
    sub_values: &[f64],
    total: f64,
    from: usize,
    to: usize,
) -> Option<(f64, f64)> {
    if sectors.is_empty() || sub_values.is_empty() || total <= 0.0 {
        return None;
    }
    let last_index = sectors.len() - 1;
    let from = from.min(last_index);
    let to = to.min(last_index).max(from);

    if from == to {
        let sector = &sectors[from];
        let sub = angle_for_length(sub_values[0], total);
        if sub < sector.span() {
            let mid = sector.mid_angle();
            return Some((mid - sub / 2.0, mid + sub / 2.0));
        }
        return Some((sector.start_angle, sector.end_angle));
    }

    let first = &sectors[from];
    let first_sub = angle_for_length(sub_values[0], total);
    let start = (first.end_angle - first_sub).max(first.start_angle);

    let last = &sectors[to];
    let last_sub = angle_for_length(sub_values[(to - from).min(sub_values.len() - 1)], total);
    let end = (last.start_angle + last_sub).min(last.end_angle);

    Some((start, end))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use peniko::color::palette::css;

    use super::*;

    fn sectors_from(values: &[f64]) -> Vec<Sector> {
        values
            .iter()
            .map(|&v| Sector::new("", v, css::TOMATO, css::WHITE))
            .collect()
    }

    #[test]
    fn values_1_1_2_partition_from_twelve_oclock() {
        let mut sectors = sectors_from(&[1.0, 1.0, 2.0]);
        allocate(&mut sectors, 4.0);

        assert!((sectors[0].start_angle - FRAC_PI_2).abs() < 1e-12);
        assert!((sectors[0].end_angle - PI).abs() < 1e-12);
        assert!((sectors[1].start_angle - PI).abs() < 1e-12);
        assert!((sectors[1].end_angle - 1.5 * PI).abs() < 1e-12);
        assert!((sectors[2].start_angle - 1.5 * PI).abs() < 1e-12);
        assert!((sectors[2].end_angle - 2.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn spans_are_contiguous_and_sum_to_a_full_circle() {
        let values = [3.0, 0.0, 1.5, 2.25, 0.25, 7.0];
        let total: f64 = values.iter().sum();
        let mut sectors = sectors_from(&values);
        allocate(&mut sectors, total);

        let mut span_sum = 0.0;
        for pair in sectors.windows(2) {
            assert!(
                (pair[1].start_angle - pair[0].end_angle).abs() < 1e-12,
                "sectors must be contiguous"
            );
        }
        for sector in &sectors {
            assert!(sector.end_angle >= sector.start_angle, "spans never negative");
            span_sum += sector.span();
        }
        assert!((span_sum - 2.0 * PI).abs() < 1e-9, "spans must cover the circle");
    }

    #[test]
    fn angle_for_length_is_linear() {
        let total = 7.5;
        let a = angle_for_length(1.25, total);
        let b = angle_for_length(3.5, total);
        let sum = angle_for_length(1.25 + 3.5, total);
        assert!((a + b - sum).abs() < 1e-12, "angle allocation must be additive");
    }

    #[test]
    fn zero_total_allocates_nothing() {
        let mut sectors = sectors_from(&[0.0, 0.0]);
        allocate(&mut sectors, 0.0);
        for sector in &sectors {
            assert_eq!(sector.start_angle, 0.0);
            assert_eq!(sector.end_angle, 0.0);
            assert!(sector.start_angle.is_finite(), "no NaN on zero totals");
        }
        assert_eq!(angle_for_length(1.0, 0.0), 0.0);
    }

    #[test]
    fn single_sector_priority_is_centered() {
        let mut sectors = sectors_from(&[1.0, 1.0, 2.0]);
        allocate(&mut sectors, 4.0);

        // Sector 1 spans [PI, 1.5*PI]; a sub-value of 0.5 wants PI/4 of arc.
        let (start, end) =
            resolve_priority_span(&sectors, &[0.5], 4.0, 1, 1).expect("span expected");
        let sector = &sectors[1];
        assert!(start > sector.start_angle);
        assert!(end < sector.end_angle);
        let sector_mid = sector.mid_angle();
        let overlay_mid = (start + end) / 2.0;
        assert!(
            (overlay_mid - sector_mid).abs() < 1e-12,
            "overlay must be symmetric about the sector midpoint"
        );
        assert!((end - start - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn single_sector_priority_caps_at_the_full_span() {
        let mut sectors = sectors_from(&[1.0, 1.0, 2.0]);
        allocate(&mut sectors, 4.0);

        // Sub-value 3.0 wants 1.5*PI, more than sector 0's PI/2.
        let (start, end) =
            resolve_priority_span(&sectors, &[3.0], 4.0, 0, 0).expect("span expected");
        assert!((start - sectors[0].start_angle).abs() < 1e-12);
        assert!((end - sectors[0].end_angle).abs() < 1e-12);
    }

    #[test]
    fn multi_sector_priority_anchors_on_first_and_last() {
        let mut sectors = sectors_from(&[1.0, 1.0, 2.0]);
        allocate(&mut sectors, 4.0);

        // First sub-arc reaches back PI/8 from sector 0's end; last reaches
        // PI/4 into sector 2.
        let (start, end) =
            resolve_priority_span(&sectors, &[0.25, 9.0, 0.5], 4.0, 0, 2).expect("span expected");
        assert!((start - (sectors[0].end_angle - PI / 8.0)).abs() < 1e-12);
        assert!((end - (sectors[2].start_angle + PI / 4.0)).abs() < 1e-12);
    }

    #[test]
    fn multi_sector_priority_clamps_to_the_anchor_sectors() {
        let mut sectors = sectors_from(&[1.0, 1.0, 2.0]);
        allocate(&mut sectors, 4.0);

        // Oversized sub-arcs must not escape the first/last sectors.
        let (start, end) =
            resolve_priority_span(&sectors, &[10.0, 0.0, 10.0], 4.0, 0, 2).expect("span expected");
        assert!((start - sectors[0].start_angle).abs() < 1e-12);
        assert!((end - sectors[2].end_angle).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_priority_indices_are_clamped() {
        let mut sectors = sectors_from(&[1.0, 1.0, 2.0]);
        allocate(&mut sectors, 4.0);

        let clamped = resolve_priority_span(&sectors, &[0.5], 4.0, 9, 12);
        let last = resolve_priority_span(&sectors, &[0.5], 4.0, 2, 2);
        assert_eq!(clamped, last, "indices past the end collapse to the last sector");
    }

    #[test]
    fn priority_span_needs_sectors_and_sub_values() {
        assert_eq!(resolve_priority_span(&[], &[1.0], 1.0, 0, 0), None);
        let mut sectors = sectors_from(&[1.0]);
        allocate(&mut sectors, 1.0);
        assert_eq!(resolve_priority_span(&sectors, &[], 1.0, 0, 0), None);
        assert_eq!(resolve_priority_span(&sectors, &[1.0], 0.0, 0, 0), None);
    }
}
