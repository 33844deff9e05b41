// Copyright 2026 the PieGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc path construction.
//!
//! Each normal sector is a closed annular wedge: the outer arc swept
//! clockwise, the inner arc swept back counter-clockwise, then closed. An
//! inner radius of `0` degenerates to a plain pie slice. The priority overlay
//! is a radial wedge from the chart center, filled with a radial gradient
//! that fades from transparent near the center to the sector color at the
//! rim.

use kurbo::{BezPath, Circle, Point, Rect, Shape};
use peniko::{Brush, Color, Gradient};

/// Curve flattening tolerance used when converting wedges to `BezPath`s.
pub(crate) const DEFAULT_TOLERANCE: f64 = 0.1;

/// Radii and center derived from the chart bounds for one layout pass.
///
/// These depend on the current bounds, so every layout pass derives a fresh
/// set; retained geometry is never reused across passes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartMetrics {
    /// Chart center in the bounds' coordinate space.
    pub center: Point,
    /// Half the smaller bounds dimension.
    pub radius: f64,
    /// Outer radius of the normal sector ring (`0.8 * radius`).
    pub outer_radius: f64,
    /// Effective inner radius after clamping (see [`clamp_inner_radius`]).
    pub inner_radius: f64,
    /// Outer radius of the priority overlay wedge (`0.95 * radius`).
    pub priority_radius: f64,
}

impl ChartMetrics {
    /// Derives metrics from the chart bounds and the raw inner radius setting.
    pub fn new(bounds: Rect, inner_setting: f64) -> Self {
        let radius = bounds.width().min(bounds.height()) / 2.0;
        Self {
            center: bounds.center(),
            radius,
            outer_radius: 0.8 * radius,
            inner_radius: clamp_inner_radius(inner_setting, radius),
            priority_radius: 0.95 * radius,
        }
    }
}

/// Clamps the user's inner radius setting to `[0, 0.9 * radius]`.
///
/// Negative settings collapse to `0` (a pie with no hole); settings above the
/// 90% cap collapse to `0.9 * radius` so the ring never vanishes entirely.
pub fn clamp_inner_radius(inner: f64, radius: f64) -> f64 {
    let cap = 0.9 * radius;
    if inner < 0.0 {
        0.0
    } else if inner > cap {
        cap
    } else {
        inner
    }
}

/// Builds the closed annular wedge for one sector.
pub fn annular_wedge(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
    tolerance: f64,
) -> BezPath {
    let circle = Circle::new(center, outer_radius);
    let segment = circle.segment(inner_radius, start_angle, end_angle - start_angle);
    segment.path_elements(tolerance).collect()
}

/// Builds the priority overlay's radial wedge, spanning from the center out
/// to `radius`.
pub fn radial_wedge(
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    tolerance: f64,
) -> BezPath {
    annular_wedge(center, 0.0, radius, start_angle, end_angle, tolerance)
}

/// The priority overlay's fill: a radial gradient centered on the chart,
/// transparent from the center out to `0.1 * radius` and ramping to `rim` at
/// the full `radius`. The wedge path clips it to the overlay's span.
pub fn priority_gradient(center: Point, radius: f64, rim: Color) -> Brush {
    let gradient = Gradient::new_two_point_radial(
        (center.x, center.y),
        (0.1 * radius) as f32,
        (center.x, center.y),
        radius as f32,
    )
    .with_stops([Color::TRANSPARENT, rim]);
    Brush::Gradient(gradient)
}

#[cfg(test)]
mod tests {
    extern crate std;

    #[cfg(not(feature = "std"))]
    use crate::float::FloatExt;

    use core::f64::consts::{FRAC_PI_2, PI};

    use peniko::color::palette::css;

    use super::*;

    fn point_at(center: Point, radius: f64, angle: f64) -> Point {
        Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
    }

    #[test]
    fn annular_wedge_contains_points_in_its_ring_only() {
        let center = Point::new(100.0, 100.0);
        let path = annular_wedge(center, 30.0, 80.0, FRAC_PI_2, PI, DEFAULT_TOLERANCE);

        let mid_angle = 0.75 * PI;
        assert!(path.contains(point_at(center, 55.0, mid_angle)));
        // Inside the hole.
        assert!(!path.contains(point_at(center, 15.0, mid_angle)));
        // Beyond the outer radius.
        assert!(!path.contains(point_at(center, 90.0, mid_angle)));
        // Opposite side of the circle.
        assert!(!path.contains(point_at(center, 55.0, mid_angle + PI)));
    }

    #[test]
    fn radial_wedge_reaches_the_center() {
        let center = Point::new(0.0, 0.0);
        let path = radial_wedge(center, 95.0, FRAC_PI_2, FRAC_PI_2 + 1.0, DEFAULT_TOLERANCE);
        assert!(path.contains(point_at(center, 1.0, FRAC_PI_2 + 0.5)));
        assert!(path.contains(point_at(center, 90.0, FRAC_PI_2 + 0.5)));
        assert!(!path.contains(point_at(center, 90.0, FRAC_PI_2 - 0.5)));
    }

    #[test]
    fn zero_span_wedge_contains_nothing() {
        let center = Point::new(50.0, 50.0);
        let path = annular_wedge(center, 0.0, 80.0, PI, PI, DEFAULT_TOLERANCE);
        assert!(!path.contains(point_at(center, 40.0, PI + 0.05)));
        assert!(!path.contains(point_at(center, 40.0, PI - 0.05)));
    }

    #[test]
    fn metrics_follow_the_smaller_bounds_dimension() {
        let metrics = ChartMetrics::new(Rect::new(0.0, 0.0, 300.0, 200.0), 0.0);
        assert_eq!(metrics.radius, 100.0);
        assert_eq!(metrics.outer_radius, 80.0);
        assert_eq!(metrics.priority_radius, 95.0);
        assert_eq!(metrics.center, Point::new(150.0, 100.0));
    }

    #[test]
    fn inner_radius_clamps_to_zero_and_ninety_percent() {
        assert_eq!(clamp_inner_radius(-5.0, 100.0), 0.0);
        assert_eq!(clamp_inner_radius(150.0, 100.0), 90.0);
        assert_eq!(clamp_inner_radius(30.0, 100.0), 30.0);
    }

    #[test]
    fn priority_gradient_spans_a_tenth_to_the_full_radius() {
        let Brush::Gradient(gradient) = priority_gradient(Point::ZERO, 100.0, css::GOLD)
        else {
            panic!("expected a gradient brush");
        };
        let peniko::GradientKind::Radial(peniko::RadialGradientPosition {
            start_radius,
            end_radius,
            ..
        }) = gradient.kind
        else {
            panic!("expected a radial gradient");
        };
        assert_eq!(start_radius, 10.0);
        assert_eq!(end_radius, 100.0);
        assert_eq!(gradient.stops.len(), 2);
    }
}
