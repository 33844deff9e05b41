// Copyright 2026 the PieGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart component: data loading, layout, and selection.
//!
//! [`PieGraph`] pulls sector data from a [`PieDataSource`], turns it into
//! [`RenderOp`]s on every layout pass, and pushes selections to a
//! [`PieDelegate`] when the platform layer forwards a pointer-up point.
//! Everything is single-threaded and synchronous; each layout pass rebuilds
//! the full geometry from scratch for the current bounds.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::{Brush, Color};

use crate::allocate::{allocate, resolve_priority_span};
use crate::curved_text::CurvedLabel;
use crate::hit_test::{GeometrySnapshot, Selection};
use crate::measure::TextMeasurer;
use crate::render::{GlyphRun, RenderOp};
use crate::sector::Sector;
use crate::sector_path::{
    ChartMetrics, DEFAULT_TOLERANCE, annular_wedge, clamp_inner_radius, priority_gradient,
    radial_wedge,
};
use crate::z_order;

/// Per-sector data pulled from a [`PieDataSource`].
#[derive(Clone, Debug)]
pub struct SectorDetails {
    /// Label rendered along the sector's arc.
    pub title: String,
    /// Data value; must be non-negative.
    pub value: f64,
    /// Wedge fill color.
    pub fill: Color,
    /// Label color.
    pub text_color: Color,
}

/// Priority overlay data pulled from a [`PieDataSource`].
#[derive(Clone, Debug)]
pub struct PriorityDetails {
    /// Label rendered along the overlay's rim.
    pub title: String,
    /// Sub-values, one per overlapped sector.
    pub values: Vec<f64>,
    /// Gradient rim color.
    pub fill: Color,
    /// Label color.
    pub text_color: Color,
    /// First overlapped sector index (inclusive).
    pub from_index: usize,
    /// Last overlapped sector index (inclusive).
    pub to_index: usize,
}

/// The pull-based data source the chart loads from.
pub trait PieDataSource {
    /// Number of sectors to show.
    fn sector_count(&self) -> usize;

    /// Details for the sector at `index`, for `index` in
    /// `0..sector_count()`.
    fn sector_details(&self, index: usize) -> SectorDetails;

    /// Whether a priority sector overlays the chart. Defaults to `false`.
    fn has_priority_sector(&self) -> bool {
        false
    }

    /// Details for the priority sector.
    ///
    /// Only consulted when [`has_priority_sector`](Self::has_priority_sector)
    /// returns `true`; returning `None` drops the overlay.
    fn priority_details(&self) -> Option<PriorityDetails> {
        None
    }
}

/// The push-based delegate notified of selections.
pub trait PieDelegate {
    /// Called at most once per forwarded point.
    ///
    /// `index` is [`NOT_FOUND`](crate::NOT_FOUND) when the selection is
    /// priority-only, with no concrete sector underneath.
    fn on_sector_selected(&mut self, index: isize, is_priority: bool);
}

/// An interactive pie/donut chart.
///
/// Lifecycle per data snapshot: [`reload`](Self::reload) to clear,
/// [`load`](Self::load) to pull from the data source, then
/// [`layout`](Self::layout) once per redraw and [`select`](Self::select) per
/// pointer release. The chart exclusively owns its sector list and retained
/// geometry; nothing outlives one load/render cycle.
#[derive(Debug)]
pub struct PieGraph {
    sectors: Vec<Sector>,
    priority: Option<Sector>,
    priority_range: (usize, usize),
    total_value: f64,
    inner_setting: f64,
    font_size: f64,
    snapshot: GeometrySnapshot,
}

impl Default for PieGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl PieGraph {
    /// Base font size for sector labels; the priority label drops 6 from it.
    pub const DEFAULT_FONT_SIZE: f64 = 32.0;

    /// Creates an empty chart.
    pub fn new() -> Self {
        Self {
            sectors: Vec::new(),
            priority: None,
            priority_range: (0, 0),
            total_value: 0.0,
            inner_setting: 0.0,
            font_size: Self::DEFAULT_FONT_SIZE,
            snapshot: GeometrySnapshot::default(),
        }
    }

    /// Sets the raw inner radius; the effective value is clamped per
    /// [`inner_radius`](Self::inner_radius).
    pub fn set_inner_radius(&mut self, inner_radius: f64) {
        self.inner_setting = inner_radius;
    }

    /// The effective inner radius for the given bounds: negative settings
    /// collapse to `0`, settings above 90% of the chart radius collapse to
    /// `0.9 * radius`, anything in between is returned exactly.
    pub fn inner_radius(&self, bounds: Rect) -> f64 {
        let radius = bounds.width().min(bounds.height()) / 2.0;
        clamp_inner_radius(self.inner_setting, radius)
    }

    /// Sets the base label font size.
    pub fn set_font_size(&mut self, font_size: f64) {
        self.font_size = font_size;
    }

    /// The loaded sectors, with whatever angles the last layout assigned.
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// Sum of all normal sector values.
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// The geometry retained by the last layout pass.
    pub fn snapshot(&self) -> &GeometrySnapshot {
        &self.snapshot
    }

    /// Pulls everything from the data source.
    ///
    /// Loading accumulates onto the current state; call
    /// [`reload`](Self::reload) first when replacing a snapshot. A source
    /// reporting zero sectors leaves the chart empty.
    pub fn load(&mut self, source: &dyn PieDataSource) {
        for index in 0..source.sector_count() {
            let details = source.sector_details(index);
            self.total_value += details.value;
            self.sectors.push(Sector::new(
                details.title,
                details.value,
                details.fill,
                details.text_color,
            ));
        }

        if source.has_priority_sector()
            && let Some(details) = source.priority_details()
        {
            let mut sector = Sector::new(details.title, 0.0, details.fill, details.text_color);
            sector.is_priority = true;
            sector.sub_values = details.values;
            self.priority = Some(sector);
            self.priority_range = (details.from_index, details.to_index);
        }
    }

    /// Clears all loaded data and retained geometry ahead of the next load.
    pub fn reload(&mut self) {
        self.sectors.clear();
        self.priority = None;
        self.priority_range = (0, 0);
        self.total_value = 0.0;
        self.snapshot.clear();
    }

    /// Runs one full layout pass for `bounds`.
    ///
    /// Allocates angles, resolves the priority span, builds every wedge path
    /// and curved label, retains the geometry for hit testing, and returns
    /// the render ops in paint order groups (fills, labels, then the
    /// priority overlay). A zero total renders empty rather than dividing by
    /// zero.
    pub fn layout(&mut self, bounds: Rect, measurer: &dyn TextMeasurer) -> Vec<RenderOp> {
        self.snapshot.clear();
        let mut ops = Vec::new();
        if self.total_value <= 0.0 || self.sectors.is_empty() {
            return ops;
        }

        let metrics = ChartMetrics::new(bounds, self.inner_setting);
        allocate(&mut self.sectors, self.total_value);

        for sector in &self.sectors {
            let path = annular_wedge(
                metrics.center,
                metrics.inner_radius,
                metrics.outer_radius,
                sector.start_angle,
                sector.end_angle,
                DEFAULT_TOLERANCE,
            );
            ops.push(RenderOp::FillPath {
                path: path.clone(),
                brush: Brush::Solid(sector.fill),
                z_index: z_order::SECTOR_FILL,
            });
            self.snapshot.push_sector(path);
        }

        for sector in &self.sectors {
            let label = CurvedLabel::for_sector(
                metrics.outer_radius,
                metrics.inner_radius,
                sector.start_angle,
                sector.end_angle,
                self.font_size,
            );
            push_label(&mut ops, metrics, label, sector, measurer, z_order::SECTOR_LABELS);
        }

        if let Some(mut priority) = self.priority.take() {
            let span = resolve_priority_span(
                &self.sectors,
                &priority.sub_values,
                self.total_value,
                self.priority_range.0,
                self.priority_range.1,
            );
            if let Some((start, end)) = span {
                priority.start_angle = start;
                priority.end_angle = end;

                let path = radial_wedge(
                    metrics.center,
                    metrics.priority_radius,
                    start,
                    end,
                    DEFAULT_TOLERANCE,
                );
                ops.push(RenderOp::FillPath {
                    path: path.clone(),
                    brush: priority_gradient(metrics.center, metrics.radius, priority.fill),
                    z_index: z_order::PRIORITY_FILL,
                });
                self.snapshot.set_priority(path);

                let label = CurvedLabel::for_priority(
                    metrics.priority_radius,
                    self.font_size,
                    start,
                    end,
                );
                push_label(
                    &mut ops,
                    metrics,
                    label,
                    &priority,
                    measurer,
                    z_order::PRIORITY_LABEL,
                );
            }
            self.priority = Some(priority);
        }

        ops
    }

    /// Hit tests `point` against the last layout's retained geometry.
    pub fn hit_test(&self, point: Point) -> Selection {
        self.snapshot.hit_test(point)
    }

    /// Hit tests `point` and notifies the delegate.
    ///
    /// The delegate is called at most once, and only when something was hit:
    /// either a concrete sector index, or the not-found sentinel with
    /// `is_priority` set for priority-only hits. Complete misses stay
    /// silent.
    pub fn select(&self, point: Point, delegate: &mut dyn PieDelegate) -> Selection {
        let selection = self.snapshot.hit_test(point);
        if selection.is_hit() {
            delegate.on_sector_selected(selection.index, selection.is_priority);
        }
        selection
    }
}

fn push_label(
    ops: &mut Vec<RenderOp>,
    metrics: ChartMetrics,
    label: CurvedLabel,
    sector: &Sector,
    measurer: &dyn TextMeasurer,
    z_index: i32,
) {
    let glyphs = label.place(&sector.title, measurer);
    if glyphs.is_empty() {
        return;
    }
    ops.push(RenderOp::GlyphArc {
        run: GlyphRun {
            center: metrics.center,
            radius: label.text_radius,
            // Labels are laid out on doubled radii; composite at half.
            scale: 0.5,
            font_size: label.font_size,
            fill: sector.text_color,
            glyphs,
        },
        z_index,
    });
}
