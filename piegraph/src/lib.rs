// Copyright 2026 the PieGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie/donut chart building blocks.
//!
//! `piegraph` is a pure geometry/layout engine for an interactive pie or donut
//! chart. It owns the parts that need algorithmic care and nothing else:
//! - **Angle allocation** converts sector values into a contiguous angular
//!   partition of the circle, starting at 12 o'clock and sweeping clockwise.
//! - **Arc paths** describe each sector as a closed annular wedge, plus an
//!   optional "priority" overlay wedge with a radial gradient fill.
//! - **Curved text layout** places label glyphs individually along an arc,
//!   truncating with an ellipsis when the sector runs out of room.
//! - **Hit testing** maps a point back to the sector (and/or priority
//!   overlay) that contains it.
//!
//! The host UI toolkit stays downstream: [`PieGraph::layout`] produces a list
//! of [`RenderOp`]s that a platform layer adapts to actual drawing calls, and
//! the platform's event layer forwards pointer-up points to
//! [`PieGraph::select`]. Compositing, image contexts, and event dispatch are
//! deliberately out of scope.

#![no_std]

extern crate alloc;

mod allocate;
mod chart;
mod curved_text;
#[cfg(not(feature = "std"))]
mod float;
mod measure;
mod render;
mod sector;
mod sector_path;
mod z_order;

pub use allocate::{allocate, angle_for_length, resolve_priority_span};
pub use chart::{PieDataSource, PieDelegate, PieGraph, PriorityDetails, SectorDetails};
pub use curved_text::{CurvedLabel, ELLIPSIS, GlyphPlacement};
pub use hit_test::{GeometrySnapshot, NOT_FOUND, Selection};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use render::{GlyphRun, RenderOp};
pub use sector::Sector;
pub use sector_path::{
    ChartMetrics, annular_wedge, clamp_inner_radius, priority_gradient, radial_wedge,
};
pub use z_order::*;
