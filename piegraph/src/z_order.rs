// Copyright 2026 the PieGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated render ops.
//!
//! [`crate::RenderOp`]s carry an explicit `z_index` for paint ordering, so
//! platform adapters don't have to hand-tune draw order. Renderers should
//! sort by `z_index` with a stable sort; emission order breaks ties.

/// Normal sector wedge fills.
pub const SECTOR_FILL: i32 = 0;
/// Curved sector labels, above the wedges.
pub const SECTOR_LABELS: i32 = 40;
/// The priority overlay's gradient wedge, above sectors and their labels.
pub const PRIORITY_FILL: i32 = 60;
/// The priority overlay's curved label, topmost.
pub const PRIORITY_LABEL: i32 = 80;
