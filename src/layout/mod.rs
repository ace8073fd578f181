// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Birdseye and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout algorithms for the year-by-month event grid.
//!
//! This module maps dates onto the grid, clusters overlapping events, assigns lanes and
//! computes bar geometry for one year row at a time.

pub mod cluster;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod grid;
pub mod lanes;

pub use cluster::{cluster, intersects_year};
pub use config::{LayoutConfig, LayoutConfigError, Units};
pub use engine::{
    compute_layout, compute_layouts, EventBar, EventLayoutInfo, LayoutError, SkipReason,
    SkippedEvent, YearLayout,
};
pub use geometry::{bar_geometry, BarGeometry, BarRect};
pub use grid::{
    days_in_month, end_fraction, generate_grid_cells, month_index, month_name, position,
    start_fraction, week_position, year_bounds, GridCell, GridCoordinate, WeekCoordinate,
    MONTH_NAMES,
};
pub use lanes::{assign, placement_order, LaneAssignment, OVERFLOW_LANE};
