// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Birdseye and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;
use serde::Serialize;

use super::config::{LayoutConfig, Units};
use super::grid::{end_fraction, position, start_fraction, year_bounds, GridCoordinate};
use crate::model::Event;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BarRect {
    pub left: f64,
    pub width: f64,
    pub top: f64,
    pub height: f64,
}

/// Where one event's bar lands in a single year row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarGeometry {
    rect: BarRect,
    start: GridCoordinate,
    end: GridCoordinate,
    rounded_start: bool,
    rounded_end: bool,
}

impl BarGeometry {
    pub fn rect(&self) -> BarRect {
        self.rect
    }

    /// Cell holding the (clamped) first day of the bar.
    pub fn start(&self) -> GridCoordinate {
        self.start
    }

    /// Cell holding the (clamped) last day of the bar.
    pub fn end(&self) -> GridCoordinate {
        self.end
    }

    /// True when the bar begins on the event's real first day.
    pub fn rounded_start(&self) -> bool {
        self.rounded_start
    }

    /// True when the bar ends on the event's real last day.
    pub fn rounded_end(&self) -> bool {
        self.rounded_end
    }
}

/// Horizontal offset of a day boundary: month column pitch plus a fraction of
/// the cell's own width, so gaps between cells never eat into a day.
fn x_at(date: NaiveDate, fraction: f64, config: &LayoutConfig) -> f64 {
    position(date).column() as f64 * config.cell_pitch() + fraction * config.cell_width
}

/// Computes the bar rectangle for `event` in the row of `year`.
///
/// The range is clamped to the year, so a bar that started last year begins
/// flush at the left edge and one that continues into next year ends flush at
/// the right edge. Lane height divides the band by the event's cluster size,
/// not by the busiest cluster of the year.
///
/// Returns `None` when the event does not reach into `year`, when its range
/// is inverted, or when `year` is outside the representable calendar.
pub fn bar_geometry(
    event: &Event,
    year: i32,
    lane: usize,
    cluster_max_lanes: usize,
    config: &LayoutConfig,
) -> Option<BarGeometry> {
    event.validate().ok()?;
    let (first_day, last_day) = year_bounds(year)?;
    if event.end() < first_day || event.start() > last_day {
        return None;
    }

    let bar_start = event.start().max(first_day);
    let bar_end = event.end().min(last_day);

    let left = x_at(bar_start, start_fraction(bar_start), config);
    let right = x_at(bar_end, end_fraction(bar_end), config);

    let lane_height = config.lane_band_height / cluster_max_lanes.max(1) as f64;
    let top = lane as f64 * lane_height + config.lane_top_offset;

    let rect = BarRect { left, width: right - left, top, height: lane_height };
    let rect = match config.units {
        Units::Pixels => rect,
        Units::Percent => to_percent(rect, config),
    };

    Some(BarGeometry {
        rect,
        start: position(bar_start),
        end: position(bar_end),
        rounded_start: bar_start == event.start(),
        rounded_end: bar_end == event.end(),
    })
}

fn to_percent(rect: BarRect, config: &LayoutConfig) -> BarRect {
    let row_width = config.row_width();
    let row_height = config.row_height();
    BarRect {
        left: rect.left / row_width * 100.0,
        width: rect.width / row_width * 100.0,
        top: rect.top / row_height * 100.0,
        height: rect.height / row_height * 100.0,
    }
}
