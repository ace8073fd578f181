// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Birdseye and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Date arithmetic for the year-by-month grid.
//!
//! Each year is one row of twelve month cells. A date maps to its cell plus a
//! fraction inside that cell. Fractions use the month's own day count as the
//! denominator, so they are only comparable within a single month.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const MONTHS_PER_YEAR: u32 = 12;

pub const MONTH_NAMES: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// `(year, month)` cell a date belongs to. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GridCoordinate {
    year: i32,
    month: u32,
}

impl GridCoordinate {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Zero-based column within the year row.
    pub fn column(&self) -> usize {
        (self.month - 1) as usize
    }
}

/// ISO-8601 `(week-year, week)` cell used by the weekly grid variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WeekCoordinate {
    year: i32,
    week: u32,
}

impl WeekCoordinate {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn week(&self) -> u32 {
        self.week
    }
}

/// One month cell of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    year: i32,
    month: u32,
    first_day: NaiveDate,
}

impl GridCell {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn coordinate(&self) -> GridCoordinate {
        GridCoordinate { year: self.year, month: self.month }
    }
}

pub fn position(date: NaiveDate) -> GridCoordinate {
    GridCoordinate { year: date.year(), month: date.month() }
}

pub fn week_position(date: NaiveDate) -> WeekCoordinate {
    let iso = date.iso_week();
    WeekCoordinate { year: iso.year(), week: iso.week() }
}

/// Zero-based month column of `date`.
pub fn month_index(date: NaiveDate) -> usize {
    date.month0() as usize
}

/// Number of days in `month` (1-based) of `year`, or `None` when either is out of range.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == MONTHS_PER_YEAR {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

fn days_in_month_of(date: NaiveDate) -> u32 {
    // Only the last representable month lacks a successor; chrono's range ends on Dec 31.
    days_in_month(date.year(), date.month()).unwrap_or(31)
}

/// Where the *start* of `date` falls inside its month cell, in `[0, 1)`.
pub fn start_fraction(date: NaiveDate) -> f64 {
    f64::from(date.day() - 1) / f64::from(days_in_month_of(date))
}

/// Where the *end* of `date` falls inside its month cell, in `(0, 1]`.
///
/// Always strictly greater than [`start_fraction`] for the same date, so a
/// one-day event has a positive width.
pub fn end_fraction(date: NaiveDate) -> f64 {
    f64::from(date.day()) / f64::from(days_in_month_of(date))
}

/// Jan 1 and Dec 31 of `year`.
pub fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((NaiveDate::from_ymd_opt(year, 1, 1)?, NaiveDate::from_ymd_opt(year, 12, 31)?))
}

/// All month cells for `start_year..=end_year`, row by row.
pub fn generate_grid_cells(start_year: i32, end_year: i32) -> Vec<GridCell> {
    if start_year > end_year {
        return Vec::new();
    }

    let mut cells = Vec::new();
    for year in start_year..=end_year {
        for month in 1..=MONTHS_PER_YEAR {
            let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
                continue;
            };
            cells.push(GridCell { year, month, first_day });
        }
    }
    cells
}

pub fn month_name(month: u32) -> Option<&'static str> {
    let idx = month.checked_sub(1)? as usize;
    MONTH_NAMES.get(idx).copied()
}
