// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Birdseye and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::grid::MONTHS_PER_YEAR;

pub const DEFAULT_CELL_WIDTH: f64 = 128.0;
pub const DEFAULT_CELL_GAP: f64 = 0.0;
pub const DEFAULT_LANE_BAND_HEIGHT: f64 = 120.0;
pub const DEFAULT_LANE_TOP_OFFSET: f64 = 4.0;
pub const DEFAULT_MAX_LANES: usize = 6;

/// Units of the rectangles produced by the geometry step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    /// Absolute lengths in the same unit as the config (usually px).
    #[default]
    Pixels,
    /// Horizontal values as a percentage of the year row width; vertical values
    /// as a percentage of `lane_top_offset + lane_band_height`.
    Percent,
}

/// Rendering-layer dimensions the engine lays bars out against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub cell_width: f64,
    pub cell_gap: f64,
    pub lane_band_height: f64,
    pub lane_top_offset: f64,
    pub max_lanes: usize,
    pub units: Units,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_gap: DEFAULT_CELL_GAP,
            lane_band_height: DEFAULT_LANE_BAND_HEIGHT,
            lane_top_offset: DEFAULT_LANE_TOP_OFFSET,
            max_lanes: DEFAULT_MAX_LANES,
            units: Units::Pixels,
        }
    }
}

impl LayoutConfig {
    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    pub fn with_max_lanes(mut self, max_lanes: usize) -> Self {
        self.max_lanes = max_lanes;
        self
    }

    /// Horizontal pitch of one month cell.
    pub fn cell_pitch(&self) -> f64 {
        self.cell_width + self.cell_gap
    }

    /// Width from the left edge of January to the right edge of December.
    pub fn row_width(&self) -> f64 {
        let months = f64::from(MONTHS_PER_YEAR);
        self.cell_width * months + self.cell_gap * (months - 1.0)
    }

    pub fn row_height(&self) -> f64 {
        self.lane_top_offset + self.lane_band_height
    }

    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        if self.max_lanes == 0 {
            return Err(LayoutConfigError::ZeroMaxLanes);
        }
        for (field, value) in [
            ("cell_width", self.cell_width),
            ("cell_gap", self.cell_gap),
            ("lane_band_height", self.lane_band_height),
            ("lane_top_offset", self.lane_top_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutConfigError::InvalidLength { field, value });
            }
        }
        if self.cell_width == 0.0 {
            return Err(LayoutConfigError::ZeroLength { field: "cell_width" });
        }
        if self.lane_band_height == 0.0 {
            return Err(LayoutConfigError::ZeroLength { field: "lane_band_height" });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutConfigError {
    ZeroMaxLanes,
    InvalidLength { field: &'static str, value: f64 },
    ZeroLength { field: &'static str },
}

impl fmt::Display for LayoutConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxLanes => f.write_str("max_lanes must be at least 1"),
            Self::InvalidLength { field, value } => {
                write!(f, "{field} must be a finite, non-negative length, got {value}")
            }
            Self::ZeroLength { field } => write!(f, "{field} must be greater than zero"),
        }
    }
}

impl std::error::Error for LayoutConfigError {}
