// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Birdseye and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Birdseye — year-by-month calendar layout engine.
//!
//! Given a list of events and a year, computes which lane each event occupies so that no two
//! day-overlapping events collide, and where each bar lands on the month grid.

pub mod layout;
pub mod logging;
pub mod model;

pub use layout::{compute_layout, compute_layouts, LayoutConfig, LayoutError, Units, YearLayout};
pub use model::{parse_events, Event, EventId, ParseError, RawEvent};
