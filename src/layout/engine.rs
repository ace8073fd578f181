// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Birdseye and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::RangeInclusive;

use chrono::Datelike;
use rayon::prelude::*;
use serde::Serialize;

use super::cluster::{cluster, intersects_year};
use super::config::{LayoutConfig, LayoutConfigError};
use super::geometry::{bar_geometry, BarGeometry};
use super::grid::year_bounds;
use super::lanes::assign;
use crate::model::{Event, EventId};

/// Lane bookkeeping for one year row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EventLayoutInfo {
    lane_of: BTreeMap<EventId, usize>,
    cluster_max_lanes: BTreeMap<EventId, usize>,
    max_lanes_used: usize,
}

impl EventLayoutInfo {
    pub fn lane_of(&self) -> &BTreeMap<EventId, usize> {
        &self.lane_of
    }

    /// Lane of an event, looked up by [`EventId`] or by its plain string form.
    pub fn lane<Q>(&self, event_id: &Q) -> Option<usize>
    where
        EventId: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.lane_of.get(event_id).copied()
    }

    pub fn cluster_max_lanes(&self) -> &BTreeMap<EventId, usize> {
        &self.cluster_max_lanes
    }

    pub fn cluster_max_lanes_of<Q>(&self, event_id: &Q) -> Option<usize>
    where
        EventId: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.cluster_max_lanes.get(event_id).copied()
    }

    /// Lanes used by the busiest cluster; at least 1, even for an empty year.
    pub fn max_lanes_used(&self) -> usize {
        self.max_lanes_used
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventBar {
    event_id: EventId,
    lane: usize,
    cluster_max_lanes: usize,
    #[serde(flatten)]
    geometry: BarGeometry,
}

impl EventBar {
    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    pub fn cluster_max_lanes(&self) -> usize {
        self.cluster_max_lanes
    }

    pub fn geometry(&self) -> &BarGeometry {
        &self.geometry
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    InvertedRange,
    DuplicateId,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange => f.write_str("inverted_range"),
            Self::DuplicateId => f.write_str("duplicate_id"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEvent {
    pub id: EventId,
    pub reason: SkipReason,
}

/// Everything the rendering layer needs to draw one year row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearLayout {
    year: i32,
    info: EventLayoutInfo,
    bars: Vec<EventBar>,
    lane_overflow: bool,
    overflowed: Vec<EventId>,
    skipped: Vec<SkippedEvent>,
}

impl YearLayout {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn info(&self) -> &EventLayoutInfo {
        &self.info
    }

    /// Bars in placement order (start, longest first, id).
    pub fn bars(&self) -> &[EventBar] {
        &self.bars
    }

    pub fn bar(&self, event_id: &EventId) -> Option<&EventBar> {
        self.bars.iter().find(|bar| bar.event_id() == event_id)
    }

    /// Set when some event had to share [`crate::layout::OVERFLOW_LANE`] with an overlapping one.
    pub fn lane_overflow(&self) -> bool {
        self.lane_overflow
    }

    pub fn overflowed(&self) -> &[EventId] {
        &self.overflowed
    }

    pub fn skipped(&self) -> &[SkippedEvent] {
        &self.skipped
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    InvalidConfig(LayoutConfigError),
    YearOutOfRange { year: i32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(err) => write!(f, "invalid layout config: {err}"),
            Self::YearOutOfRange { year } => {
                write!(f, "year {year} is outside the supported calendar")
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            Self::YearOutOfRange { .. } => None,
        }
    }
}

impl From<LayoutConfigError> for LayoutError {
    fn from(err: LayoutConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

fn touches_year_either_way(event: &Event, year: i32) -> bool {
    let (lo, hi) = if event.start() <= event.end() {
        (event.start(), event.end())
    } else {
        (event.end(), event.start())
    };
    lo.year() <= year && hi.year() >= year
}

/// Splits the input into events eligible for `year` and those rejected for it.
///
/// Only events that would otherwise show up in `year` are reported as skipped.
fn screen_events(events: &[Event], year: i32) -> (Vec<Event>, Vec<SkippedEvent>) {
    let mut accepted = Vec::new();
    let mut skipped = Vec::new();
    let mut seen = BTreeSet::<&EventId>::new();

    for event in events {
        if !touches_year_either_way(event, year) {
            continue;
        }
        let reason = if event.validate().is_err() {
            Some(SkipReason::InvertedRange)
        } else if !seen.insert(event.id()) {
            Some(SkipReason::DuplicateId)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                log::warn!(
                    "event=event_skipped module=layout status=error year={} id={} reason={}",
                    year,
                    event.id(),
                    reason
                );
                skipped.push(SkippedEvent { id: event.id().clone(), reason });
            }
            None if intersects_year(event, year) => accepted.push(event.clone()),
            None => {}
        }
    }

    (accepted, skipped)
}

/// Lays out the events visible in `year`.
///
/// Pipeline: overlap clusters, greedy lane assignment, per-cluster lane count,
/// then bar geometry. Bad events are skipped and reported in
/// [`YearLayout::skipped`]; only an invalid config or an unrepresentable year
/// fails the call.
pub fn compute_layout(
    events: &[Event],
    year: i32,
    config: &LayoutConfig,
) -> Result<YearLayout, LayoutError> {
    config.validate()?;
    year_bounds(year).ok_or(LayoutError::YearOutOfRange { year })?;

    let (accepted, skipped) = screen_events(events, year);
    let clusters = cluster(&accepted, year);
    let assignment = assign(&accepted, year, config.max_lanes);

    let mut cluster_max_lanes = BTreeMap::<EventId, usize>::new();
    for members in &clusters {
        let lanes_in_cluster = members
            .iter()
            .filter_map(|&idx| assignment.lane_of(accepted[idx].id()))
            .max()
            .map_or(1, |lane| lane + 1);
        for &idx in members {
            cluster_max_lanes.insert(accepted[idx].id().clone(), lanes_in_cluster);
        }
    }

    let mut bars = Vec::with_capacity(assignment.order().len());
    for &idx in assignment.order() {
        let event = &accepted[idx];
        let (Some(lane), Some(max_lanes)) =
            (assignment.lane_of(event.id()), cluster_max_lanes.get(event.id()).copied())
        else {
            continue;
        };
        let Some(geometry) = bar_geometry(event, year, lane, max_lanes, config) else {
            continue;
        };
        bars.push(EventBar {
            event_id: event.id().clone(),
            lane,
            cluster_max_lanes: max_lanes,
            geometry,
        });
    }

    let info = EventLayoutInfo {
        lane_of: assignment.lanes().clone(),
        cluster_max_lanes,
        max_lanes_used: assignment.lanes_used().max(1),
    };

    log::debug!(
        "event=year_layout module=layout status=ok year={} events={} clusters={} max_lanes_used={} overflowed={} skipped={}",
        year,
        bars.len(),
        clusters.len(),
        info.max_lanes_used,
        assignment.overflowed().len(),
        skipped.len()
    );

    Ok(YearLayout {
        year,
        info,
        bars,
        lane_overflow: assignment.has_overflow(),
        overflowed: assignment.overflowed().to_vec(),
        skipped,
    })
}

/// Lays out every year in `years` independently, in parallel.
///
/// Results come back in year order.
pub fn compute_layouts(
    events: &[Event],
    years: RangeInclusive<i32>,
    config: &LayoutConfig,
) -> Result<Vec<YearLayout>, LayoutError> {
    config.validate()?;
    years.into_par_iter().map(|year| compute_layout(events, year, config)).collect()
}
