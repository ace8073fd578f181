// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Birdseye and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::model::Event;

/// Whether the full, unclipped range of `event` touches `year` at all.
pub fn intersects_year(event: &Event, year: i32) -> bool {
    event.end().year() >= year && event.start().year() <= year
}

/// Groups the events visible in `year` into maximal overlap clusters.
///
/// Two events are connected when they share at least one day of their *full*
/// ranges; clusters are the transitive closure of that relation, so a chain
/// A-B-C lands in one cluster even when A and C never meet.
///
/// Returned sets hold indices into `events`. Clusters are ordered by their
/// earliest start. Events with `start > end` are ignored.
pub fn cluster(events: &[Event], year: i32) -> Vec<BTreeSet<usize>> {
    let mut order = events
        .iter()
        .enumerate()
        .filter(|(_, event)| event.validate().is_ok() && intersects_year(event, year))
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();
    order.sort_by(|&a, &b| {
        let (ea, eb) = (&events[a], &events[b]);
        ea.start().cmp(&eb.start()).then_with(|| ea.id().cmp(eb.id())).then_with(|| a.cmp(&b))
    });

    // For intervals, the closure is a sweep: a cluster stays open while the next
    // start falls on or before the furthest end seen so far.
    let mut clusters = Vec::<BTreeSet<usize>>::new();
    let mut reach: Option<NaiveDate> = None;
    for idx in order {
        let event = &events[idx];
        match (reach, clusters.last_mut()) {
            (Some(furthest), Some(current)) if event.start() <= furthest => {
                current.insert(idx);
                reach = Some(furthest.max(event.end()));
            }
            _ => {
                clusters.push(BTreeSet::from([idx]));
                reach = Some(event.end());
            }
        }
    }

    clusters
}
