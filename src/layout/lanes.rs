// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Birdseye and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::{Ordering, Reverse};
use std::collections::BTreeMap;

use smallvec::{smallvec, SmallVec};

use super::cluster::intersects_year;
use crate::model::{Event, EventId};

/// Lane index used when every lane is taken by an overlapping event.
pub const OVERFLOW_LANE: usize = 0;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LaneAssignment {
    lanes: BTreeMap<EventId, usize>,
    order: Vec<usize>,
    overflowed: Vec<EventId>,
}

impl LaneAssignment {
    pub fn lanes(&self) -> &BTreeMap<EventId, usize> {
        &self.lanes
    }

    pub fn lane_of(&self, event_id: &EventId) -> Option<usize> {
        self.lanes.get(event_id).copied()
    }

    /// Indices into the input slice, in the order lanes were handed out.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Events that found no free lane and were put on [`OVERFLOW_LANE`].
    pub fn overflowed(&self) -> &[EventId] {
        &self.overflowed
    }

    pub fn has_overflow(&self) -> bool {
        !self.overflowed.is_empty()
    }

    /// Highest lane index plus one; zero when nothing was assigned.
    pub fn lanes_used(&self) -> usize {
        self.lanes.values().copied().max().map_or(0, |lane| lane + 1)
    }
}

/// Placement order: earlier starts first, then longer events, then id.
pub fn placement_order(a: &Event, b: &Event) -> Ordering {
    a.start()
        .cmp(&b.start())
        .then_with(|| Reverse(a.end()).cmp(&Reverse(b.end())))
        .then_with(|| a.id().cmp(b.id()))
}

/// Greedy lane assignment for the events visible in `year`.
///
/// Events are placed in [`placement_order`]. Each one takes the lowest lane in
/// `0..max_lanes` not held by an already placed event it overlaps (inclusive
/// days, full ranges). When all lanes are held it falls back to
/// [`OVERFLOW_LANE`] and is recorded in [`LaneAssignment::overflowed`].
///
/// Ids are expected to be unique; with duplicates the later placement wins the
/// map entry. Events with `start > end` are ignored. A `max_lanes` of zero
/// behaves like one.
pub fn assign(events: &[Event], year: i32, max_lanes: usize) -> LaneAssignment {
    let max_lanes = max_lanes.max(1);

    let mut order = events
        .iter()
        .enumerate()
        .filter(|(_, event)| event.validate().is_ok() && intersects_year(event, year))
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();
    order.sort_by(|&a, &b| placement_order(&events[a], &events[b]).then_with(|| a.cmp(&b)));

    let mut assignment = LaneAssignment::default();
    let mut placed = Vec::<(usize, usize)>::with_capacity(order.len());
    for &idx in &order {
        let event = &events[idx];

        // At most `placed.len()` lanes can be held, so one more slot always
        // exposes a free lane unless the configured limit is smaller.
        let slots = max_lanes.min(placed.len() + 1);
        let mut taken: SmallVec<[bool; 8]> = smallvec![false; slots];
        for &(other_idx, lane) in &placed {
            if events[other_idx].overlaps(event) {
                if let Some(held) = taken.get_mut(lane) {
                    *held = true;
                }
            }
        }

        let lane = match taken.iter().position(|held| !held) {
            Some(lane) => lane,
            None => {
                log::warn!(
                    "event=lane_overflow module=layout status=degraded year={} id={} max_lanes={}",
                    year,
                    event.id(),
                    max_lanes
                );
                assignment.overflowed.push(event.id().clone());
                OVERFLOW_LANE
            }
        };

        placed.push((idx, lane));
        assignment.lanes.insert(event.id().clone(), lane);
    }
    assignment.order = order;

    assignment
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{assign, OVERFLOW_LANE};
    use crate::model::fixtures::{chain_2025, eid, event, pileup_2025, staircase_2025};

    fn lanes_by_id(events: &[crate::model::Event], year: i32, max: usize) -> Vec<(String, usize)> {
        let assignment = assign(events, year, max);
        assignment
            .lanes()
            .iter()
            .map(|(id, lane)| (id.as_str().to_owned(), *lane))
            .collect()
    }

    #[test]
    fn staircase_reuses_lane_zero_once_free() {
        let assignment = assign(&staircase_2025(), 2025, 6);
        assert_eq!(assignment.lane_of(&eid("a")), Some(0));
        assert_eq!(assignment.lane_of(&eid("b")), Some(1));
        assert_eq!(assignment.lane_of(&eid("c")), Some(0));
        assert_eq!(assignment.lanes_used(), 2);
        assert!(!assignment.has_overflow());
    }

    #[test]
    fn chain_alternates_between_two_lanes() {
        assert_eq!(
            lanes_by_id(&chain_2025(), 2025, 6),
            vec![("a".into(), 0), ("b".into(), 1), ("c".into(), 0), ("d".into(), 1)]
        );
    }

    #[test]
    fn equal_starts_place_longer_event_first_then_by_id() {
        let events = vec![
            event("short", (2025, 4, 1), (2025, 4, 3)),
            event("long", (2025, 4, 1), (2025, 4, 30)),
            event("same-b", (2025, 4, 1), (2025, 4, 3)),
        ];
        let assignment = assign(&events, 2025, 6);
        assert_eq!(assignment.order(), &[1, 2, 0]);
        assert_eq!(assignment.lane_of(&eid("long")), Some(0));
        assert_eq!(assignment.lane_of(&eid("same-b")), Some(1));
        assert_eq!(assignment.lane_of(&eid("short")), Some(2));
    }

    #[test]
    fn assignment_ignores_input_order() {
        let mut reversed = staircase_2025();
        reversed.reverse();
        assert_eq!(lanes_by_id(&staircase_2025(), 2025, 6), lanes_by_id(&reversed, 2025, 6));
    }

    #[test]
    fn seven_way_pileup_overflows_once_onto_lane_zero() {
        let events = pileup_2025(7);
        let assignment = assign(&events, 2025, 6);

        assert_eq!(assignment.overflowed(), &[eid("p6")]);
        assert_eq!(assignment.lane_of(&eid("p6")), Some(OVERFLOW_LANE));

        let on_lane_zero = assignment.lanes().values().filter(|lane| **lane == 0).count();
        assert_eq!(on_lane_zero, 2);
        assert_eq!(assignment.lanes_used(), 6);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(6)]
    fn overlapping_events_never_share_a_lane_within_capacity(#[case] count: usize) {
        let events = pileup_2025(count);
        let assignment = assign(&events, 2025, 6);
        let mut lanes = assignment.lanes().values().copied().collect::<Vec<_>>();
        lanes.sort_unstable();
        assert_eq!(lanes, (0..count).collect::<Vec<_>>());
    }

    #[test]
    fn zero_max_lanes_degrades_to_a_single_lane() {
        let assignment = assign(&pileup_2025(2), 2025, 0);
        assert_eq!(assignment.lanes_used(), 1);
        assert_eq!(assignment.overflowed(), &[eid("p1")]);
    }

    #[test]
    fn unbounded_max_lanes_only_scans_placed_lanes() {
        let assignment = assign(&pileup_2025(5), 2025, usize::MAX);
        assert!(!assignment.has_overflow());
        assert_eq!(assignment.lanes_used(), 5);
    }

    #[test]
    fn invisible_and_inverted_events_get_no_lane() {
        let events = vec![
            event("prev-year", (2024, 1, 1), (2024, 3, 1)),
            event("inverted", (2025, 3, 1), (2025, 2, 1)),
            event("ok", (2025, 2, 1), (2025, 3, 1)),
        ];
        let assignment = assign(&events, 2025, 6);
        assert_eq!(assignment.order(), &[2]);
        assert_eq!(assignment.lane_of(&eid("prev-year")), None);
        assert_eq!(assignment.lane_of(&eid("inverted")), None);
    }
}
