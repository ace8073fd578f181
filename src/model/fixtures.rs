// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Birdseye and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;

use super::event::Event;
use super::ids::EventId;

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub(crate) fn eid(value: &str) -> EventId {
    EventId::new(value).expect("event id")
}

/// Builds an event from `(y, m, d)` tuples.
pub(crate) fn event(id: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> Event {
    Event::new(
        eid(id),
        id.to_uppercase(),
        date(start.0, start.1, start.2),
        date(end.0, end.1, end.2),
        "#A8D5FF",
    )
}

/// A(Jan 1-31), B(Jan 15-Feb 15), C(Feb 1-28): A and C both touch B only.
pub(crate) fn staircase_2025() -> Vec<Event> {
    vec![
        event("a", (2025, 1, 1), (2025, 1, 31)),
        event("b", (2025, 1, 15), (2025, 2, 15)),
        event("c", (2025, 2, 1), (2025, 2, 28)),
    ]
}

/// A chain where only neighbours overlap: A-B, B-C, C-D.
pub(crate) fn chain_2025() -> Vec<Event> {
    vec![
        event("a", (2025, 3, 1), (2025, 3, 10)),
        event("b", (2025, 3, 10), (2025, 3, 20)),
        event("c", (2025, 3, 20), (2025, 3, 30)),
        event("d", (2025, 3, 30), (2025, 4, 9)),
    ]
}

/// `count` events that all cover June 2025.
pub(crate) fn pileup_2025(count: usize) -> Vec<Event> {
    (0..count)
        .map(|idx| {
            let day = 1 + idx as u32;
            event(&format!("p{idx}"), (2025, 6, day), (2025, 7, day))
        })
        .collect()
}
