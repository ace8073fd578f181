// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Birdseye and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use chrono::{Duration, NaiveDate};

use birdseye::layout::YearLayout;
use birdseye::model::{Event, EventId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// A personal calendar: a few dozen mostly separate events.
    Sparse,
    /// Hundreds of events with frequent overlaps.
    Dense,
    /// Long multi-year spans stacked on top of each other.
    LongSpans,
}

#[derive(Debug, Clone, Copy)]
pub struct EventParams {
    pub count: usize,
    pub first_year: i32,
    pub years: u32,
    pub max_len_days: u32,
    pub seed: u64,
}

impl EventParams {
    pub fn new(count: usize, first_year: i32, years: u32, max_len_days: u32, seed: u64) -> Self {
        Self { count, first_year, years, max_len_days, seed }
    }
}

pub fn fixture(case: Case) -> Vec<Event> {
    match case {
        Case::Sparse => events(EventParams::new(40, 2024, 3, 14, 7)),
        Case::Dense => events(EventParams::new(600, 2024, 3, 60, 11)),
        Case::LongSpans => events(EventParams::new(120, 2020, 8, 900, 23)),
    }
}

/// Linear congruential sequence; identical across runs and platforms.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

pub fn events(params: EventParams) -> Vec<Event> {
    let origin = NaiveDate::from_ymd_opt(params.first_year, 1, 1).expect("fixture origin");
    let span_days = u64::from(params.years) * 365;
    let mut lcg = Lcg(params.seed);

    (0..params.count)
        .map(|idx| {
            let start = origin + Duration::days((lcg.next() % span_days) as i64);
            let len = lcg.next() % u64::from(params.max_len_days.max(1));
            let end = start + Duration::days(len as i64);
            let id = EventId::new(format!("evt-{idx:05}")).expect("fixture id");
            Event::new(id, format!("Event {idx}"), start, end, "#91B3FA")
        })
        .collect()
}

pub fn checksum_layout(layout: &YearLayout) -> u64 {
    let mut acc = layout.info().max_lanes_used() as u64;
    for bar in layout.bars() {
        let rect = bar.geometry().rect();
        acc = acc.wrapping_mul(131).wrapping_add(bar.lane() as u64);
        acc = acc.wrapping_add(rect.left.to_bits()).wrapping_add(rect.height.to_bits());
    }
    acc
}
