// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Birdseye and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use birdseye::layout::{assign, cluster};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `lanes.cluster`, `lanes.assign`
fn benches_lanes(c: &mut Criterion) {
    let cases = [
        ("sparse", fixtures::fixture(fixtures::Case::Sparse)),
        ("dense", fixtures::fixture(fixtures::Case::Dense)),
        ("pileup", fixtures::events(fixtures::EventParams::new(200, 2025, 1, 365, 5))),
    ];

    {
        let mut group = c.benchmark_group("lanes.cluster");
        for (case_id, events) in &cases {
            group.throughput(Throughput::Elements(events.len() as u64));
            group.bench_function(*case_id, |b| {
                b.iter(|| {
                    let clusters = cluster(black_box(events), black_box(2025));
                    black_box(clusters.iter().map(|members| members.len()).sum::<usize>())
                })
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("lanes.assign");
        for (case_id, events) in &cases {
            group.throughput(Throughput::Elements(events.len() as u64));
            group.bench_function(*case_id, |b| {
                b.iter(|| {
                    let assignment = assign(black_box(events), black_box(2025), 6);
                    black_box(assignment.lanes_used() + assignment.overflowed().len())
                })
            });
        }
        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_lanes
}
criterion_main!(benches);
