// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Birdseye and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok()).unwrap_or(default)
}

/// Criterion config with a flamegraph profiler, tunable via `BIRDSEYE_BENCH_*` env vars.
pub fn criterion() -> Criterion {
    let frequency = env_parsed::<i32>("BIRDSEYE_PROFILE_FREQ", 100).clamp(1, 1000);
    let sample_size = env_parsed::<usize>("BIRDSEYE_BENCH_SAMPLE_SIZE", 60).clamp(10, 200);
    let warmup_secs = env_parsed::<u64>("BIRDSEYE_BENCH_WARMUP_SECS", 2).clamp(1, 60);
    let measurement_secs = env_parsed::<u64>("BIRDSEYE_BENCH_MEASUREMENT_SECS", 4).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
