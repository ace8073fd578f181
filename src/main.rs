// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Birdseye and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Birdseye CLI entrypoint.
//!
//! Reads a JSON array of stored events (`id`, `name`, `startDate`, `endDate`, `color`,
//! optional `calendarId`) and prints the layout of one year, or of a range of years, as JSON.

use std::error::Error;

use chrono::Datelike;

use birdseye::layout::{compute_layout, compute_layouts, LayoutConfig, Units};
use birdseye::logging::{env_log_level, init_logging};
use birdseye::model::{parse_events, Event, RawEvent};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <events.json> [--year <year> | --years <from>..<to>] [--config <config.json>] [--percent] [--log-level <level>]\n\nWithout --year/--years the first year of the earliest event is laid out.\n--years lays out every year in the inclusive range.\n--config reads a partial layout config (missing fields use defaults).\n--percent reports geometry as percentages of the year row.\n--log-level overrides BIRDSEYE_LOG (trace|debug|info|warn|error)."
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearSelection {
    Single(i32),
    Range(i32, i32),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    events_path: Option<String>,
    years: Option<YearSelection>,
    config_path: Option<String>,
    percent: bool,
    log_level: Option<String>,
}

fn parse_year_range(raw: &str) -> Result<YearSelection, ()> {
    let (from, to) = raw.split_once("..").ok_or(())?;
    let to = to.strip_prefix('=').unwrap_or(to);
    let from: i32 = from.trim().parse().map_err(|_| ())?;
    let to: i32 = to.trim().parse().map_err(|_| ())?;
    if from > to {
        return Err(());
    }
    Ok(YearSelection::Range(from, to))
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--year" => {
                if options.years.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let year: i32 = raw.trim().parse().map_err(|_| ())?;
                options.years = Some(YearSelection::Single(year));
            }
            "--years" => {
                if options.years.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.years = Some(parse_year_range(&raw)?);
            }
            "--config" => {
                if options.config_path.is_some() {
                    return Err(());
                }
                options.config_path = Some(args.next().ok_or(())?);
            }
            "--percent" => {
                if options.percent {
                    return Err(());
                }
                options.percent = true;
            }
            "--log-level" => {
                if options.log_level.is_some() {
                    return Err(());
                }
                options.log_level = Some(args.next().ok_or(())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.events_path.is_some() {
                    return Err(());
                }
                options.events_path = Some(arg);
            }
        }
    }

    if options.events_path.is_none() {
        return Err(());
    }

    Ok(options)
}

fn default_year(events: &[Event]) -> i32 {
    events
        .iter()
        .map(|event| event.start().min(event.end()))
        .min()
        .map(|date| date.year())
        .unwrap_or_else(|| chrono::Local::now().year())
}

fn load_config(options: &CliOptions) -> Result<LayoutConfig, Box<dyn Error>> {
    let mut config = match options.config_path.as_deref() {
        Some(path) => serde_json::from_str::<LayoutConfig>(&std::fs::read_to_string(path)?)?,
        None => LayoutConfig::default(),
    };
    if options.percent {
        config.units = Units::Percent;
    }
    Ok(config)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "birdseye".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let level = options.log_level.clone().unwrap_or_else(env_log_level);
        init_logging(&level)?;

        let config = load_config(&options)?;
        let events_path = options.events_path.as_deref().unwrap_or_default();
        let raw: Vec<RawEvent> = serde_json::from_str(&std::fs::read_to_string(events_path)?)?;
        let parsed = parse_events(&raw);
        if !parsed.rejected.is_empty() {
            log::warn!(
                "event=events_rejected module=cli status=degraded rejected={} accepted={}",
                parsed.rejected.len(),
                parsed.events.len()
            );
        }

        let selection =
            options.years.unwrap_or_else(|| YearSelection::Single(default_year(&parsed.events)));
        let output = match selection {
            YearSelection::Single(year) => {
                serde_json::to_string_pretty(&compute_layout(&parsed.events, year, &config)?)?
            }
            YearSelection::Range(from, to) => {
                serde_json::to_string_pretty(&compute_layouts(&parsed.events, from..=to, &config)?)?
            }
        };
        println!("{output}");

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("birdseye: {err}");
        std::process::exit(1);
    }
}
