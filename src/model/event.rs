// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Birdseye and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Calendar events as the layout engine sees them.
//!
//! The event store hands over [`RawEvent`]s with ISO date strings. Those are
//! parsed at the boundary with [`parse_events`], which isolates failures per
//! event so one bad record never hides the rest of the calendar.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{CalendarId, EventId, IdError};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A whole-day, inclusive date range with display metadata.
///
/// `start <= end` is expected but not enforced here: the store may hand us
/// inverted ranges and the engine skips those individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    name: String,
    start: NaiveDate,
    end: NaiveDate,
    color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    calendar_id: Option<CalendarId>,
}

impl Event {
    pub fn new(
        id: EventId,
        name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        color: impl Into<String>,
    ) -> Self {
        Self { id, name: name.into(), start, end, color: color.into(), calendar_id: None }
    }

    pub fn with_calendar(mut self, calendar_id: CalendarId) -> Self {
        self.calendar_id = Some(calendar_id);
        self
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn calendar_id(&self) -> Option<&CalendarId> {
        self.calendar_id.as_ref()
    }

    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.start > self.end {
            return Err(EventValidationError::InvertedRange { start: self.start, end: self.end });
        }
        Ok(())
    }

    /// Inclusive-day overlap: touching on a single shared day counts.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventValidationError {
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for EventValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange { start, end } => {
                write!(f, "event starts on {start} but ends earlier on {end}")
            }
        }
    }
}

impl std::error::Error for EventValidationError {}

/// An event record as stored, before date parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    StartDate,
    EndDate,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartDate => f.write_str("start_date"),
            Self::EndDate => f.write_str("end_date"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    InvalidDate { field: DateField, value: String },
    InvalidId { field: &'static str, source: IdError },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate { field, value } => {
                write!(f, "{field} `{value}` is not a valid YYYY-MM-DD date")
            }
            Self::InvalidId { field, source } => write!(f, "invalid {field}: {source}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate { .. } => None,
            Self::InvalidId { source, .. } => Some(source),
        }
    }
}

pub fn parse_iso_date(value: &str, field: DateField) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT)
        .map_err(|_| ParseError::InvalidDate { field, value: value.to_owned() })
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

impl TryFrom<&RawEvent> for Event {
    type Error = ParseError;

    fn try_from(raw: &RawEvent) -> Result<Self, Self::Error> {
        let id = EventId::new(&raw.id)
            .map_err(|source| ParseError::InvalidId { field: "id", source })?;
        let start = parse_iso_date(&raw.start_date, DateField::StartDate)?;
        let end = parse_iso_date(&raw.end_date, DateField::EndDate)?;
        let calendar_id = raw
            .calendar_id
            .as_deref()
            .map(CalendarId::new)
            .transpose()
            .map_err(|source| ParseError::InvalidId { field: "calendar_id", source })?;

        let event = Self::new(id, raw.name.clone(), start, end, raw.color.clone());
        Ok(match calendar_id {
            Some(calendar_id) => event.with_calendar(calendar_id),
            None => event,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEvent {
    /// The raw id as stored; may be empty when the id itself was the problem.
    pub id: String,
    pub error: ParseError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEvents {
    pub events: Vec<Event>,
    pub rejected: Vec<RejectedEvent>,
}

/// Parses a batch of stored events, keeping input order.
pub fn parse_events(raw: &[RawEvent]) -> ParsedEvents {
    let mut parsed = ParsedEvents::default();
    for record in raw {
        match Event::try_from(record) {
            Ok(event) => parsed.events.push(event),
            Err(error) => {
                log::warn!(
                    "event=event_rejected module=model status=error id={} error={}",
                    record.id,
                    error
                );
                parsed.rejected.push(RejectedEvent { id: record.id.clone(), error });
            }
        }
    }
    parsed
}
