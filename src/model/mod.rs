// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Birdseye and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Events arrive from an external store; everything here is read-only input to the layout engine.

pub mod event;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;

pub use event::{
    format_iso_date, parse_events, parse_iso_date, DateField, Event, EventValidationError,
    ParseError, ParsedEvents, RawEvent, RejectedEvent,
};
pub use ids::{CalendarId, EventId, Id, IdError};
