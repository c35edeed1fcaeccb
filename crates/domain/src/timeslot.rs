// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delivery timeslots: the lookup window and operator-facing formatting.

use crate::types::WarehouseId;
use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime, UtcOffset};

use crate::error::DomainError;

/// Number of days ahead of "now" that timeslots are requested for.
const WINDOW_DAYS: i64 = 7;

/// Wire format of the window bounds, always in UTC.
const WINDOW_FORMAT: &[time::format_description::FormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

/// A drop-off window at a warehouse, flattened out of the API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeslot {
    /// Start of the window, as returned by the API (RFC 3339).
    pub from: String,
    /// End of the window, as returned by the API (RFC 3339).
    pub to: String,
    /// The warehouse the window belongs to.
    pub warehouse_id: Option<WarehouseId>,
}

/// The UTC date range a timeslot lookup covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeslotWindow {
    /// Range start, `YYYY-MM-DDTHH:MM:SSZ`.
    pub date_from: String,
    /// Range end, seven days after the start.
    pub date_to: String,
}

impl TimeslotWindow {
    /// Builds the `[now, now + 7 days]` window.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TimestampFormat` if a bound cannot be rendered.
    pub fn starting_at(now: OffsetDateTime) -> Result<Self, DomainError> {
        let start: OffsetDateTime = now.to_offset(UtcOffset::UTC);
        let end: OffsetDateTime = start.saturating_add(Duration::days(WINDOW_DAYS));
        Ok(Self {
            date_from: format_utc(start)?,
            date_to: format_utc(end)?,
        })
    }

    /// Builds the window starting at the current time.
    ///
    /// # Errors
    ///
    /// See [`TimeslotWindow::starting_at`].
    pub fn from_now() -> Result<Self, DomainError> {
        Self::starting_at(OffsetDateTime::now_utc())
    }
}

fn format_utc(at: OffsetDateTime) -> Result<String, DomainError> {
    at.format(WINDOW_FORMAT)
        .map_err(|e| DomainError::TimestampFormat(e.to_string()))
}

/// A timeslot prepared for display in a selection prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeslotOption {
    /// The stable selection value: the slot's start timestamp.
    pub value: String,
    /// `dd.MM.yyyy HH:mm - HH:mm` in the display timezone.
    pub label: String,
    /// Window length in hours with one decimal, e.g. `2.0 h`.
    pub duration: String,
}

/// Formats a timeslot for the operator in the given timezone.
///
/// Timestamps the API returns in an unexpected shape are shown verbatim
/// with an unknown duration rather than dropped.
#[must_use]
pub fn format_timeslot(slot: &Timeslot, timezone: Tz) -> TimeslotOption {
    let parsed: Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> =
        DateTime::parse_from_rfc3339(&slot.from)
            .ok()
            .zip(DateTime::parse_from_rfc3339(&slot.to).ok());

    let Some((start, end)) = parsed else {
        return TimeslotOption {
            value: slot.from.clone(),
            label: format!("{} - {}", slot.from, slot.to),
            duration: String::from("?"),
        };
    };

    let local_start: DateTime<Tz> = start.with_timezone(&timezone);
    let local_end: DateTime<Tz> = end.with_timezone(&timezone);
    let minutes: i64 = (end - start).num_minutes();
    let duration: String = i32::try_from(minutes).map_or_else(
        |_| String::from("?"),
        |m| format!("{:.1} h", f64::from(m) / 60.0),
    );

    TimeslotOption {
        value: slot.from.clone(),
        label: format!(
            "{} - {}",
            local_start.format("%d.%m.%Y %H:%M"),
            local_end.format("%H:%M")
        ),
        duration,
    }
}
