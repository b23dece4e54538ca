//! Named due-date windows and their boundary arithmetic.
//!
//! A window is anchored to the caller's local "now". Boundaries are computed
//! on local calendar days and promoted to UTC, which is the timezone every
//! task `expire` instant is stored and compared in.

use super::ParseWindowError;
use chrono::{
    DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc,
    Weekday,
};
use std::{fmt, str::FromStr};

/// Last representable second of a calendar day.
const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

/// Longest daylight-saving gap searched when resolving a skipped local time.
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Closed set of due-date windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Window {
    /// Tasks due before the end of the current day.
    Today,
    /// Tasks due during the following calendar day.
    NextDay,
    /// Tasks due before the end of the current week (next Sunday).
    CurrentWeek,
}

impl Window {
    /// All windows in index order.
    pub const ALL: [Self; 3] = [Self::Today, Self::NextDay, Self::CurrentWeek];

    /// Resolves a numeric window index.
    ///
    /// Indices outside the named set fall back to [`Window::CurrentWeek`].
    #[must_use]
    pub const fn from_index(index: u64) -> Self {
        match index {
            0 => Self::Today,
            1 => Self::NextDay,
            _ => Self::CurrentWeek,
        }
    }

    /// Returns the canonical window name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::NextDay => "NextDay",
            Self::CurrentWeek => "CurrentWeek",
        }
    }

    /// Computes the exclusive lower and inclusive upper boundary of this
    /// window relative to `now`.
    ///
    /// `Today` and `CurrentWeek` start after local midnight of the current
    /// day. `NextDay` starts after the last second of the current day so it
    /// never overlaps `Today`.
    #[must_use]
    pub fn bounds<Tz: TimeZone>(self, now: &DateTime<Tz>) -> WindowBounds {
        let timezone = now.timezone();
        let today = now.date_naive();

        let (after, until) = match self {
            Self::Today => (start_of_day(today), end_of_day(today, 0)),
            Self::NextDay => (end_of_day(today, 0), end_of_day(today, 1)),
            Self::CurrentWeek => (
                start_of_day(today),
                end_of_day(today, days_until_sunday(today.weekday())),
            ),
        };

        WindowBounds {
            after: local_to_utc(&timezone, after),
            until: local_to_utc(&timezone, until),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Window {
    type Err = ParseWindowError;

    /// Parses a window name case-insensitively, with or without an
    /// underscore separator, or a non-negative numeric index.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Ok(index) = trimmed.parse::<u64>() {
            return Ok(Self::from_index(index));
        }

        let normalized = trimmed.replace('_', "").to_ascii_lowercase();
        match normalized.as_str() {
            "today" => Ok(Self::Today),
            "nextday" => Ok(Self::NextDay),
            "currentweek" => Ok(Self::CurrentWeek),
            _ => Err(ParseWindowError(value.to_owned())),
        }
    }
}

/// Half-open instant range `(after, until]` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    after: DateTime<Utc>,
    until: DateTime<Utc>,
}

impl WindowBounds {
    /// Exclusive lower boundary.
    #[must_use]
    pub const fn after(&self) -> DateTime<Utc> {
        self.after
    }

    /// Inclusive upper boundary.
    #[must_use]
    pub const fn until(&self) -> DateTime<Utc> {
        self.until
    }

    /// Returns `true` when `instant` is strictly after the lower boundary
    /// and no later than the upper boundary.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant > self.after && instant <= self.until
    }
}

/// Days from `today` to the next occurring Sunday, zero when today is Sunday.
#[must_use]
pub fn days_until_sunday(today: Weekday) -> u64 {
    match today.num_days_from_sunday() {
        0 => 0,
        offset => 7 - u64::from(offset),
    }
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate, days_ahead: u64) -> NaiveDateTime {
    date.checked_add_days(Days::new(days_ahead))
        .unwrap_or(NaiveDate::MAX)
        .and_time(END_OF_DAY)
}

/// Resolves a local wall-clock time to UTC.
///
/// Ambiguous times (clocks turned back) resolve to the earlier instant.
/// Times skipped by a gap (clocks turned forward) resolve to the first
/// valid instant after the gap, searched minute by minute.
pub(crate) fn local_to_utc<Tz: TimeZone>(timezone: &Tz, local: NaiveDateTime) -> DateTime<Utc> {
    (0..=MAX_GAP_MINUTES)
        .filter_map(|minutes| local.checked_add_signed(TimeDelta::minutes(minutes)))
        .find_map(|candidate| timezone.from_local_datetime(&candidate).earliest())
        .map_or_else(|| local.and_utc(), |instant| instant.with_timezone(&Utc))
}
