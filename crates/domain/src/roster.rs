// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster period calendar.
//!
//! Roster periods are fixed 28-day operational scheduling intervals, 13 per
//! year, identified by codes like `RP3/2026`. The calendar is a single
//! continuous sequence of periods anchored at a known start date, so every
//! code maps to exactly one date span and every date falls in exactly one
//! period.
//!
//! ## Invariants
//!
//! - Every period is exactly 28 days long.
//! - Period numbers run 1-13; number 13 of one year is immediately followed
//!   by number 1 of the next.
//! - Code-to-dates and date-to-code lookups are inverse operations.

use crate::error::DomainError;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of roster periods per code year.
pub const PERIODS_PER_YEAR: u8 = 13;

/// Length of one roster period in days.
pub const PERIOD_LENGTH_DAYS: i64 = 28;

/// The first day of RP1/2026, from which the whole calendar is derived.
const ANCHOR_YEAR: u16 = 2026;
const ANCHOR_MONTH: u32 = 1;
const ANCHOR_DAY: u32 = 2;

/// Returns the calendar anchor date (start of RP1/2026).
fn anchor() -> NaiveDate {
    // Constant components are always a valid date.
    NaiveDate::from_ymd_opt(i32::from(ANCHOR_YEAR), ANCHOR_MONTH, ANCHOR_DAY)
        .unwrap_or_default()
}

/// A roster period code such as `RP3/2026`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RosterPeriodCode {
    /// Period number within the code year (1-13).
    number: u8,
    /// The code year.
    year: u16,
}

impl RosterPeriodCode {
    /// Creates a new code.
    ///
    /// # Errors
    ///
    /// Returns an error if the period number is not between 1 and 13.
    pub const fn new(number: u8, year: u16) -> Result<Self, DomainError> {
        if number >= 1 && number <= PERIODS_PER_YEAR {
            Ok(Self { number, year })
        } else {
            Err(DomainError::RosterPeriodOutOfRange { number })
        }
    }

    /// Returns the period number (1-13).
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }

    /// Returns the code year.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Parses a code from its `RPn/yyyy` form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not of the form `RPn/yyyy` or the
    /// period number is out of range.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let rest = s
            .strip_prefix("RP")
            .ok_or_else(|| DomainError::InvalidRosterPeriod(s.to_string()))?;
        let (number_part, year_part) = rest
            .split_once('/')
            .ok_or_else(|| DomainError::InvalidRosterPeriod(s.to_string()))?;
        let number: u8 = number_part
            .parse()
            .map_err(|_| DomainError::InvalidRosterPeriod(s.to_string()))?;
        let year: u16 = year_part
            .parse()
            .map_err(|_| DomainError::InvalidRosterPeriod(s.to_string()))?;
        Self::new(number, year)
    }

    /// Returns the 0-based index of this period in the continuous calendar
    /// sequence, relative to the anchor period.
    const fn sequence_index(&self) -> i64 {
        (self.year as i64 - ANCHOR_YEAR as i64) * PERIODS_PER_YEAR as i64 + (self.number as i64 - 1)
    }
}

impl FromStr for RosterPeriodCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RosterPeriodCode {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<RosterPeriodCode> for String {
    fn from(code: RosterPeriodCode) -> Self {
        code.to_string()
    }
}

impl std::fmt::Display for RosterPeriodCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RP{}/{}", self.number, self.year)
    }
}

/// A roster period: a code plus its fixed date span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPeriod {
    /// The period code.
    pub code: RosterPeriodCode,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl RosterPeriod {
    /// Resolves a code to its full period.
    #[must_use]
    pub fn from_code(code: RosterPeriodCode) -> Self {
        let index = code.sequence_index();
        let offset_days = index * PERIOD_LENGTH_DAYS;
        let start_date = add_days(anchor(), offset_days);
        let end_date = add_days(start_date, PERIOD_LENGTH_DAYS - 1);
        Self {
            code,
            start_date,
            end_date,
        }
    }

    /// Returns whether this period intersects the given inclusive date span.
    #[must_use]
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date >= start
    }
}

/// Signed day offset helper; saturates at the calendar boundary rather than
/// panicking on overflow.
fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
            .unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
            .unwrap_or(NaiveDate::MIN)
    }
}

/// Returns all roster periods whose code year lies in the inclusive range,
/// in chronological order.
///
/// # Errors
///
/// Returns an error if `start_year > end_year`.
pub fn periods(start_year: u16, end_year: u16) -> Result<Vec<RosterPeriod>, DomainError> {
    if start_year > end_year {
        return Err(DomainError::InvalidDateRange {
            start: start_year.to_string(),
            end: end_year.to_string(),
        });
    }
    let mut out: Vec<RosterPeriod> = Vec::new();
    for year in start_year..=end_year {
        for number in 1..=PERIODS_PER_YEAR {
            let code = RosterPeriodCode::new(number, year)?;
            out.push(RosterPeriod::from_code(code));
        }
    }
    Ok(out)
}

/// Returns the roster period containing the given date.
#[must_use]
pub fn containing(date: NaiveDate) -> RosterPeriod {
    let days_from_anchor = (date - anchor()).num_days();
    let index = days_from_anchor.div_euclid(PERIOD_LENGTH_DAYS);
    let year_offset = index.div_euclid(i64::from(PERIODS_PER_YEAR));
    let number_index = index.rem_euclid(i64::from(PERIODS_PER_YEAR));
    // number_index is in 0..13 and the year offset is bounded by the chrono
    // date range, so these casts cannot truncate meaningfully.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let code = RosterPeriodCode {
        number: number_index as u8 + 1,
        year: (i64::from(ANCHOR_YEAR) + year_offset).clamp(0, i64::from(u16::MAX)) as u16,
    };
    RosterPeriod::from_code(code)
}

/// Reverse lookup: every roster period whose dates intersect the given
/// inclusive range, in chronological order.
///
/// # Errors
///
/// Returns an error if `start > end`.
pub fn affected_periods(start: NaiveDate, end: NaiveDate) -> Result<Vec<RosterPeriod>, DomainError> {
    if start > end {
        return Err(DomainError::InvalidDateRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    let first = containing(start);
    let mut out: Vec<RosterPeriod> = vec![first];
    let mut cursor = first;
    while cursor.end_date < end {
        let next_start = add_days(cursor.end_date, 1);
        cursor = containing(next_start);
        out.push(cursor);
    }
    Ok(out)
}
