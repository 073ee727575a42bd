// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The Filter Builder.
//!
//! Deterministically translates a form-state snapshot into a normalized
//! [`ReportFilters`] record. The builder is pure and total: given the same
//! snapshot it always yields the same record, and it never fails — invalid
//! or partial input degrades to omission of that criterion, never to a
//! filter that silently over- or under-matches.
//!
//! ## Rules
//!
//! - A date range is included only when both ends parse and are ordered;
//!   a single-sided or inverted range is dropped silently.
//! - Checkbox groups with zero boxes checked are omitted entirely: omitted
//!   means "no filter", not "match nothing".
//! - The date-mode flag resolves the date-range/roster-period exclusivity;
//!   only the active mode's values are read.
//! - Numeric thresholds parse base-10; anything else is omitted.
//! - Criteria that do not apply to the report type are never emitted.

use crate::snapshot::{DateMode, FormSnapshot};
use chrono::NaiveDate;
use fleet_report_domain::{
    DEFAULT_PAGE_SIZE, DateRange, GroupKey, ReportFilters, ReportType, RosterPeriodCode,
};

/// Builds a normalized filter record from a form snapshot.
///
/// The returned record always carries a pagination cursor (preview mode);
/// export and email flows strip it with
/// [`ReportFilters::without_pagination`].
#[must_use]
pub fn build_filters(report_type: ReportType, snapshot: &FormSnapshot) -> ReportFilters {
    let (date_range, roster_periods) = match snapshot.date_mode {
        DateMode::DateRange => (
            build_date_range(&snapshot.start_date, &snapshot.end_date),
            Vec::new(),
        ),
        DateMode::RosterPeriods => (None, build_roster_periods(&snapshot.roster_periods)),
    };

    let (check_types, expiry_threshold) = if report_type.has_certification_fields() {
        (
            dedup_trimmed(&snapshot.check_types),
            parse_threshold(&snapshot.expiry_threshold),
        )
    } else {
        (Vec::new(), None)
    };

    ReportFilters {
        date_range,
        roster_periods,
        status: snapshot.status.selected_for(report_type),
        rank: snapshot.rank.selected(),
        check_types,
        expiry_threshold,
        page: Some(snapshot.page.max(1)),
        page_size: Some(snapshot.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)),
        group_by: dedup_keys(&snapshot.group_by),
        sort: snapshot.sort,
    }
}

/// Parses a raw ISO 8601 date input. Whitespace is tolerated; anything that
/// is not a calendar date yields `None`.
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Builds the date range criterion: present only when both ends parse and
/// `start <= end`.
fn build_date_range(start_raw: &str, end_raw: &str) -> Option<DateRange> {
    let start = parse_iso_date(start_raw)?;
    let end = parse_iso_date(end_raw)?;
    DateRange::new(start, end).ok()
}

/// Parses the selected roster period codes, dropping unparsable entries and
/// duplicates while preserving selection order.
fn build_roster_periods(raw: &[String]) -> Vec<RosterPeriodCode> {
    let mut out: Vec<RosterPeriodCode> = Vec::new();
    for entry in raw {
        if let Ok(code) = RosterPeriodCode::parse(entry.trim()) {
            if !out.contains(&code) {
                out.push(code);
            }
        }
    }
    out
}

/// Base-10 integer parse for the expiry threshold; empty or non-numeric
/// input (including any legacy "all" sentinel) is omitted.
fn parse_threshold(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// Trims entries, drops empties and duplicates, preserves order.
fn dedup_trimmed(raw: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for entry in raw {
        let trimmed = entry.trim();
        if !trimmed.is_empty() && !out.iter().any(|existing| existing == trimmed) {
            out.push(trimmed.to_string());
        }
    }
    out
}

/// Drops duplicate grouping keys, preserving the order of first appearance.
fn dedup_keys(raw: &[GroupKey]) -> Vec<GroupKey> {
    let mut out: Vec<GroupKey> = Vec::new();
    for key in raw {
        if !out.contains(key) {
            out.push(*key);
        }
    }
    out
}
