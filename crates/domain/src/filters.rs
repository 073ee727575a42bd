// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Filter records.
//!
//! A `ReportFilters` value is the normalized output of the Filter Builder:
//! a sparse record of optional criteria that becomes a deterministic dataset
//! request. Records are immutable once built; every build produces a fresh
//! record from current form state.
//!
//! ## Invariants
//!
//! - The empty record is valid and means "no restriction".
//! - Criteria combine conjunctively (AND across present fields); members of
//!   a set-valued criterion combine disjunctively (OR within the set).
//! - An empty `Vec` criterion is "no filter", never "match nothing"; the
//!   Filter Builder omits checkbox groups with zero boxes checked.

use crate::error::DomainError;
use crate::roster::RosterPeriodCode;
use crate::types::{GroupKey, Rank, ReportType, RequestStatus, SortSpec};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default page size when a pagination cursor is present without one.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// An inclusive date range with `start <= end` enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range.
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns an error if `start_date > end_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, DomainError> {
        if start_date > end_date {
            return Err(DomainError::InvalidDateRange {
                start: start_date.to_string(),
                end: end_date.to_string(),
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Returns whether the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// A sparse record of report criteria.
///
/// All fields deserialize with defaults so presets saved under older schema
/// revisions load best-effort: missing fields become their empty forms and
/// unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportFilters {
    /// Explicit date range criterion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    /// Roster period criterion; ordered, duplicate-free. Mutually exclusive
    /// with `date_range`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roster_periods: Vec<RosterPeriodCode>,
    /// Status criterion (OR within the set).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<RequestStatus>,
    /// Rank criterion (OR within the set).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rank: Vec<Rank>,
    /// Check type criterion (certifications only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub check_types: Vec<String>,
    /// Expiry window in days (certifications only). Absence is the only way
    /// to say "no threshold"; there is no sentinel value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_threshold: Option<u32>,
    /// 1-indexed page number. Absent for export (full dataset) requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size. Absent for export requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Hierarchical grouping keys, outermost first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<GroupKey>,
    /// Sort request applied by the data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
}

impl ReportFilters {
    /// Returns the empty record: no restriction, full dataset.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns whether a pagination cursor is present.
    #[must_use]
    pub const fn is_paginated(&self) -> bool {
        self.page.is_some() || self.page_size.is_some()
    }

    /// Returns the effective page number (1 when absent).
    #[must_use]
    pub fn effective_page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Returns the effective page size.
    #[must_use]
    pub fn effective_page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }

    /// Returns a copy with the pagination cursor stripped.
    ///
    /// Export and email flows reuse the exact record the preview used; only
    /// the cursor is removed so the data source returns the full set.
    #[must_use]
    pub fn without_pagination(&self) -> Self {
        Self {
            page: None,
            page_size: None,
            ..self.clone()
        }
    }
}

/// A named, persisted filter record a user can reapply later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPreset {
    /// Store-assigned identifier.
    pub id: i64,
    /// The report type the preset applies to.
    pub report_type: ReportType,
    /// User-chosen preset name.
    pub name: String,
    /// The saved filter record, loaded back verbatim.
    pub filters: ReportFilters,
}
