// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Form state snapshots.
//!
//! The Filter Builder never reads live form state: every build call takes an
//! explicit [`FormSnapshot`] captured at the moment of the triggering event.
//! This removes the race between "value at click time" and "value at
//! async-callback time" that a shared mutable field registry invites.
//!
//! Checkbox groups are typed structs keyed by their enum, so preset-apply
//! logic is an exhaustive match: a misspelled field name is a compile error,
//! never a silent no-op.

use fleet_report_domain::{
    GroupKey, Rank, ReportFilters, ReportType, RequestStatus, SortSpec,
};

/// Which of the two mutually exclusive date criteria the form is using.
///
/// Selecting a mode makes the other mode's stored values inert: the builder
/// reads only the active mode, so a stale value cannot leak into the built
/// filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateMode {
    /// Explicit start/end date range.
    #[default]
    DateRange,
    /// Roster period selection.
    RosterPeriods,
}

/// Checkbox state for the status group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusChecks {
    /// PENDING box.
    pub pending: bool,
    /// SUBMITTED box.
    pub submitted: bool,
    /// IN_REVIEW box.
    pub in_review: bool,
    /// APPROVED box.
    pub approved: bool,
    /// REJECTED box.
    pub rejected: bool,
    /// PROCESSING box (rendered for leave bids only).
    pub processing: bool,
}

impl StatusChecks {
    /// Returns whether the box for the given status is checked.
    #[must_use]
    pub const fn is_checked(&self, status: RequestStatus) -> bool {
        match status {
            RequestStatus::Pending => self.pending,
            RequestStatus::Submitted => self.submitted,
            RequestStatus::InReview => self.in_review,
            RequestStatus::Approved => self.approved,
            RequestStatus::Rejected => self.rejected,
            RequestStatus::Processing => self.processing,
        }
    }

    /// Sets the box for the given status.
    pub const fn set(&mut self, status: RequestStatus, checked: bool) {
        match status {
            RequestStatus::Pending => self.pending = checked,
            RequestStatus::Submitted => self.submitted = checked,
            RequestStatus::InReview => self.in_review = checked,
            RequestStatus::Approved => self.approved = checked,
            RequestStatus::Rejected => self.rejected = checked,
            RequestStatus::Processing => self.processing = checked,
        }
    }

    /// Returns the checked statuses within the report type's vocabulary, in
    /// vocabulary order.
    ///
    /// A checked box outside the vocabulary (e.g., PROCESSING left over from
    /// a leave-bids form) contributes nothing.
    #[must_use]
    pub fn selected_for(&self, report_type: ReportType) -> Vec<RequestStatus> {
        report_type
            .status_vocabulary()
            .iter()
            .copied()
            .filter(|status| self.is_checked(*status))
            .collect()
    }
}

/// Checkbox state for the rank group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankChecks {
    /// Captain box.
    pub captain: bool,
    /// First Officer box.
    pub first_officer: bool,
}

impl RankChecks {
    /// Returns whether the box for the given rank is checked.
    #[must_use]
    pub const fn is_checked(&self, rank: Rank) -> bool {
        match rank {
            Rank::Captain => self.captain,
            Rank::FirstOfficer => self.first_officer,
        }
    }

    /// Sets the box for the given rank.
    pub const fn set(&mut self, rank: Rank, checked: bool) {
        match rank {
            Rank::Captain => self.captain = checked,
            Rank::FirstOfficer => self.first_officer = checked,
        }
    }

    /// Returns the checked ranks, Captain first.
    #[must_use]
    pub fn selected(&self) -> Vec<Rank> {
        [Rank::Captain, Rank::FirstOfficer]
            .into_iter()
            .filter(|rank| self.is_checked(*rank))
            .collect()
    }
}

/// An immutable snapshot of report form state.
///
/// Raw text fields stay raw here; normalization happens in the builder so a
/// snapshot is a faithful record of what the form held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    /// Active date criterion mode.
    pub date_mode: DateMode,
    /// Raw start date input (ISO 8601 expected).
    pub start_date: String,
    /// Raw end date input (ISO 8601 expected).
    pub end_date: String,
    /// Selected roster period codes, in selection order.
    pub roster_periods: Vec<String>,
    /// Status checkbox group.
    pub status: StatusChecks,
    /// Rank checkbox group.
    pub rank: RankChecks,
    /// Selected check type identifiers (certifications form only).
    pub check_types: Vec<String>,
    /// Raw expiry threshold input (certifications form only).
    pub expiry_threshold: String,
    /// Selected grouping keys, outermost first.
    pub group_by: Vec<GroupKey>,
    /// Requested sort.
    pub sort: Option<SortSpec>,
    /// Current page (1-indexed).
    pub page: u32,
    /// Chosen page size, if the user changed it.
    pub page_size: Option<u32>,
}

impl Default for FormSnapshot {
    fn default() -> Self {
        Self {
            date_mode: DateMode::default(),
            start_date: String::new(),
            end_date: String::new(),
            roster_periods: Vec::new(),
            status: StatusChecks::default(),
            rank: RankChecks::default(),
            check_types: Vec::new(),
            expiry_threshold: String::new(),
            group_by: Vec::new(),
            sort: None,
            page: 1,
            page_size: None,
        }
    }
}

impl FormSnapshot {
    /// Maps a stored filter record back onto form state (preset apply).
    ///
    /// Every filter field writes through its typed setter, so the mapping is
    /// exhaustive over the enums rather than keyed by field-name strings.
    #[must_use]
    pub fn from_filters(filters: &ReportFilters) -> Self {
        let mut snapshot = Self::default();

        if let Some(range) = filters.date_range {
            snapshot.date_mode = DateMode::DateRange;
            snapshot.start_date = range.start_date.to_string();
            snapshot.end_date = range.end_date.to_string();
        } else if !filters.roster_periods.is_empty() {
            snapshot.date_mode = DateMode::RosterPeriods;
            snapshot.roster_periods = filters
                .roster_periods
                .iter()
                .map(ToString::to_string)
                .collect();
        }

        for status in &filters.status {
            snapshot.status.set(*status, true);
        }
        for rank in &filters.rank {
            snapshot.rank.set(*rank, true);
        }

        snapshot.check_types = filters.check_types.clone();
        snapshot.expiry_threshold = filters
            .expiry_threshold
            .map_or_else(String::new, |days| days.to_string());
        snapshot.group_by = filters.group_by.clone();
        snapshot.sort = filters.sort;
        snapshot.page = filters.effective_page();
        snapshot.page_size = filters.page_size;

        snapshot
    }
}
