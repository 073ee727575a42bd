// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::roster::RosterPeriodCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of report types the system can produce.
///
/// Report-type dispatch is always an exhaustive `match`; adding a report
/// type is a compile-time-checked addition, never a string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    /// Pilot roster records.
    #[serde(rename = "pilots")]
    Pilots,
    /// Certification and check expiry records.
    #[serde(rename = "certifications")]
    Certifications,
    /// Leave requests.
    #[serde(rename = "leave-requests")]
    LeaveRequests,
    /// Flight requests.
    #[serde(rename = "flight-requests")]
    FlightRequests,
    /// Leave bids.
    #[serde(rename = "leave-bids")]
    LeaveBids,
}

impl ReportType {
    /// All report types, in display order.
    pub const ALL: [Self; 5] = [
        Self::Pilots,
        Self::Certifications,
        Self::LeaveRequests,
        Self::FlightRequests,
        Self::LeaveBids,
    ];

    /// Parses a report type from its wire name.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known report type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "pilots" => Ok(Self::Pilots),
            "certifications" => Ok(Self::Certifications),
            "leave-requests" => Ok(Self::LeaveRequests),
            "flight-requests" => Ok(Self::FlightRequests),
            "leave-bids" => Ok(Self::LeaveBids),
            _ => Err(DomainError::InvalidReportType(s.to_string())),
        }
    }

    /// Returns the kebab-case wire name of this report type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pilots => "pilots",
            Self::Certifications => "certifications",
            Self::LeaveRequests => "leave-requests",
            Self::FlightRequests => "flight-requests",
            Self::LeaveBids => "leave-bids",
        }
    }

    /// Returns the status vocabulary for this report type.
    ///
    /// Pilots and certifications carry no request status. Leave bids extend
    /// the shared request vocabulary with `Processing`.
    #[must_use]
    pub const fn status_vocabulary(&self) -> &'static [RequestStatus] {
        match self {
            Self::Pilots | Self::Certifications => &[],
            Self::LeaveRequests | Self::FlightRequests => &[
                RequestStatus::Pending,
                RequestStatus::Submitted,
                RequestStatus::InReview,
                RequestStatus::Approved,
                RequestStatus::Rejected,
            ],
            Self::LeaveBids => &[
                RequestStatus::Pending,
                RequestStatus::Submitted,
                RequestStatus::InReview,
                RequestStatus::Approved,
                RequestStatus::Rejected,
                RequestStatus::Processing,
            ],
        }
    }

    /// Returns whether this report type filters on check types and expiry.
    #[must_use]
    pub const fn has_certification_fields(&self) -> bool {
        matches!(self, Self::Certifications)
    }
}

impl FromStr for ReportType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request status for leave, flight-request and leave-bid records.
///
/// Wire names are the SCREAMING_SNAKE forms used by the upstream schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Awaiting review.
    #[serde(rename = "PENDING")]
    Pending,
    /// Submitted by the pilot, not yet picked up.
    #[serde(rename = "SUBMITTED")]
    Submitted,
    /// Under active review.
    #[serde(rename = "IN_REVIEW")]
    InReview,
    /// Approved.
    #[serde(rename = "APPROVED")]
    Approved,
    /// Rejected.
    #[serde(rename = "REJECTED")]
    Rejected,
    /// Being processed by the bid allocator (leave bids only).
    #[serde(rename = "PROCESSING")]
    Processing,
}

impl RequestStatus {
    /// Parses a status from its wire name.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "SUBMITTED" => Ok(Self::Submitted),
            "IN_REVIEW" => Ok(Self::InReview),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "PROCESSING" => Ok(Self::Processing),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }

    /// Returns the wire name of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Submitted => "SUBMITTED",
            Self::InReview => "IN_REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Processing => "PROCESSING",
        }
    }

    /// Returns whether this status belongs to the report type's vocabulary.
    #[must_use]
    pub fn is_valid_for(&self, report_type: ReportType) -> bool {
        report_type.status_vocabulary().contains(self)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pilot rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Captain.
    Captain,
    /// First Officer.
    #[serde(rename = "First Officer")]
    FirstOfficer,
}

impl Rank {
    /// Parses a rank from its wire name.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known rank.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Captain" => Ok(Self::Captain),
            "First Officer" => Ok(Self::FirstOfficer),
            _ => Err(DomainError::InvalidRank(s.to_string())),
        }
    }

    /// Returns the wire name of this rank.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Captain => "Captain",
            Self::FirstOfficer => "First Officer",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A hierarchical grouping key.
///
/// Grouping key lists are ordered (outermost key first) and duplicate-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupKey {
    /// Group by roster period code.
    RosterPeriod,
    /// Group by pilot rank.
    Rank,
    /// Group by record category.
    Category,
}

impl GroupKey {
    /// Parses a grouping key from its wire name.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known key.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "rosterPeriod" => Ok(Self::RosterPeriod),
            "rank" => Ok(Self::Rank),
            "category" => Ok(Self::Category),
            _ => Err(DomainError::InvalidGroupKey(s.to_string())),
        }
    }

    /// Returns the wire name of this key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RosterPeriod => "rosterPeriod",
            Self::Rank => "rank",
            Self::Category => "category",
        }
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sortable columns of the shared record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Pilot display name.
    PilotName,
    /// Employee identifier.
    EmployeeId,
    /// Record start date.
    StartDate,
    /// Certification expiry date.
    ExpiryDate,
    /// Request status.
    Status,
    /// Record category.
    Category,
}

impl SortField {
    /// Parses a sort field from its wire name.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known field.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "pilot_name" => Ok(Self::PilotName),
            "employee_id" => Ok(Self::EmployeeId),
            "start_date" => Ok(Self::StartDate),
            "expiry_date" => Ok(Self::ExpiryDate),
            "status" => Ok(Self::Status),
            "category" => Ok(Self::Category),
            _ => Err(DomainError::InvalidSortField(s.to_string())),
        }
    }

    /// Returns the wire name of this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PilotName => "pilot_name",
            Self::EmployeeId => "employee_id",
            Self::StartDate => "start_date",
            Self::ExpiryDate => "expiry_date",
            Self::Status => "status",
            Self::Category => "category",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Ascending,
    /// Descending.
    Descending,
}

/// A sort request: one typed column plus a direction.
///
/// Sorting is part of the page fetch, independent of grouping. The data
/// source breaks ties by record id so page contents are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// The column to sort by.
    pub field: SortField,
    /// The sort direction.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Creates an ascending sort on the given field.
    #[must_use]
    pub const fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Creates a descending sort on the given field.
    #[must_use]
    pub const fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// The row shape shared by every report type.
///
/// The filter-and-pagination contract reads only the fields it filters and
/// groups on; everything else is opaque display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Canonical record identifier assigned by the data source.
    pub record_id: i64,
    /// Pilot display name.
    pub pilot_name: String,
    /// Employee identifier.
    pub employee_id: String,
    /// Pilot rank.
    pub rank: Rank,
    /// Record category (e.g., leave type or certification category).
    pub category: Option<String>,
    /// Request status, for report types with a status vocabulary.
    pub status: Option<RequestStatus>,
    /// Record start date.
    pub start_date: Option<NaiveDate>,
    /// Record end date.
    pub end_date: Option<NaiveDate>,
    /// Roster period the record falls in.
    pub roster_period: Option<RosterPeriodCode>,
    /// Check type identifier (certification reports).
    pub check_type: Option<String>,
    /// Certification expiry date.
    pub expiry_date: Option<NaiveDate>,
}

impl ReportRecord {
    /// Returns the display label this record contributes under a grouping key.
    ///
    /// Records missing the grouped field collect under a stable fallback
    /// label rather than being dropped, so the grouping transform never
    /// loses rows.
    #[must_use]
    pub fn group_label(&self, key: GroupKey) -> String {
        match key {
            GroupKey::RosterPeriod => self
                .roster_period
                .map_or_else(|| String::from("Unassigned"), |code| code.to_string()),
            GroupKey::Rank => self.rank.as_str().to_string(),
            GroupKey::Category => self
                .category
                .clone()
                .unwrap_or_else(|| String::from("Uncategorized")),
        }
    }
}
