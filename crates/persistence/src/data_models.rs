// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use fleet_report_domain::{Rank, ReportRecord, ReportType, RequestStatus, RosterPeriodCode};

use crate::error::PersistenceError;

/// A report row ready for insertion. The store assigns the record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    /// The report type this row belongs to.
    pub report_type: ReportType,
    /// Pilot display name.
    pub pilot_name: String,
    /// Employee identifier.
    pub employee_id: String,
    /// Pilot rank.
    pub rank: Rank,
    /// Record category (leave type, flight request category).
    pub category: Option<String>,
    /// Request status, for request-shaped report types.
    pub status: Option<RequestStatus>,
    /// First day of the record's date span.
    pub start_date: Option<NaiveDate>,
    /// Last day of the record's date span (inclusive).
    pub end_date: Option<NaiveDate>,
    /// Roster period the record is assigned to.
    pub roster_period: Option<RosterPeriodCode>,
    /// Check type identifier (certifications).
    pub check_type: Option<String>,
    /// Certification expiry date.
    pub expiry_date: Option<NaiveDate>,
}

/// Raw column values of one `report_records` row, before domain parsing.
pub type RawRecordRow = (
    i64,
    String,
    String,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// Reconstructs a domain record from raw column values.
///
/// # Errors
///
/// Returns an error if a stored enum name or date does not parse.
pub fn record_from_row(row: RawRecordRow) -> Result<ReportRecord, PersistenceError> {
    let (
        record_id,
        pilot_name,
        employee_id,
        rank_str,
        category,
        status_str,
        start_date_str,
        end_date_str,
        roster_period_str,
        check_type,
        expiry_date_str,
    ) = row;

    let rank = Rank::parse(&rank_str)
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;
    let status = status_str
        .as_deref()
        .map(RequestStatus::parse)
        .transpose()
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;
    let roster_period = roster_period_str
        .as_deref()
        .map(RosterPeriodCode::parse)
        .transpose()
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;

    Ok(ReportRecord {
        record_id,
        pilot_name,
        employee_id,
        rank,
        category,
        status,
        start_date: parse_stored_date(start_date_str)?,
        end_date: parse_stored_date(end_date_str)?,
        roster_period,
        check_type,
        expiry_date: parse_stored_date(expiry_date_str)?,
    })
}

fn parse_stored_date(raw: Option<String>) -> Result<Option<NaiveDate>, PersistenceError> {
    raw.map(|s| {
        s.parse::<NaiveDate>().map_err(|e| {
            PersistenceError::ReconstructionError(format!("Failed to parse date '{s}': {e}"))
        })
    })
    .transpose()
}
