// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report record queries.
//!
//! `fetch` is the single dataset entry point: it translates a filter record
//! into a conjunctive WHERE clause, counts the full matching set for
//! authoritative pagination metadata, and applies LIMIT/OFFSET only when the
//! filter carries a pagination cursor. Export requests (no cursor) therefore
//! return every row the preview paged through under the same filters.

use chrono::{Days, NaiveDate};
use fleet_report_domain::{
    PaginationMeta, ReportFilters, ReportRecord, ReportType, RequestStatus, RosterPeriod,
    SortDirection, SortField,
};
use rusqlite::types::Value;
use rusqlite::{Connection, params, params_from_iter};
use tracing::debug;

use crate::data_models::{RawRecordRow, RecordDraft, record_from_row};
use crate::error::PersistenceError;

/// One fetched page plus its authoritative metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// The fetched rows, in requested order.
    pub records: Vec<ReportRecord>,
    /// Pagination metadata computed against the full matching set.
    pub pagination: PaginationMeta,
    /// Per-status counts of the full matching set, for report types with a
    /// status vocabulary.
    pub status_counts: Vec<(RequestStatus, u64)>,
}

/// Inserts one report row and returns its assigned record id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_record(conn: &Connection, draft: &RecordDraft) -> Result<i64, PersistenceError> {
    conn.execute(
        "INSERT INTO report_records (
            report_type, pilot_name, employee_id, rank, category, status,
            start_date, end_date, roster_period, check_type, expiry_date
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            draft.report_type.as_str(),
            draft.pilot_name,
            draft.employee_id,
            draft.rank.as_str(),
            draft.category,
            draft.status.map(|s| s.as_str()),
            draft.start_date.map(|d| d.to_string()),
            draft.end_date.map(|d| d.to_string()),
            draft.roster_period.map(|code| code.to_string()),
            draft.check_type,
            draft.expiry_date.map(|d| d.to_string()),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Fetches the dataset described by a filter record.
///
/// `as_of` anchors the expiry-threshold window, so the query layer itself
/// never reads the clock.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be
/// reconstructed.
pub fn fetch(
    conn: &Connection,
    report_type: ReportType,
    filters: &ReportFilters,
    as_of: NaiveDate,
) -> Result<FetchResult, PersistenceError> {
    let (where_clause, values) = build_where_clause(report_type, filters, as_of);

    let total_records: u64 = count_matching(conn, &where_clause, &values)?;
    let status_counts = if report_type.status_vocabulary().is_empty() {
        Vec::new()
    } else {
        count_by_status(conn, report_type, &where_clause, &values)?
    };

    let order_clause = build_order_clause(filters);
    let mut sql = format!(
        "SELECT record_id, pilot_name, employee_id, rank, category, status,
                start_date, end_date, roster_period, check_type, expiry_date
         FROM report_records WHERE {where_clause} ORDER BY {order_clause}"
    );

    let pagination = if filters.is_paginated() {
        let page = filters.effective_page();
        let page_size = filters.effective_page_size();
        let offset = u64::from(page - 1) * u64::from(page_size);
        sql.push_str(&format!(" LIMIT {page_size} OFFSET {offset}"));
        PaginationMeta::compute(page, page_size, total_records)
    } else {
        PaginationMeta::unpaginated(total_records)
    };

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), |row| {
        Ok::<RawRecordRow, rusqlite::Error>((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
            row.get(6)?,
            row.get(7)?,
            row.get(8)?,
            row.get(9)?,
            row.get(10)?,
        ))
    })?;

    let mut records: Vec<ReportRecord> = Vec::new();
    for row_result in rows {
        records.push(record_from_row(row_result?)?);
    }

    debug!(
        report_type = report_type.as_str(),
        total_records,
        returned = records.len(),
        "Fetched report dataset"
    );

    Ok(FetchResult {
        records,
        pagination,
        status_counts,
    })
}

/// Builds the conjunctive WHERE clause for a filter record.
///
/// Present criteria AND together; members of a set-valued criterion OR
/// within the set. Roster periods expand to their fixed date spans, so a
/// period criterion also matches rows that carry dates but no explicit
/// period assignment.
fn build_where_clause(
    report_type: ReportType,
    filters: &ReportFilters,
    as_of: NaiveDate,
) -> (String, Vec<Value>) {
    let mut conditions: Vec<String> = vec!["report_type = ?".to_string()];
    let mut values: Vec<Value> = vec![Value::from(report_type.as_str().to_string())];

    if let Some(range) = filters.date_range {
        conditions.push(
            "(start_date IS NOT NULL AND start_date <= ? \
             AND COALESCE(end_date, start_date) >= ?)"
                .to_string(),
        );
        values.push(Value::from(range.end_date.to_string()));
        values.push(Value::from(range.start_date.to_string()));
    }

    if !filters.roster_periods.is_empty() {
        let mut period_conditions: Vec<String> = Vec::new();
        for code in &filters.roster_periods {
            let span = RosterPeriod::from_code(*code);
            period_conditions.push(
                "(roster_period = ? OR (start_date IS NOT NULL AND start_date <= ? \
                 AND COALESCE(end_date, start_date) >= ?))"
                    .to_string(),
            );
            values.push(Value::from(code.to_string()));
            values.push(Value::from(span.end_date.to_string()));
            values.push(Value::from(span.start_date.to_string()));
        }
        conditions.push(format!("({})", period_conditions.join(" OR ")));
    }

    if !filters.status.is_empty() {
        let placeholders = vec!["?"; filters.status.len()].join(", ");
        conditions.push(format!("status IN ({placeholders})"));
        for status in &filters.status {
            values.push(Value::from(status.as_str().to_string()));
        }
    }

    if !filters.rank.is_empty() {
        let placeholders = vec!["?"; filters.rank.len()].join(", ");
        conditions.push(format!("rank IN ({placeholders})"));
        for rank in &filters.rank {
            values.push(Value::from(rank.as_str().to_string()));
        }
    }

    if !filters.check_types.is_empty() {
        let placeholders = vec!["?"; filters.check_types.len()].join(", ");
        conditions.push(format!("check_type IN ({placeholders})"));
        for check_type in &filters.check_types {
            values.push(Value::from(check_type.clone()));
        }
    }

    if let Some(days) = filters.expiry_threshold {
        let cutoff: NaiveDate = as_of
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        conditions.push("(expiry_date IS NOT NULL AND expiry_date <= ?)".to_string());
        values.push(Value::from(cutoff.to_string()));
    }

    (conditions.join(" AND "), values)
}

/// Maps the typed sort request to an ORDER BY clause. Record id breaks ties
/// so the ordering is total and pages never overlap.
fn build_order_clause(filters: &ReportFilters) -> String {
    filters.sort.map_or_else(
        || "record_id ASC".to_string(),
        |sort| {
            let column = match sort.field {
                SortField::PilotName => "pilot_name",
                SortField::EmployeeId => "employee_id",
                SortField::StartDate => "start_date",
                SortField::ExpiryDate => "expiry_date",
                SortField::Status => "status",
                SortField::Category => "category",
            };
            let direction = match sort.direction {
                SortDirection::Ascending => "ASC",
                SortDirection::Descending => "DESC",
            };
            format!("{column} {direction}, record_id ASC")
        },
    )
}

fn count_matching(
    conn: &Connection,
    where_clause: &str,
    values: &[Value],
) -> Result<u64, PersistenceError> {
    let sql = format!("SELECT COUNT(*) FROM report_records WHERE {where_clause}");
    let count: i64 = conn.query_row(&sql, params_from_iter(values.iter()), |row| row.get(0))?;
    u64::try_from(count)
        .map_err(|_| PersistenceError::QueryFailed(format!("Negative row count: {count}")))
}

fn count_by_status(
    conn: &Connection,
    report_type: ReportType,
    where_clause: &str,
    values: &[Value],
) -> Result<Vec<(RequestStatus, u64)>, PersistenceError> {
    let sql = format!(
        "SELECT status, COUNT(*) FROM report_records
         WHERE {where_clause} AND status IS NOT NULL
         GROUP BY status"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut raw_counts: Vec<(String, i64)> = Vec::new();
    for row_result in rows {
        raw_counts.push(row_result?);
    }

    // Vocabulary order, zero-count statuses included, so summaries line up
    // across fetches.
    let mut counts: Vec<(RequestStatus, u64)> = Vec::new();
    for status in report_type.status_vocabulary() {
        let count = raw_counts
            .iter()
            .find(|(name, _)| name == status.as_str())
            .map_or(0, |(_, n)| *n);
        counts.push((
            *status,
            u64::try_from(count).map_err(|_| {
                PersistenceError::QueryFailed(format!("Negative status count: {count}"))
            })?,
        ));
    }

    Ok(counts)
}
