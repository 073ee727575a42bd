// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report operations.
//!
//! Every operation follows the same path: translate the raw request into a
//! typed form snapshot, run the Filter Builder, validate the built record,
//! and hand it to the data source. Export and email reuse the exact record
//! a preview of the same form would run under, with the pagination cursor
//! stripped, so what the user saw is what ships.

use chrono::NaiveDate;
use fleet_report::{
    DateMode, FormSnapshot, GroupNode, RankChecks, StatusChecks, build_filters, group_rows,
    parse_optional_recipients, parse_recipients,
};
use fleet_report_domain::{
    DomainError, GroupKey, Rank, ReportFilters, ReportRecord, ReportType, RequestStatus,
    RosterPeriodCode, SortDirection, SortField, SortSpec, affected_periods, periods,
    validate_filters, validate_preset_name,
};
use fleet_report_persistence::{FetchResult, RecordDraft, SqliteStore};
use tracing::info;

use crate::error::{ApiError, translate_domain_error};
use crate::mailer::{MailReceipt, OutgoingReport, ReportMailer};
use crate::request_response::{
    DeletePresetResponse, EmailReportRequest, EmailReportResponse, ExportReportResponse,
    GroupNodeInfo, ListPresetsResponse, LoadRecordRequest, LoadRecordResponse,
    PreviewReportResponse, ReportQueryRequest, RosterPeriodsResponse, SavePresetRequest,
    SavePresetResponse, StatusCountInfo,
};

/// Parses a report type wire name.
///
/// # Errors
///
/// Returns an error if the name is not a known report type.
pub fn parse_report_type(s: &str) -> Result<ReportType, ApiError> {
    ReportType::parse(s).map_err(translate_domain_error)
}

/// Translates a raw query request into a typed form snapshot.
fn build_snapshot(request: &ReportQueryRequest) -> Result<FormSnapshot, ApiError> {
    let date_mode = match request.date_mode.as_deref() {
        None | Some("dateRange") => DateMode::DateRange,
        Some("rosterPeriods") => DateMode::RosterPeriods,
        Some(other) => {
            return Err(ApiError::InvalidInput {
                field: String::from("date_mode"),
                message: format!(
                    "Unknown date mode: '{other}'. Expected 'dateRange' or 'rosterPeriods'"
                ),
            });
        }
    };

    let mut status = StatusChecks::default();
    for name in &request.status {
        let parsed: RequestStatus = RequestStatus::parse(name).map_err(translate_domain_error)?;
        status.set(parsed, true);
    }
    let mut rank = RankChecks::default();
    for name in &request.rank {
        let parsed: Rank = Rank::parse(name).map_err(translate_domain_error)?;
        rank.set(parsed, true);
    }

    let mut group_by: Vec<GroupKey> = Vec::new();
    for name in &request.group_by {
        group_by.push(GroupKey::parse(name).map_err(translate_domain_error)?);
    }

    let sort = request
        .sort_field
        .as_deref()
        .map(|field_name| {
            let field: SortField =
                SortField::parse(field_name).map_err(translate_domain_error)?;
            let direction = match request.sort_direction.as_deref() {
                None | Some("asc") => SortDirection::Ascending,
                Some("desc") => SortDirection::Descending,
                Some(other) => {
                    return Err(ApiError::InvalidInput {
                        field: String::from("sort_direction"),
                        message: format!(
                            "Unknown sort direction: '{other}'. Expected 'asc' or 'desc'"
                        ),
                    });
                }
            };
            Ok(SortSpec { field, direction })
        })
        .transpose()?;

    Ok(FormSnapshot {
        date_mode,
        start_date: request.start_date.clone(),
        end_date: request.end_date.clone(),
        roster_periods: request.roster_periods.clone(),
        status,
        rank,
        check_types: request.check_types.clone(),
        expiry_threshold: request.expiry_threshold.clone(),
        group_by,
        sort,
        page: request.page.unwrap_or(1),
        page_size: request.page_size,
    })
}

/// Builds and validates the filter record for a query request.
///
/// # Errors
///
/// Returns an error if the request carries unknown wire names or the built
/// record violates a filter rule.
pub fn resolve_filters(
    report_type: ReportType,
    request: &ReportQueryRequest,
) -> Result<ReportFilters, ApiError> {
    let snapshot = build_snapshot(request)?;
    let filters = build_filters(report_type, &snapshot);
    validate_filters(report_type, &filters).map_err(translate_domain_error)?;
    Ok(filters)
}

fn group_node_info(node: &GroupNode) -> GroupNodeInfo {
    GroupNodeInfo {
        key: node.key.as_str().to_string(),
        label: node.label.clone(),
        count: node.count as u64,
        children: node.children.iter().map(group_node_info).collect(),
        rows: node.rows.clone(),
    }
}

fn status_count_info(counts: &[(RequestStatus, u64)]) -> Vec<StatusCountInfo> {
    counts
        .iter()
        .map(|(status, count)| StatusCountInfo {
            status: status.as_str().to_string(),
            count: *count,
        })
        .collect()
}

/// Fetches one page of a report, arranged for display.
///
/// # Errors
///
/// Returns an error if the request is invalid or the fetch fails.
pub fn preview_report(
    store: &SqliteStore,
    report_type_name: &str,
    request: &ReportQueryRequest,
    as_of: NaiveDate,
) -> Result<PreviewReportResponse, ApiError> {
    let report_type = parse_report_type(report_type_name)?;
    let filters = resolve_filters(report_type, request)?;

    let result: FetchResult = store.fetch(report_type, &filters, as_of)?;
    let page = group_rows(&result.records, &filters.group_by);

    info!(
        report_type = report_type.as_str(),
        page = filters.effective_page(),
        total_records = result.pagination.total_records,
        "Previewed report"
    );

    Ok(PreviewReportResponse {
        report_type: report_type.as_str().to_string(),
        records: page.flat,
        groups: page.groups.iter().map(group_node_info).collect(),
        pagination: result.pagination,
        status_counts: status_count_info(&result.status_counts),
        filters,
    })
}

/// Exports the full dataset a preview of the same form pages through.
///
/// # Errors
///
/// Returns an error if the request is invalid or the fetch fails.
pub fn export_report(
    store: &SqliteStore,
    report_type_name: &str,
    request: &ReportQueryRequest,
    as_of: NaiveDate,
) -> Result<ExportReportResponse, ApiError> {
    let report_type = parse_report_type(report_type_name)?;
    let filters = resolve_filters(report_type, request)?.without_pagination();

    let result: FetchResult = store.fetch(report_type, &filters, as_of)?;
    let document = render_document(report_type, &result.records, &filters.group_by);

    info!(
        report_type = report_type.as_str(),
        total_records = result.pagination.total_records,
        "Exported report"
    );

    Ok(ExportReportResponse {
        report_type: report_type.as_str().to_string(),
        total_records: result.pagination.total_records,
        document,
        filters,
    })
}

/// Renders and dispatches the full dataset to validated recipients.
///
/// Recipient validation happens before any fetch or dispatch work; an
/// invalid address fails the whole request rather than a partial send.
///
/// # Errors
///
/// Returns an error if the request is invalid, the fetch fails, or the
/// transport refuses the message.
pub fn email_report(
    store: &SqliteStore,
    mailer: &dyn ReportMailer,
    report_type_name: &str,
    request: &EmailReportRequest,
    as_of: NaiveDate,
) -> Result<EmailReportResponse, ApiError> {
    let report_type = parse_report_type(report_type_name)?;

    let recipients = parse_recipients(&request.recipients).map_err(translate_domain_error)?;
    let cc = parse_optional_recipients(&request.cc).map_err(translate_domain_error)?;
    let bcc = parse_optional_recipients(&request.bcc).map_err(translate_domain_error)?;

    let filters = resolve_filters(report_type, &request.query)?.without_pagination();
    let result: FetchResult = store.fetch(report_type, &filters, as_of)?;
    let document = render_document(report_type, &result.records, &filters.group_by);

    let subject = request
        .subject
        .clone()
        .unwrap_or_else(|| format!("{} report", report_title(report_type)));
    let requested = recipients.len();

    let outgoing = OutgoingReport {
        subject,
        recipients,
        cc,
        bcc,
        body: document,
    };
    let receipt: MailReceipt = mailer
        .send(&outgoing)
        .map_err(|e| ApiError::RequestFailed {
            message: e.to_string(),
        })?;

    info!(
        report_type = report_type.as_str(),
        message_id = receipt.message_id,
        accepted = receipt.accepted.len(),
        rejected = receipt.rejected.len(),
        "Emailed report"
    );

    let message = format!(
        "Report dispatched to {} of {requested} recipients",
        receipt.accepted.len()
    );
    Ok(EmailReportResponse {
        report_type: report_type.as_str().to_string(),
        message_id: receipt.message_id,
        accepted: receipt.accepted,
        rejected: receipt.rejected,
        total_records: result.pagination.total_records,
        message,
    })
}

/// Loads one report row into the data source.
///
/// # Errors
///
/// Returns an error if a field does not parse or is outside the report
/// type's vocabulary.
pub fn load_record(
    store: &SqliteStore,
    report_type_name: &str,
    request: &LoadRecordRequest,
) -> Result<LoadRecordResponse, ApiError> {
    let report_type = parse_report_type(report_type_name)?;

    let rank = Rank::parse(&request.rank).map_err(translate_domain_error)?;
    let status = request
        .status
        .as_deref()
        .map(|name| {
            let status = RequestStatus::parse(name).map_err(translate_domain_error)?;
            if status.is_valid_for(report_type) {
                Ok(status)
            } else {
                Err(translate_domain_error(DomainError::StatusNotInVocabulary {
                    report_type: report_type.as_str().to_string(),
                    status: name.to_string(),
                }))
            }
        })
        .transpose()?;
    let roster_period = request
        .roster_period
        .as_deref()
        .map(RosterPeriodCode::parse)
        .transpose()
        .map_err(translate_domain_error)?;

    let draft = RecordDraft {
        report_type,
        pilot_name: request.pilot_name.clone(),
        employee_id: request.employee_id.clone(),
        rank,
        category: request.category.clone(),
        status,
        start_date: parse_date_field(request.start_date.as_deref())?,
        end_date: parse_date_field(request.end_date.as_deref())?,
        roster_period,
        check_type: request.check_type.clone(),
        expiry_date: parse_date_field(request.expiry_date.as_deref())?,
    };

    let record_id = store.insert_record(&draft)?;
    Ok(LoadRecordResponse {
        record_id,
        message: format!("Record {record_id} loaded"),
    })
}

/// Saves a named filter preset.
///
/// # Errors
///
/// Returns an error if the name is blank or the filters violate a rule for
/// the target report type.
pub fn save_preset(
    store: &SqliteStore,
    request: &SavePresetRequest,
) -> Result<SavePresetResponse, ApiError> {
    let report_type = parse_report_type(&request.report_type)?;
    validate_preset_name(&request.name).map_err(translate_domain_error)?;
    validate_filters(report_type, &request.filters).map_err(translate_domain_error)?;

    let preset_id = store.save_preset(report_type, request.name.trim(), &request.filters)?;
    Ok(SavePresetResponse {
        preset_id,
        message: format!("Preset '{}' saved", request.name.trim()),
    })
}

/// Lists presets for a report type, ordered by name.
///
/// # Errors
///
/// Returns an error if the report type is unknown or the store fails.
pub fn list_presets(
    store: &SqliteStore,
    report_type_name: &str,
) -> Result<ListPresetsResponse, ApiError> {
    let report_type = parse_report_type(report_type_name)?;
    let presets = store.list_presets(report_type)?;
    Ok(ListPresetsResponse {
        report_type: report_type.as_str().to_string(),
        presets,
    })
}

/// Deletes a preset by id.
///
/// # Errors
///
/// Returns an error if the preset does not exist.
pub fn delete_preset(
    store: &SqliteStore,
    preset_id: i64,
) -> Result<DeletePresetResponse, ApiError> {
    store.delete_preset(preset_id)?;
    Ok(DeletePresetResponse {
        preset_id,
        message: format!("Preset {preset_id} deleted"),
    })
}

/// Lists all roster periods whose code year falls in the given range.
///
/// # Errors
///
/// Returns an error if `start_year > end_year`.
pub fn list_roster_periods(
    start_year: u16,
    end_year: u16,
) -> Result<RosterPeriodsResponse, ApiError> {
    let periods = periods(start_year, end_year).map_err(translate_domain_error)?;
    Ok(RosterPeriodsResponse { periods })
}

/// Reverse lookup: every roster period intersecting the given date range.
///
/// # Errors
///
/// Returns an error if a date does not parse or the range is inverted.
pub fn affected_roster_periods(
    start_date: &str,
    end_date: &str,
) -> Result<RosterPeriodsResponse, ApiError> {
    let start = parse_iso_date(start_date)?;
    let end = parse_iso_date(end_date)?;
    let periods = affected_periods(start, end).map_err(translate_domain_error)?;
    Ok(RosterPeriodsResponse { periods })
}

fn parse_iso_date(raw: &str) -> Result<NaiveDate, ApiError> {
    raw.trim().parse::<NaiveDate>().map_err(|e| {
        translate_domain_error(DomainError::DateParseError {
            date_string: raw.to_string(),
            error: e.to_string(),
        })
    })
}

fn parse_date_field(raw: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    raw.map(parse_iso_date).transpose()
}

fn report_title(report_type: ReportType) -> &'static str {
    match report_type {
        ReportType::Pilots => "Pilots",
        ReportType::Certifications => "Certifications",
        ReportType::LeaveRequests => "Leave Requests",
        ReportType::FlightRequests => "Flight Requests",
        ReportType::LeaveBids => "Leave Bids",
    }
}

/// Renders the dataset as a plain-text document, honoring the grouping
/// arrangement the preview would show.
fn render_document(
    report_type: ReportType,
    records: &[ReportRecord],
    group_by: &[GroupKey],
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} Report ({} records)\n",
        report_title(report_type),
        records.len()
    ));

    let page = group_rows(records, group_by);
    if page.groups.is_empty() {
        for record in &page.flat {
            render_record_line(&mut out, record, 0);
        }
    } else {
        for group in &page.groups {
            render_group(&mut out, group, 0);
        }
    }
    out
}

fn render_group(out: &mut String, node: &GroupNode, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!("{indent}{} ({})\n", node.label, node.count));
    for child in &node.children {
        render_group(out, child, depth + 1);
    }
    for record in &node.rows {
        render_record_line(out, record, depth + 1);
    }
}

fn render_record_line(out: &mut String, record: &ReportRecord, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!(
        "{indent}{} | {} | {}",
        record.pilot_name,
        record.employee_id,
        record.rank.as_str()
    ));
    if let Some(status) = record.status {
        out.push_str(&format!(" | {}", status.as_str()));
    }
    if let (Some(start), Some(end)) = (record.start_date, record.end_date) {
        out.push_str(&format!(" | {start} - {end}"));
    }
    if let Some(check_type) = &record.check_type {
        out.push_str(&format!(" | {check_type}"));
    }
    if let Some(expiry) = record.expiry_date {
        out.push_str(&format!(" | expires {expiry}"));
    }
    out.push('\n');
}
