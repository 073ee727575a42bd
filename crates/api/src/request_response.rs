// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Query requests carry raw form values (strings, checked wire names); the
//! operations translate them into a typed form snapshot and run the Filter
//! Builder, so clients submit exactly what their form holds.

use fleet_report_domain::{
    FilterPreset, PaginationMeta, ReportFilters, ReportRecord, RosterPeriod,
};

/// The raw report query form, shared by preview, export and email requests.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ReportQueryRequest {
    /// Active date mode: `"dateRange"` (default) or `"rosterPeriods"`.
    pub date_mode: Option<String>,
    /// Raw start date input (ISO 8601 expected).
    pub start_date: String,
    /// Raw end date input (ISO 8601 expected).
    pub end_date: String,
    /// Selected roster period codes.
    pub roster_periods: Vec<String>,
    /// Checked status wire names.
    pub status: Vec<String>,
    /// Checked rank wire names.
    pub rank: Vec<String>,
    /// Selected check type identifiers (certifications only).
    pub check_types: Vec<String>,
    /// Raw expiry threshold input (certifications only).
    pub expiry_threshold: String,
    /// Grouping key wire names, outermost first.
    pub group_by: Vec<String>,
    /// Sort field wire name.
    pub sort_field: Option<String>,
    /// Sort direction: `"asc"` (default) or `"desc"`.
    pub sort_direction: Option<String>,
    /// Requested page (1-indexed).
    pub page: Option<u32>,
    /// Requested page size.
    pub page_size: Option<u32>,
}

/// One node of the grouped display tree, in response form.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GroupNodeInfo {
    /// The grouping key wire name.
    pub key: String,
    /// The display label.
    pub label: String,
    /// Number of leaf rows in this subtree.
    pub count: u64,
    /// Child groups (non-leaf nodes).
    pub children: Vec<GroupNodeInfo>,
    /// Leaf rows (leaf nodes only).
    pub rows: Vec<ReportRecord>,
}

/// Per-status counts of the full matching set.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusCountInfo {
    /// The status wire name.
    pub status: String,
    /// Matching records with this status, across all pages.
    pub count: u64,
}

/// API response for a preview fetch: one page, arranged for display.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PreviewReportResponse {
    /// The report type wire name.
    pub report_type: String,
    /// The normalized filter record the query ran under.
    pub filters: ReportFilters,
    /// The page rows when no grouping was requested.
    pub records: Vec<ReportRecord>,
    /// The grouped page when grouping keys were requested.
    pub groups: Vec<GroupNodeInfo>,
    /// Authoritative pagination metadata.
    pub pagination: PaginationMeta,
    /// Status summary for report types with a status vocabulary.
    pub status_counts: Vec<StatusCountInfo>,
}

/// API response for an export: the full dataset rendering.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExportReportResponse {
    /// The report type wire name.
    pub report_type: String,
    /// The filter record the export ran under (cursor stripped).
    pub filters: ReportFilters,
    /// Total records in the exported dataset.
    pub total_records: u64,
    /// The rendered document.
    pub document: String,
}

/// API request to email a report.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EmailReportRequest {
    /// Raw recipient list (comma/semicolon separated).
    pub recipients: String,
    /// Raw cc list (may be empty).
    pub cc: String,
    /// Raw bcc list (may be empty).
    pub bcc: String,
    /// Optional subject override.
    pub subject: Option<String>,
    /// The report query the email renders.
    #[serde(flatten)]
    pub query: ReportQueryRequest,
}

/// API response for a dispatched report email.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmailReportResponse {
    /// The report type wire name.
    pub report_type: String,
    /// Transport-assigned message identifier.
    pub message_id: u64,
    /// Recipients the transport accepted.
    pub accepted: Vec<String>,
    /// Recipients the transport rejected.
    pub rejected: Vec<String>,
    /// Total records in the emailed dataset.
    pub total_records: u64,
    /// A count-based outcome message.
    pub message: String,
}

/// API request to load one report row into the data source.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoadRecordRequest {
    /// Pilot display name.
    pub pilot_name: String,
    /// Employee identifier.
    pub employee_id: String,
    /// Rank wire name.
    pub rank: String,
    /// Record category.
    pub category: Option<String>,
    /// Status wire name.
    pub status: Option<String>,
    /// First day of the record's date span (ISO 8601).
    pub start_date: Option<String>,
    /// Last day of the record's date span (ISO 8601, inclusive).
    pub end_date: Option<String>,
    /// Roster period code (`RPn/yyyy`).
    pub roster_period: Option<String>,
    /// Check type identifier.
    pub check_type: Option<String>,
    /// Certification expiry date (ISO 8601).
    pub expiry_date: Option<String>,
}

/// API response for a loaded record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoadRecordResponse {
    /// The store-assigned record id.
    pub record_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to save a filter preset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SavePresetRequest {
    /// The report type wire name.
    pub report_type: String,
    /// User-chosen preset name.
    pub name: String,
    /// The filter record to save.
    pub filters: ReportFilters,
}

/// API response for a saved preset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SavePresetResponse {
    /// The store-assigned preset id.
    pub preset_id: i64,
    /// A success message.
    pub message: String,
}

/// API response listing presets for a report type.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListPresetsResponse {
    /// The report type wire name.
    pub report_type: String,
    /// The stored presets, ordered by name.
    pub presets: Vec<FilterPreset>,
}

/// API response for a deleted preset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeletePresetResponse {
    /// The deleted preset id.
    pub preset_id: i64,
    /// A success message.
    pub message: String,
}

/// API response listing roster periods.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RosterPeriodsResponse {
    /// The periods, in chronological order.
    pub periods: Vec<RosterPeriod>,
}
