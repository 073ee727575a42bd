// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API layer for the Fleet Report System.
//!
//! Operations take raw request DTOs, run them through the Filter Builder
//! and validation, and return response DTOs. Errors are translated at the
//! layer boundary; domain and persistence errors never leak to callers.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod mailer;
mod reports;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error};
pub use mailer::{LoggingMailer, MailReceipt, MailerError, OutgoingReport, ReportMailer};
pub use reports::{
    affected_roster_periods, delete_preset, email_report, export_report, list_presets,
    list_roster_periods, load_record, parse_report_type, preview_report, resolve_filters,
    save_preset,
};
pub use request_response::{
    DeletePresetResponse, EmailReportRequest, EmailReportResponse, ExportReportResponse,
    GroupNodeInfo, ListPresetsResponse, LoadRecordRequest, LoadRecordResponse,
    PreviewReportResponse, ReportQueryRequest, RosterPeriodsResponse, SavePresetRequest,
    SavePresetResponse, StatusCountInfo,
};
