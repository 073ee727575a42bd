// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Mutex;

use chrono::NaiveDate;
use fleet_report_persistence::SqliteStore;

use crate::mailer::{MailReceipt, MailerError, OutgoingReport, ReportMailer};
use crate::reports::load_record;
use crate::request_response::LoadRecordRequest;

pub fn store() -> SqliteStore {
    SqliteStore::new_in_memory().expect("in-memory store must initialize")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn as_of() -> NaiveDate {
    date(2026, 1, 1)
}

/// Loads a leave request row through the API surface.
pub fn load_leave(
    store: &SqliteStore,
    pilot_name: &str,
    rank: &str,
    status: &str,
    start: &str,
    end: &str,
) -> i64 {
    let request = LoadRecordRequest {
        pilot_name: pilot_name.to_string(),
        employee_id: format!("EMP-{pilot_name}"),
        rank: rank.to_string(),
        category: Some("Annual".to_string()),
        status: Some(status.to_string()),
        start_date: Some(start.to_string()),
        end_date: Some(end.to_string()),
        roster_period: None,
        check_type: None,
        expiry_date: None,
    };
    load_record(store, "leave-requests", &request)
        .expect("leave record must load")
        .record_id
}

/// Loads a certification row through the API surface.
pub fn load_certification(
    store: &SqliteStore,
    pilot_name: &str,
    check_type: &str,
    expiry: &str,
) -> i64 {
    let request = LoadRecordRequest {
        pilot_name: pilot_name.to_string(),
        employee_id: format!("EMP-{pilot_name}"),
        rank: "Captain".to_string(),
        category: None,
        status: None,
        start_date: None,
        end_date: None,
        roster_period: None,
        check_type: Some(check_type.to_string()),
        expiry_date: Some(expiry.to_string()),
    };
    load_record(store, "certifications", &request)
        .expect("certification record must load")
        .record_id
}

/// Test transport: records every dispatched report.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutgoingReport>>,
}

impl ReportMailer for RecordingMailer {
    fn send(&self, report: &OutgoingReport) -> Result<MailReceipt, MailerError> {
        self.sent.lock().unwrap().push(report.clone());
        Ok(MailReceipt {
            message_id: self.sent.lock().unwrap().len() as u64,
            accepted: report.recipients.clone(),
            rejected: Vec::new(),
        })
    }
}

/// Test transport that refuses every message.
#[derive(Debug, Default)]
pub struct FailingMailer;

impl ReportMailer for FailingMailer {
    fn send(&self, _report: &OutgoingReport) -> Result<MailReceipt, MailerError> {
        Err(MailerError::Unavailable("connection refused".to_string()))
    }
}
