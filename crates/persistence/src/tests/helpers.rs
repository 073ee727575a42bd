// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use fleet_report_domain::{Rank, ReportType, RequestStatus, RosterPeriodCode};

use crate::{RecordDraft, SqliteStore};

pub fn store() -> SqliteStore {
    SqliteStore::new_in_memory().expect("in-memory store must initialize")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A leave-request row spanning the given dates.
pub fn leave_draft(
    pilot_name: &str,
    rank: Rank,
    status: RequestStatus,
    start: NaiveDate,
    end: NaiveDate,
) -> RecordDraft {
    RecordDraft {
        report_type: ReportType::LeaveRequests,
        pilot_name: pilot_name.to_string(),
        employee_id: format!("EMP-{pilot_name}"),
        rank,
        category: Some("Annual".to_string()),
        status: Some(status),
        start_date: Some(start),
        end_date: Some(end),
        roster_period: None,
        check_type: None,
        expiry_date: None,
    }
}

/// A leave-bid row carrying a roster period assignment but no date span.
pub fn bid_draft(pilot_name: &str, rank: Rank, period: &str) -> RecordDraft {
    RecordDraft {
        report_type: ReportType::LeaveBids,
        pilot_name: pilot_name.to_string(),
        employee_id: format!("EMP-{pilot_name}"),
        rank,
        category: None,
        status: Some(RequestStatus::Processing),
        start_date: None,
        end_date: None,
        roster_period: Some(RosterPeriodCode::parse(period).unwrap()),
        check_type: None,
        expiry_date: None,
    }
}

/// A certification row with a check type and expiry date.
pub fn cert_draft(
    pilot_name: &str,
    rank: Rank,
    check_type: &str,
    expiry: NaiveDate,
) -> RecordDraft {
    RecordDraft {
        report_type: ReportType::Certifications,
        pilot_name: pilot_name.to_string(),
        employee_id: format!("EMP-{pilot_name}"),
        rank,
        category: None,
        status: None,
        start_date: None,
        end_date: None,
        roster_period: None,
        check_type: Some(check_type.to_string()),
        expiry_date: Some(expiry),
    }
}
