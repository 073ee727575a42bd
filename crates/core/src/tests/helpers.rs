// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleet_report_domain::{Rank, ReportRecord, RequestStatus, RosterPeriodCode};

/// Builds a leave-style record for grouping tests.
pub fn record(
    record_id: i64,
    pilot_name: &str,
    rank: Rank,
    category: Option<&str>,
    roster_period: Option<&str>,
) -> ReportRecord {
    ReportRecord {
        record_id,
        pilot_name: pilot_name.to_string(),
        employee_id: format!("EMP{record_id:04}"),
        rank,
        category: category.map(ToString::to_string),
        status: Some(RequestStatus::Pending),
        start_date: None,
        end_date: None,
        roster_period: roster_period.map(|code| {
            RosterPeriodCode::parse(code).expect("test roster period code must parse")
        }),
        check_type: None,
        expiry_date: None,
    }
}
