// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DateRange, DomainError, GroupKey, ReportFilters, ReportType, RequestStatus, RosterPeriodCode,
    validate_filters, validate_preset_name,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_empty_filters_are_valid_for_every_report_type() {
    for report_type in ReportType::ALL {
        assert!(validate_filters(report_type, &ReportFilters::none()).is_ok());
    }
}

#[test]
fn test_conflicting_date_criteria_rejected() {
    let filters = ReportFilters {
        date_range: Some(DateRange::new(date(2026, 1, 1), date(2026, 1, 31)).unwrap()),
        roster_periods: vec![RosterPeriodCode::parse("RP1/2026").unwrap()],
        ..ReportFilters::none()
    };
    assert_eq!(
        validate_filters(ReportType::LeaveRequests, &filters),
        Err(DomainError::ConflictingDateCriteria)
    );
}

#[test]
fn test_status_outside_vocabulary_rejected() {
    let filters = ReportFilters {
        status: vec![RequestStatus::Processing],
        ..ReportFilters::none()
    };
    // PROCESSING belongs to leave bids only
    assert!(validate_filters(ReportType::LeaveBids, &filters).is_ok());
    assert!(matches!(
        validate_filters(ReportType::LeaveRequests, &filters),
        Err(DomainError::StatusNotInVocabulary { .. })
    ));
}

#[test]
fn test_certification_fields_rejected_elsewhere() {
    let with_checks = ReportFilters {
        check_types: vec![String::from("PC")],
        ..ReportFilters::none()
    };
    assert!(validate_filters(ReportType::Certifications, &with_checks).is_ok());
    assert!(matches!(
        validate_filters(ReportType::Pilots, &with_checks),
        Err(DomainError::FieldNotApplicable { .. })
    ));

    let with_threshold = ReportFilters {
        expiry_threshold: Some(30),
        ..ReportFilters::none()
    };
    assert!(validate_filters(ReportType::Certifications, &with_threshold).is_ok());
    assert!(matches!(
        validate_filters(ReportType::LeaveRequests, &with_threshold),
        Err(DomainError::FieldNotApplicable { .. })
    ));
}

#[test]
fn test_zero_page_and_size_rejected() {
    let zero_page = ReportFilters {
        page: Some(0),
        ..ReportFilters::none()
    };
    assert_eq!(
        validate_filters(ReportType::Pilots, &zero_page),
        Err(DomainError::InvalidPage)
    );

    let zero_size = ReportFilters {
        page_size: Some(0),
        ..ReportFilters::none()
    };
    assert_eq!(
        validate_filters(ReportType::Pilots, &zero_size),
        Err(DomainError::InvalidPageSize { size: 0 })
    );
}

#[test]
fn test_duplicate_group_keys_rejected() {
    let filters = ReportFilters {
        group_by: vec![GroupKey::Rank, GroupKey::RosterPeriod, GroupKey::Rank],
        ..ReportFilters::none()
    };
    assert!(matches!(
        validate_filters(ReportType::LeaveRequests, &filters),
        Err(DomainError::DuplicateGroupKey { .. })
    ));
}

#[test]
fn test_preset_name_must_not_be_blank() {
    assert!(validate_preset_name("RP3 captains").is_ok());
    assert_eq!(validate_preset_name(""), Err(DomainError::EmptyPresetName));
    assert_eq!(
        validate_preset_name("   "),
        Err(DomainError::EmptyPresetName)
    );
}
