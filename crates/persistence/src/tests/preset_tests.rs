// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleet_report_domain::{
    DateRange, GroupKey, Rank, ReportFilters, ReportType, RequestStatus,
};

use crate::PersistenceError;
use crate::tests::helpers::{date, store};

#[test]
fn test_save_and_load_round_trips_filters() {
    let store = store();
    let filters = ReportFilters {
        date_range: Some(DateRange::new(date(2026, 1, 1), date(2026, 1, 31)).unwrap()),
        status: vec![RequestStatus::Pending, RequestStatus::Approved],
        rank: vec![Rank::Captain],
        group_by: vec![GroupKey::RosterPeriod, GroupKey::Rank],
        page: Some(2),
        page_size: Some(25),
        ..ReportFilters::default()
    };

    let id = store
        .save_preset(ReportType::LeaveRequests, "January approvals", &filters)
        .unwrap();

    let presets = store.list_presets(ReportType::LeaveRequests).unwrap();
    assert_eq!(presets.len(), 1);
    assert_eq!(presets[0].id, id);
    assert_eq!(presets[0].name, "January approvals");
    assert_eq!(presets[0].filters, filters);
}

#[test]
fn test_list_is_scoped_by_report_type_and_ordered_by_name() {
    let store = store();
    let filters = ReportFilters::default();
    store
        .save_preset(ReportType::LeaveRequests, "Zulu", &filters)
        .unwrap();
    store
        .save_preset(ReportType::LeaveRequests, "Alpha", &filters)
        .unwrap();
    store
        .save_preset(ReportType::FlightRequests, "Other", &filters)
        .unwrap();

    let presets = store.list_presets(ReportType::LeaveRequests).unwrap();
    let names: Vec<&str> = presets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Zulu"]);

    assert_eq!(store.list_presets(ReportType::FlightRequests).unwrap().len(), 1);
    assert!(store.list_presets(ReportType::Pilots).unwrap().is_empty());
}

#[test]
fn test_delete_removes_preset() {
    let store = store();
    let id = store
        .save_preset(ReportType::LeaveRequests, "Scratch", &ReportFilters::default())
        .unwrap();

    store.delete_preset(id).unwrap();
    assert!(store.list_presets(ReportType::LeaveRequests).unwrap().is_empty());
}

#[test]
fn test_delete_missing_preset_is_an_error() {
    let store = store();
    assert_eq!(
        store.delete_preset(9999),
        Err(PersistenceError::PresetNotFound(9999))
    );
}

#[test]
fn test_empty_filter_preset_loads_back_empty() {
    let store = store();
    store
        .save_preset(ReportType::Pilots, "Everything", &ReportFilters::none())
        .unwrap();
    let presets = store.list_presets(ReportType::Pilots).unwrap();
    assert_eq!(presets[0].filters, ReportFilters::none());
}
