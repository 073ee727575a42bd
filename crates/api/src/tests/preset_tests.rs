// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleet_report_domain::{DateRange, Rank, ReportFilters, RequestStatus, RosterPeriodCode};

use super::helpers::{date, store};
use crate::error::ApiError;
use crate::reports::{delete_preset, list_presets, save_preset};
use crate::request_response::SavePresetRequest;

fn january_filters() -> ReportFilters {
    ReportFilters {
        date_range: Some(
            DateRange::new(date(2026, 1, 1), date(2026, 1, 31)).expect("range must be valid"),
        ),
        status: vec![RequestStatus::Pending],
        rank: vec![Rank::Captain],
        ..ReportFilters::default()
    }
}

#[test]
fn save_list_delete_round_trip() {
    let store = store();

    let saved = save_preset(
        &store,
        &SavePresetRequest {
            report_type: String::from("leave-requests"),
            name: String::from("  January captains  "),
            filters: january_filters(),
        },
    )
    .expect("save must succeed");
    assert_eq!(saved.message, "Preset 'January captains' saved");

    let listed = list_presets(&store, "leave-requests").expect("list must succeed");
    assert_eq!(listed.report_type, "leave-requests");
    assert_eq!(listed.presets.len(), 1);
    assert_eq!(listed.presets[0].name, "January captains");
    assert_eq!(listed.presets[0].filters, january_filters());

    let deleted = delete_preset(&store, saved.preset_id).expect("delete must succeed");
    assert_eq!(deleted.preset_id, saved.preset_id);
    assert!(
        list_presets(&store, "leave-requests")
            .expect("list must succeed")
            .presets
            .is_empty()
    );
}

#[test]
fn presets_are_scoped_to_their_report_type() {
    let store = store();
    save_preset(
        &store,
        &SavePresetRequest {
            report_type: String::from("leave-requests"),
            name: String::from("January captains"),
            filters: january_filters(),
        },
    )
    .expect("save must succeed");

    let other = list_presets(&store, "flight-requests").expect("list must succeed");
    assert!(other.presets.is_empty());
}

#[test]
fn save_rejects_a_blank_name() {
    let store = store();
    let result = save_preset(
        &store,
        &SavePresetRequest {
            report_type: String::from("leave-requests"),
            name: String::from("   "),
            filters: ReportFilters::none(),
        },
    );
    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "name"),
        other => panic!("expected invalid input, got {other:?}"),
    }
}

#[test]
fn save_rejects_conflicting_date_criteria() {
    let store = store();
    let filters = ReportFilters {
        date_range: Some(
            DateRange::new(date(2026, 1, 1), date(2026, 1, 31)).expect("range must be valid"),
        ),
        roster_periods: vec![RosterPeriodCode::new(1, 2026).expect("code must be valid")],
        ..ReportFilters::default()
    };
    let result = save_preset(
        &store,
        &SavePresetRequest {
            report_type: String::from("leave-requests"),
            name: String::from("Conflicted"),
            filters,
        },
    );
    match result {
        Err(ApiError::DomainRuleViolation { rule, .. }) => {
            assert_eq!(rule, "date_mode_exclusivity");
        }
        other => panic!("expected rule violation, got {other:?}"),
    }
}

#[test]
fn save_rejects_certification_fields_on_other_report_types() {
    let store = store();
    let filters = ReportFilters {
        expiry_threshold: Some(60),
        ..ReportFilters::default()
    };
    let result = save_preset(
        &store,
        &SavePresetRequest {
            report_type: String::from("leave-requests"),
            name: String::from("Expiring"),
            filters,
        },
    );
    match result {
        Err(ApiError::DomainRuleViolation { rule, .. }) => {
            assert_eq!(rule, "report_type_scope");
        }
        other => panic!("expected rule violation, got {other:?}"),
    }
}

#[test]
fn delete_of_a_missing_preset_is_not_found() {
    let store = store();
    let result = delete_preset(&store, 9999);
    match result {
        Err(ApiError::ResourceNotFound { resource_type, .. }) => {
            assert_eq!(resource_type, "Preset");
        }
        other => panic!("expected not found, got {other:?}"),
    }
}
