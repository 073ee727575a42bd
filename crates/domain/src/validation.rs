// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::filters::ReportFilters;
use crate::types::{GroupKey, ReportType};
use std::collections::HashSet;

/// Validates a filter record against a report type.
///
/// The Filter Builder only produces valid records; this guards records that
/// arrive from outside the builder (request bodies, stored presets).
///
/// # Errors
///
/// Returns an error if:
/// - Both a date range and roster periods are present (mutually exclusive)
/// - A status is outside the report type's vocabulary
/// - Check types or an expiry threshold appear on a non-certification report
/// - The pagination cursor is half-formed (`page == 0` or `page_size == 0`)
/// - A grouping key is duplicated
pub fn validate_filters(report_type: ReportType, filters: &ReportFilters) -> Result<(), DomainError> {
    // Rule: date range and roster periods are mutually exclusive modes
    if filters.date_range.is_some() && !filters.roster_periods.is_empty() {
        return Err(DomainError::ConflictingDateCriteria);
    }

    // Rule: every status must belong to the report type's vocabulary
    for status in &filters.status {
        if !status.is_valid_for(report_type) {
            return Err(DomainError::StatusNotInVocabulary {
                report_type: report_type.as_str().to_string(),
                status: status.as_str().to_string(),
            });
        }
    }

    // Rule: certification-only criteria stay on certification reports
    if !report_type.has_certification_fields() {
        if !filters.check_types.is_empty() {
            return Err(DomainError::FieldNotApplicable {
                report_type: report_type.as_str().to_string(),
                field: String::from("check_types"),
            });
        }
        if filters.expiry_threshold.is_some() {
            return Err(DomainError::FieldNotApplicable {
                report_type: report_type.as_str().to_string(),
                field: String::from("expiry_threshold"),
            });
        }
    }

    // Rule: pages are 1-indexed, sizes positive
    if filters.page == Some(0) {
        return Err(DomainError::InvalidPage);
    }
    if filters.page_size == Some(0) {
        return Err(DomainError::InvalidPageSize { size: 0 });
    }

    // Rule: grouping keys are duplicate-free
    let mut seen: HashSet<GroupKey> = HashSet::new();
    for key in &filters.group_by {
        if !seen.insert(*key) {
            return Err(DomainError::DuplicateGroupKey {
                key: key.as_str().to_string(),
            });
        }
    }

    Ok(())
}

/// Validates a preset name.
///
/// # Errors
///
/// Returns an error if the name is empty or blank.
pub fn validate_preset_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::EmptyPresetName);
    }
    Ok(())
}
