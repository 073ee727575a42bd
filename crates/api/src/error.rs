// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use fleet_report_domain::DomainError;
use fleet_report_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A downstream collaborator (e.g., the mail transport) failed.
    RequestFailed {
        /// A description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::RequestFailed { message } => {
                write!(f, "Request failed: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::PresetNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Preset"),
                message: format!("Preset {id} does not exist"),
            },
            _ => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidReportType(s) => ApiError::InvalidInput {
            field: String::from("report_type"),
            message: format!("Unknown report type: '{s}'"),
        },
        DomainError::InvalidStatus(s) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown status: '{s}'"),
        },
        DomainError::StatusNotInVocabulary {
            report_type,
            status,
        } => ApiError::DomainRuleViolation {
            rule: String::from("status_vocabulary"),
            message: format!("Status '{status}' is not valid for report type '{report_type}'"),
        },
        DomainError::InvalidRank(s) => ApiError::InvalidInput {
            field: String::from("rank"),
            message: format!("Unknown rank: '{s}'"),
        },
        DomainError::InvalidGroupKey(s) => ApiError::InvalidInput {
            field: String::from("group_by"),
            message: format!("Unknown grouping key: '{s}'"),
        },
        DomainError::InvalidSortField(s) => ApiError::InvalidInput {
            field: String::from("sort"),
            message: format!("Unknown sort field: '{s}'"),
        },
        DomainError::InvalidDateRange { start, end } => ApiError::InvalidInput {
            field: String::from("date_range"),
            message: format!("Date range start {start} is after end {end}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::InvalidRosterPeriod(s) => ApiError::InvalidInput {
            field: String::from("roster_periods"),
            message: format!("Invalid roster period code: '{s}'. Expected RPn/yyyy"),
        },
        DomainError::RosterPeriodOutOfRange { number } => ApiError::InvalidInput {
            field: String::from("roster_periods"),
            message: format!("Roster period number {number} is out of range. Must be 1-13"),
        },
        DomainError::ConflictingDateCriteria => ApiError::DomainRuleViolation {
            rule: String::from("date_mode_exclusivity"),
            message: String::from("A filter cannot carry both a date range and roster periods"),
        },
        DomainError::FieldNotApplicable { report_type, field } => ApiError::DomainRuleViolation {
            rule: String::from("report_type_scope"),
            message: format!("Field '{field}' does not apply to report type '{report_type}'"),
        },
        DomainError::InvalidPage => ApiError::InvalidInput {
            field: String::from("page"),
            message: String::from("Page numbers are 1-indexed; 0 is not a valid page"),
        },
        DomainError::InvalidPageSize { size } => ApiError::InvalidInput {
            field: String::from("page_size"),
            message: format!("Invalid page size: {size}. Must be greater than 0"),
        },
        DomainError::DuplicateGroupKey { key } => ApiError::DomainRuleViolation {
            rule: String::from("unique_group_keys"),
            message: format!("Grouping key '{key}' appears more than once"),
        },
        DomainError::EmptyPresetName => ApiError::InvalidInput {
            field: String::from("name"),
            message: String::from("Preset name cannot be empty"),
        },
        DomainError::EmptyRecipients => ApiError::InvalidInput {
            field: String::from("recipients"),
            message: String::from("At least one recipient is required"),
        },
        DomainError::InvalidRecipient(s) => ApiError::InvalidInput {
            field: String::from("recipients"),
            message: format!("'{s}' is not a valid email address"),
        },
    }
}
