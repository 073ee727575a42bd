// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Report type string is not recognized.
    InvalidReportType(String),
    /// Status string is not recognized.
    InvalidStatus(String),
    /// Status is recognized but not part of the report type's vocabulary.
    StatusNotInVocabulary {
        /// The report type whose vocabulary was checked.
        report_type: String,
        /// The offending status.
        status: String,
    },
    /// Rank string is not recognized.
    InvalidRank(String),
    /// Grouping key string is not recognized.
    InvalidGroupKey(String),
    /// Sort field string is not recognized.
    InvalidSortField(String),
    /// A date range with `start > end`.
    InvalidDateRange {
        /// The range start (ISO 8601).
        start: String,
        /// The range end (ISO 8601).
        end: String,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Roster period code does not match `RPn/yyyy`.
    InvalidRosterPeriod(String),
    /// Roster period number is outside 1-13.
    RosterPeriodOutOfRange {
        /// The offending period number.
        number: u8,
    },
    /// A filter record carries both a date range and roster periods.
    ConflictingDateCriteria,
    /// A criterion is present on a report type it does not apply to.
    FieldNotApplicable {
        /// The report type the filter targets.
        report_type: String,
        /// The inapplicable field.
        field: String,
    },
    /// Page numbers are 1-indexed; zero is not a page.
    InvalidPage,
    /// Page size must be positive.
    InvalidPageSize {
        /// The offending size.
        size: u32,
    },
    /// A grouping key appears more than once in the key list.
    DuplicateGroupKey {
        /// The duplicated key.
        key: String,
    },
    /// Preset name is empty or blank.
    EmptyPresetName,
    /// No recipients remained after parsing a recipient list.
    EmptyRecipients,
    /// A recipient entry does not look like an email address.
    InvalidRecipient(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidReportType(s) => write!(f, "Unknown report type: '{s}'"),
            Self::InvalidStatus(s) => write!(f, "Unknown status: '{s}'"),
            Self::StatusNotInVocabulary {
                report_type,
                status,
            } => {
                write!(
                    f,
                    "Status '{status}' is not valid for report type '{report_type}'"
                )
            }
            Self::InvalidRank(s) => write!(f, "Unknown rank: '{s}'"),
            Self::InvalidGroupKey(s) => write!(f, "Unknown grouping key: '{s}'"),
            Self::InvalidSortField(s) => write!(f, "Unknown sort field: '{s}'"),
            Self::InvalidDateRange { start, end } => {
                write!(f, "Date range start {start} is after end {end}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidRosterPeriod(s) => {
                write!(f, "Invalid roster period code: '{s}'. Expected RPn/yyyy")
            }
            Self::RosterPeriodOutOfRange { number } => {
                write!(
                    f,
                    "Roster period number {number} is out of range. Must be between 1 and 13"
                )
            }
            Self::ConflictingDateCriteria => {
                write!(
                    f,
                    "A filter cannot carry both a date range and roster periods"
                )
            }
            Self::FieldNotApplicable { report_type, field } => {
                write!(
                    f,
                    "Field '{field}' does not apply to report type '{report_type}'"
                )
            }
            Self::InvalidPage => write!(f, "Page numbers are 1-indexed; 0 is not a valid page"),
            Self::InvalidPageSize { size } => {
                write!(f, "Invalid page size: {size}. Must be greater than 0")
            }
            Self::DuplicateGroupKey { key } => {
                write!(f, "Grouping key '{key}' appears more than once")
            }
            Self::EmptyPresetName => write!(f, "Preset name cannot be empty"),
            Self::EmptyRecipients => write!(f, "At least one recipient is required"),
            Self::InvalidRecipient(s) => {
                write!(f, "'{s}' is not a valid email address")
            }
        }
    }
}

impl std::error::Error for DomainError {}
