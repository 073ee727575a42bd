// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod filters;
mod pagination;
mod roster;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use filters::{DEFAULT_PAGE_SIZE, DateRange, FilterPreset, ReportFilters};
pub use pagination::PaginationMeta;
pub use roster::{
    PERIOD_LENGTH_DAYS, PERIODS_PER_YEAR, RosterPeriod, RosterPeriodCode, affected_periods,
    containing, periods,
};
pub use types::{
    GroupKey, Rank, ReportRecord, ReportType, RequestStatus, SortDirection, SortField, SortSpec,
};
pub use validation::{validate_filters, validate_preset_name};
