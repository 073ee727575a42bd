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

mod builder;
mod grouping;
mod recipients;
mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::build_filters;
pub use grouping::{GroupNode, GroupedPage, group_rows};
pub use recipients::{parse_optional_recipients, parse_recipients};
pub use snapshot::{DateMode, FormSnapshot, RankChecks, StatusChecks};
