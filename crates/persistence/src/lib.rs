// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Fleet Report System.
//!
//! This crate provides the report data source and the filter preset store,
//! backed by `SQLite` (bundled, no external infrastructure). In-memory
//! databases serve development and tests; production deployments use a
//! file-backed database.
//!
//! The data source owns pagination: every fetch counts the full matching set
//! and returns authoritative [`fleet_report_domain::PaginationMeta`], so
//! callers never slice result sets locally.

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
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use chrono::NaiveDate;
use fleet_report_domain::{FilterPreset, ReportFilters, ReportType};
use rusqlite::Connection;

mod data_models;
mod error;
mod presets;
mod records;
mod schema;

#[cfg(test)]
mod tests;

pub use data_models::RecordDraft;
pub use error::PersistenceError;
pub use records::FetchResult;

/// `SQLite`-backed store for report records and filter presets.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Creates a store with a fresh in-memory database.
    ///
    /// Every call receives an isolated database, so tests never share state.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open_in_memory()?;
        schema::initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Creates a store backed by a database file, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open(path)?;
        // WAL mode for better read concurrency on file-backed databases.
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;
        schema::initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Inserts one report row and returns its assigned record id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_record(&self, draft: &RecordDraft) -> Result<i64, PersistenceError> {
        records::insert_record(&self.conn, draft)
    }

    /// Fetches the dataset described by a filter record.
    ///
    /// Criteria combine conjunctively; a pagination cursor limits the
    /// returned rows to one page while metadata still covers the full set.
    /// `as_of` anchors the expiry-threshold window.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be
    /// reconstructed.
    pub fn fetch(
        &self,
        report_type: ReportType,
        filters: &ReportFilters,
        as_of: NaiveDate,
    ) -> Result<FetchResult, PersistenceError> {
        records::fetch(&self.conn, report_type, filters, as_of)
    }

    /// Saves a named filter preset and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails.
    pub fn save_preset(
        &self,
        report_type: ReportType,
        name: &str,
        filters: &ReportFilters,
    ) -> Result<i64, PersistenceError> {
        presets::save_preset(&self.conn, report_type, name, filters)
    }

    /// Lists presets for a report type, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored preset cannot be
    /// deserialized.
    pub fn list_presets(
        &self,
        report_type: ReportType,
    ) -> Result<Vec<FilterPreset>, PersistenceError> {
        presets::list_presets(&self.conn, report_type)
    }

    /// Deletes a preset by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the preset does not exist or the delete fails.
    pub fn delete_preset(&self, preset_id: i64) -> Result<(), PersistenceError> {
        presets::delete_preset(&self.conn, preset_id)
    }
}
