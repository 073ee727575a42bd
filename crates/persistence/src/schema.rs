// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rusqlite::Connection;
use tracing::info;

use crate::error::PersistenceError;

/// Creates the store's tables if they do not already exist.
///
/// Dates are stored as ISO 8601 text, so lexicographic comparison in SQL
/// matches chronological order. Filters on presets are stored as a JSON
/// document rather than columns; the preset store loads them back verbatim.
///
/// # Errors
///
/// Returns an error if schema creation fails.
pub fn initialize_schema(conn: &Connection) -> Result<(), PersistenceError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS filter_presets (
            preset_id INTEGER PRIMARY KEY AUTOINCREMENT,
            report_type TEXT NOT NULL,
            name TEXT NOT NULL,
            filters_json TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS report_records (
            record_id INTEGER PRIMARY KEY AUTOINCREMENT,
            report_type TEXT NOT NULL,
            pilot_name TEXT NOT NULL,
            employee_id TEXT NOT NULL,
            rank TEXT NOT NULL,
            category TEXT,
            status TEXT,
            start_date TEXT,
            end_date TEXT,
            roster_period TEXT,
            check_type TEXT,
            expiry_date TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_report_records_type
            ON report_records (report_type);
        CREATE INDEX IF NOT EXISTS idx_filter_presets_type
            ON filter_presets (report_type, name);",
    )?;

    info!("Initialized report store schema");
    Ok(())
}
