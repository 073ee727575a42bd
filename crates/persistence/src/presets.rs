// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleet_report_domain::{FilterPreset, ReportFilters, ReportType};
use rusqlite::{Connection, params};
use tracing::info;

use crate::error::PersistenceError;

/// Saves a named filter preset and returns its assigned id.
///
/// The filter record is stored as a JSON document, so presets saved under an
/// older filter schema still load: missing fields deserialize to their empty
/// forms and unknown fields are ignored.
///
/// # Errors
///
/// Returns an error if serialization or the insert fails.
pub fn save_preset(
    conn: &Connection,
    report_type: ReportType,
    name: &str,
    filters: &ReportFilters,
) -> Result<i64, PersistenceError> {
    let filters_json: String = serde_json::to_string(filters)?;
    conn.execute(
        "INSERT INTO filter_presets (report_type, name, filters_json) VALUES (?1, ?2, ?3)",
        params![report_type.as_str(), name, filters_json],
    )?;
    let preset_id = conn.last_insert_rowid();
    info!(preset_id, report_type = report_type.as_str(), name, "Saved filter preset");
    Ok(preset_id)
}

/// Lists presets for a report type, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails or a stored preset cannot be
/// deserialized.
pub fn list_presets(
    conn: &Connection,
    report_type: ReportType,
) -> Result<Vec<FilterPreset>, PersistenceError> {
    let mut stmt = conn.prepare(
        "SELECT preset_id, name, filters_json FROM filter_presets
         WHERE report_type = ?1
         ORDER BY name ASC, preset_id ASC",
    )?;

    let rows = stmt.query_map(params![report_type.as_str()], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut presets: Vec<FilterPreset> = Vec::new();
    for row_result in rows {
        let (id, name, filters_json) = row_result?;
        let filters: ReportFilters = serde_json::from_str(&filters_json)?;
        presets.push(FilterPreset {
            id,
            report_type,
            name,
            filters,
        });
    }

    Ok(presets)
}

/// Deletes a preset by id.
///
/// # Errors
///
/// Returns an error if the preset does not exist or the delete fails.
pub fn delete_preset(conn: &Connection, preset_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize = conn.execute(
        "DELETE FROM filter_presets WHERE preset_id = ?1",
        params![preset_id],
    )?;

    if rows_affected == 0 {
        return Err(PersistenceError::PresetNotFound(preset_id));
    }

    info!(preset_id, "Deleted filter preset");
    Ok(())
}
