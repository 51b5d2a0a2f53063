use rusqlite::Connection;

use crate::types::DsfError;

pub const DB_SCHEMA_VERSION: i64 = 1;

// Curve arrays are stored as JSON in a single row per well so a curve stays
// a one-fetch unit instead of being normalized into per-point rows.
const SCHEMA_SQL: &str = r#"
CREATE TABLE experiments (
    experiment_id INTEGER PRIMARY KEY AUTOINCREMENT,
    run_name TEXT,
    run_start_time TEXT,
    instrument_serial TEXT,
    file_name TEXT NOT NULL UNIQUE
);

CREATE TABLE samples (
    sample_id INTEGER PRIMARY KEY AUTOINCREMENT,
    sample_name TEXT NOT NULL UNIQUE,
    description TEXT
);

CREATE TABLE wells (
    well_id INTEGER PRIMARY KEY AUTOINCREMENT,
    experiment_id INTEGER NOT NULL
        REFERENCES experiments(experiment_id) ON DELETE CASCADE,
    sample_id INTEGER
        REFERENCES samples(sample_id) ON DELETE SET NULL,
    well_position TEXT NOT NULL,
    target_dye TEXT,
    sample_role TEXT,
    tm_value REAL,
    UNIQUE (experiment_id, well_position, target_dye)
);

CREATE TABLE melt_curves (
    curve_id INTEGER PRIMARY KEY AUTOINCREMENT,
    experiment_id INTEGER NOT NULL
        REFERENCES experiments(experiment_id) ON DELETE CASCADE,
    well_id INTEGER NOT NULL UNIQUE
        REFERENCES wells(well_id) ON DELETE CASCADE,
    temperature_data TEXT NOT NULL,
    fluorescence_data TEXT NOT NULL
);

CREATE INDEX idx_wells_experiment ON wells(experiment_id);
CREATE INDEX idx_wells_sample ON wells(sample_id);
CREATE INDEX idx_melt_curves_well ON melt_curves(well_id);
CREATE INDEX idx_melt_curves_experiment ON melt_curves(experiment_id);
"#;

/// Apply the schema to a fresh database, or verify the version of an
/// existing one. Any version other than 0 or the current one is rejected.
pub fn migrate(conn: &Connection) -> Result<(), DsfError> {
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if version == DB_SCHEMA_VERSION {
        return Ok(());
    }

    if version == 0 {
        tracing::info!("applying schema version {DB_SCHEMA_VERSION}");
        conn.execute_batch(SCHEMA_SQL)?;
        conn.pragma_update(None, "user_version", DB_SCHEMA_VERSION)?;
        return Ok(());
    }

    Err(DsfError::SchemaVersion {
        found: version,
        expected: DB_SCHEMA_VERSION,
    })
}
