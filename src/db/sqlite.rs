// SQLite-backed repository implementation.
use std::path::Path;

use rusqlite::{params, types::Type, Connection, OptionalExtension};

use crate::types::{DsfError, Experiment, MeltCurve, Sample, Well};

use super::repository::{Repository, Result, TableCounts};
use super::schema;

#[derive(Clone)]
pub struct SqliteRepo {
    pub path: String,
}

fn map_experiment_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Experiment> {
    Ok(Experiment {
        experiment_id: row.get(0)?,
        run_name: row.get(1)?,
        run_start_time: row.get(2)?,
        instrument_serial: row.get(3)?,
        file_name: row.get(4)?,
    })
}

fn map_sample_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Sample> {
    Ok(Sample {
        sample_id: row.get(0)?,
        sample_name: row.get(1)?,
        description: row.get(2)?,
    })
}

fn map_well_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Well> {
    Ok(Well {
        well_id: row.get(0)?,
        experiment_id: row.get(1)?,
        sample_id: row.get(2)?,
        well_position: row.get(3)?,
        target_dye: row.get(4)?,
        sample_role: row.get(5)?,
        tm_value: row.get(6)?,
    })
}

fn decode_curve_array(row_index: usize, json: &str) -> rusqlite::Result<Vec<f64>> {
    serde_json::from_str(json).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(row_index, Type::Text, Box::new(err))
    })
}

fn map_melt_curve_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<MeltCurve> {
    let temperatures_json: String = row.get(3)?;
    let fluorescences_json: String = row.get(4)?;
    Ok(MeltCurve {
        curve_id: row.get(0)?,
        experiment_id: row.get(1)?,
        well_id: row.get(2)?,
        temperature_data: decode_curve_array(3, &temperatures_json)?,
        fluorescence_data: decode_curve_array(4, &fluorescences_json)?,
    })
}

fn db_load_experiment(conn: &Connection, experiment_id: i64) -> rusqlite::Result<Option<Experiment>> {
    conn.query_row(
        "SELECT experiment_id, run_name, run_start_time, instrument_serial, file_name
         FROM experiments WHERE experiment_id = ?1",
        params![experiment_id],
        map_experiment_row,
    )
    .optional()
}

fn db_load_experiment_by_file_name(
    conn: &Connection,
    file_name: &str,
) -> rusqlite::Result<Option<Experiment>> {
    conn.query_row(
        "SELECT experiment_id, run_name, run_start_time, instrument_serial, file_name
         FROM experiments WHERE file_name = ?1",
        params![file_name],
        map_experiment_row,
    )
    .optional()
}

fn db_list_experiments(conn: &Connection) -> rusqlite::Result<Vec<Experiment>> {
    let mut stmt = conn.prepare(
        "SELECT experiment_id, run_name, run_start_time, instrument_serial, file_name
         FROM experiments ORDER BY experiment_id",
    )?;
    let mapped = stmt
        .query_map([], map_experiment_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(mapped)
}

fn db_load_sample_by_name(conn: &Connection, sample_name: &str) -> rusqlite::Result<Option<Sample>> {
    conn.query_row(
        "SELECT sample_id, sample_name, description FROM samples WHERE sample_name = ?1",
        params![sample_name],
        map_sample_row,
    )
    .optional()
}

fn db_load_well(conn: &Connection, well_id: i64) -> rusqlite::Result<Option<Well>> {
    conn.query_row(
        "SELECT well_id, experiment_id, sample_id, well_position, target_dye, sample_role, tm_value
         FROM wells WHERE well_id = ?1",
        params![well_id],
        map_well_row,
    )
    .optional()
}

fn db_list_wells_for_experiment(
    conn: &Connection,
    experiment_id: i64,
) -> rusqlite::Result<Vec<Well>> {
    let mut stmt = conn.prepare(
        "SELECT well_id, experiment_id, sample_id, well_position, target_dye, sample_role, tm_value
         FROM wells WHERE experiment_id = ?1 ORDER BY well_position",
    )?;
    let mapped = stmt
        .query_map(params![experiment_id], map_well_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(mapped)
}

fn db_list_wells_for_sample(conn: &Connection, sample_id: i64) -> rusqlite::Result<Vec<Well>> {
    let mut stmt = conn.prepare(
        "SELECT well_id, experiment_id, sample_id, well_position, target_dye, sample_role, tm_value
         FROM wells WHERE sample_id = ?1 ORDER BY experiment_id, well_position",
    )?;
    let mapped = stmt
        .query_map(params![sample_id], map_well_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(mapped)
}

fn db_load_melt_curve_for_well(
    conn: &Connection,
    well_id: i64,
) -> rusqlite::Result<Option<MeltCurve>> {
    conn.query_row(
        "SELECT curve_id, experiment_id, well_id, temperature_data, fluorescence_data
         FROM melt_curves WHERE well_id = ?1",
        params![well_id],
        map_melt_curve_row,
    )
    .optional()
}

fn db_list_melt_curves_for_experiment(
    conn: &Connection,
    experiment_id: i64,
) -> rusqlite::Result<Vec<MeltCurve>> {
    let mut stmt = conn.prepare(
        "SELECT curve_id, experiment_id, well_id, temperature_data, fluorescence_data
         FROM melt_curves WHERE experiment_id = ?1 ORDER BY well_id",
    )?;
    let mapped = stmt
        .query_map(params![experiment_id], map_melt_curve_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(mapped)
}

fn db_count(conn: &Connection, table: &str) -> rusqlite::Result<i64> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
}

impl SqliteRepo {
    /// Build a repository that targets the provided SQLite database path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_string_lossy().to_string(),
        }
    }

    /// Remove the backing database file to force a clean start.
    pub fn reset_all(&self) -> std::io::Result<()> {
        if !Path::new(&self.path).exists() {
            return Ok(());
        }
        std::fs::remove_file(&self.path)
    }

    /// Create the database if missing and apply or verify the schema.
    pub fn init(&self) -> Result<()> {
        self.with_conn(|_conn| Ok(()))
    }

    /// Open a connection, ensure schema, and run the supplied closure.
    ///
    /// `foreign_keys` is per-connection in SQLite; without it the cascade and
    /// set-null actions declared by the schema are silently skipped.
    fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.busy_timeout(std::time::Duration::from_millis(500))?;
        schema::migrate(&conn)?;
        f(&conn)
    }
}

impl Repository for SqliteRepo {
    fn insert_experiment(
        &self,
        run_name: Option<&str>,
        run_start_time: Option<&str>,
        instrument_serial: Option<&str>,
        file_name: &str,
    ) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO experiments (run_name, run_start_time, instrument_serial, file_name)
                 VALUES (?1, ?2, ?3, ?4)",
                params![run_name, run_start_time, instrument_serial, file_name],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    fn load_experiment(&self, experiment_id: i64) -> Result<Option<Experiment>> {
        self.with_conn(|conn| Ok(db_load_experiment(conn, experiment_id)?))
    }

    fn load_experiment_by_file_name(&self, file_name: &str) -> Result<Option<Experiment>> {
        self.with_conn(|conn| Ok(db_load_experiment_by_file_name(conn, file_name)?))
    }

    fn list_experiments(&self) -> Result<Vec<Experiment>> {
        self.with_conn(|conn| Ok(db_list_experiments(conn)?))
    }

    fn delete_experiment(&self, experiment_id: i64) -> Result<usize> {
        self.with_conn(|conn| {
            let rows = conn.execute(
                "DELETE FROM experiments WHERE experiment_id = ?1",
                params![experiment_id],
            )?;
            Ok(rows)
        })
    }

    fn insert_sample(&self, sample_name: &str, description: Option<&str>) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO samples (sample_name, description) VALUES (?1, ?2)",
                params![sample_name, description],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    fn load_sample_by_name(&self, sample_name: &str) -> Result<Option<Sample>> {
        self.with_conn(|conn| Ok(db_load_sample_by_name(conn, sample_name)?))
    }

    fn delete_sample(&self, sample_id: i64) -> Result<usize> {
        self.with_conn(|conn| {
            let rows = conn.execute(
                "DELETE FROM samples WHERE sample_id = ?1",
                params![sample_id],
            )?;
            Ok(rows)
        })
    }

    fn insert_well(
        &self,
        experiment_id: i64,
        sample_id: Option<i64>,
        well_position: &str,
        target_dye: Option<&str>,
        sample_role: Option<&str>,
        tm_value: Option<f64>,
    ) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO wells (experiment_id, sample_id, well_position, target_dye, sample_role, tm_value)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    experiment_id,
                    sample_id,
                    well_position,
                    target_dye,
                    sample_role,
                    tm_value
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    fn load_well(&self, well_id: i64) -> Result<Option<Well>> {
        self.with_conn(|conn| Ok(db_load_well(conn, well_id)?))
    }

    fn list_wells_for_experiment(&self, experiment_id: i64) -> Result<Vec<Well>> {
        self.with_conn(|conn| Ok(db_list_wells_for_experiment(conn, experiment_id)?))
    }

    fn list_wells_for_sample(&self, sample_id: i64) -> Result<Vec<Well>> {
        self.with_conn(|conn| Ok(db_list_wells_for_sample(conn, sample_id)?))
    }

    fn delete_well(&self, well_id: i64) -> Result<usize> {
        self.with_conn(|conn| {
            let rows = conn.execute("DELETE FROM wells WHERE well_id = ?1", params![well_id])?;
            Ok(rows)
        })
    }

    fn insert_melt_curve(
        &self,
        experiment_id: i64,
        well_id: i64,
        temperature_data: &[f64],
        fluorescence_data: &[f64],
    ) -> Result<i64> {
        // The schema only enforces non-null; array pairing is on us.
        if temperature_data.is_empty() || fluorescence_data.is_empty() {
            return Err(DsfError::EmptyCurve);
        }
        if temperature_data.len() != fluorescence_data.len() {
            return Err(DsfError::CurveLengthMismatch {
                temperatures: temperature_data.len(),
                fluorescences: fluorescence_data.len(),
            });
        }

        let temperatures_json = serde_json::to_string(temperature_data)?;
        let fluorescences_json = serde_json::to_string(fluorescence_data)?;

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO melt_curves (experiment_id, well_id, temperature_data, fluorescence_data)
                 VALUES (?1, ?2, ?3, ?4)",
                params![experiment_id, well_id, temperatures_json, fluorescences_json],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    fn load_melt_curve_for_well(&self, well_id: i64) -> Result<Option<MeltCurve>> {
        self.with_conn(|conn| Ok(db_load_melt_curve_for_well(conn, well_id)?))
    }

    fn list_melt_curves_for_experiment(&self, experiment_id: i64) -> Result<Vec<MeltCurve>> {
        self.with_conn(|conn| Ok(db_list_melt_curves_for_experiment(conn, experiment_id)?))
    }

    fn counts(&self) -> Result<TableCounts> {
        self.with_conn(|conn| {
            Ok(TableCounts {
                schema_version: conn.query_row("PRAGMA user_version", [], |row| row.get(0))?,
                experiments: db_count(conn, "experiments")?,
                samples: db_count(conn, "samples")?,
                wells: db_count(conn, "wells")?,
                melt_curves: db_count(conn, "melt_curves")?,
            })
        })
    }
}
