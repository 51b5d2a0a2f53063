// Shared repository contract for the DSF schema.
use crate::types::{DsfError, Experiment, MeltCurve, Sample, Well};

pub type Result<T> = std::result::Result<T, DsfError>;

/// Row counts per table plus the schema version, as reported by `status`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub schema_version: i64,
    pub experiments: i64,
    pub samples: i64,
    pub wells: i64,
    pub melt_curves: i64,
}

/// Typed access to the four DSF relations.
///
/// Writes surface constraint violations as classified [`DsfError`] values;
/// reads mirror the declared unique keys and secondary indexes, nothing more.
pub trait Repository {
    fn insert_experiment(
        &self,
        run_name: Option<&str>,
        run_start_time: Option<&str>,
        instrument_serial: Option<&str>,
        file_name: &str,
    ) -> Result<i64>;
    fn load_experiment(&self, experiment_id: i64) -> Result<Option<Experiment>>;
    fn load_experiment_by_file_name(&self, file_name: &str) -> Result<Option<Experiment>>;
    fn list_experiments(&self) -> Result<Vec<Experiment>>;
    /// Delete an experiment; its wells and melt curves go with it.
    fn delete_experiment(&self, experiment_id: i64) -> Result<usize>;

    fn insert_sample(&self, sample_name: &str, description: Option<&str>) -> Result<i64>;
    fn load_sample_by_name(&self, sample_name: &str) -> Result<Option<Sample>>;
    /// Delete a sample; wells referencing it survive with a nulled reference.
    fn delete_sample(&self, sample_id: i64) -> Result<usize>;

    fn insert_well(
        &self,
        experiment_id: i64,
        sample_id: Option<i64>,
        well_position: &str,
        target_dye: Option<&str>,
        sample_role: Option<&str>,
        tm_value: Option<f64>,
    ) -> Result<i64>;
    fn load_well(&self, well_id: i64) -> Result<Option<Well>>;
    fn list_wells_for_experiment(&self, experiment_id: i64) -> Result<Vec<Well>>;
    fn list_wells_for_sample(&self, sample_id: i64) -> Result<Vec<Well>>;
    /// Delete a well; its melt curve goes with it.
    fn delete_well(&self, well_id: i64) -> Result<usize>;

    /// Insert the raw curve for a well. The arrays must be non-empty and of
    /// equal length; the schema itself only enforces non-null.
    fn insert_melt_curve(
        &self,
        experiment_id: i64,
        well_id: i64,
        temperature_data: &[f64],
        fluorescence_data: &[f64],
    ) -> Result<i64>;
    fn load_melt_curve_for_well(&self, well_id: i64) -> Result<Option<MeltCurve>>;
    fn list_melt_curves_for_experiment(&self, experiment_id: i64) -> Result<Vec<MeltCurve>>;

    fn counts(&self) -> Result<TableCounts>;
}
