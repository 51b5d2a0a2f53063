use serde::{Deserialize, Serialize};

/// One instrument run, keyed by the source file it was imported from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub experiment_id: i64,
    pub run_name: Option<String>,
    pub run_start_time: Option<String>,
    pub instrument_serial: Option<String>,
    pub file_name: String,
}
