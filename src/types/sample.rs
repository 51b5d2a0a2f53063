use serde::{Deserialize, Serialize};

/// A unique biological or chemical sample definition, shared across
/// experiments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub sample_id: i64,
    pub sample_name: String,
    pub description: Option<String>,
}
