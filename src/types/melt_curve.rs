use serde::{Deserialize, Serialize};

/// Raw melt-curve measurement for one well.
///
/// The two arrays are paired and index-aligned: `fluorescence_data[i]` was
/// read at `temperature_data[i]`. A curve is always stored and fetched as a
/// single row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeltCurve {
    pub curve_id: i64,
    pub experiment_id: i64,
    pub well_id: i64,
    pub temperature_data: Vec<f64>,
    pub fluorescence_data: Vec<f64>,
}

impl MeltCurve {
    /// Number of measurement points in the curve.
    pub fn len(&self) -> usize {
        self.temperature_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperature_data.is_empty()
    }
}
