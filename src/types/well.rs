use serde::{Deserialize, Serialize};

pub const PLATE_COLUMNS: usize = 12;

/// A physical well within an experiment plate.
///
/// `sample_id` is optional: the well outlives the sample definition it was
/// linked to. `tm_value` holds the first melting-temperature peak reported by
/// the instrument, when any.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Well {
    pub well_id: i64,
    pub experiment_id: i64,
    pub sample_id: Option<i64>,
    pub well_position: String,
    pub target_dye: Option<String>,
    pub sample_role: Option<String>,
    pub tm_value: Option<f64>,
}

/// Convert a 0-based row-major well index into the `A01`..`H12` position code
/// of a standard 96-well plate (12 columns, rows A..H).
pub fn position_from_index(index: usize) -> String {
    let row = index / PLATE_COLUMNS;
    let col = index % PLATE_COLUMNS;
    let row_char = char::from(b'A' + (row % 26) as u8);
    format!("{row_char}{:02}", col + 1)
}
