mod error;
mod experiment;
mod melt_curve;
mod sample;
mod well;

pub use error::DsfError;
pub use experiment::Experiment;
pub use melt_curve::MeltCurve;
pub use sample::Sample;
pub use well::{position_from_index, Well, PLATE_COLUMNS};
