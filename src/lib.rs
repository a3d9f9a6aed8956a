#[cfg(feature = "cli")]
pub mod adapters;
pub mod chemistry;
pub mod error;
pub mod models;
pub mod ph;
pub mod sensor;

pub use crate::error::{AppError, PhError};
pub use crate::models::{Calibration, Observations, PhPoint, PhResult, Sample};
pub use crate::ph::calculator::{
    DetailedRow, calculate, calculate_detailed, calculate_observations, ph_point,
};
