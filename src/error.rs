use thiserror::Error;

/// Rejections raised by the pH calculator. Validation runs before any row is
/// computed, so an error means no output was produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhError {
    #[error(
        "Input length mismatch: voltage={voltage}, pressure={pressure}, temperature={temperature}, salinity={salinity}"
    )]
    ShapeMismatch {
        voltage: usize,
        pressure: usize,
        temperature: usize,
        salinity: usize,
    },

    #[error("Invalid temperature at index {index}: {value} °C (must be finite and above -273.15 °C)")]
    InvalidTemperature { index: usize, value: f64 },

    #[error("Invalid salinity at index {index}: {value} (must be finite, positive and below 995)")]
    InvalidSalinity { index: usize, value: f64 },

    #[error("Non-finite {field} at index {index}")]
    NonFiniteInput { field: &'static str, index: usize },

    #[error("Non-finite pressure coefficient at index {index}")]
    NonFiniteCoefficient { index: usize },

    #[error("Calculation produced a non-finite pH at index {index}")]
    NonFiniteResult { index: usize },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --observations-json: {source}")]
    ParseObservationsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --calibration-json: {source}")]
    ParseCalibrationJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in input document: {source}")]
    ParseCmdInputJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Ph(#[from] PhError),

    #[cfg(feature = "cli")]
    #[error("Missing input data: provide --input or --observations-json")]
    MissingInputData,

    #[cfg(feature = "cli")]
    #[error(
        "Missing calibration: provide --calibration-json or include 'calibration' in the input document"
    )]
    MissingCalibration,
}
