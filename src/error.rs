use thiserror::Error;

/// Guidance appended to every format error, mirroring what the tool accepts.
pub const SUPPORTED_FORMATS: &str = "Supported formats:\n\
     - Excel (.xlsx) with diagnosis codes in the first column\n\
     - CSV file with diagnosis codes in format 'CODE-Description'\n\
     - Text file with one diagnosis per line in format 'CODE-Description'";

/// Terminal errors for a single analysis request. No retries.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The file could not be parsed under any supported format.
    #[error("could not read '{name}': {reason}\n{}", SUPPORTED_FORMATS)]
    Format { name: String, reason: String },

    /// A required input (file or query) was missing; raised before any
    /// processing is attempted.
    #[error("{0}")]
    EmptyInput(&'static str),
}

impl AnalyzeError {
    pub fn format(name: &str, reason: impl ToString) -> Self {
        AnalyzeError::Format {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
