//! Error types for the analysis pipeline.

use chrono::NaiveDate;

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type for analysis operations
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The remote source could not be fetched or the payload could not be
    /// parsed into the canonical table. Surfaced to the user as "data
    /// currently unavailable"; blocks every dependent view.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// The caller supplied an inverted year range. Rejected before any
    /// filtering runs.
    #[error("Invalid year range: start {start} is after end {end}")]
    InvalidRange { start: i32, end: i32 },

    /// A rank query targeted a date absent from the dataset for its year.
    /// Never collapsed into a numeric rank.
    #[error("No data for {date} in the dataset")]
    DateNotFound { date: NaiveDate },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<polars::prelude::PolarsError> for AnalysisError {
    fn from(e: polars::prelude::PolarsError) -> Self {
        AnalysisError::Internal(e.to_string())
    }
}

/// Non-fatal marker for a query that matched zero rows.
///
/// An empty sub-table is a valid result, not an error; downstream views
/// render an explicit "no data in this range" state instead of running
/// statistics over zero rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyResultWarning {
    pub context: String,
}

impl std::fmt::Display for EmptyResultWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No data in this range: {}", self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_failure() {
        let err = AnalysisError::InvalidRange { start: 2000, end: 1999 };
        assert_eq!(
            err.to_string(),
            "Invalid year range: start 2000 is after end 1999"
        );

        let date = NaiveDate::from_ymd_opt(1919, 6, 1).unwrap();
        let err = AnalysisError::DateNotFound { date };
        assert!(err.to_string().contains("1919-06-01"));
    }

    #[test]
    fn empty_result_warning_display() {
        let warning = EmptyResultWarning {
            context: "Gen X".to_string(),
        };
        assert_eq!(warning.to_string(), "No data in this range: Gen X");
    }
}
