//! Core domain models and error types.

pub mod domain;
pub mod error;

pub use domain::{
    approximate_age, cohort_registry, format_rank, month_name, num_of_days_in_year,
    ordinal_suffix, AgeBreakdown, BirthRecord, BirthdayRank, Cohort, RankedRecord,
    DATASET_END_YEAR, DATASET_START_YEAR, MONTH_NAMES,
};
pub use error::{AnalysisError, AnalysisResult, EmptyResultWarning};
