//! Derived views over the canonical table.
//!
//! Filtering never mutates the input: every operation returns a new
//! sub-table, so the canonical table stays read-only for the session.

pub mod cohorts;

pub use cohorts::{check_non_empty, filter_by_cohort, filter_by_range};
