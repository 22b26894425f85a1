//! Year-range and cohort filtering.

use polars::prelude::*;

use crate::core::domain::Cohort;
use crate::core::error::{AnalysisError, EmptyResultWarning};

/// Return the rows whose `year` falls in `[start_year, end_year]`,
/// preserving row order.
///
/// An inverted range is rejected with [`AnalysisError::InvalidRange`]
/// before any filtering runs. A zero-row result is valid, not an error;
/// see [`check_non_empty`].
pub fn filter_by_range(
    table: &DataFrame,
    start_year: i32,
    end_year: i32,
) -> Result<DataFrame, AnalysisError> {
    if start_year > end_year {
        return Err(AnalysisError::InvalidRange {
            start: start_year,
            end: end_year,
        });
    }

    let years = table.column("year")?.i32()?;
    let mask = years.gt_eq(start_year) & years.lt_eq(end_year);
    Ok(table.filter(&mask)?)
}

/// Return the rows belonging to `cohort`.
pub fn filter_by_cohort(table: &DataFrame, cohort: &Cohort) -> Result<DataFrame, AnalysisError> {
    filter_by_range(table, cohort.start_year, cohort.end_year)
}

/// Non-fatal check for zero-row views.
///
/// Returns the warning the presentation layer renders as "no data in this
/// range"; `None` means the table has rows.
pub fn check_non_empty(table: &DataFrame, context: &str) -> Option<EmptyResultWarning> {
    if table.height() == 0 {
        Some(EmptyResultWarning {
            context: context.to_string(),
        })
    } else {
        None
    }
}
