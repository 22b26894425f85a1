//! Birthday popularity ranking.
//!
//! Ranking is pure data computation; the ordinal-suffix display helpers
//! live in [`crate::core::domain`] so rank results stay testable without
//! any formatting concerns.

use chrono::{Datelike, NaiveDate};
use polars::prelude::*;

use crate::core::domain::{num_of_days_in_year, BirthRecord, BirthdayRank, RankedRecord};
use crate::core::error::AnalysisError;
use crate::io::loaders;
use crate::transformations::cohorts;

/// Sort order for [`top_n`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopOrder {
    MostCommon,
    Rarest,
}

/// Rank every date recorded in `year`.
///
/// Rows are sorted by `births` descending; tied counts keep the canonical
/// date-ascending order, so ranks are always the permutation `1..=k` for a
/// year with `k` recorded dates.
pub fn rank_year(table: &DataFrame, year: i32) -> Result<Vec<RankedRecord>, AnalysisError> {
    let year_table = cohorts::filter_by_range(table, year, year)?;
    let sorted = year_table.sort(["births"], vec![true], true)?;
    let records = loaders::to_records(&sorted)?;

    Ok(records
        .into_iter()
        .enumerate()
        .map(|(i, record)| RankedRecord {
            rank: (i + 1) as u32,
            record,
        })
        .collect())
}

/// Rank a single date among all dates of its year.
///
/// Fails with [`AnalysisError::DateNotFound`] when the exact date is not
/// in the dataset (outside the covered span, or missing from the source);
/// absence is never collapsed into a numeric rank.
pub fn rank(table: &DataFrame, date: NaiveDate) -> Result<BirthdayRank, AnalysisError> {
    let year = date.year();
    let position = rank_year(table, year)?
        .into_iter()
        .find(|ranked| ranked.record.birthdate == date)
        .map(|ranked| ranked.rank)
        .ok_or(AnalysisError::DateNotFound { date })?;

    Ok(BirthdayRank {
        position,
        total_days_in_year: num_of_days_in_year(year),
    })
}

/// Return the first `n` records of `table` ordered by birth count.
///
/// `MostCommon` sorts descending, `Rarest` ascending; ties keep the
/// original row order. A table with fewer than `n` rows returns what it
/// has — that is not an error.
pub fn top_n(
    table: &DataFrame,
    n: usize,
    order: TopOrder,
) -> Result<Vec<BirthRecord>, AnalysisError> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let descending = matches!(order, TopOrder::MostCommon);
    let sorted = table.sort(["births"], vec![descending], true)?;
    loaders::to_records(&sorted.head(Some(n)))
}
