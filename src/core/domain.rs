//! Domain models for daily birth counts and generational cohorts.
//!
//! This module provides the core data structures shared by the loading,
//! filtering, ranking, and aggregation layers: one record per calendar
//! date, the fixed cohort registry, and the small pure helpers (day
//! counts, ordinal suffixes, approximate ages) the dashboard displays.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::error::AnalysisError;

/// First year covered by the source dataset.
pub const DATASET_START_YEAR: i32 = 1920;
/// Last year covered by the source dataset.
pub const DATASET_END_YEAR: i32 = 2022;

/// Month abbreviations used as heatmap row labels, indexed by month - 1.
///
/// These reproduce the dashboard's labels verbatim, including "Sept".
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Returns the display abbreviation for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}

/// One row of the canonical table: the nationwide birth total for a single
/// calendar date, with the date parts broken out for grouping.
///
/// `year`, `month`, and `day` are always derived from `birthdate`; use
/// [`BirthRecord::new`] to keep them consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthRecord {
    pub birthdate: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub births: i64,
}

impl BirthRecord {
    /// Creates a record with the date parts derived from `birthdate`.
    pub fn new(birthdate: NaiveDate, births: i64) -> Self {
        Self {
            birthdate,
            year: birthdate.year(),
            month: birthdate.month(),
            day: birthdate.day(),
            births,
        }
    }
}

/// A [`BirthRecord`] plus its 1-based position within its year when all
/// dates of that year are sorted by `births` descending (ties keep the
/// date-ascending order of the canonical table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedRecord {
    pub record: BirthRecord,
    pub rank: u32,
}

/// The pure result of a rank query: position within the year and the
/// number of calendar days that year has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayRank {
    pub position: u32,
    pub total_days_in_year: u32,
}

/// A named year range used to group birthdates for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cohort {
    pub label: String,
    pub start_year: i32,
    pub end_year: i32,
}

impl Cohort {
    fn named(label: &str, start_year: i32, end_year: i32) -> Self {
        Self {
            label: label.to_string(),
            start_year,
            end_year,
        }
    }

    /// Builds a user-defined cohort from arbitrary bounds.
    ///
    /// Rejects inverted ranges with [`AnalysisError::InvalidRange`] so the
    /// bad bounds never reach a filter.
    pub fn custom(start_year: i32, end_year: i32) -> Result<Self, AnalysisError> {
        if start_year > end_year {
            return Err(AnalysisError::InvalidRange {
                start: start_year,
                end: end_year,
            });
        }
        Ok(Self {
            label: format!("Custom ({}-{})", start_year, end_year),
            start_year,
            end_year,
        })
    }

    /// Looks up a registry cohort by its label.
    pub fn find(label: &str) -> Option<&'static Cohort> {
        cohort_registry().iter().find(|c| c.label == label)
    }

    /// Returns `true` if `year` falls inside this cohort's range.
    pub fn contains(&self, year: i32) -> bool {
        self.start_year <= year && year <= self.end_year
    }
}

static COHORT_REGISTRY: Lazy<Vec<Cohort>> = Lazy::new(|| {
    vec![
        Cohort::named("All", DATASET_START_YEAR, DATASET_END_YEAR),
        Cohort::named("Silent Generation", 1928, 1945),
        Cohort::named("Baby Boomer", 1946, 1964),
        Cohort::named("Gen X", 1965, 1980),
        Cohort::named("Millennials", 1981, 1996),
        Cohort::named("Gen Z", 1997, 2009),
        Cohort::named("Gen Alpha", 2010, 2022),
    ]
});

/// The fixed registry of named generational cohorts, built once at first
/// use and immutable afterwards.
pub fn cohort_registry() -> &'static [Cohort] {
    &COHORT_REGISTRY
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of calendar days in `year`: 366 for leap years, else 365.
pub fn num_of_days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Ordinal suffix for a 1-based rank or day value.
///
/// Values ending in 1, 2, 3 take "st", "nd", "rd", everything else "th" —
/// except 11, 12, 13 (and 111, 212, ...), which always take "th".
pub fn ordinal_suffix(value: u32) -> &'static str {
    if (11..=13).contains(&(value % 100)) {
        return "th";
    }
    match value % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Formats a rank position as display text, e.g. `3` -> `"3rd"`.
pub fn format_rank(position: u32) -> String {
    format!("{}{}", position, ordinal_suffix(position))
}

/// An age split into years, months, and days for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBreakdown {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

/// Splits the span from `birthdate` to `today` into years, months, and
/// days using fixed 365-day years and 30-day months.
///
/// This reproduces the dashboard's displayed arithmetic. It is a known
/// approximation: it drifts against real month lengths and leap years and
/// is kept only for display parity, not calendar math.
pub fn approximate_age(birthdate: NaiveDate, today: NaiveDate) -> AgeBreakdown {
    let total_days = (today - birthdate).num_days();
    let years = total_days / 365;
    let remainder = total_days % 365;
    AgeBreakdown {
        years,
        months: remainder / 30,
        days: remainder % 30,
    }
}
