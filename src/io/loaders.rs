//! High-level dataset loading.
//!
//! [`BirthsLoader`] combines the remote fetch, parquet parsing, and
//! normalization into ready-to-use canonical tables. The raw source is
//! one row per (date, state); normalization sums births across states so
//! the canonical table carries exactly one nationwide row per date.

use std::io::Cursor;
use std::path::Path;

use chrono::NaiveDate;
use polars::prelude::*;

use crate::config::Settings;
use crate::core::domain::BirthRecord;
use crate::core::error::AnalysisError;
use crate::io::fetch;

/// Where a canonical table was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthsSourceType {
    Remote,
    LocalFile,
    Memory,
}

/// Result of loading the births dataset.
#[derive(Debug)]
pub struct BirthsLoadResult {
    pub dataframe: DataFrame,
    pub source_type: BirthsSourceType,
    pub num_days: usize,
}

impl BirthsLoadResult {
    pub fn new(dataframe: DataFrame, source_type: BirthsSourceType) -> Self {
        let num_days = dataframe.height();
        Self {
            dataframe,
            source_type,
            num_days,
        }
    }
}

/// Unified interface for loading the births dataset into canonical form.
pub struct BirthsLoader;

impl BirthsLoader {
    /// Fetch the remote parquet named in `settings` and normalize it.
    ///
    /// The fetch is bounded by the configured timeout and retried once by
    /// default; exhaustion surfaces as [`AnalysisError::DataUnavailable`].
    pub fn load(settings: &Settings) -> Result<BirthsLoadResult, AnalysisError> {
        log::info!("Loading births dataset from {}", settings.data_url);
        let bytes = fetch::fetch_bytes(
            &settings.data_url,
            settings.fetch_timeout(),
            settings.fetch_retries,
        )?;
        let df = normalize(read_parquet(&bytes)?)?;
        log::info!("Loaded canonical table with {} dates", df.height());
        Ok(BirthsLoadResult::new(df, BirthsSourceType::Remote))
    }

    /// Load and normalize a local `.parquet` file.
    pub fn load_from_file(path: &Path) -> Result<BirthsLoadResult, AnalysisError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| AnalysisError::DataUnavailable("File has no extension".to_string()))?;

        if extension.to_lowercase() != "parquet" {
            return Err(AnalysisError::DataUnavailable(format!(
                "Unsupported file format: {}",
                extension
            )));
        }

        let bytes = std::fs::read(path).map_err(|e| {
            AnalysisError::DataUnavailable(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let df = normalize(read_parquet(&bytes)?)?;
        Ok(BirthsLoadResult::new(df, BirthsSourceType::LocalFile))
    }

    /// Load and normalize an in-memory parquet buffer.
    pub fn load_from_bytes(bytes: &[u8]) -> Result<BirthsLoadResult, AnalysisError> {
        let df = normalize(read_parquet(bytes)?)?;
        Ok(BirthsLoadResult::new(df, BirthsSourceType::Memory))
    }
}

fn read_parquet(bytes: &[u8]) -> Result<DataFrame, AnalysisError> {
    ParquetReader::new(Cursor::new(bytes))
        .finish()
        .map_err(|e| AnalysisError::DataUnavailable(format!("Failed to parse parquet: {}", e)))
}

/// Normalize the raw source table into the canonical shape.
///
/// Steps, in order:
/// 1. require `date` and `births` columns, parsing string dates when the
///    source did not ship a Date-typed column;
/// 2. sum `births` across the per-state rows onto one row per date (the
///    geographic column is dropped by never being selected);
/// 3. derive `year` / `month` / `day` and pin the canonical dtypes;
/// 4. project to the five canonical columns and sort by date.
pub(crate) fn normalize(raw: DataFrame) -> Result<DataFrame, AnalysisError> {
    for required in ["date", "births"] {
        if raw.column(required).is_err() {
            return Err(AnalysisError::DataUnavailable(format!(
                "Source table is missing the '{}' column",
                required
            )));
        }
    }

    let date_expr = match raw.column("date").map(|s| s.dtype().clone()) {
        Ok(DataType::Date) => col("date"),
        Ok(DataType::String) => col("date").str().to_date(StrptimeOptions {
            format: Some("%Y-%m-%d".into()),
            strict: true,
            exact: true,
            cache: true,
        }),
        Ok(other) => {
            return Err(AnalysisError::DataUnavailable(format!(
                "Source 'date' column has unsupported type {:?}",
                other
            )))
        }
        Err(e) => return Err(e.into()),
    };

    let canonical = raw
        .lazy()
        .with_columns([date_expr.alias("birthdate")])
        .group_by([col("birthdate")])
        .agg([col("births").cast(DataType::Int64).sum().alias("births")])
        .with_columns([
            col("birthdate").dt().year().cast(DataType::Int32).alias("year"),
            col("birthdate").dt().month().cast(DataType::Int32).alias("month"),
            col("birthdate").dt().day().cast(DataType::Int32).alias("day"),
        ])
        .select([
            col("birthdate"),
            col("year"),
            col("month"),
            col("day"),
            col("births"),
        ])
        .sort("birthdate", SortOptions::default())
        .collect()
        .map_err(|e| {
            AnalysisError::DataUnavailable(format!("Failed to normalize source table: {}", e))
        })?;

    if let Some(min) = canonical.column("births")?.i64()?.min() {
        if min < 0 {
            return Err(AnalysisError::DataUnavailable(
                "Source table contains negative birth counts".to_string(),
            ));
        }
    }

    Ok(canonical)
}

/// Convert canonical rows into domain records, preserving row order.
pub fn to_records(table: &DataFrame) -> Result<Vec<BirthRecord>, AnalysisError> {
    let years = table.column("year")?.i32()?;
    let months = table.column("month")?.i32()?;
    let days = table.column("day")?.i32()?;
    let births = table.column("births")?.i64()?;

    let mut records = Vec::with_capacity(table.height());
    for i in 0..table.height() {
        let (Some(year), Some(month), Some(day), Some(count)) =
            (years.get(i), months.get(i), days.get(i), births.get(i))
        else {
            return Err(AnalysisError::Internal(format!(
                "Canonical table has a null entry at row {}",
                i
            )));
        };

        let birthdate = NaiveDate::from_ymd_opt(year, month as u32, day as u32).ok_or_else(|| {
            AnalysisError::Internal(format!("Invalid calendar date {}-{}-{}", year, month, day))
        })?;
        records.push(BirthRecord::new(birthdate, count));
    }

    Ok(records)
}
