//! Session-scoped dataset cache and high-level queries.

use chrono::NaiveDate;
use polars::prelude::DataFrame;

use crate::algorithms::{aggregation, ranking};
use crate::config::Settings;
use crate::core::domain::{BirthRecord, BirthdayRank, Cohort};
use crate::core::error::AnalysisError;
use crate::io::loaders::BirthsLoader;
use crate::transformations::cohorts;

/// A session-scoped view of the births dataset.
///
/// The original dashboard re-fetched the remote file on every query; here
/// the canonical table is fetched once per session and cached, with
/// explicit [`refresh`](Self::refresh) and
/// [`invalidate`](Self::invalidate) operations so staleness is a caller
/// decision rather than hidden behavior. The cached table is read-only;
/// every query produces a new derived view.
pub struct DatasetSession {
    settings: Settings,
    table: Option<DataFrame>,
}

impl DatasetSession {
    /// Create a session that will fetch on first use.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            table: None,
        }
    }

    /// Create a session over an already-normalized canonical table.
    ///
    /// Used for offline work and tests; no network I/O will occur unless
    /// the caller later invalidates and re-queries.
    pub fn with_table(settings: Settings, table: DataFrame) -> Self {
        Self {
            settings,
            table: Some(table),
        }
    }

    /// The canonical table, fetching and normalizing it on first use.
    pub fn table(&mut self) -> Result<&DataFrame, AnalysisError> {
        if self.table.is_none() {
            let loaded = BirthsLoader::load(&self.settings)?;
            self.table = Some(loaded.dataframe);
        }
        Ok(self.table.as_ref().expect("table populated above"))
    }

    /// Drop the cached table and fetch a fresh copy.
    pub fn refresh(&mut self) -> Result<&DataFrame, AnalysisError> {
        log::info!("Refreshing births dataset");
        self.table = None;
        self.table()
    }

    /// Drop the cached table without fetching.
    ///
    /// The next query triggers a fresh load.
    pub fn invalidate(&mut self) {
        self.table = None;
    }

    /// Whether a canonical table is currently cached.
    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    /// Rank `date` among all dates recorded in its year.
    pub fn birthday_rank(&mut self, date: NaiveDate) -> Result<BirthdayRank, AnalysisError> {
        let table = self.table()?;
        ranking::rank(table, date)
    }

    /// The `n` most common or rarest birthdays within `cohort`.
    pub fn top_birthdays(
        &mut self,
        cohort: &Cohort,
        n: usize,
        order: ranking::TopOrder,
    ) -> Result<Vec<BirthRecord>, AnalysisError> {
        let table = self.table()?;
        let filtered = cohorts::filter_by_cohort(table, cohort)?;
        ranking::top_n(&filtered, n, order)
    }

    /// The month-by-day heatmap matrix for `cohort`.
    pub fn heatmap(
        &mut self,
        cohort: &Cohort,
    ) -> Result<aggregation::HeatmapMatrix, AnalysisError> {
        let table = self.table()?;
        let filtered = cohorts::filter_by_cohort(table, cohort)?;
        aggregation::heatmap_matrix(&filtered)
    }
}
