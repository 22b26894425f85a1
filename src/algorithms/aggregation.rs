//! Month-by-day heatmap aggregation.

use polars::prelude::*;
use serde::Serialize;

use crate::core::domain::MONTH_NAMES;
use crate::core::error::AnalysisError;

/// A dense 12 x 31 month-by-day-of-month grid of summed birth counts.
///
/// Cells with no data — calendar combinations that never occur (Feb 30)
/// or dates absent from the input range — are `None`, not zero: a zero
/// would claim births were recorded and none happened.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapMatrix {
    /// Row labels, `Jan` through `Dec`.
    pub month_labels: Vec<&'static str>,
    /// Column labels, `"1"` through `"31"`.
    pub day_labels: Vec<String>,
    /// `cells[month - 1][day - 1]` is the summed birth count.
    pub cells: Vec<Vec<Option<i64>>>,
}

impl HeatmapMatrix {
    /// The summed count for a 1-based `(month, day)` pair, if any.
    pub fn cell(&self, month: u32, day: u32) -> Option<i64> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        self.cells[(month - 1) as usize][(day - 1) as usize]
    }
}

/// Sum `births` over `(month, day)` across all years in `table`.
///
/// This is the sole numeric artifact the heatmap rendering consumes; an
/// empty input yields a matrix of all-`None` cells.
pub fn heatmap_matrix(table: &DataFrame) -> Result<HeatmapMatrix, AnalysisError> {
    let grouped = table
        .clone()
        .lazy()
        .group_by([col("month"), col("day")])
        .agg([col("births").sum().alias("births")])
        .collect()?;

    let months = grouped.column("month")?.i32()?;
    let days = grouped.column("day")?.i32()?;
    let births = grouped.column("births")?.i64()?;

    let mut cells = vec![vec![None; 31]; 12];
    for i in 0..grouped.height() {
        let (Some(month), Some(day), Some(count)) = (months.get(i), days.get(i), births.get(i))
        else {
            return Err(AnalysisError::Internal(format!(
                "Heatmap aggregation produced a null group at row {}",
                i
            )));
        };

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(AnalysisError::Internal(format!(
                "Heatmap aggregation produced out-of-range cell ({}, {})",
                month, day
            )));
        }
        cells[(month - 1) as usize][(day - 1) as usize] = Some(count);
    }

    Ok(HeatmapMatrix {
        month_labels: MONTH_NAMES.to_vec(),
        day_labels: (1..=31).map(|d| d.to_string()).collect(),
        cells,
    })
}
