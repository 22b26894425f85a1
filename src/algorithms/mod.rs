//! Ranking and aggregation queries over the canonical table.

pub mod aggregation;
pub mod ranking;

pub use aggregation::{heatmap_matrix, HeatmapMatrix};
pub use ranking::{rank, rank_year, top_n, TopOrder};
