//! Data fetching and loading.
//!
//! This module owns the boundary with the remote dataset: the HTTP fetch
//! with its bounded timeout and single retry, parquet parsing, and the
//! normalization that turns per-state daily rows into the canonical
//! one-row-per-date table the rest of the crate consumes.

pub mod fetch;
pub mod loaders;

#[cfg(test)]
mod loaders_tests;

pub use loaders::{to_records, BirthsLoadResult, BirthsLoader, BirthsSourceType};
