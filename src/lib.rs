//! Birthday analytics backend.
//!
//! Loads the public data.gov.my daily-births dataset, normalizes it into a
//! canonical one-row-per-date table, and answers the two dashboard
//! questions: how rare a given calendar date is as a birthday (rank within
//! its year), and what birth-date distributions look like across
//! generational cohorts (top-N lists and a month-by-day heatmap matrix).
//!
//! The presentation layer (widget wiring, chart drawing) lives outside this
//! crate and consumes the serde-serializable outputs produced here.

pub mod algorithms;
pub mod config;
pub mod core;
pub mod io;
pub mod services;
pub mod transformations;
