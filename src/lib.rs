//! Z-score normalized team rankings across stations with different scales,
//! units and directions.
//!
//! The core lives in [`pipeline`]: [`pipeline::normalize`] standardizes each
//! station independently and [`pipeline::aggregate`] sums and rescales the
//! per-team totals. [`input`] and [`report`] are the CSV adapters around it.

pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
