//! Core building blocks: aggregation config, the feature/unit table,
//! point-by-feature sample tables, the NA-aware cross-year reducer, and
//! the patch relabeling loop. These are internal primitives consumed by
//! the high-level `api` module.
pub mod config;
pub mod features;
pub mod reduce;
pub mod relabel;
pub mod table;
