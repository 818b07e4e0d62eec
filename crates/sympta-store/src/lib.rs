//! sympta-store
//!
//! File-backed persistence for the statistics record. Thin wrapper around
//! JSON state files with atomic replace-on-write.

pub mod error;
pub mod state;
pub mod stats;

pub use stats::StatsStore;
