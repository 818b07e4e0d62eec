//! sympta-core
//!
//! Pure domain types and data-file path conventions.
//! No I/O — this is the shared vocabulary of the sympta system.

pub mod models;
pub mod paths;
