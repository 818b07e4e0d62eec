//! sympta-audit
//!
//! The durable audit trail of classifications: an append-only prediction
//! log on disk, plus structured audit events emitted via `tracing`.

pub mod error;
pub mod events;
pub mod log;

pub use log::PredictionLog;
