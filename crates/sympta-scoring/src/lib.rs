//! sympta-scoring
//!
//! The risk scorer and diagnosis classifier. Pure functions over the
//! sympta-core domain types — no I/O, no randomness, no failure modes.

pub mod classify;
pub mod score;

pub use classify::classify;
pub use score::{risk_score, risk_score_from_parts};
