//! Creator recommendation scorer.
//!
//! Ranks a roster of creator records against a campaign brief using a
//! weighted combination of five bounded fit dimensions (tags, audience,
//! performance, budget, reliability) minus shaped penalties. The scoring
//! pipeline is pure and synchronous: population statistics are recomputed
//! per request from the supplied roster and no state survives a call.

pub mod config;
pub mod error;
pub mod recommendations;
pub mod telemetry;
