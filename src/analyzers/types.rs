//! Data types produced by the aggregation step.

use crate::shot::ShotType;
use serde::Serialize;

/// Per-club roll-up of an aggregated session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClubSummary {
    pub club: String,
    pub shot_type: ShotType,
    pub shots: usize,
    pub target: f64,
}
