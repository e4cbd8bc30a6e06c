//! Club normalization, shot classification and target aggregation.
//!
//! Translators call [`club::normalize_club`] and [`classify::classify_club`]
//! for every row; [`aggregate::assign_targets`] runs once over the finished
//! session to fill in each shot's median target.

pub mod aggregate;
pub mod classify;
pub mod club;
pub mod types;
pub mod utility;
