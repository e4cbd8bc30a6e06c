use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Shot category derived from the club used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ShotType {
    Tee,
    #[default]
    Approach,
}

impl ShotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShotType::Tee => "Tee",
            ShotType::Approach => "Approach",
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One data row keyed by normalized header name.
#[derive(Debug, Clone, PartialEq)]
pub struct RawShot {
    pub monitor: String,
    pub fields: HashMap<String, String>,
}

impl RawShot {
    /// Returns the cell under `header`, or `""` when the column is absent.
    pub fn field(&self, header: &str) -> &str {
        self.fields.get(header).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessedShot {
    pub club: String,
    pub shot_type: ShotType,
    pub total: f64,
    pub side: f64,
    /// Median total for `club` across the session. Zero until targets are assigned.
    pub target: f64,

    // not reported by every launch monitor
    pub apex: Option<f64>,
    pub carry: Option<f64>,
    pub roll: Option<f64>,
}

impl ProcessedShot {
    pub fn new(club: impl Into<String>, shot_type: ShotType, total: f64, side: f64) -> Self {
        ProcessedShot {
            club: club.into(),
            shot_type,
            total,
            side,
            ..Default::default()
        }
    }
}
