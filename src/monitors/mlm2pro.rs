use super::LaunchMonitor;
use crate::analyzers::{classify::classify_club, club::normalize_club};
use crate::error::{Result, ShotError};
use crate::shot::{ProcessedShot, RawShot};
use std::collections::HashMap;
use tracing::debug;

const CLUB_TYPE: &str = "club type";
const TOTAL_DISTANCE: &str = "total distance";
const SIDE_CARRY: &str = "side carry";

/// Rapsodo MLM2Pro session export.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mlm2Pro;

impl LaunchMonitor for Mlm2Pro {
    fn name(&self) -> &'static str {
        "MLM2Pro"
    }

    fn parse_row(&self, row: &[&str], headers: &[String]) -> Result<RawShot> {
        if row.len() < headers.len() {
            return Err(ShotError::InsufficientColumns {
                expected: headers.len(),
                found: row.len(),
            });
        }

        let fields: HashMap<String, String> = headers
            .iter()
            .zip(row)
            .map(|(header, cell)| (header.clone(), cell.trim().to_string()))
            .collect();

        Ok(RawShot {
            monitor: self.name().to_string(),
            fields,
        })
    }

    fn process_raw(&self, raw: &RawShot) -> ProcessedShot {
        let club = normalize_club(raw.field(CLUB_TYPE));
        let shot_type = classify_club(&club);

        ProcessedShot::new(
            club,
            shot_type,
            distance_or_zero(raw, TOTAL_DISTANCE),
            distance_or_zero(raw, SIDE_CARRY),
        )
    }
}

fn parse_distance(raw: &RawShot, field: &str) -> Result<f64> {
    let value = raw.field(field);
    value
        .parse::<f64>()
        .map_err(|_| ShotError::UnparsableNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Unparsable or missing distances count as zero.
fn distance_or_zero(raw: &RawShot, field: &str) -> f64 {
    parse_distance(raw, field).unwrap_or_else(|e| {
        debug!(error = %e, "Treating distance as 0");
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shot::ShotType;

    fn headers() -> Vec<String> {
        vec![
            "club type".to_string(),
            "total distance".to_string(),
            "side carry".to_string(),
        ]
    }

    fn raw(club: &str, total: &str, side: &str) -> RawShot {
        Mlm2Pro
            .parse_row(&[club, total, side], &headers())
            .unwrap()
    }

    #[test]
    fn test_parse_row() {
        let parsed = Mlm2Pro.parse_row(&["Dr", " 250 ", "10"], &headers()).unwrap();

        assert_eq!(parsed.monitor, "MLM2Pro");
        assert_eq!(parsed.field("club type"), "Dr");
        assert_eq!(parsed.field("total distance"), "250");
        assert_eq!(parsed.field("side carry"), "10");
    }

    #[test]
    fn test_parse_row_ignores_extra_cells() {
        let parsed = Mlm2Pro
            .parse_row(&["7i", "150", "-5", "extra"], &headers())
            .unwrap();
        assert_eq!(parsed.fields.len(), 3);
    }

    #[test]
    fn test_parse_row_insufficient_columns() {
        let result = Mlm2Pro.parse_row(&["Dr", "250"], &headers());
        assert!(matches!(
            result,
            Err(ShotError::InsufficientColumns {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_process_raw() {
        let shot = Mlm2Pro.process_raw(&raw("Dr", "250", "10"));
        assert_eq!(shot, ProcessedShot::new("Dr", ShotType::Tee, 250.0, 10.0));

        let shot = Mlm2Pro.process_raw(&raw("7 iron", "150.4", "-5"));
        assert_eq!(shot.club, "7i");
        assert_eq!(shot.shot_type, ShotType::Approach);
        assert_eq!(shot.total, 150.4);
        assert_eq!(shot.side, -5.0);
        assert_eq!(shot.target, 0.0);
    }

    #[test]
    fn test_process_raw_bad_numbers_are_zero() {
        let shot = Mlm2Pro.process_raw(&raw("Pw", "n/a", ""));
        assert_eq!(shot.total, 0.0);
        assert_eq!(shot.side, 0.0);
    }

    #[test]
    fn test_process_raw_missing_columns() {
        let raw = RawShot {
            monitor: "MLM2Pro".to_string(),
            fields: HashMap::new(),
        };
        let shot = Mlm2Pro.process_raw(&raw);
        assert_eq!(shot.club, "");
        assert_eq!(shot.shot_type, ShotType::Approach);
        assert_eq!(shot.total, 0.0);
    }
}
