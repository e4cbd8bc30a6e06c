use crate::analyzers::types::ClubSummary;
use crate::analyzers::utility::median;
use crate::shot::ProcessedShot;
use std::collections::HashMap;
use tracing::debug;

/// Sets every shot's target to the median total of all shots hit with the same club.
///
/// Groups are built over the whole session before any target is written, so
/// each target reflects the complete group rather than a running median.
pub fn assign_targets(shots: &mut [ProcessedShot]) {
    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, shot) in shots.iter().enumerate() {
        groups.entry(shot.club.as_str()).or_default().push(idx);
    }

    let targets: Vec<(Vec<usize>, f64)> = groups
        .into_values()
        .map(|indices| {
            let mut totals: Vec<f64> = indices.iter().map(|&i| shots[i].total).collect();
            let target = median(&mut totals);
            (indices, target)
        })
        .collect();

    for (indices, target) in targets {
        debug!(club = %shots[indices[0]].club, shots = indices.len(), target, "Club target");
        for i in indices {
            shots[i].target = target;
        }
    }
}

/// Rolls an aggregated session up into one [`ClubSummary`] per club, in the
/// order each club first appears.
pub fn summarize(shots: &[ProcessedShot]) -> Vec<ClubSummary> {
    let mut summaries: Vec<ClubSummary> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for shot in shots {
        match positions.get(shot.club.as_str()) {
            Some(&pos) => summaries[pos].shots += 1,
            None => {
                positions.insert(shot.club.as_str(), summaries.len());
                summaries.push(ClubSummary {
                    club: shot.club.clone(),
                    shot_type: shot.shot_type,
                    shots: 1,
                    target: shot.target,
                });
            }
        }
    }

    summaries
}
