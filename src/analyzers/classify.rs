use crate::shot::ShotType;
use regex::Regex;
use std::sync::LazyLock;

/// Club code patterns, checked in order. Anything unmatched is an approach shot.
static SHOT_PATTERNS: LazyLock<Vec<(Regex, ShotType)>> = LazyLock::new(|| {
    [
        (r"(?i)^d", ShotType::Tee),
        (r"(?i)^[2-9]w(ood)?$", ShotType::Tee),
        (r"(?i)^\d+i(ron)?$", ShotType::Approach),
        (r"(?i)^[psgl]w(edge)?$", ShotType::Approach),
        (r"(?i)^\d+\s*(h(ybrid)?|hy)$", ShotType::Approach),
    ]
    .into_iter()
    .map(|(pattern, shot_type)| {
        let regex = Regex::new(pattern).expect("valid shot pattern");
        (regex, shot_type)
    })
    .collect()
});

/// Categorizes a shot by its canonical club code.
///
/// Drivers and fairway woods are tee shots; irons, wedges, hybrids and
/// anything unrecognized are approach shots.
pub fn classify_club(club: &str) -> ShotType {
    SHOT_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(club))
        .map(|(_, shot_type)| *shot_type)
        .unwrap_or_default()
}
