//! Club name normalization.

/// Wedge keywords, checked in order against the lowercased club name.
static WEDGES: &[(&str, &str)] = &[
    ("pw", "Pw"),
    ("pitching", "Pw"),
    ("sw", "Sw"),
    ("sand", "Sw"),
    ("gw", "Gw"),
    ("gap", "Gw"),
    ("lw", "Lw"),
    ("lob", "Lw"),
];

/// Maps a freeform club name to its canonical code.
///
/// | Input            | Code     |
/// |------------------|----------|
/// | `driver`, `d`    | `Dr`     |
/// | `3 wood`, `3w`   | `3W`     |
/// | `4 hybrid`       | `4Hy`    |
/// | `7 iron`, `7i`   | `7i`     |
/// | `SW`, `sand`     | `Sw`     |
/// | `putter`         | `Putter` |
///
/// Rules are tried in the order above and the first hit wins. The wood, hybrid
/// and iron rules only apply when the name carries a number; otherwise the
/// name falls through to the wedge table and then to capitalization.
pub fn normalize_club(club: &str) -> String {
    let club = club.trim().to_lowercase();

    if matches!(club.as_str(), "driver" | "d" | "dr") {
        return "Dr".to_string();
    }

    // "wood", "hybrid"/"hy" and "iron" are covered by their single-letter checks
    let numbered = [('w', "W"), ('h', "Hy"), ('i', "i")];
    for (letter, suffix) in numbered {
        if club.contains(letter) {
            if let Some(number) = extract_number(&club) {
                return format!("{number}{suffix}");
            }
        }
    }

    if let Some((_, code)) = WEDGES.iter().find(|(key, _)| club.contains(key)) {
        return code.to_string();
    }

    capitalize_first(&club)
}

/// Returns the first run of ASCII digits in `s`.
fn extract_number(s: &str) -> Option<&str> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let rest = &s[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
