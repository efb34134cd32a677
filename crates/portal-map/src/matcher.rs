//! Permissive field-name matching.
//!
//! Header variants such as "Faculty Count", "count" and "no_of_faculty" are
//! reconciled by comparing normalised forms and accepting containment in
//! either direction. False positives are accepted in exchange for tolerance.

/// Lower-cases and strips whitespace, underscores and hyphens.
pub fn normalize_key(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '_' && *ch != '-')
        .collect()
}

/// Returns the first candidate whose normalised form equals, contains, or is
/// contained in the normalised `imported` key. Candidate order breaks ties.
///
/// Keys that normalise to the empty string never match.
pub fn match_field<'a, S: AsRef<str>>(imported: &str, candidates: &'a [S]) -> Option<&'a str> {
    let key = normalize_key(imported);
    if key.is_empty() {
        return None;
    }
    candidates
        .iter()
        .map(AsRef::<str>::as_ref)
        .find(|candidate| {
            let normalized = normalize_key(candidate);
            !normalized.is_empty()
                && (key == normalized || key.contains(&normalized) || normalized.contains(&key))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_separators_and_case() {
        assert_eq!(normalize_key("No_of Faculty-Members"), "nooffacultymembers");
    }

    #[test]
    fn matches_in_both_directions() {
        assert_eq!(match_field("Faculty Count", &["count"]), Some("count"));
        assert_eq!(match_field("count_faculty", &["count"]), Some("count"));
        assert_eq!(match_field("phd", &["phdcount"]), Some("phdcount"));
        assert_eq!(match_field("salary", &["company", "package"]), None);
    }

    #[test]
    fn first_candidate_wins() {
        let candidates = ["total", "count"];
        assert_eq!(match_field("total count", &candidates), Some("total"));
    }

    #[test]
    fn blank_keys_never_match() {
        assert_eq!(match_field("count", &["", " "]), None);
        assert_eq!(match_field("  ", &["count"]), None);
    }
}
