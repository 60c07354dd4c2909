/// File-name slug for a region or country label: lowercase ASCII
/// alphanumerics, runs of anything else collapsed to a single dash.
pub fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(
            slug("OCEANIA (EXCLUDING AUSTRALIA AND NEW ZEALAND)"),
            "oceania-excluding-australia-and-new-zealand"
        );
        assert_eq!(slug("AUSTRALIA/NEW ZEALAND"), "australia-new-zealand");
        assert_eq!(slug("WORLD"), "world");
    }
}
