//! Text canonicalization for search comparisons
//!
//! Text is decomposed (NFKD), stripped of combining marks and lower-cased so
//! that `Café`, `CAFE` and full-width `ｃａｆｅ` all compare equal.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonicalize text for search
///
/// `None` yields the empty string. The result is stable under a second
/// application: `normalize(Some(&normalize(x))) == normalize(x)`.
#[must_use]
pub fn normalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    // Lower-casing can reintroduce decomposable characters (e.g. `İ`), so the
    // second decomposition pass keeps the output in canonical form.
    let lowered: String = text
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();

    lowered.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Shorthand for normalizing a borrowed string
#[must_use]
pub fn normalize_str(text: &str) -> String {
    normalize(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_none_is_empty() {
        assert_eq!(normalize(None), "");
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_str("Neon CAT"), "neon cat");
    }

    #[test]
    fn test_normalize_strips_diacritics() {
        assert_eq!(normalize_str("Café Crème"), "cafe creme");
        assert_eq!(normalize_str("Ångström"), "angstrom");
    }

    #[test]
    fn test_normalize_full_width() {
        assert_eq!(normalize_str("ＮＥＯＮ"), "neon");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["İstanbul", "Ǆemal", "ﬁne print", "Ｃａｆé", "plain", "", "Straße"] {
            let once = normalize_str(input);
            let twice = normalize_str(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }
}
