//! Canonical plate token: normalized, script-unified, separator-free

use serde::{Deserialize, Serialize};

/// Map a Cyrillic letter that is visually identical to a Latin one onto its
/// Latin counterpart. These 12 are the only letters that can physically
/// appear on a domestic plate. Every other Cyrillic letter passes through
/// unchanged and fails classification downstream.
fn fold_homoglyph(c: char) -> char {
    match c {
        'А' => 'A',
        'В' => 'B',
        'Е' => 'E',
        'К' => 'K',
        'М' => 'M',
        'Н' => 'H',
        'О' => 'O',
        'Р' => 'P',
        'С' => 'C',
        'Т' => 'T',
        'У' => 'Y',
        'Х' => 'X',
        other => other,
    }
}

/// Normalized representation of free-form operator input.
///
/// Parsing is total and deterministic: uppercase, strip everything outside
/// {ASCII A-Z, Cyrillic А-Я, 0-9}, fold the 12 Cyrillic homoglyphs to Latin.
/// Operators type plates with spaces, hyphens and a mix of keyboard layouts;
/// all of that collapses into one comparable token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalPlate(String);

impl CanonicalPlate {
    pub fn parse(raw: &str) -> Self {
        let token = raw
            .chars()
            .flat_map(char::to_uppercase)
            .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || ('А'..='Я').contains(c))
            .map(fold_homoglyph)
            .collect();
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Token length in characters, not bytes. Leftover Cyrillic letters are
    /// multi-byte in UTF-8 and must still count as one.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for CanonicalPlate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_whitespace_and_separators() {
        assert_eq!(
            CanonicalPlate::parse("А 123 ВС 77"),
            CanonicalPlate::parse("А123ВС77")
        );
        assert_eq!(CanonicalPlate::parse("a-123-bc 77").as_str(), "A123BC77");
    }

    #[test]
    fn test_maps_cyrillic_homoglyphs_to_latin() {
        assert_eq!(CanonicalPlate::parse("А000АА77").as_str(), "A000AA77");
        assert_eq!(CanonicalPlate::parse("авекмнорстух").as_str(), "ABEKMHOPCTYX");
    }

    #[test]
    fn test_non_homoglyph_cyrillic_is_kept() {
        // Ж has no Latin twin; it survives canonicalization and gets
        // rejected by the classifier instead.
        assert_eq!(CanonicalPlate::parse("Ж123ЖЖ77").as_str(), "Ж123ЖЖ77");
    }

    #[test]
    fn test_idempotent() {
        let samples = ["А 123 ВС 77", "  +7 916 123-45-67", "a000aa000", "Ж?!", ""];
        for raw in samples {
            let once = CanonicalPlate::parse(raw);
            let twice = CanonicalPlate::parse(once.as_str());
            assert_eq!(once, twice, "canonicalization not idempotent for '{}'", raw);
        }
    }

    #[test]
    fn test_never_longer_than_input() {
        let samples = ["А 123 ВС 77", "x090xx96", "!!!", "т333уо196", "89161234567"];
        for raw in samples {
            let token = CanonicalPlate::parse(raw);
            assert!(token.char_len() <= raw.chars().count());
        }
    }

    #[test]
    fn test_total_over_arbitrary_unicode() {
        assert_eq!(CanonicalPlate::parse("☃ 進撃 😀").as_str(), "");
        assert_eq!(CanonicalPlate::parse("").as_str(), "");
    }
}
