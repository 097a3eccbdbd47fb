//! Ordered rule chain classifying a canonical token against regional plate
//! grammars, with a relaxed heuristic fallback.

use crate::modules::plate::domain::value_objects::CanonicalPlate;
use regex::Regex;
use serde::Serialize;

/// Letters that physically exist on domestic plates: the 12 Cyrillic/Latin
/// homoglyphs, post-canonicalization. Strict domestic grammars never accept
/// the full Latin alphabet.
const PLATE_LETTERS: &str = "ABEKMHOPCTYX";

/// Why a non-empty token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InvalidReason {
    /// The token reads as a phone number, a common operator slip when the
    /// visitor dictates contacts instead of the plate.
    PhoneNumber,
    /// Nothing in the grammar chain nor the relaxed corridor matched.
    BadFormat,
}

impl InvalidReason {
    pub fn operator_message(&self) -> &'static str {
        match self {
            InvalidReason::PhoneNumber => "ТЕЛЕФОН: Введите госномер",
            InvalidReason::BadFormat => "НЕВЕРНЫЙ ФОРМАТ",
        }
    }
}

/// Verdict for one canonical token. `reason` is set iff the token is
/// non-empty and invalid; an empty token is the quiet "no input yet" case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlateValidation {
    pub valid: bool,
    pub reason: Option<InvalidReason>,
}

impl PlateValidation {
    fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    fn empty() -> Self {
        Self {
            valid: false,
            reason: None,
        }
    }

    fn invalid(reason: InvalidReason) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }
}

/// Classifier over the ordered rule chain.
///
/// Rule order is load-bearing: phone rejection must run before the relaxed
/// corridor, or an 11-12 digit phone number would satisfy it. All regexes
/// are compiled once at construction.
pub struct PlateFormatClassifier {
    phone: [Regex; 3],
    domestic: [Regex; 3],
    neighboring: [Regex; 2],
}

impl PlateFormatClassifier {
    pub fn new() -> Self {
        let l = PLATE_LETTERS;
        Self {
            phone: [
                Regex::new(r"^\+?7\d{10}$").unwrap(),
                Regex::new(r"^8\d{10}$").unwrap(),
                Regex::new(r"^\d{10,12}$").unwrap(),
            ],
            domestic: [
                // Private: А123ВС77 / А123ВС777
                Regex::new(&format!(r"^[{l}]\d{{3}}[{l}]{{2}}\d{{2,3}}$")).unwrap(),
                // Trailer: АВ123477
                Regex::new(&format!(r"^[{l}]{{2}}\d{{4}}\d{{2,3}}$")).unwrap(),
                // Motorcycle: 1234АВ77, region optional
                Regex::new(&format!(r"^\d{{4}}[{l}]{{2}}(\d{{2,3}})?$")).unwrap(),
            ],
            neighboring: [
                // Kazakhstan: 123ABC02, full Latin alphabet
                Regex::new(r"^\d{3}[A-Z]{3}\d{2}$").unwrap(),
                // Belarus: 1234AB7
                Regex::new(r"^\d{4}[A-Z]{2}\d$").unwrap(),
            ],
        }
    }

    /// Evaluate the rule chain in strict priority order; first match wins.
    pub fn classify(&self, token: &CanonicalPlate) -> PlateValidation {
        let t = token.as_str();

        // 1. No input yet
        if t.is_empty() {
            return PlateValidation::empty();
        }

        // 2. Phone-number rejection
        if self.phone.iter().any(|re| re.is_match(t)) {
            return PlateValidation::invalid(InvalidReason::PhoneNumber);
        }

        // 3. Strict domestic grammars
        if self.domestic.iter().any(|re| re.is_match(t)) {
            return PlateValidation::valid();
        }

        // 4. Strict neighboring-country grammars
        if self.neighboring.iter().any(|re| re.is_match(t)) {
            return PlateValidation::valid();
        }

        // 5. Relaxed corridor for other CIS formats. A heuristic, not a
        // grammar: at least one Latin letter, at least two digits, length
        // inside [4, 12].
        let has_letter = t.chars().any(|c| c.is_ascii_uppercase());
        let digit_count = t.chars().filter(|c| c.is_ascii_digit()).count();
        let len = token.char_len();
        if has_letter && digit_count >= 2 && (4..=12).contains(&len) {
            return PlateValidation::valid();
        }

        PlateValidation::invalid(InvalidReason::BadFormat)
    }

    /// Convenience for per-keystroke UI feedback: canonicalize and classify
    /// raw operator input in one call.
    pub fn classify_raw(&self, raw: &str) -> PlateValidation {
        self.classify(&CanonicalPlate::parse(raw))
    }
}

impl Default for PlateFormatClassifier {
    fn default() -> Self {
        Self::new()
    }
}
