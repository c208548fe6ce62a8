// Case type detection and conversion

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "house".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "House".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "hoUse".
    Complex,
    /// All letters are uppercase: "HOUSE".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Only letters count: digits, punctuation and caseless characters are
/// skipped, so `"'Tis"` is `FirstUpper`.
pub fn detect_case(word: &str) -> CaseType {
    let mut letters = word.chars().filter(|c| c.is_uppercase() || c.is_lowercase());
    let Some(first) = letters.next() else {
        return CaseType::NoLetters;
    };
    let rest: Vec<char> = letters.collect();

    if first.is_uppercase() && rest.iter().all(|c| c.is_uppercase()) {
        CaseType::AllUpper
    } else if rest.iter().all(|c| c.is_lowercase()) {
        if first.is_uppercase() {
            CaseType::FirstUpper
        } else {
            CaseType::AllLower
        }
    } else {
        CaseType::Complex
    }
}

/// Return `word` rewritten to follow `case_type`.
///
/// - `NoLetters` / `Complex` -- returned unchanged.
/// - `AllLower` / `AllUpper` -- every letter converted.
/// - `FirstUpper` -- first character uppercased, rest lowercased.
pub fn apply_case(word: &str, case_type: CaseType) -> String {
    match case_type {
        CaseType::NoLetters | CaseType::Complex => word.to_string(),
        CaseType::AllLower => word.to_lowercase(),
        CaseType::AllUpper => word.to_uppercase(),
        CaseType::FirstUpper => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.as_str().to_lowercase().chars())
                    .collect(),
                None => String::new(),
            }
        }
    }
}
