// Backend dictionary capability consumed by the speller facade

use polyspell_core::attribute::Attribute;

/// Checking options handed to a backend when a dictionary is built.
///
/// Snapshotted from the shared settings at construction time; a dictionary
/// never observes later changes; the speller rebuilds it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryOptions {
    /// Check words written entirely in uppercase.
    pub check_uppercase: bool,
    /// Accept words made of several valid words run together.
    pub skip_run_together: bool,
}

impl DictionaryOptions {
    /// Read the value of a single attribute.
    pub fn get(&self, attr: Attribute) -> bool {
        match attr {
            Attribute::CheckUppercase => self.check_uppercase,
            Attribute::SkipRunTogether => self.skip_run_together,
        }
    }
}

impl Default for DictionaryOptions {
    fn default() -> Self {
        Self {
            check_uppercase: Attribute::CheckUppercase.default_value(),
            skip_run_together: Attribute::SkipRunTogether.default_value(),
        }
    }
}

/// A loaded dictionary of one backend engine for one language.
///
/// Implemented once per engine. The facade owns each instance exclusively
/// and only talks to the engine through this trait.
pub trait BackendDictionary: Send {
    /// Whether `word` is correctly spelled.
    fn is_correct(&self, word: &str) -> bool;

    /// Whether `word` is misspelled.
    fn is_misspelled(&self, word: &str) -> bool {
        !self.is_correct(word)
    }

    /// Ordered correction candidates for `word`, best first.
    fn suggest(&self, word: &str) -> Vec<String>;

    /// Check `word` and, when it is incorrect, suggest replacements in one call.
    ///
    /// The suggestion list is empty for correct words.
    fn check_and_suggest(&self, word: &str) -> (bool, Vec<String>) {
        if self.is_correct(word) {
            (true, Vec::new())
        } else {
            (false, self.suggest(word))
        }
    }

    /// Record that `bad` was corrected to `good`.
    fn store_replacement(&mut self, bad: &str, good: &str) -> bool;

    /// Add `word` to the user's personal dictionary.
    fn add_to_personal(&mut self, word: &str) -> bool;

    /// Accept `word` for the lifetime of this dictionary only.
    fn add_to_session(&mut self, word: &str) -> bool;

    /// Language tag this dictionary actually checks.
    fn language(&self) -> &str;
}
