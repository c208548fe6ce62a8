// In-memory word-set backend
//
// A reference client whose dictionaries are plain word sets. It does no
// morphology and no edit-distance ranking: a word is correct when it (or its
// lowercase form) is known, and suggestions come from stored replacements and
// case variants only. Used by the CLI word lists, tests and benchmarks.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hashbrown::{HashMap, HashSet};
use polyspell_core::case::{CaseType, apply_case, detect_case};

use crate::client::Client;
use crate::dictionary::{BackendDictionary, DictionaryOptions};

/// Shortest part accepted when splitting a run-together word.
const MIN_RUN_TOGETHER_PART: usize = 2;

/// Words shared by every dictionary a client creates for one language.
#[derive(Debug, Default)]
struct WordStore {
    words: HashSet<String>,
    personal: HashSet<String>,
    /// lowercase misspelling -> correction
    replacements: HashMap<String, String>,
}

impl WordStore {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word) || self.personal.contains(word)
    }
}

type SharedStore = Arc<Mutex<WordStore>>;

fn lock(store: &SharedStore) -> MutexGuard<'_, WordStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Backend client serving in-memory word lists.
#[derive(Debug)]
pub struct MemoryClient {
    name: String,
    reliability: f64,
    stores: HashMap<String, SharedStore>,
}

impl MemoryClient {
    /// Create a client with no languages.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reliability: 0.0,
            stores: HashMap::new(),
        }
    }

    /// Set the preference weight reported to the loader.
    pub fn with_reliability(mut self, reliability: f64) -> Self {
        self.reliability = reliability;
        self
    }

    /// Add `words` to the word list of `language`, creating it if needed.
    pub fn with_words<I, S>(mut self, language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_words(language, words);
        self
    }

    /// Add `words` to the word list of `language`, creating it if needed.
    pub fn add_words<I, S>(&mut self, language: &str, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = self.stores.entry(language.to_string()).or_default();
        let mut store = lock(store);
        store.words.extend(
            words
                .into_iter()
                .map(Into::into)
                .filter(|w: &String| !w.is_empty()),
        );
    }

    /// Words added to the personal dictionary of `language`, sorted.
    pub fn personal_words(&self, language: &str) -> Vec<String> {
        let Some(store) = self.stores.get(language) else {
            return Vec::new();
        };
        let mut words: Vec<String> = lock(store).personal.iter().cloned().collect();
        words.sort();
        words
    }
}

impl Client for MemoryClient {
    fn name(&self) -> &str {
        &self.name
    }

    fn reliability(&self) -> f64 {
        self.reliability
    }

    fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.stores.keys().cloned().collect();
        languages.sort();
        languages
    }

    fn create_dictionary(
        &self,
        language: &str,
        options: &DictionaryOptions,
    ) -> Option<Box<dyn BackendDictionary>> {
        let store = self.stores.get(language)?;
        Some(Box::new(MemoryDictionary {
            language: language.to_string(),
            store: Arc::clone(store),
            session: HashSet::new(),
            options: *options,
        }))
    }
}

/// Dictionary created by [`MemoryClient`].
#[derive(Debug)]
pub struct MemoryDictionary {
    language: String,
    store: SharedStore,
    session: HashSet<String>,
    options: DictionaryOptions,
}

impl MemoryDictionary {
    fn is_known(&self, store: &WordStore, word: &str) -> bool {
        if store.contains(word) || self.session.contains(word) {
            return true;
        }
        match detect_case(word) {
            CaseType::FirstUpper | CaseType::AllUpper => {
                let lower = word.to_lowercase();
                store.contains(&lower) || self.session.contains(&lower)
            }
            _ => false,
        }
    }

    /// Whether `word` splits into two known words.
    fn is_run_together(&self, store: &WordStore, word: &str) -> bool {
        let boundaries: Vec<usize> = word.char_indices().map(|(i, _)| i).skip(1).collect();
        boundaries.into_iter().any(|i| {
            let (head, tail) = word.split_at(i);
            head.chars().count() >= MIN_RUN_TOGETHER_PART
                && tail.chars().count() >= MIN_RUN_TOGETHER_PART
                && self.is_known(store, head)
                && self.is_known(store, tail)
        })
    }
}

impl BackendDictionary for MemoryDictionary {
    fn is_correct(&self, word: &str) -> bool {
        let case = detect_case(word);
        if case == CaseType::NoLetters {
            return true;
        }
        if !self.options.check_uppercase && case == CaseType::AllUpper {
            return true;
        }

        let store = lock(&self.store);
        if self.is_known(&store, word) {
            return true;
        }
        self.options.skip_run_together && self.is_run_together(&store, word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        let store = lock(&self.store);
        let lower = word.to_lowercase();
        let mut suggestions = Vec::new();

        if let Some(good) = store.replacements.get(&lower) {
            let suggestion = match detect_case(word) {
                case @ (CaseType::FirstUpper | CaseType::AllUpper) => apply_case(good, case),
                _ => good.clone(),
            };
            suggestions.push(suggestion);
        }

        let mut variants: Vec<&String> = store
            .words
            .iter()
            .chain(store.personal.iter())
            .chain(self.session.iter())
            .filter(|known| known.as_str() != word && known.to_lowercase() == lower)
            .collect();
        variants.sort();
        for variant in variants {
            if !suggestions.contains(variant) {
                suggestions.push(variant.clone());
            }
        }

        suggestions
    }

    fn store_replacement(&mut self, bad: &str, good: &str) -> bool {
        if bad.is_empty() || good.is_empty() {
            return false;
        }
        lock(&self.store)
            .replacements
            .insert(bad.to_lowercase(), good.to_string());
        true
    }

    fn add_to_personal(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        lock(&self.store).personal.insert(word.to_string());
        true
    }

    fn add_to_session(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.session.insert(word.to_string());
        true
    }

    fn language(&self) -> &str {
        &self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MemoryClient {
        MemoryClient::new("memory")
            .with_words("en-US", ["house", "boat", "Paris", "the", "a"])
            .with_words("fr-FR", ["maison"])
    }

    fn dictionary(options: DictionaryOptions) -> Box<dyn BackendDictionary> {
        client().create_dictionary("en-US", &options).unwrap()
    }

    #[test]
    fn client_reports_languages() {
        let client = client().with_reliability(3.0);
        assert_eq!(client.name(), "memory");
        assert_eq!(client.reliability(), 3.0);
        assert_eq!(client.languages(), vec!["en-US", "fr-FR"]);
        assert!(
            client
                .create_dictionary("de-DE", &DictionaryOptions::default())
                .is_none()
        );
    }

    #[test]
    fn known_words_and_case_variants() {
        let dict = dictionary(DictionaryOptions::default());
        assert!(dict.is_correct("house"));
        assert!(dict.is_correct("House"));
        assert!(dict.is_correct("HOUSE"));
        assert!(dict.is_correct("Paris"));
        assert!(!dict.is_correct("paris"));
        assert!(!dict.is_correct("hoUse"));
        assert!(!dict.is_correct("hosue"));
        assert_eq!(dict.language(), "en-US");
    }

    #[test]
    fn words_without_letters_are_correct() {
        let dict = dictionary(DictionaryOptions::default());
        assert!(dict.is_correct("1984"));
        assert!(dict.is_correct(""));
    }

    #[test]
    fn uppercase_words_skipped_when_not_checked() {
        let checked = dictionary(DictionaryOptions::default());
        assert!(!checked.is_correct("NATO"));

        let unchecked = dictionary(DictionaryOptions {
            check_uppercase: false,
            ..DictionaryOptions::default()
        });
        assert!(unchecked.is_correct("NATO"));
        assert!(!unchecked.is_correct("Nato"));
    }

    #[test]
    fn run_together_words() {
        let skipping = dictionary(DictionaryOptions::default());
        assert!(skipping.is_correct("houseboat"));
        // Parts shorter than two characters do not count.
        assert!(!skipping.is_correct("ahouse"));

        let strict = dictionary(DictionaryOptions {
            skip_run_together: false,
            ..DictionaryOptions::default()
        });
        assert!(!strict.is_correct("houseboat"));
    }

    #[test]
    fn suggestions_from_replacements_and_case() {
        let mut dict = dictionary(DictionaryOptions::default());
        assert!(dict.suggest("teh").is_empty());
        assert_eq!(dict.suggest("paris"), vec!["Paris"]);

        assert!(dict.store_replacement("teh", "the"));
        assert_eq!(dict.suggest("teh"), vec!["the"]);
        assert_eq!(dict.suggest("Teh"), vec!["The"]);
        assert_eq!(dict.suggest("TEH"), vec!["THE"]);
    }

    #[test]
    fn check_and_suggest_matches_separate_calls() {
        let mut dict = dictionary(DictionaryOptions::default());
        dict.store_replacement("hosue", "house");
        for word in ["house", "hosue", "paris", "xyz"] {
            let (correct, suggestions) = dict.check_and_suggest(word);
            assert_eq!(correct, dict.is_correct(word));
            if !correct {
                assert_eq!(suggestions, dict.suggest(word));
            }
        }
    }

    #[test]
    fn personal_words_are_shared_between_dictionaries() {
        let client = client();
        let options = DictionaryOptions::default();
        let mut first = client.create_dictionary("en-US", &options).unwrap();
        let second = client.create_dictionary("en-US", &options).unwrap();

        assert!(first.add_to_personal("rustacean"));
        assert!(second.is_correct("rustacean"));
        assert_eq!(client.personal_words("en-US"), vec!["rustacean"]);
        assert!(client.personal_words("sv-SE").is_empty());
    }

    #[test]
    fn session_words_stay_in_one_dictionary() {
        let client = client();
        let options = DictionaryOptions::default();
        let mut first = client.create_dictionary("en-US", &options).unwrap();
        let second = client.create_dictionary("en-US", &options).unwrap();

        assert!(first.add_to_session("foobar"));
        assert!(first.is_correct("foobar"));
        assert!(!second.is_correct("foobar"));
    }

    #[test]
    fn empty_words_are_rejected() {
        let mut dict = dictionary(DictionaryOptions::default());
        assert!(!dict.add_to_personal(""));
        assert!(!dict.add_to_session(""));
        assert!(!dict.store_replacement("", "the"));
        assert!(!dict.store_replacement("teh", ""));
    }
}
