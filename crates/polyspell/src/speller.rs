// Speller: client-facing spell-checking session.
//
// Owns a language selection and a lazily built backend dictionary, and
// exposes a stable checking / suggestion / personal-dictionary API on top of
// whatever engine the loader picks.
//
// Design notes:
// - The dictionary is rebuilt whenever the shared settings changed since it
//   was built. Every operation runs that check first (the validity gate), so
//   a backend or attribute switch made elsewhere reaches existing sessions
//   without re-creating them.
// - When no dictionary can be built the session stays usable: checks fail
//   open (words are treated as correct), suggestions are empty and mutations
//   report failure.
// - The dictionary sits in a `RefCell` so the read-only checks can take
//   `&self` while still rebuilding on demand.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::Arc;

use polyspell_core::attribute::Attribute;
use polyspell_core::locale::dictionary_description;

use crate::dictionary::BackendDictionary;
use crate::loader::Loader;
use crate::settings::SettingsError;

/// Dictionary slot plus the settings generation it was built against.
struct DictState {
    dict: Option<Box<dyn BackendDictionary>>,
    generation: u64,
}

/// A spell-checking session for one language.
pub struct Speller {
    loader: Arc<Loader>,
    /// Explicitly requested language tag; rebuilds never change it.
    language: String,
    state: RefCell<DictState>,
}

impl Speller {
    /// Create a session for `language`.
    ///
    /// An empty tag selects the configured default language. Construction
    /// never fails: without a matching dictionary the session runs in
    /// degraded mode until the configuration changes.
    pub fn new(loader: Arc<Loader>, language: &str) -> Self {
        let language = if language.is_empty() {
            loader.settings().default_language()
        } else {
            language.to_string()
        };
        let state = Self::build(&loader, &language);
        Self {
            loader,
            language,
            state: RefCell::new(state),
        }
    }

    /// Create a session for the configured default language.
    pub fn with_default_language(loader: Arc<Loader>) -> Self {
        Self::new(loader, "")
    }

    fn build(loader: &Loader, language: &str) -> DictState {
        // Read the generation first so a change racing with the build is
        // seen by the next gate.
        let generation = loader.settings().generation();
        let dict = loader.create_dictionary(language);
        if dict.is_none() {
            tracing::debug!(language, "no dictionary available, speller is degraded");
        }
        DictState { dict, generation }
    }

    /// Drop the current dictionary and build a new one unconditionally.
    ///
    /// The new dictionary already reflects any pending change, so the flag
    /// is consumed here; other sessions still see the generation move.
    fn recreate_dict(&mut self) {
        // Release the old backend before loading its replacement.
        self.state.get_mut().dict = None;
        self.loader.settings().take_modified();
        let state = Self::build(&self.loader, &self.language);
        *self.state.get_mut() = state;
    }

    /// The validity gate: rebuild if the settings changed, then report
    /// whether a dictionary is present.
    fn ensure_valid(&self) -> bool {
        let settings = self.loader.settings();
        let (was_modified, generation) = settings.take_modified();
        let mut state = self.state.borrow_mut();
        if was_modified || generation != state.generation {
            tracing::debug!(language = %self.language, "settings changed, rebuilding dictionary");
            state.dict = None;
            *state = Self::build(&self.loader, &self.language);
        }
        state.dict.is_some()
    }

    fn with_dict<R>(&self, default: R, f: impl FnOnce(&dyn BackendDictionary) -> R) -> R {
        if !self.ensure_valid() {
            return default;
        }
        match self.state.borrow().dict.as_deref() {
            Some(dict) => f(dict),
            None => default,
        }
    }

    fn with_dict_mut<R>(&mut self, default: R, f: impl FnOnce(&mut dyn BackendDictionary) -> R) -> R {
        if !self.ensure_valid() {
            return default;
        }
        match self.state.get_mut().dict.as_deref_mut() {
            Some(dict) => f(dict),
            None => default,
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Replace this session's language with `other`'s and rebuild.
    ///
    /// The session also adopts `other`'s loader.
    pub fn assign(&mut self, other: &Speller) {
        self.loader = Arc::clone(&other.loader);
        self.language = other.language.clone();
        self.recreate_dict();
    }

    /// Whether a dictionary is loaded, after applying pending configuration
    /// changes.
    pub fn is_valid(&self) -> bool {
        self.ensure_valid()
    }

    /// The language tag this session was asked to check.
    pub fn requested_language(&self) -> &str {
        &self.language
    }

    /// The loader this session builds dictionaries with.
    pub fn loader(&self) -> &Arc<Loader> {
        &self.loader
    }

    // =========================================================================
    // Checking and suggestions
    // =========================================================================

    /// Whether `word` is correctly spelled. `true` without a dictionary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.with_dict(true, |dict| dict.is_correct(word))
    }

    /// Whether `word` is misspelled. `false` without a dictionary.
    pub fn is_misspelled(&self, word: &str) -> bool {
        self.with_dict(false, |dict| dict.is_misspelled(word))
    }

    /// Correction candidates for `word`, best first.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        self.with_dict(Vec::new(), |dict| dict.suggest(word))
    }

    /// Check `word` and suggest replacements with a single backend lookup.
    ///
    /// Returns `(true, [])` without a dictionary.
    pub fn check_and_suggest(&self, word: &str) -> (bool, Vec<String>) {
        self.with_dict((true, Vec::new()), |dict| dict.check_and_suggest(word))
    }

    /// Record that `bad` should be corrected to `good`.
    pub fn store_replacement(&mut self, bad: &str, good: &str) -> bool {
        self.with_dict_mut(false, |dict| dict.store_replacement(bad, good))
    }

    /// Add `word` to the user's personal dictionary.
    pub fn add_to_personal(&mut self, word: &str) -> bool {
        self.with_dict_mut(false, |dict| dict.add_to_personal(word))
    }

    /// Accept `word` until this session's dictionary is rebuilt or dropped.
    pub fn add_to_session(&mut self, word: &str) -> bool {
        self.with_dict_mut(false, |dict| dict.add_to_session(word))
    }

    // =========================================================================
    // Language and backend metadata
    // =========================================================================

    /// Language reported by the loaded dictionary; empty without one.
    ///
    /// May differ from [`Speller::requested_language`] when the backend
    /// serves a related language.
    pub fn language(&self) -> String {
        self.with_dict(String::new(), |dict| dict.language().to_string())
    }

    /// Switch to `language` and rebuild the dictionary immediately.
    pub fn set_language(&mut self, language: &str) {
        self.language = language.to_string();
        self.recreate_dict();
    }

    /// Names of all registered backends.
    pub fn available_backends(&self) -> Vec<String> {
        self.loader.clients()
    }

    /// All language tags with at least one dictionary.
    pub fn available_languages(&self) -> Vec<String> {
        self.loader.languages()
    }

    /// Human-readable names of [`Speller::available_languages`].
    pub fn available_language_names(&self) -> Vec<String> {
        self.loader.language_names()
    }

    /// Map from "Language (Country)" descriptions to language tags.
    ///
    /// Descriptions are derived from the language code alone, so two tags
    /// of one language collide; the tag listed last wins.
    pub fn available_dictionaries(&self) -> BTreeMap<String, String> {
        let names = self.loader.locale_names();
        let mut dictionaries = BTreeMap::new();
        for tag in self.loader.languages() {
            dictionaries.insert(dictionary_description(&tag, names), tag);
        }
        dictionaries
    }

    // =========================================================================
    // Global configuration
    // =========================================================================

    /// Set the language used by sessions created without a tag.
    pub fn set_default_language(&self, language: &str) {
        self.loader.settings().set_default_language(language);
    }

    /// The configured default language.
    pub fn default_language(&self) -> String {
        self.loader.settings().default_language()
    }

    /// Set the preferred backend name.
    pub fn set_default_client(&self, client: &str) {
        self.loader.settings().set_default_client(client);
    }

    /// The preferred backend name; empty when none is configured.
    pub fn default_client(&self) -> String {
        self.loader.settings().default_client()
    }

    /// Set a checking attribute for every session sharing these settings.
    pub fn set_attribute(&self, attr: Attribute, value: bool) {
        self.loader.settings().set_attribute(attr, value);
    }

    /// Current value of a checking attribute.
    pub fn test_attribute(&self, attr: Attribute) -> bool {
        self.loader.settings().attribute(attr)
    }

    /// Persist the shared settings.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.loader.settings().save()
    }

    /// Reload the shared settings and rebuild this session's dictionary.
    pub fn restore(&mut self) -> Result<(), SettingsError> {
        self.loader.settings().restore()?;
        self.recreate_dict();
        Ok(())
    }
}

impl Clone for Speller {
    /// A new session for the same language with its own dictionary.
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.loader), &self.language)
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl std::fmt::Debug for Speller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let loaded = self
            .state
            .try_borrow()
            .map(|state| state.dict.is_some())
            .unwrap_or(false);
        f.debug_struct("Speller")
            .field("language", &self.language)
            .field("loaded", &loaded)
            .finish_non_exhaustive()
    }
}
