// Backend engine plug-in interface

use crate::dictionary::{BackendDictionary, DictionaryOptions};

/// A spelling engine that can build dictionaries for the languages it knows.
///
/// Clients are registered with a [`Loader`](crate::loader::Loader), which
/// picks one per language and asks it for dictionaries.
pub trait Client: Send + Sync {
    /// Unique backend name ("hunspell", "aspell", ...).
    fn name(&self) -> &str;

    /// Preference weight used to order clients serving the same language.
    /// Higher is preferred.
    fn reliability(&self) -> f64 {
        0.0
    }

    /// Language tags this client has dictionaries for.
    fn languages(&self) -> Vec<String>;

    /// Build a dictionary for `language`.
    ///
    /// Returns `None` when the dictionary cannot be loaded.
    fn create_dictionary(
        &self,
        language: &str,
        options: &DictionaryOptions,
    ) -> Option<Box<dyn BackendDictionary>>;
}
