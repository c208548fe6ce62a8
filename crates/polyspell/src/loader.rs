// Loader: registry of backend clients and dictionary factory
//
// Resolves a language tag (and an optional preferred backend) into a freshly
// built dictionary, and answers enumeration queries about installed backends
// and languages. Sessions share one loader through an `Arc`.

use std::sync::Arc;

use hashbrown::HashMap;
use polyspell_core::locale::{BuiltinLocaleNames, LocaleNames, language_description};

use crate::client::Client;
use crate::dictionary::BackendDictionary;
use crate::settings::Settings;

/// Registry of backend clients bound to one shared settings store.
pub struct Loader {
    settings: Arc<Settings>,
    clients: Vec<Box<dyn Client>>,
    /// language tag -> client indices, most reliable first
    language_clients: HashMap<String, Vec<usize>>,
    locale_names: Box<dyn LocaleNames + Send + Sync>,
}

impl Loader {
    /// Create an empty loader using the built-in locale names.
    pub fn new(settings: Arc<Settings>) -> Self {
        Self {
            settings,
            clients: Vec::new(),
            language_clients: HashMap::new(),
            locale_names: Box::new(BuiltinLocaleNames),
        }
    }

    /// Replace the locale-name source used for display names.
    pub fn with_locale_names(mut self, names: impl LocaleNames + Send + Sync + 'static) -> Self {
        self.locale_names = Box::new(names);
        self
    }

    /// Register `client` and return the loader, for chained construction.
    pub fn with_client(mut self, client: impl Client + 'static) -> Self {
        self.register_client(Box::new(client));
        self
    }

    /// Register a backend client.
    ///
    /// A client whose name is already registered is ignored.
    pub fn register_client(&mut self, client: Box<dyn Client>) {
        if self.clients.iter().any(|c| c.name() == client.name()) {
            tracing::warn!(client = client.name(), "client already registered, ignoring");
            return;
        }

        let index = self.clients.len();
        let reliability = client.reliability();
        for language in client.languages() {
            let entries = self.language_clients.entry(language).or_default();
            // Stable: after every client at least as reliable.
            let pos = entries
                .iter()
                .position(|&i| self.clients[i].reliability() < reliability)
                .unwrap_or(entries.len());
            entries.insert(pos, index);
        }
        tracing::debug!(client = client.name(), reliability, "registered spelling client");
        self.clients.push(client);
    }

    /// The shared settings store.
    pub fn settings(&self) -> &Arc<Settings> {
        &self.settings
    }

    /// Locale-name source used for display names.
    pub fn locale_names(&self) -> &dyn LocaleNames {
        self.locale_names.as_ref()
    }

    // =========================================================================
    // Dictionary construction
    // =========================================================================

    /// Build a dictionary for `language` using the configured default client.
    pub fn create_dictionary(&self, language: &str) -> Option<Box<dyn BackendDictionary>> {
        let client = self.settings.default_client();
        self.create_dictionary_with_client(language, &client)
    }

    /// Build a dictionary for `language`, preferring the client named `client`.
    ///
    /// When `client` is empty, unknown, or does not serve the language, the
    /// most reliable client serving it is used. If the chosen client fails
    /// to build a dictionary the remaining clients are tried in order.
    pub fn create_dictionary_with_client(
        &self,
        language: &str,
        client: &str,
    ) -> Option<Box<dyn BackendDictionary>> {
        let Some(candidates) = self.language_clients.get(language) else {
            tracing::debug!(language, "no spelling client for language");
            return None;
        };

        let mut order = candidates.clone();
        if let Some(pos) = order
            .iter()
            .position(|&i| !client.is_empty() && self.clients[i].name() == client)
        {
            let preferred = order.remove(pos);
            order.insert(0, preferred);
        }

        let options = self.settings.options();
        for index in order {
            let backend = &self.clients[index];
            match backend.create_dictionary(language, &options) {
                Some(dict) => {
                    tracing::debug!(language, client = backend.name(), "created dictionary");
                    return Some(dict);
                }
                None => {
                    tracing::warn!(
                        language,
                        client = backend.name(),
                        "client failed to create dictionary"
                    );
                }
            }
        }
        None
    }

    // =========================================================================
    // Enumeration
    // =========================================================================

    /// Names of all registered clients, in registration order.
    pub fn clients(&self) -> Vec<String> {
        self.clients.iter().map(|c| c.name().to_string()).collect()
    }

    /// All language tags served by at least one client, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.language_clients.keys().cloned().collect();
        languages.sort();
        languages
    }

    /// Human-readable names of [`Loader::languages`], in the same order.
    pub fn language_names(&self) -> Vec<String> {
        self.languages()
            .iter()
            .map(|tag| language_description(tag, self.locale_names()))
            .collect()
    }

    /// Names of the clients serving `language`, most reliable first.
    pub fn clients_for_language(&self, language: &str) -> Vec<String> {
        self.language_clients
            .get(language)
            .map(|indices| {
                indices
                    .iter()
                    .map(|&i| self.clients[i].name().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("clients", &self.clients())
            .field("languages", &self.languages())
            .finish_non_exhaustive()
    }
}
