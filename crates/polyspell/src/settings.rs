// Process-wide speller settings with modification tracking
//
// One `Settings` value is shared (behind an `Arc`) by the loader and every
// speller session. Any change that alters a value sets the modified flag and
// bumps the generation counter; sessions compare both before each operation
// and rebuild their dictionaries when the configuration moved on.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use polyspell_core::attribute::Attribute;
use serde::{Deserialize, Serialize};

use crate::dictionary::DictionaryOptions;

/// Language used when nothing else has been configured.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Error type for persisting and reloading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file could not be read or written.
    #[error("failed to access settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file does not contain valid settings.
    #[error("invalid settings file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Save or restore was requested on settings without a file.
    #[error("settings are not backed by a file")]
    NoBackingFile,
}

/// Serializable snapshot of all configurable values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsData {
    /// Language used by sessions created without an explicit tag.
    pub default_language: String,
    /// Preferred backend name; empty lets the loader choose.
    pub default_client: String,
    pub check_uppercase: bool,
    pub skip_run_together: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            default_client: String::new(),
            check_uppercase: Attribute::CheckUppercase.default_value(),
            skip_run_together: Attribute::SkipRunTogether.default_value(),
        }
    }
}

#[derive(Debug)]
struct State {
    data: SettingsData,
    modified: bool,
    generation: u64,
}

/// Shared configuration store.
///
/// All accessors take `&self`; the state sits behind a mutex so sessions on
/// different threads can share one store.
#[derive(Debug)]
pub struct Settings {
    state: Mutex<State>,
    path: Option<PathBuf>,
}

impl Settings {
    /// In-memory settings with default values.
    pub fn new() -> Self {
        Self::with_data(SettingsData::default())
    }

    /// In-memory settings starting from `data`.
    pub fn with_data(data: SettingsData) -> Self {
        Self {
            state: Mutex::new(State {
                data,
                modified: false,
                generation: 0,
            }),
            path: None,
        }
    }

    /// Settings backed by a JSON file at `path`.
    ///
    /// Starts from defaults; call [`Settings::restore`] to load the file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::new()
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `change`; if it reports a difference, mark the store modified.
    ///
    /// Returns whether anything changed.
    fn update(&self, change: impl FnOnce(&mut SettingsData) -> bool) -> bool {
        let mut state = self.lock();
        let changed = change(&mut state.data);
        if changed {
            state.modified = true;
            state.generation += 1;
        }
        changed
    }

    // =========================================================================
    // Modification tracking
    // =========================================================================

    /// Whether any value changed since the flag was last cleared.
    pub fn is_modified(&self) -> bool {
        self.lock().modified
    }

    /// Clear the modified flag.
    pub fn clear_modified(&self) {
        self.lock().modified = false;
    }

    /// Read and clear the modified flag in one locked step.
    ///
    /// Returns the previous flag value and the current generation.
    pub fn take_modified(&self) -> (bool, u64) {
        let mut state = self.lock();
        let was_modified = std::mem::replace(&mut state.modified, false);
        (was_modified, state.generation)
    }

    /// Counter bumped on every change.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Language for sessions created without an explicit tag.
    pub fn default_language(&self) -> String {
        self.lock().data.default_language.clone()
    }

    /// Set the default language. Existing sessions keep their own language.
    pub fn set_default_language(&self, language: &str) {
        self.update(|data| {
            if data.default_language == language {
                return false;
            }
            data.default_language = language.to_string();
            true
        });
    }

    /// Preferred backend name; empty when the loader picks by reliability.
    pub fn default_client(&self) -> String {
        self.lock().data.default_client.clone()
    }

    /// Set the preferred backend name.
    pub fn set_default_client(&self, client: &str) {
        self.update(|data| {
            if data.default_client == client {
                return false;
            }
            data.default_client = client.to_string();
            true
        });
    }

    /// Current value of `attr`.
    pub fn attribute(&self, attr: Attribute) -> bool {
        self.options().get(attr)
    }

    /// Set `attr` to `value`.
    pub fn set_attribute(&self, attr: Attribute, value: bool) {
        let changed = self.update(|data| {
            let slot = match attr {
                Attribute::CheckUppercase => &mut data.check_uppercase,
                Attribute::SkipRunTogether => &mut data.skip_run_together,
            };
            if *slot == value {
                return false;
            }
            *slot = value;
            true
        });
        if changed {
            tracing::debug!(attribute = %attr, value, "speller attribute changed");
        }
    }

    /// Checking options for a dictionary built now.
    pub fn options(&self) -> DictionaryOptions {
        let state = self.lock();
        DictionaryOptions {
            check_uppercase: state.data.check_uppercase,
            skip_run_together: state.data.skip_run_together,
        }
    }

    /// Copy of all current values.
    pub fn snapshot(&self) -> SettingsData {
        self.lock().data.clone()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the current values to the backing file as JSON.
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = self.path.as_ref().ok_or(SettingsError::NoBackingFile)?;
        let data = self.snapshot();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = serde_json::to_string_pretty(&data).map_err(|source| SettingsError::Json {
            path: path.clone(),
            source,
        })?;
        std::fs::write(path, content).map_err(|source| SettingsError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "saved speller settings");
        Ok(())
    }

    /// Reload values from the backing file.
    ///
    /// A missing file restores the defaults. The store is marked modified
    /// when the reloaded values differ from the current ones.
    pub fn restore(&self) -> Result<(), SettingsError> {
        let path = self.path.as_ref().ok_or(SettingsError::NoBackingFile)?;

        let data = match std::fs::read_to_string(path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| SettingsError::Json {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                SettingsData::default()
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.clone(),
                    source,
                });
            }
        };

        self.update(|current| {
            if *current == data {
                return false;
            }
            *current = data;
            true
        });
        tracing::debug!(path = %path.display(), "restored speller settings");
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
