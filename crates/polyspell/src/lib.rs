// polyspell: spell-checking sessions over pluggable backend engines.
//
// A `Loader` holds the registered backend clients and the shared `Settings`;
// each `Speller` is one session bound to a language, rebuilding its
// dictionary whenever the settings change.

pub mod client;
pub mod dictionary;
pub mod loader;
#[cfg(feature = "memory")]
pub mod memory;
pub mod settings;
pub mod speller;

pub use client::Client;
pub use dictionary::{BackendDictionary, DictionaryOptions};
pub use loader::Loader;
#[cfg(feature = "memory")]
pub use memory::{MemoryClient, MemoryDictionary};
pub use polyspell_core::attribute::Attribute;
pub use settings::{Settings, SettingsData, SettingsError};
pub use speller::Speller;
