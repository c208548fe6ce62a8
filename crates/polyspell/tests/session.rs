//! End-to-end session tests against the in-memory backend.
//!
//! Run: cargo test -p polyspell --test session

use std::sync::Arc;

use polyspell::{Attribute, Loader, MemoryClient, Settings, Speller};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn memory_client() -> MemoryClient {
    MemoryClient::new("memory")
        .with_reliability(1.0)
        .with_words("en-US", ["house", "boat", "the", "Paris"])
        .with_words("fr-FR", ["maison", "bateau"])
        .with_words("de-DE", ["Haus", "Boot"])
        .with_words("eo", ["domo"])
}

fn loader() -> Arc<Loader> {
    Arc::new(Loader::new(Arc::new(Settings::new())).with_client(memory_client()))
}

// ---------------------------------------------------------------------------
// Degraded sessions
// ---------------------------------------------------------------------------

#[test]
fn missing_language_fails_open() {
    let mut speller = Speller::new(loader(), "xx-XX");
    assert!(!speller.is_valid());
    for word in ["", "hosue", "anything at all"] {
        assert!(speller.is_correct(word));
        assert!(!speller.is_misspelled(word));
        assert!(speller.suggest(word).is_empty());
    }
    assert!(!speller.add_to_personal("word"));
    assert!(!speller.add_to_session("word"));
    assert!(!speller.store_replacement("teh", "the"));
    assert_eq!(speller.language(), "");
}

#[test]
fn session_without_backends_is_degraded() {
    let loader = Arc::new(Loader::new(Arc::new(Settings::new())));
    let speller = Speller::with_default_language(loader);
    assert!(!speller.is_valid());
    assert!(speller.available_backends().is_empty());
    assert!(speller.available_languages().is_empty());
    assert!(speller.available_dictionaries().is_empty());
}

// ---------------------------------------------------------------------------
// Checking
// ---------------------------------------------------------------------------

#[test]
fn checks_words_in_requested_language() {
    let speller = Speller::new(loader(), "en-US");
    assert!(speller.is_valid());
    assert!(speller.is_correct("house"));
    assert!(speller.is_misspelled("hosue"));
    assert!(!speller.is_correct("maison"));
    assert_eq!(speller.language(), "en-US");
}

#[test]
fn check_and_suggest_agrees_with_separate_calls() {
    let mut speller = Speller::new(loader(), "en-US");
    speller.store_replacement("hosue", "house");
    for word in ["house", "hosue", "Hosue", "paris", "zzz"] {
        let (correct, suggestions) = speller.check_and_suggest(word);
        assert_eq!(correct, speller.is_correct(word), "{word}");
        if correct {
            assert!(suggestions.is_empty(), "{word}");
        } else {
            assert_eq!(suggestions, speller.suggest(word), "{word}");
        }
    }
}

#[test]
fn personal_words_survive_rebuild_session_words_do_not() {
    let mut speller = Speller::new(loader(), "en-US");
    assert!(speller.add_to_personal("rustacean"));
    assert!(speller.add_to_session("borrowck"));
    assert!(speller.is_correct("borrowck"));

    speller.set_language("en-US");
    assert!(speller.is_correct("rustacean"));
    assert!(!speller.is_correct("borrowck"));
}

// ---------------------------------------------------------------------------
// Configuration changes
// ---------------------------------------------------------------------------

#[test]
fn attribute_change_reaches_existing_session() {
    let speller = Speller::new(loader(), "en-US");
    assert!(speller.is_misspelled("NATO"));

    speller.set_attribute(Attribute::CheckUppercase, false);
    assert!(speller.loader().settings().is_modified());
    assert!(speller.is_correct("NATO"));
    assert!(!speller.loader().settings().is_modified());
}

#[test]
fn attribute_change_reaches_every_session() {
    let loader = loader();
    let first = Speller::new(Arc::clone(&loader), "en-US");
    let second = Speller::new(Arc::clone(&loader), "en-US");
    assert!(first.is_correct("houseboat"));
    assert!(second.is_correct("houseboat"));

    first.set_attribute(Attribute::SkipRunTogether, false);
    assert!(first.is_misspelled("houseboat"));
    assert!(second.is_misspelled("houseboat"));
}

#[test]
fn default_language_change_does_not_move_sessions() {
    let speller = Speller::new(loader(), "en-US");
    speller.set_default_language("fr-FR");
    assert!(speller.is_correct("house"));
    assert_eq!(speller.requested_language(), "en-US");
    assert_eq!(speller.language(), "en-US");

    let fresh = Speller::with_default_language(Arc::clone(speller.loader()));
    assert_eq!(fresh.requested_language(), "fr-FR");
    assert!(fresh.is_correct("maison"));
}

#[test]
fn default_client_prefers_named_backend() {
    let settings = Arc::new(Settings::new());
    let loader = Arc::new(
        Loader::new(Arc::clone(&settings))
            .with_client(MemoryClient::new("small").with_words("en-US", ["house"]))
            .with_client(
                MemoryClient::new("large")
                    .with_reliability(2.0)
                    .with_words("en-US", ["house", "boat"]),
            ),
    );
    let speller = Speller::new(loader, "en-US");
    assert!(speller.is_correct("boat"));

    speller.set_default_client("small");
    assert_eq!(speller.default_client(), "small");
    assert!(speller.is_misspelled("boat"));
}

#[test]
fn set_language_switches_dictionary() {
    let mut speller = Speller::new(loader(), "en-US");
    speller.set_language("fr-FR");
    assert!(speller.is_correct("maison"));
    assert!(speller.is_misspelled("house"));
    assert_eq!(speller.language(), "fr-FR");
}

// ---------------------------------------------------------------------------
// Copies
// ---------------------------------------------------------------------------

#[test]
fn copies_have_independent_sessions() {
    let mut original = Speller::new(loader(), "en-US");
    let copy = original.clone();
    original.add_to_session("foobar");
    assert!(original.is_correct("foobar"));
    assert!(copy.is_misspelled("foobar"));
    assert_eq!(copy.requested_language(), original.requested_language());
}

#[test]
fn clone_from_adopts_language() {
    let loader = loader();
    let mut target = Speller::new(Arc::clone(&loader), "en-US");
    let source = Speller::new(loader, "de-DE");
    target.clone_from(&source);
    assert_eq!(target.requested_language(), "de-DE");
    assert!(target.is_correct("Haus"));
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

#[test]
fn lists_backends_and_languages() {
    let speller = Speller::new(loader(), "en-US");
    assert_eq!(speller.available_backends(), vec!["memory"]);
    assert_eq!(
        speller.available_languages(),
        vec!["de-DE", "en-US", "eo", "fr-FR"]
    );
    assert_eq!(
        speller.available_language_names(),
        vec![
            "Deutsch (Deutschland)",
            "English (United States)",
            "Esperanto",
            "français (France)",
        ]
    );
}

#[test]
fn dictionary_display_map() {
    let speller = Speller::new(loader(), "en-US");
    let dicts = speller.available_dictionaries();
    assert_eq!(dicts.len(), 4);
    assert_eq!(dicts["English (United States)"], "en-US");
    assert_eq!(dicts["français (France)"], "fr-FR");
    assert_eq!(dicts["Deutsch (Deutschland)"], "de-DE");
    assert_eq!(dicts["Esperanto"], "eo");
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[test]
fn save_and_restore_round_trip_through_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let writer_loader = Arc::new(
        Loader::new(Arc::new(Settings::with_path(&path))).with_client(memory_client()),
    );
    let writer = Speller::new(writer_loader, "en-US");
    writer.set_default_language("de-DE");
    writer.set_attribute(Attribute::CheckUppercase, false);
    writer.save().unwrap();

    let reader_loader = Arc::new(
        Loader::new(Arc::new(Settings::with_path(&path))).with_client(memory_client()),
    );
    let mut reader = Speller::new(reader_loader, "en-US");
    assert!(reader.is_misspelled("NATO"));
    reader.restore().unwrap();
    assert_eq!(reader.default_language(), "de-DE");
    assert!(!reader.test_attribute(Attribute::CheckUppercase));
    assert!(reader.is_correct("NATO"));
}

#[test]
fn restore_from_missing_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loader = Arc::new(
        Loader::new(Arc::new(Settings::with_path(dir.path().join("absent.json"))))
            .with_client(memory_client()),
    );
    let mut speller = Speller::new(loader, "en-US");
    speller.restore().unwrap();
    assert_eq!(speller.default_language(), "en-US");
    assert!(speller.is_valid());
}

#[test]
fn restore_from_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    let loader =
        Arc::new(Loader::new(Arc::new(Settings::with_path(&path))).with_client(memory_client()));
    let mut speller = Speller::new(loader, "en-US");
    assert!(speller.restore().is_err());
    assert!(speller.is_correct("house"));
}
