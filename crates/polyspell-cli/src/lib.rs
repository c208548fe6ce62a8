// polyspell-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use polyspell::{Loader, MemoryClient, Settings, Speller};
use polyspell_core::tag::normalize_tag;

/// Word-list directory name under the per-user and system roots.
const DICT_SUBDIR: &str = "dicts";

/// File extension of word lists; the file stem is the language tag.
const WORDLIST_EXT: &str = "txt";

/// Backend name under which word lists are registered.
pub const CLIENT_NAME: &str = "wordlist";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(
        "could not find any *.txt word lists in the search paths:\n{}",
        list_paths(.searched)
    )]
    NoWordLists { searched: Vec<PathBuf> },
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Word lists
// ============================================================================

/// Parse word-list text: one word per line, blank lines and `#` comments
/// skipped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Word-list files directly inside `dir`, as `(tag, path)` sorted by tag.
fn word_list_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, LoadError> {
    let io_err = |source: std::io::Error| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != WORDLIST_EXT) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            files.push((stem.to_string(), path));
        }
    }
    files.sort();
    Ok(files)
}

/// Load every word list in `dir` into a new client.
///
/// Returns `Ok(None)` when the directory holds no word lists.
pub fn load_client_from_dir(dir: &Path) -> Result<Option<MemoryClient>, LoadError> {
    let files = word_list_files(dir)?;
    if files.is_empty() {
        return Ok(None);
    }

    let mut client = MemoryClient::new(CLIENT_NAME);
    for (tag, path) in files {
        let text = std::fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        let words = parse_word_list(&text);
        tracing::debug!(language = %tag, words = words.len(), path = %path.display(), "loaded word list");
        client.add_words(&tag, words);
    }
    Ok(Some(client))
}

/// Search for word lists and build a client from the first directory that
/// has any.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `POLYSPELL_DICT_PATH` environment variable
/// 3. `~/.polyspell/dicts`
/// 4. System paths
/// 5. Current working directory
pub fn load_client(dict_path: Option<&str>) -> Result<MemoryClient, LoadError> {
    let search_paths = build_search_paths(dict_path);

    for dir in &search_paths {
        if !dir.is_dir() {
            continue;
        }
        if let Some(client) = load_client_from_dir(dir)? {
            return Ok(client);
        }
    }

    Err(LoadError::NoWordLists {
        searched: search_paths,
    })
}

/// Build the list of directories to search for word lists.
pub fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var("POLYSPELL_DICT_PATH") {
        paths.push(PathBuf::from(&env_path));
        paths.push(PathBuf::from(&env_path).join(DICT_SUBDIR));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".polyspell").join(DICT_SUBDIR));
    }

    paths.push(PathBuf::from("/etc/polyspell").join(DICT_SUBDIR));
    paths.push(PathBuf::from("/usr/share/polyspell").join(DICT_SUBDIR));

    // Fallback for local development
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

// ============================================================================
// Settings and sessions
// ============================================================================

/// Settings file: the `--settings` argument, else `~/.polyspell/settings.json`.
pub fn settings_path(explicit: Option<&str>) -> Option<PathBuf> {
    match explicit {
        Some(p) => Some(PathBuf::from(p)),
        None => home_dir().map(|home| home.join(".polyspell").join("settings.json")),
    }
}

/// Language of the user's locale (`LC_ALL`, `LC_MESSAGES`, `LANG`), as a tag.
pub fn system_language() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|value| normalize_tag(&value))
        .find(|tag| !tag.is_empty())
}

/// Load settings from `path`, falling back to defaults on any error.
///
/// Without a saved file the default language follows the system locale.
pub fn load_settings(path: Option<PathBuf>) -> Settings {
    let Some(path) = path else {
        return Settings::new();
    };
    let exists = path.is_file();
    let settings = Settings::with_path(path);
    if exists {
        if let Err(e) = settings.restore() {
            eprintln!("warning: {e}; using default settings");
        }
    } else if let Some(language) = system_language() {
        settings.set_default_language(&language);
    }
    settings.clear_modified();
    settings
}

/// Build a loader over the word lists found for `dict_path`.
pub fn load_loader(dict_path: Option<&str>, settings: Settings) -> Result<Arc<Loader>, LoadError> {
    let client = load_client(dict_path)?;
    Ok(Arc::new(Loader::new(Arc::new(settings)).with_client(client)))
}

/// Open a session for `language`, or the configured default when `None`.
pub fn open_speller(loader: Arc<Loader>, language: Option<&str>) -> Speller {
    Speller::new(loader, language.unwrap_or_default())
}

// ============================================================================
// Argument parsing
// ============================================================================

/// Extract `--long=VALUE`, `--long VALUE` or `-s VALUE` from `args`.
///
/// Returns `(value, remaining_args)`. A missing value is fatal.
pub fn parse_option(
    args: &[String],
    long: &str,
    short: Option<&str>,
) -> (Option<String>, Vec<String>) {
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || short.is_some_and(|s| arg == s) {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_option(args, "--dict-path", Some("-d"))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
