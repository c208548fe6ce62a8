// polyspell-check: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word
// is correctly spelled:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//   S: word    (suggestion, with -s)
//
// Usage:
//   polyspell-check [-d DICT_PATH] [-l LANGUAGE] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH    Directory containing <tag>.txt word lists
//   -l, --language TAG      Language to check (default: configured default)
//   --settings PATH         Settings file (default: ~/.polyspell/settings.json)
//   -s, --suggest           Also print suggestions for misspelled words
//   --no-check-uppercase    Accept words written entirely in uppercase
//   --no-run-together       Reject words made of two known words
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use polyspell::Attribute;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = polyspell_cli::parse_dict_path(&args);
    let (language, args) = polyspell_cli::parse_option(&args, "--language", Some("-l"));
    let (settings_path, args) = polyspell_cli::parse_option(&args, "--settings", None);

    if polyspell_cli::wants_help(&args) {
        println!("polyspell-check: Check spelling of words from stdin.");
        println!();
        println!("Usage: polyspell-check [-d DICT_PATH] [-l LANGUAGE] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH    Directory containing <tag>.txt word lists");
        println!("  -l, --language TAG      Language to check (default: configured default)");
        println!("  --settings PATH         Settings file (default: ~/.polyspell/settings.json)");
        println!("  -s, --suggest           Also print suggestions for misspelled words");
        println!("  --no-check-uppercase    Accept words written entirely in uppercase");
        println!("  --no-run-together       Reject words made of two known words");
        println!("  -h, --help              Print this help");
        return;
    }

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");
    let no_check_uppercase = args.iter().any(|a| a == "--no-check-uppercase");
    let no_run_together = args.iter().any(|a| a == "--no-run-together");

    let settings =
        polyspell_cli::load_settings(polyspell_cli::settings_path(settings_path.as_deref()));
    let loader = polyspell_cli::load_loader(dict_path.as_deref(), settings)
        .unwrap_or_else(|e| polyspell_cli::fatal(&e.to_string()));
    let speller = polyspell_cli::open_speller(loader, language.as_deref());

    // Session-only overrides; the settings file is not written.
    if no_check_uppercase {
        speller.set_attribute(Attribute::CheckUppercase, false);
    }
    if no_run_together {
        speller.set_attribute(Attribute::SkipRunTogether, false);
    }

    if !speller.is_valid() {
        polyspell_cli::fatal(&format!(
            "no word list for language '{}' (available: {})",
            speller.requested_language(),
            speller.available_languages().join(", ")
        ));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let (correct, suggestions) = if show_suggestions {
            speller.check_and_suggest(word)
        } else {
            (speller.is_correct(word), Vec::new())
        };

        if correct {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            for suggestion in suggestions {
                let _ = writeln!(out, "S: {suggestion}");
            }
        }
    }
}
