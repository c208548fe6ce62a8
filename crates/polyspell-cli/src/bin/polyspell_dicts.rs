// polyspell-dicts: List installed backends, languages and dictionaries.
//
// Usage:
//   polyspell-dicts [-d DICT_PATH] [--settings PATH]

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = polyspell_cli::parse_dict_path(&args);
    let (settings_path, args) = polyspell_cli::parse_option(&args, "--settings", None);

    if polyspell_cli::wants_help(&args) {
        println!("polyspell-dicts: List installed backends, languages and dictionaries.");
        println!();
        println!("Usage: polyspell-dicts [-d DICT_PATH] [--settings PATH]");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH    Directory containing <tag>.txt word lists");
        println!("  --settings PATH         Settings file (default: ~/.polyspell/settings.json)");
        println!("  -h, --help              Print this help");
        return;
    }

    let settings =
        polyspell_cli::load_settings(polyspell_cli::settings_path(settings_path.as_deref()));
    let loader = polyspell_cli::load_loader(dict_path.as_deref(), settings)
        .unwrap_or_else(|e| polyspell_cli::fatal(&e.to_string()));
    let speller = polyspell_cli::open_speller(loader, None);

    println!("Default language: {}", speller.default_language());
    let client = speller.default_client();
    println!(
        "Default backend: {}",
        if client.is_empty() { "(most reliable)" } else { client.as_str() }
    );

    println!();
    println!("Backends:");
    for backend in speller.available_backends() {
        println!("  {backend}");
    }

    println!();
    println!("Languages:");
    let languages = speller.available_languages();
    let names = speller.available_language_names();
    for (tag, name) in languages.iter().zip(&names) {
        println!("  {tag:<10} {name}");
    }

    println!();
    println!("Dictionaries:");
    for (description, tag) in speller.available_dictionaries() {
        println!("  {description} -> {tag}");
    }
}
