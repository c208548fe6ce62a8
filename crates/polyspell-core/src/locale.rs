// Locale display names for dictionary listings
//
// Maps language tags to human-readable "Language (Country)" descriptions
// written in the language itself, the way a settings dialog lists installed
// dictionaries.

use crate::tag::{base_code, region};

/// Source of native language and country names.
pub trait LocaleNames {
    /// Native name of the language identified by `code` ("Deutsch" for "de").
    fn native_language_name(&self, code: &str) -> Option<String>;

    /// Native name of the country for `tag`.
    ///
    /// Uses the explicit region of the tag when present, otherwise the
    /// default territory of the language ("fr" -> "France"). Returns `None`
    /// for languages without a territory, such as Esperanto.
    fn native_country_name(&self, tag: &str) -> Option<String>;
}

/// Built-in table of native names for common spell-checking languages.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocaleNames;

/// (language code, native language name, default region)
const LANGUAGES: &[(&str, &str, Option<&str>)] = &[
    ("af", "Afrikaans", Some("ZA")),
    ("ca", "català", Some("ES")),
    ("cs", "čeština", Some("CZ")),
    ("da", "dansk", Some("DK")),
    ("de", "Deutsch", Some("DE")),
    ("el", "Ελληνικά", Some("GR")),
    ("en", "English", Some("US")),
    ("eo", "Esperanto", None),
    ("es", "español", Some("ES")),
    ("fi", "suomi", Some("FI")),
    ("fr", "français", Some("FR")),
    ("hu", "magyar", Some("HU")),
    ("it", "italiano", Some("IT")),
    ("la", "latina", None),
    ("nb", "norsk bokmål", Some("NO")),
    ("nl", "Nederlands", Some("NL")),
    ("nn", "norsk nynorsk", Some("NO")),
    ("pl", "polski", Some("PL")),
    ("pt", "português", Some("BR")),
    ("ru", "русский", Some("RU")),
    ("sk", "slovenčina", Some("SK")),
    ("sv", "svenska", Some("SE")),
    ("tr", "Türkçe", Some("TR")),
    ("uk", "українська", Some("UA")),
];

/// (language code, region, native country name)
const COUNTRIES: &[(&str, &str, &str)] = &[
    ("af", "ZA", "Suid-Afrika"),
    ("ca", "ES", "Espanya"),
    ("cs", "CZ", "Česko"),
    ("da", "DK", "Danmark"),
    ("de", "AT", "Österreich"),
    ("de", "CH", "Schweiz"),
    ("de", "DE", "Deutschland"),
    ("el", "GR", "Ελλάδα"),
    ("en", "AU", "Australia"),
    ("en", "CA", "Canada"),
    ("en", "GB", "United Kingdom"),
    ("en", "IE", "Ireland"),
    ("en", "NZ", "New Zealand"),
    ("en", "US", "United States"),
    ("en", "ZA", "South Africa"),
    ("es", "AR", "Argentina"),
    ("es", "ES", "España"),
    ("es", "MX", "México"),
    ("fi", "FI", "Suomi"),
    ("fr", "BE", "Belgique"),
    ("fr", "CA", "Canada"),
    ("fr", "CH", "Suisse"),
    ("fr", "FR", "France"),
    ("hu", "HU", "Magyarország"),
    ("it", "CH", "Svizzera"),
    ("it", "IT", "Italia"),
    ("nb", "NO", "Norge"),
    ("nl", "BE", "België"),
    ("nl", "NL", "Nederland"),
    ("nn", "NO", "Noreg"),
    ("pl", "PL", "Polska"),
    ("pt", "BR", "Brasil"),
    ("pt", "PT", "Portugal"),
    ("ru", "RU", "Россия"),
    ("sk", "SK", "Slovensko"),
    ("sv", "FI", "Finland"),
    ("sv", "SE", "Sverige"),
    ("tr", "TR", "Türkiye"),
    ("uk", "UA", "Україна"),
];

impl BuiltinLocaleNames {
    fn language_entry(code: &str) -> Option<&'static (&'static str, &'static str, Option<&'static str>)> {
        let code = code.to_ascii_lowercase();
        LANGUAGES.iter().find(|(c, _, _)| *c == code)
    }
}

impl LocaleNames for BuiltinLocaleNames {
    fn native_language_name(&self, code: &str) -> Option<String> {
        Self::language_entry(code).map(|(_, name, _)| name.to_string())
    }

    fn native_country_name(&self, tag: &str) -> Option<String> {
        let (code, _, default_region) = Self::language_entry(base_code(tag))?;
        let wanted = match region(tag) {
            Some(explicit) => explicit.to_ascii_uppercase(),
            None => default_region.map(str::to_string)?,
        };
        COUNTRIES
            .iter()
            .find(|(c, r, _)| c == code && *r == wanted)
            .map(|(_, _, name)| name.to_string())
    }
}

/// Combine a language name and an optional country name.
fn describe(language: String, country: Option<String>) -> String {
    match country {
        Some(country) if !country.is_empty() => format!("{language} ({country})"),
        _ => language,
    }
}

/// Description used as the key of the available-dictionaries map.
///
/// Only the language code (the part before the first `-`) is resolved, so
/// "en-GB" and "en-US" both describe as the default territory of English.
/// Unknown codes describe as the code itself.
pub fn dictionary_description(tag: &str, names: &dyn LocaleNames) -> String {
    let code = base_code(tag);
    match names.native_language_name(code) {
        Some(language) => describe(language, names.native_country_name(code)),
        None => code.to_string(),
    }
}

/// Description of a full tag, honoring its explicit region.
///
/// "en-GB" describes as "English (United Kingdom)". Unknown languages
/// describe as the tag itself.
pub fn language_description(tag: &str, names: &dyn LocaleNames) -> String {
    match names.native_language_name(base_code(tag)) {
        Some(language) => describe(language, names.native_country_name(tag)),
        None => tag.to_string(),
    }
}
