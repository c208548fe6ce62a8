// Language tag helpers
//
// Tags are BCP 47-like strings such as "en-US" or "eo". Only the first two
// subtags are interpreted: a language code and an optional region.

/// Return the language code of a tag: everything before the first `-`.
///
/// A tag without a `-` is returned whole.
pub fn base_code(tag: &str) -> &str {
    match tag.find('-') {
        Some(pos) => &tag[..pos],
        None => tag,
    }
}

/// Return the region subtag of a tag, if the second subtag looks like one.
///
/// Regions are two ASCII letters ("US") or three digits ("419").
pub fn region(tag: &str) -> Option<&str> {
    let rest = tag.split('-').nth(1)?;
    let is_alpha_region = rest.len() == 2 && rest.chars().all(|c| c.is_ascii_alphabetic());
    let is_numeric_region = rest.len() == 3 && rest.chars().all(|c| c.is_ascii_digit());
    if is_alpha_region || is_numeric_region {
        Some(rest)
    } else {
        None
    }
}

/// Normalize a POSIX-style locale name into a tag.
///
/// Drops the encoding and modifier parts, turns `_` into `-`, lowercases the
/// language and uppercases the region: `en_us.UTF-8` -> `en-US`.
/// The POSIX pseudo-locales `C` and `POSIX` normalize to an empty string.
pub fn normalize_tag(name: &str) -> String {
    let name = name.trim();
    let name = name.split(['.', '@']).next().unwrap_or_default();
    if name.is_empty() || name == "C" || name == "POSIX" {
        return String::new();
    }

    let mut parts = name.split(['_', '-']);
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    match parts.next() {
        Some(region) if !region.is_empty() => {
            format!("{language}-{}", region.to_ascii_uppercase())
        }
        _ => language,
    }
}
