// Checking attributes stored in the global settings

/// Boolean checking attributes a speller session can toggle.
///
/// The values live in the shared settings store; changing one marks the
/// store modified so every session rebuilds its dictionary lazily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Check words written entirely in uppercase. Default: true.
    CheckUppercase,
    /// Skip run-together words (concatenations of valid words). Default: true.
    SkipRunTogether,
}

impl Attribute {
    /// Stable key used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::CheckUppercase => "checkUppercase",
            Attribute::SkipRunTogether => "skipRunTogether",
        }
    }

    /// Value used when nothing has been configured.
    pub fn default_value(self) -> bool {
        match self {
            Attribute::CheckUppercase | Attribute::SkipRunTogether => true,
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_equality() {
        assert_eq!(Attribute::CheckUppercase, Attribute::CheckUppercase);
        assert_ne!(Attribute::CheckUppercase, Attribute::SkipRunTogether);
    }

    #[test]
    fn names_are_camel_case_keys() {
        assert_eq!(Attribute::CheckUppercase.name(), "checkUppercase");
        assert_eq!(Attribute::SkipRunTogether.name(), "skipRunTogether");
    }

    #[test]
    fn defaults_are_enabled() {
        assert!(Attribute::CheckUppercase.default_value());
        assert!(Attribute::SkipRunTogether.default_value());
    }

    #[test]
    fn display_uses_key() {
        assert_eq!(Attribute::SkipRunTogether.to_string(), "skipRunTogether");
    }
}
