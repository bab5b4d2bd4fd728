//! Language-region codes and their display labels.
//!
//! The table is plain data supplied to the query engine by the caller; this
//! module ships the default set the voice UI offers for dictation and
//! synthesis, kept sorted by code.

/// A language-region code paired with its human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub label: String,
}

impl Language {
    pub fn new(code: &str, label: &str) -> Self {
        Language {
            code: code.to_string(),
            label: label.to_string(),
        }
    }
}

/// Returns the built-in language table, sorted by code.
pub fn default_languages() -> Vec<Language> {
    let mut languages = vec![
        Language::new("ca-ES", "Catalan"),
        Language::new("es-ES", "Spanish (Spain)"),
        Language::new("es-MX", "Spanish (Mexico)"),
        Language::new("en-US", "English (US)"),
        Language::new("en-GB", "English (UK)"),
        Language::new("fr-FR", "French"),
        Language::new("de-DE", "German"),
        Language::new("it-IT", "Italian"),
        Language::new("nl-BE", "Dutch (Belgium)"),
        Language::new("sv-SE", "Swedish"),
        Language::new("nl-NL", "Dutch (Netherlands)"),
    ];
    languages.sort_by(|a, b| a.code.cmp(&b.code));
    languages
}

/// Looks up the label for a code, case-insensitively.
pub fn label_for<'a>(code: &str, languages: &'a [Language]) -> Option<&'a str> {
    languages
        .iter()
        .find(|language| language.code.eq_ignore_ascii_case(code))
        .map(|language| language.label.as_str())
}
