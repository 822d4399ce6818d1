//! Stored word/translations pairs and their on-disk text form.

/// Separator between translations in the stored `translations` column.
pub const SEPARATOR: &str = ", ";

/// One learned word with its translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    pub dictionary: String,
    pub word: String,
    pub translations: Vec<String>,
}

impl TranslationRecord {
    pub fn new(dictionary: &str, word: &str, translations: Vec<String>) -> Self {
        Self {
            dictionary: dictionary.to_string(),
            word: word.to_string(),
            translations,
        }
    }
}

/// Bring translations into the form the store can hold.
///
/// Entries containing [`SEPARATOR`] are split, parts are trimmed, blanks are
/// dropped, and only the first occurrence of each translation is kept, in
/// order.
pub fn canonical_translations<I, S>(translations: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for entry in translations {
        for part in entry.as_ref().split(SEPARATOR) {
            let part = part.trim();
            if !part.is_empty() && !out.iter().any(|t| t == part) {
                out.push(part.to_string());
            }
        }
    }
    out
}

/// Join translations into the single stored column value.
pub fn join_translations(translations: &[String]) -> String {
    translations.join(SEPARATOR)
}

/// Split a stored column value back into translations.
///
/// An empty column yields an empty list rather than `[""]`.
pub fn split_translations(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }
    stored.split(SEPARATOR).map(str::to_string).collect()
}
