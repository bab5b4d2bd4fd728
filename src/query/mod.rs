//! Stateless query functions over a snapshot of the collection.
//!
//! Sorting operates on a copy and never mutates the source. The comparison
//! direction is reversed for descending order, not the result sequence, so
//! with a stable sort ties keep their original relative order either way.

use crate::entry::Entry;
use crate::errors::AppError;
use crate::lang::{label_for, Language};
use std::cmp::Ordering;
use std::str::FromStr;

/// Selects which derived key [`sort_entries`] orders by.
///
/// Parsed from user input with [`FromStr`]:
///
/// ```
/// use vocalog::query::SortKey;
///
/// let key: SortKey = "title".parse().unwrap();
/// assert_eq!(key, SortKey::Title);
/// assert!("bogus".parse::<SortKey>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Creation timestamp, compared as time instants.
    Created,
    /// Update timestamp. Entries never updated sort before all updated
    /// entries under ascending order, after them under descending.
    Updated,
    /// The language's display label (falling back to the lowercased raw code
    /// when the table has no label for it).
    Language,
    /// Case-insensitive title comparison.
    Title,
    /// Case-insensitive voice comparison; entries without a voice use an
    /// empty key.
    Voice,
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(SortKey::Created),
            "updated" => Ok(SortKey::Updated),
            "language" => Ok(SortKey::Language),
            "title" => Ok(SortKey::Title),
            "voice" => Ok(SortKey::Voice),
            other => Err(AppError::Diary(format!(
                "Unknown sort key '{}'. Valid keys are: created, updated, language, title, voice",
                other
            ))),
        }
    }
}

/// Returns a sorted copy of `entries` ordered by the derived key for `key`.
///
/// `languages` supplies the code-to-label table used by
/// [`SortKey::Language`]; lookup is case-insensitive and an unknown code
/// compares by its lowercased raw form.
pub fn sort_entries(
    entries: &[Entry],
    key: SortKey,
    ascending: bool,
    languages: &[Language],
) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, key, languages);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    sorted
}

fn compare_by_key(a: &Entry, b: &Entry, key: SortKey, languages: &[Language]) -> Ordering {
    match key {
        SortKey::Created => a.created_at.cmp(&b.created_at),
        // Option's ordering puts None first, grouping never-updated entries
        // ahead of all updated ones under ascending order.
        SortKey::Updated => a.updated_at.cmp(&b.updated_at),
        SortKey::Language => {
            language_display(&a.language, languages).cmp(&language_display(&b.language, languages))
        }
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Voice => voice_key(a).cmp(&voice_key(b)),
    }
}

/// Resolves a language code to the string the sort compares by.
pub fn language_display(code: &str, languages: &[Language]) -> String {
    match label_for(code, languages) {
        Some(label) => label.to_string(),
        None => code.to_lowercase(),
    }
}

fn voice_key(entry: &Entry) -> String {
    entry
        .voice
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default()
}
