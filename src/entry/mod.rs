//! The diary entry record and partial-update type.
//!
//! Entries serialize in the original wire shape: camelCase field names,
//! ISO-8601 timestamps, and `updatedAt`/`voice` omitted entirely when absent.
//! This keeps exports from earlier versions of the diary importable as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One diary record.
///
/// Invariants maintained by [`crate::store::DiaryStore`]:
/// - `id` is unique across the collection and never reused.
/// - `created_at` is set exactly once at creation and never changes.
/// - `updated_at` is absent until the first update, and when present is
///   always at or after `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Opaque unique identifier, assigned at creation.
    pub id: Uuid,
    /// Human-readable label for the entry.
    pub title: String,
    /// Free-form text body; the dictated or typed diary text.
    pub content: String,
    /// Creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
    /// Set on every update; absent until the first update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Language-region code (e.g. `"es-ES"`) selected at creation/edit time.
    pub language: String,
    /// Identifier of a previously selected synthesis voice, persisted so
    /// playback reuses the same voice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
}

impl Entry {
    /// Creates a fresh entry with a new v4 UUID and `created_at` stamped to now.
    pub fn new(title: String, content: String, language: String, voice: Option<String>) -> Self {
        Entry {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: Utc::now(),
            updated_at: None,
            language,
            voice,
        }
    }
}

/// A partial update to an entry: only the supplied fields are overwritten.
///
/// # Examples
///
/// ```
/// use vocalog::entry::EntryPatch;
///
/// let patch = EntryPatch {
///     title: Some("Evening walk".to_string()),
///     ..EntryPatch::default()
/// };
/// assert!(!patch.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub language: Option<String>,
    pub voice: Option<String>,
}

impl EntryPatch {
    /// Returns true if the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.language.is_none()
            && self.voice.is_none()
    }

    /// Overwrites the supplied fields on `entry`, leaving the rest untouched.
    ///
    /// Does not stamp `updated_at`; the store owns timestamping.
    pub fn apply(&self, entry: &mut Entry) {
        if let Some(title) = &self.title {
            entry.title = title.clone();
        }
        if let Some(content) = &self.content {
            entry.content = content.clone();
        }
        if let Some(language) = &self.language {
            entry.language = language.clone();
        }
        if let Some(voice) = &self.voice {
            entry.voice = Some(voice.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_has_no_updated_at() {
        let entry = Entry::new(
            "Morning".to_string(),
            "Dictated some thoughts".to_string(),
            "en-US".to_string(),
            None,
        );
        assert!(entry.updated_at.is_none());
        assert!(entry.voice.is_none());
        assert_eq!(entry.language, "en-US");
    }

    #[test]
    fn test_new_entries_get_distinct_ids() {
        let a = Entry::new("a".into(), "".into(), "en-US".into(), None);
        let b = Entry::new("b".into(), "".into(), "en-US".into(), None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialization_uses_camel_case_and_omits_absent_fields() {
        let entry = Entry::new(
            "Morning".to_string(),
            "text".to_string(),
            "es-ES".to_string(),
            None,
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("\"updatedAt\""));
        assert!(!json.contains("\"voice\""));
        assert!(!json.contains("created_at"));
    }

    #[test]
    fn test_deserializes_original_wire_format() {
        // Shape produced by the original browser application.
        let json = r#"{
            "id": "9f8d8a3e-2a9b-4c9e-bb1d-0d6a1c2f3e4b",
            "title": "Por la mañana",
            "content": "He desayunado tostadas",
            "createdAt": "2024-03-01T08:15:00.000Z",
            "language": "es-ES"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.title, "Por la mañana");
        assert!(entry.updated_at.is_none());
        assert!(entry.voice.is_none());
    }

    #[test]
    fn test_patch_apply_overwrites_only_supplied_fields() {
        let mut entry = Entry::new(
            "Morning".to_string(),
            "original".to_string(),
            "en-US".to_string(),
            Some("Samantha".to_string()),
        );
        let patch = EntryPatch {
            content: Some("revised".to_string()),
            ..EntryPatch::default()
        };
        patch.apply(&mut entry);

        assert_eq!(entry.title, "Morning");
        assert_eq!(entry.content, "revised");
        assert_eq!(entry.language, "en-US");
        assert_eq!(entry.voice.as_deref(), Some("Samantha"));
    }

    #[test]
    fn test_empty_patch_is_empty() {
        assert!(EntryPatch::default().is_empty());
        let patch = EntryPatch {
            voice: Some("Jorge".to_string()),
            ..EntryPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
