//! Word domain model.
//!
//! # Responsibility
//! - Define the canonical committed word record and its activity tags.
//! - Own the text normalization rule shared by staging and validation.
//!
//! # Invariants
//! - `id` is stable and never reused for another word.
//! - `text` is trimmed, lower-cased, non-empty and contains a letter.
//! - `activities` is never empty for a committed word.

use crate::model::group::GroupId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a committed word.
pub type WordId = Uuid;

/// Learning activity a word can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Vocabulary,
    Spelling,
    Phonics,
}

impl Activity {
    /// All activities in stable display order.
    pub const ALL: [Activity; 3] = [Activity::Vocabulary, Activity::Spelling, Activity::Phonics];

    /// Stable wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vocabulary => "vocabulary",
            Self::Spelling => "spelling",
            Self::Phonics => "phonics",
        }
    }

    /// Parses one wire name. Input is trimmed; matching is case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "vocabulary" => Some(Self::Vocabulary),
            "spelling" => Some(Self::Spelling),
            "phonics" => Some(Self::Phonics),
            _ => None,
        }
    }
}

impl Display for Activity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for word invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordValidationError {
    NilId,
    EmptyText,
    /// Text differs from its normalized form.
    UnnormalizedText(String),
    NoActivities(WordId),
}

impl Display for WordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "word id must not be nil"),
            Self::EmptyText => write!(f, "word text must not be empty"),
            Self::UnnormalizedText(text) => {
                write!(f, "word text is not normalized: `{text}`")
            }
            Self::NoActivities(id) => write!(f, "word {id} has no activities"),
        }
    }
}

impl Error for WordValidationError {}

/// Canonical committed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub text: String,
    pub activities: BTreeSet<Activity>,
}

impl Word {
    /// Creates a word with a generated id.
    ///
    /// `text` must already be normalized; see [`normalize_word_text`].
    pub fn new(
        text: impl Into<String>,
        activities: BTreeSet<Activity>,
    ) -> Result<Self, WordValidationError> {
        Self::with_id(Uuid::new_v4(), text, activities)
    }

    /// Creates a word with a caller-provided id (restore paths).
    pub fn with_id(
        id: WordId,
        text: impl Into<String>,
        activities: BTreeSet<Activity>,
    ) -> Result<Self, WordValidationError> {
        let word = Self {
            id,
            text: text.into(),
            activities,
        };
        word.validate()?;
        Ok(word)
    }

    /// Checks all word invariants.
    pub fn validate(&self) -> Result<(), WordValidationError> {
        if self.id.is_nil() {
            return Err(WordValidationError::NilId);
        }
        if self.text.trim().is_empty() {
            return Err(WordValidationError::EmptyText);
        }
        if normalize_word_text(&self.text).as_deref() != Some(self.text.as_str()) {
            return Err(WordValidationError::UnnormalizedText(self.text.clone()));
        }
        if self.activities.is_empty() {
            return Err(WordValidationError::NoActivities(self.id));
        }
        Ok(())
    }

    pub fn has_activity(&self, activity: Activity) -> bool {
        self.activities.contains(&activity)
    }
}

/// Committed word together with the group that owns it.
///
/// This is the row shape external renderers iterate to draw the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    #[serde(flatten)]
    pub word: Word,
    pub group: GroupId,
}

/// Normalizes one raw token into word text.
///
/// Returns `None` when the trimmed token is empty or has no letter.
pub fn normalize_word_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().any(char::is_alphabetic) {
        return None;
    }
    Some(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{normalize_word_text, Activity, Word, WordValidationError};
    use std::collections::BTreeSet;
    use uuid::Uuid;

    fn vocab() -> BTreeSet<Activity> {
        BTreeSet::from([Activity::Vocabulary])
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_word_text("  Cat "), Some("cat".to_string()));
        assert_eq!(normalize_word_text("x2"), Some("x2".to_string()));
    }

    #[test]
    fn normalize_rejects_blank_and_letterless_tokens() {
        assert_eq!(normalize_word_text("   "), None);
        assert_eq!(normalize_word_text("123"), None);
        assert_eq!(normalize_word_text("--"), None);
    }

    #[test]
    fn new_rejects_unnormalized_text() {
        let err = Word::new("Cat", vocab()).expect_err("uppercase text must fail");
        assert_eq!(err, WordValidationError::UnnormalizedText("Cat".to_string()));
    }

    #[test]
    fn with_id_rejects_nil_id_and_empty_activities() {
        let err = Word::with_id(Uuid::nil(), "cat", vocab()).expect_err("nil id must fail");
        assert_eq!(err, WordValidationError::NilId);

        let id = Uuid::new_v4();
        let err = Word::with_id(id, "cat", BTreeSet::new()).expect_err("no activities must fail");
        assert_eq!(err, WordValidationError::NoActivities(id));
    }

    #[test]
    fn activity_parse_matches_wire_names() {
        for activity in Activity::ALL {
            assert_eq!(Activity::parse(activity.as_str()), Some(activity));
        }
        assert_eq!(Activity::parse("Phonics"), None);
    }
}
