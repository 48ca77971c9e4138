//! In-memory word record store.
//!
//! # Responsibility
//! - Hold committed words and their owning group in commit order.
//! - Enforce id and text uniqueness across the whole pool.
//!
//! # Invariants
//! - Write paths call `Word::validate()` before mutating state.
//! - A normalized text appears at most once.
//! - The id and text sets mirror `records` exactly.
//! - Replacement activity sets are never empty.

use crate::model::group::GroupId;
use crate::model::word::{Activity, WordId, WordRecord, WordValidationError};
use std::collections::{BTreeSet, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store write failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(WordValidationError),
    DuplicateId(WordId),
    DuplicateText(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "word id already stored: {id}"),
            Self::DuplicateText(text) => write!(f, "word text already stored: `{text}`"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WordValidationError> for StoreError {
    fn from(value: WordValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Ordered, text-unique word pool.
#[derive(Debug, Default, Clone)]
pub struct WordStore {
    records: Vec<WordRecord>,
    ids: HashSet<WordId>,
    texts: HashSet<String>,
}

impl WordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.texts.contains(text)
    }

    /// Appends one record at the end of the pool.
    pub fn insert(&mut self, record: WordRecord) -> StoreResult<()> {
        record.word.validate()?;
        if self.ids.contains(&record.word.id) {
            return Err(StoreError::DuplicateId(record.word.id));
        }
        if self.texts.contains(record.word.text.as_str()) {
            return Err(StoreError::DuplicateText(record.word.text));
        }
        self.ids.insert(record.word.id);
        self.texts.insert(record.word.text.clone());
        self.records.push(record);
        Ok(())
    }

    pub fn contains_id(&self, id: WordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn get(&self, id: WordId) -> Option<&WordRecord> {
        if !self.ids.contains(&id) {
            return None;
        }
        self.records.iter().find(|record| record.word.id == id)
    }

    /// Removes one record; later records keep their relative order.
    pub fn remove(&mut self, id: WordId) -> Option<WordRecord> {
        let index = self.records.iter().position(|record| record.word.id == id)?;
        let record = self.records.remove(index);
        self.ids.remove(&record.word.id);
        self.texts.remove(record.word.text.as_str());
        Some(record)
    }

    /// Moves one record to `group` and overwrites its activities.
    ///
    /// Returns `None` for unknown ids or an empty activity set.
    pub fn reassign(
        &mut self,
        id: WordId,
        group: GroupId,
        activities: BTreeSet<Activity>,
    ) -> Option<&WordRecord> {
        if activities.is_empty() {
            return None;
        }
        let record = self.records.iter_mut().find(|record| record.word.id == id)?;
        record.group = group;
        record.word.activities = activities;
        Some(&*record)
    }

    /// Overwrites activities of every member of `group`.
    ///
    /// Returns ids of updated words in pool order.
    pub fn replace_group_activities(
        &mut self,
        group: GroupId,
        activities: &BTreeSet<Activity>,
    ) -> Vec<WordId> {
        if activities.is_empty() {
            return Vec::new();
        }
        self.records
            .iter_mut()
            .filter(|record| record.group == group)
            .map(|record| {
                record.word.activities = activities.clone();
                record.word.id
            })
            .collect()
    }

    /// All records in commit order.
    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn members(&self, group: GroupId) -> Vec<&WordRecord> {
        self.records
            .iter()
            .filter(|record| record.group == group)
            .collect()
    }

    pub fn with_activity(&self, activity: Activity) -> Vec<&WordRecord> {
        self.records
            .iter()
            .filter(|record| record.word.has_activity(activity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreError, WordStore};
    use crate::model::group::GroupId;
    use crate::model::word::{Activity, Word, WordRecord};
    use std::collections::BTreeSet;

    fn record(text: &str, group: GroupId) -> WordRecord {
        WordRecord {
            word: Word::new(text, BTreeSet::from([group.primary_activity()]))
                .expect("valid word"),
            group,
        }
    }

    #[test]
    fn insert_rejects_duplicate_text_across_groups() {
        let mut store = WordStore::new();
        store
            .insert(record("cat", GroupId::Vocabulary))
            .expect("first insert");
        let err = store
            .insert(record("cat", GroupId::FilePhonics))
            .expect_err("duplicate text must fail");
        assert_eq!(err, StoreError::DuplicateText("cat".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn insert_rejects_duplicate_id_until_removed() {
        let mut store = WordStore::new();
        let cat = record("cat", GroupId::Vocabulary);
        let id = cat.word.id;
        store.insert(cat.clone()).expect("first insert");

        let mut renamed = cat.clone();
        renamed.word.text = "dog".to_string();
        let err = store.insert(renamed).expect_err("duplicate id must fail");
        assert_eq!(err, StoreError::DuplicateId(id));
        assert!(!store.contains_text("dog"));

        assert!(store.remove(id).is_some());
        assert!(!store.contains_id(id));
        assert!(store.get(id).is_none());
        store.insert(cat).expect("id is free again");
        assert!(store.contains_id(id));
    }

    #[test]
    fn remove_frees_text_and_keeps_order() {
        let mut store = WordStore::new();
        let first = record("cat", GroupId::Vocabulary);
        let first_id = first.word.id;
        store.insert(first).expect("insert cat");
        store
            .insert(record("dog", GroupId::Vocabulary))
            .expect("insert dog");
        store
            .insert(record("emu", GroupId::Spelling))
            .expect("insert emu");

        assert!(store.remove(first_id).is_some());
        assert!(store.remove(first_id).is_none());
        assert!(!store.contains_text("cat"));
        let texts: Vec<&str> = store
            .records()
            .iter()
            .map(|record| record.word.text.as_str())
            .collect();
        assert_eq!(texts, vec!["dog", "emu"]);
        store
            .insert(record("cat", GroupId::Phonics))
            .expect("text is free again");
    }

    #[test]
    fn reassign_refuses_empty_activity_set() {
        let mut store = WordStore::new();
        let cat = record("cat", GroupId::Vocabulary);
        let id = cat.word.id;
        store.insert(cat).expect("insert");

        assert!(store
            .reassign(id, GroupId::Spelling, BTreeSet::new())
            .is_none());
        let moved = store
            .reassign(id, GroupId::Spelling, BTreeSet::from([Activity::Spelling]))
            .expect("reassign");
        assert_eq!(moved.group, GroupId::Spelling);
        assert_eq!(moved.word.activities, BTreeSet::from([Activity::Spelling]));
    }

    #[test]
    fn replace_group_activities_touches_members_only() {
        let mut store = WordStore::new();
        store
            .insert(record("cat", GroupId::Vocabulary))
            .expect("insert cat");
        store
            .insert(record("dog", GroupId::Spelling))
            .expect("insert dog");

        let both = BTreeSet::from([Activity::Vocabulary, Activity::Phonics]);
        let updated = store.replace_group_activities(GroupId::Vocabulary, &both);
        assert_eq!(updated.len(), 1);
        assert_eq!(store.with_activity(Activity::Phonics).len(), 1);
        assert_eq!(store.members(GroupId::Spelling)[0].word.text, "dog");
    }
}
