//! Chip assignment engine.
//!
//! # Responsibility
//! - Run the stage -> commit lifecycle that turns raw input into words.
//! - Keep word activity tags in step with group toggles and group moves.
//! - Produce and restore the lesson record shape.
//!
//! # Invariants
//! - Activities are taken from the owning group's toggles at commit time,
//!   on every accepted toggle change, and on every move (destination wins).
//! - No two pooled words share a normalized text; first commit wins.
//! - Staging buffers are per group and never visible in the pool.
//!
//! # See also
//! - `service::group_registry` for toggle validation.

use crate::model::group::{ActivityToggles, GroupId};
use crate::model::lesson::{GroupRecord, LessonRecord, LessonRecordError};
use crate::model::schedule::DaySchedule;
use crate::model::word::{Activity, Word, WordId, WordRecord};
use crate::repo::word_store::{StoreError, WordStore};
use crate::service::group_registry::{GroupRegistry, ToggleOutcome, ToggleRejection};
use crate::service::staging::{tokenize, tokenize_file, StagingBuffer};
use log::{debug, info, warn};
use std::collections::{BTreeMap, BTreeSet};

/// Owner of the group registry, staging buffers and the word pool.
#[derive(Debug, Clone, Default)]
pub struct ChipEngine {
    registry: GroupRegistry,
    staging: BTreeMap<GroupId, StagingBuffer>,
    store: WordStore,
}

impl ChipEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only registry view.
    pub fn registry(&self) -> &GroupRegistry {
        &self.registry
    }

    pub fn toggles(&self, group: GroupId) -> ActivityToggles {
        self.registry.state(group)
    }

    /// Changes one group toggle and re-tags every member word on acceptance.
    pub fn set_toggle(
        &mut self,
        group: GroupId,
        activity: Activity,
        enabled: bool,
    ) -> ToggleOutcome {
        let outcome = self.registry.set_toggle(group, activity, enabled);
        if outcome.accepted {
            let updated = self
                .store
                .replace_group_activities(group, &outcome.state.enabled());
            debug!(
                "event=group_retag module=chips status=ok group={} updated={}",
                group,
                updated.len()
            );
        }
        outcome
    }

    /// Stages typed input; returns the group's full staging list.
    pub fn stage(&mut self, group: GroupId, raw_text: &str) -> Vec<String> {
        self.stage_tokens(group, tokenize(raw_text))
    }

    /// Stages parsed file contents; returns the group's full staging list.
    pub fn stage_file(&mut self, group: GroupId, contents: &str) -> Vec<String> {
        self.stage_tokens(group, tokenize_file(contents))
    }

    fn stage_tokens(&mut self, group: GroupId, tokens: Vec<String>) -> Vec<String> {
        let buffer = self.staging.entry(group).or_default();
        let added = buffer.extend(tokens);
        if added == 0 {
            debug!("event=stage module=chips status=noop group={}", group);
        } else {
            debug!(
                "event=stage module=chips status=ok group={} added={} staged={}",
                group,
                added,
                buffer.tokens().len()
            );
        }
        buffer.tokens().to_vec()
    }

    /// Staged tokens of one group.
    pub fn staged(&self, group: GroupId) -> &[String] {
        self.staging
            .get(&group)
            .map(StagingBuffer::tokens)
            .unwrap_or(&[])
    }

    /// Removes one staged token.
    pub fn unstage(&mut self, group: GroupId, token: &str) -> bool {
        self.staging
            .get_mut(&group)
            .map(|buffer| buffer.remove(token))
            .unwrap_or(false)
    }

    pub fn clear_staging(&mut self, group: GroupId) {
        if let Some(buffer) = self.staging.get_mut(&group) {
            buffer.clear();
        }
    }

    /// Promotes every staged token of `group` into a word.
    ///
    /// Tokens already pooled anywhere are skipped. The staging buffer is
    /// cleared either way. Returns the newly created words.
    pub fn commit(&mut self, group: GroupId) -> Vec<Word> {
        let tokens = self
            .staging
            .get_mut(&group)
            .map(StagingBuffer::take)
            .unwrap_or_default();
        if tokens.is_empty() {
            debug!("event=commit module=chips status=noop group={}", group);
            return Vec::new();
        }

        let activities = self.registry.state(group).enabled();
        let mut created = Vec::new();
        let mut skipped = 0usize;
        for token in tokens {
            if self.store.contains_text(&token) {
                skipped += 1;
                continue;
            }
            let word = match Word::new(token, activities.clone()) {
                Ok(word) => word,
                Err(err) => {
                    warn!(
                        "event=commit module=chips status=error group={} error={}",
                        group, err
                    );
                    continue;
                }
            };
            match self.store.insert(WordRecord {
                word: word.clone(),
                group,
            }) {
                Ok(()) => created.push(word),
                Err(StoreError::DuplicateText(_)) => skipped += 1,
                Err(err) => warn!(
                    "event=commit module=chips status=error group={} error={}",
                    group, err
                ),
            }
        }

        info!(
            "event=commit module=chips status=ok group={} created={} skipped={} pool={}",
            group,
            created.len(),
            skipped,
            self.store.len()
        );
        created
    }

    /// Moves one word to `target` and overwrites its activities with the
    /// target group's current toggles. Unknown ids are a no-op.
    pub fn move_to_group(&mut self, word_id: WordId, target: GroupId) -> Option<Word> {
        let activities = self.registry.state(target).enabled();
        match self.store.reassign(word_id, target, activities) {
            Some(record) => {
                info!(
                    "event=word_move module=chips status=ok word_id={} target={}",
                    word_id, target
                );
                Some(record.word.clone())
            }
            None => {
                debug!(
                    "event=word_move module=chips status=noop word_id={} target={}",
                    word_id, target
                );
                None
            }
        }
    }

    /// Hard-deletes one word. Returns whether anything was removed.
    pub fn delete(&mut self, word_id: WordId) -> bool {
        let removed = self.store.remove(word_id).is_some();
        if removed {
            info!("event=word_delete module=chips status=ok word_id={}", word_id);
        } else {
            debug!("event=word_delete module=chips status=noop word_id={}", word_id);
        }
        removed
    }

    /// Pool rows in commit order.
    pub fn get_pool(&self) -> Vec<WordRecord> {
        self.store.records().to_vec()
    }

    /// Pooled words in commit order, as consumed by the scheduler.
    pub fn pool_words(&self) -> Vec<Word> {
        self.store
            .records()
            .iter()
            .map(|record| record.word.clone())
            .collect()
    }

    pub fn word(&self, word_id: WordId) -> Option<&WordRecord> {
        self.store.get(word_id)
    }

    pub fn group_members(&self, group: GroupId) -> Vec<&WordRecord> {
        self.store.members(group)
    }

    pub fn words_with_activity(&self, activity: Activity) -> Vec<&WordRecord> {
        self.store.with_activity(activity)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Captures committed state for the storage collaborator.
    ///
    /// Staging buffers are transient and not included.
    pub fn to_record(&self, schedule: Option<&DaySchedule>) -> LessonRecord {
        LessonRecord {
            words: self.get_pool(),
            groups: self
                .registry
                .states()
                .into_iter()
                .map(|(id, toggles)| GroupRecord { id, toggles })
                .collect(),
            schedule: schedule.cloned(),
        }
    }

    /// Rebuilds an engine from a persisted record after full validation.
    pub fn from_record(record: &LessonRecord) -> Result<Self, LessonRecordError> {
        let mut engine = Self::new();

        let mut seen_groups = BTreeSet::new();
        for group in &record.groups {
            if !seen_groups.insert(group.id) {
                return Err(LessonRecordError::DuplicateGroup(group.id));
            }
            engine
                .registry
                .restore_state(group.id, group.toggles)
                .map_err(|rejection| match rejection {
                    ToggleRejection::NoActivityEnabled { group }
                    | ToggleRejection::WouldDisableAll { group, .. } => {
                        LessonRecordError::GroupHasNoActivities(group)
                    }
                })?;
        }

        for row in &record.words {
            row.word.validate()?;
            if row.word.activities != engine.registry.state(row.group).enabled() {
                return Err(LessonRecordError::ActivitiesOutOfSync {
                    word_id: row.word.id,
                    group: row.group,
                });
            }
            engine.store.insert(row.clone()).map_err(|err| match err {
                StoreError::Validation(err) => LessonRecordError::Word(err),
                StoreError::DuplicateId(id) => LessonRecordError::DuplicateWordId(id),
                StoreError::DuplicateText(text) => LessonRecordError::DuplicateText(text),
            })?;
        }

        if let Some(schedule) = &record.schedule {
            schedule.validate()?;
            let scheduled = schedule.word_ids();
            let pooled: BTreeSet<WordId> = engine
                .store
                .records()
                .iter()
                .map(|row| row.word.id)
                .collect();
            if scheduled != pooled {
                return Err(LessonRecordError::ScheduleWordMismatch {
                    scheduled: scheduled.len(),
                    pooled: pooled.len(),
                });
            }
        }

        info!(
            "event=lesson_restore module=chips status=ok words={} scheduled={}",
            engine.store.len(),
            record.schedule.is_some()
        );
        Ok(engine)
    }
}
