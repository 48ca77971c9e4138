//! Lesson record exchanged with the storage collaborator.
//!
//! # Responsibility
//! - Define the serializable lesson shape (words, group toggles, schedule).
//! - Describe why a record cannot be restored.
//!
//! # Invariants
//! - The core never reads or writes storage itself; it only produces and
//!   consumes this shape.

use crate::model::group::{ActivityToggles, GroupId};
use crate::model::schedule::{DaySchedule, ScheduleInvariantError};
use crate::model::word::{WordId, WordRecord, WordValidationError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Toggle state of one group as persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub id: GroupId,
    pub toggles: ActivityToggles,
}

/// Full lesson state.
///
/// Group membership is carried by `words[].group`; `groups` only holds
/// toggle states. Groups absent from `groups` restore with defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRecord {
    pub words: Vec<WordRecord>,
    pub groups: Vec<GroupRecord>,
    #[serde(default)]
    pub schedule: Option<DaySchedule>,
}

/// Reasons a lesson record is rejected on restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonRecordError {
    Word(WordValidationError),
    DuplicateWordId(WordId),
    DuplicateText(String),
    DuplicateGroup(GroupId),
    GroupHasNoActivities(GroupId),
    /// Word tags disagree with its owning group's toggles.
    ActivitiesOutOfSync { word_id: WordId, group: GroupId },
    Schedule(ScheduleInvariantError),
    /// Schedule word set differs from the pool.
    ScheduleWordMismatch { scheduled: usize, pooled: usize },
}

impl Display for LessonRecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Word(err) => write!(f, "{err}"),
            Self::DuplicateWordId(id) => write!(f, "duplicate word id: {id}"),
            Self::DuplicateText(text) => write!(f, "duplicate word text: `{text}`"),
            Self::DuplicateGroup(group) => write!(f, "group listed twice: {group}"),
            Self::GroupHasNoActivities(group) => {
                write!(f, "group {group} has no enabled activity")
            }
            Self::ActivitiesOutOfSync { word_id, group } => write!(
                f,
                "word {word_id} activities do not match toggles of group {group}"
            ),
            Self::Schedule(err) => write!(f, "invalid schedule: {err}"),
            Self::ScheduleWordMismatch { scheduled, pooled } => write!(
                f,
                "schedule covers {scheduled} words but the pool holds {pooled}"
            ),
        }
    }
}

impl Error for LessonRecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Word(err) => Some(err),
            Self::Schedule(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WordValidationError> for LessonRecordError {
    fn from(value: WordValidationError) -> Self {
        Self::Word(value)
    }
}

impl From<ScheduleInvariantError> for LessonRecordError {
    fn from(value: ScheduleInvariantError) -> Self {
        Self::Schedule(value)
    }
}
