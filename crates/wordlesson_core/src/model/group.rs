//! Activity group model.
//!
//! # Responsibility
//! - Name the six intake buckets words are committed into.
//! - Hold the per-group activity toggle state.
//!
//! # Invariants
//! - A toggle state accepted by the registry always has at least one
//!   activity enabled.

use crate::model::word::Activity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Intake channel a group belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeChannel {
    /// Words typed into the lesson form.
    Typed,
    /// Words parsed from an uploaded text file.
    File,
}

/// Named activity group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GroupId {
    #[serde(rename = "vocabulary")]
    Vocabulary,
    #[serde(rename = "spelling")]
    Spelling,
    #[serde(rename = "phonics")]
    Phonics,
    #[serde(rename = "file-vocabulary")]
    FileVocabulary,
    #[serde(rename = "file-spelling")]
    FileSpelling,
    #[serde(rename = "file-phonics")]
    FilePhonics,
}

const ALL_GROUPS: [GroupId; 6] = [
    GroupId::Vocabulary,
    GroupId::Spelling,
    GroupId::Phonics,
    GroupId::FileVocabulary,
    GroupId::FileSpelling,
    GroupId::FilePhonics,
];

impl GroupId {
    /// All groups in stable order (typed channel first).
    pub fn all() -> &'static [GroupId] {
        &ALL_GROUPS
    }

    /// Stable wire name, e.g. `file-spelling`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vocabulary => "vocabulary",
            Self::Spelling => "spelling",
            Self::Phonics => "phonics",
            Self::FileVocabulary => "file-vocabulary",
            Self::FileSpelling => "file-spelling",
            Self::FilePhonics => "file-phonics",
        }
    }

    /// Parses one wire name (trimmed, case-sensitive).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim();
        ALL_GROUPS
            .iter()
            .copied()
            .find(|group| group.as_str() == normalized)
    }

    pub fn channel(self) -> IntakeChannel {
        match self {
            Self::Vocabulary | Self::Spelling | Self::Phonics => IntakeChannel::Typed,
            Self::FileVocabulary | Self::FileSpelling | Self::FilePhonics => IntakeChannel::File,
        }
    }

    /// Activity the group is named after.
    pub fn primary_activity(self) -> Activity {
        match self {
            Self::Vocabulary | Self::FileVocabulary => Activity::Vocabulary,
            Self::Spelling | Self::FileSpelling => Activity::Spelling,
            Self::Phonics | Self::FilePhonics => Activity::Phonics,
        }
    }
}

impl Display for GroupId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-group activity switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityToggles {
    pub vocabulary: bool,
    pub spelling: bool,
    pub phonics: bool,
}

impl ActivityToggles {
    /// Toggle state with only `activity` enabled.
    pub fn only(activity: Activity) -> Self {
        Self {
            vocabulary: false,
            spelling: false,
            phonics: false,
        }
        .with(activity, true)
    }

    /// Default state for a group: its namesake activity only.
    pub fn default_for(group: GroupId) -> Self {
        Self::only(group.primary_activity())
    }

    pub fn is_enabled(&self, activity: Activity) -> bool {
        match activity {
            Activity::Vocabulary => self.vocabulary,
            Activity::Spelling => self.spelling,
            Activity::Phonics => self.phonics,
        }
    }

    /// Returns a copy with one switch changed.
    pub fn with(mut self, activity: Activity, enabled: bool) -> Self {
        match activity {
            Activity::Vocabulary => self.vocabulary = enabled,
            Activity::Spelling => self.spelling = enabled,
            Activity::Phonics => self.phonics = enabled,
        }
        self
    }

    pub fn any_enabled(&self) -> bool {
        self.vocabulary || self.spelling || self.phonics
    }

    /// Enabled activities as the tag set applied to member words.
    pub fn enabled(&self) -> BTreeSet<Activity> {
        Activity::ALL
            .into_iter()
            .filter(|activity| self.is_enabled(*activity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{ActivityToggles, GroupId, IntakeChannel};
    use crate::model::word::Activity;
    use std::collections::BTreeSet;

    #[test]
    fn group_parse_round_trips_all_wire_names() {
        for group in GroupId::all() {
            assert_eq!(GroupId::parse(group.as_str()), Some(*group));
        }
        assert_eq!(GroupId::parse(" file-phonics "), Some(GroupId::FilePhonics));
        assert_eq!(GroupId::parse("file_phonics"), None);
    }

    #[test]
    fn file_groups_share_primary_activity_with_typed_groups() {
        assert_eq!(GroupId::FileSpelling.channel(), IntakeChannel::File);
        assert_eq!(GroupId::Spelling.channel(), IntakeChannel::Typed);
        assert_eq!(
            GroupId::FileSpelling.primary_activity(),
            GroupId::Spelling.primary_activity()
        );
    }

    #[test]
    fn default_toggles_enable_namesake_only() {
        let toggles = ActivityToggles::default_for(GroupId::FilePhonics);
        assert_eq!(toggles.enabled(), BTreeSet::from([Activity::Phonics]));
    }

    #[test]
    fn with_and_any_enabled_track_switches() {
        let toggles = ActivityToggles::only(Activity::Vocabulary)
            .with(Activity::Spelling, true)
            .with(Activity::Vocabulary, false);
        assert!(toggles.any_enabled());
        assert_eq!(toggles.enabled(), BTreeSet::from([Activity::Spelling]));
        assert!(!toggles.with(Activity::Spelling, false).any_enabled());
    }
}
