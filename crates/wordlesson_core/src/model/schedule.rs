//! Day schedule model.
//!
//! # Responsibility
//! - Define the per-day new/review word plan of a multi-day lesson.
//! - Recompute the review closure and check schedule invariants.
//!
//! # Invariants
//! - Days are numbered `1..=D` in order.
//! - Every word is new on exactly one day (its introduction day).
//! - A word is reviewed on every day strictly after its introduction day and
//!   never on or before it.
//! - Day `D` introduces nothing when `D > 1`.

use crate::model::word::WordId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One lesson day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number.
    pub day: u32,
    pub new_word_ids: Vec<WordId>,
    pub review_word_ids: Vec<WordId>,
}

/// Broken schedule invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleInvariantError {
    NoDays,
    DayNumbering { position: usize, day: u32 },
    DuplicateIntroduction(WordId),
    FinalDayIntroduces { day: u32 },
    NewAndReview { word_id: WordId, day: u32 },
    /// Word reviewed on or before its introduction day, or never introduced.
    ReviewBeforeIntroduction { word_id: WordId, day: u32 },
    MissingReview { word_id: WordId, day: u32 },
}

impl Display for ScheduleInvariantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDays => write!(f, "schedule has no days"),
            Self::DayNumbering { position, day } => {
                write!(f, "day at position {position} is numbered {day}")
            }
            Self::DuplicateIntroduction(id) => {
                write!(f, "word {id} is introduced on more than one day")
            }
            Self::FinalDayIntroduces { day } => {
                write!(f, "final day {day} must not introduce words")
            }
            Self::NewAndReview { word_id, day } => {
                write!(f, "word {word_id} is both new and review on day {day}")
            }
            Self::ReviewBeforeIntroduction { word_id, day } => write!(
                f,
                "word {word_id} is reviewed on day {day} without an earlier introduction"
            ),
            Self::MissingReview { word_id, day } => {
                write!(f, "word {word_id} is missing from review on day {day}")
            }
        }
    }
}

impl Error for ScheduleInvariantError {}

/// Ordered lesson plan for days `1..=D`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub days: Vec<DayPlan>,
}

impl DaySchedule {
    /// Builds a schedule from per-day introduction lists and derives reviews.
    pub fn from_introductions(new_lists: Vec<Vec<WordId>>) -> Self {
        let days = new_lists
            .into_iter()
            .enumerate()
            .map(|(index, new_word_ids)| DayPlan {
                day: index as u32 + 1,
                new_word_ids,
                review_word_ids: Vec::new(),
            })
            .collect();
        let mut schedule = Self { days };
        schedule.rebuild_review_closure();
        schedule
    }

    /// Recomputes every day's review list from scratch.
    ///
    /// Reviews keep introduction order: earlier days first, then the order
    /// inside each day's new list.
    pub fn rebuild_review_closure(&mut self) {
        let mut introduced: Vec<WordId> = Vec::new();
        for plan in &mut self.days {
            plan.review_word_ids = introduced.clone();
            introduced.extend(plan.new_word_ids.iter().copied());
        }
    }

    pub fn day_count(&self) -> u32 {
        self.days.len() as u32
    }

    /// Total number of introduced words.
    pub fn word_count(&self) -> usize {
        self.days.iter().map(|plan| plan.new_word_ids.len()).sum()
    }

    /// Returns one day by 1-based number.
    pub fn day(&self, day: u32) -> Option<&DayPlan> {
        let index = usize::try_from(day).ok()?.checked_sub(1)?;
        self.days.get(index)
    }

    /// New-word count per day.
    pub fn new_counts(&self) -> Vec<usize> {
        self.days.iter().map(|plan| plan.new_word_ids.len()).collect()
    }

    /// Day on which `word_id` is new, if any.
    pub fn introduction_day(&self, word_id: WordId) -> Option<u32> {
        self.days
            .iter()
            .find(|plan| plan.new_word_ids.contains(&word_id))
            .map(|plan| plan.day)
    }

    /// All introduced word ids.
    pub fn word_ids(&self) -> BTreeSet<WordId> {
        self.days
            .iter()
            .flat_map(|plan| plan.new_word_ids.iter().copied())
            .collect()
    }

    /// Checks every schedule invariant.
    pub fn validate(&self) -> Result<(), ScheduleInvariantError> {
        if self.days.is_empty() {
            return Err(ScheduleInvariantError::NoDays);
        }

        let mut introduction = BTreeMap::<WordId, u32>::new();
        for (position, plan) in self.days.iter().enumerate() {
            if plan.day as usize != position + 1 {
                return Err(ScheduleInvariantError::DayNumbering {
                    position,
                    day: plan.day,
                });
            }
            for word_id in &plan.new_word_ids {
                if introduction.insert(*word_id, plan.day).is_some() {
                    return Err(ScheduleInvariantError::DuplicateIntroduction(*word_id));
                }
            }
        }

        let final_day = self.day_count();
        if final_day > 1 {
            if let Some(last) = self.days.last() {
                if !last.new_word_ids.is_empty() {
                    return Err(ScheduleInvariantError::FinalDayIntroduces { day: final_day });
                }
            }
        }

        for plan in &self.days {
            let reviewed: BTreeSet<WordId> = plan.review_word_ids.iter().copied().collect();
            for word_id in &plan.review_word_ids {
                if plan.new_word_ids.contains(word_id) {
                    return Err(ScheduleInvariantError::NewAndReview {
                        word_id: *word_id,
                        day: plan.day,
                    });
                }
                match introduction.get(word_id) {
                    Some(intro_day) if *intro_day < plan.day => {}
                    _ => {
                        return Err(ScheduleInvariantError::ReviewBeforeIntroduction {
                            word_id: *word_id,
                            day: plan.day,
                        })
                    }
                }
            }
            for (word_id, intro_day) in &introduction {
                if *intro_day < plan.day && !reviewed.contains(word_id) {
                    return Err(ScheduleInvariantError::MissingReview {
                        word_id: *word_id,
                        day: plan.day,
                    });
                }
            }
        }

        Ok(())
    }
}
