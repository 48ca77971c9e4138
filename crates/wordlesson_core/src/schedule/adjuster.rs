//! Manual schedule adjustment.
//!
//! # Invariants
//! - The input schedule is never mutated; accepted moves return a copy.
//! - Reviews are recomputed for every day after a move.
//! - The final day of a multi-day lesson never gains introductions.

use crate::model::schedule::DaySchedule;
use crate::model::word::WordId;
use crate::schedule::{checked, ScheduleResult};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    DayOutOfRange { day: u32, day_count: u32 },
    FinalDayIsReviewOnly { day: u32 },
}

impl Display for MoveRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DayOutOfRange { day, day_count } => {
                write!(f, "Day {day} is not part of this {day_count}-day lesson.")
            }
            Self::FinalDayIsReviewOnly { day } => write!(
                f,
                "Day {day} is the review day; new words cannot be introduced on it."
            ),
        }
    }
}

impl Error for MoveRejection {}

/// Result of one move request.
///
/// `accepted == false` with no rejection means the request was a no-op
/// (unknown word, or word not introduced on `from_day`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub accepted: bool,
    pub schedule: DaySchedule,
    pub rejection: Option<MoveRejection>,
}

impl MoveOutcome {
    fn unchanged(schedule: &DaySchedule, accepted: bool, rejection: Option<MoveRejection>) -> Self {
        Self {
            accepted,
            schedule: schedule.clone(),
            rejection,
        }
    }
}

/// Changes the introduction day of one word from `from_day` to `to_day`.
pub fn move_word(
    schedule: &DaySchedule,
    word_id: WordId,
    from_day: u32,
    to_day: u32,
) -> ScheduleResult<MoveOutcome> {
    let day_count = schedule.day_count();
    if to_day == 0 || to_day > day_count {
        warn!(
            "event=word_reschedule module=schedule status=rejected word_id={} to_day={} reason={}",
            word_id, to_day, "out_of_range"
        );
        return Ok(MoveOutcome::unchanged(
            schedule,
            false,
            Some(MoveRejection::DayOutOfRange {
                day: to_day,
                day_count,
            }),
        ));
    }

    let introduced_on_from_day = schedule
        .day(from_day)
        .map(|plan| plan.new_word_ids.contains(&word_id))
        .unwrap_or(false);
    if !introduced_on_from_day {
        debug!(
            "event=word_reschedule module=schedule status=noop word_id={} from_day={}",
            word_id, from_day
        );
        return Ok(MoveOutcome::unchanged(schedule, false, None));
    }

    if from_day == to_day {
        return Ok(MoveOutcome::unchanged(schedule, true, None));
    }
    if day_count > 1 && to_day == day_count {
        warn!(
            "event=word_reschedule module=schedule status=rejected word_id={} to_day={} reason={}",
            word_id, to_day, "final_day"
        );
        return Ok(MoveOutcome::unchanged(
            schedule,
            false,
            Some(MoveRejection::FinalDayIsReviewOnly { day: to_day }),
        ));
    }

    let mut next = schedule.clone();
    for plan in &mut next.days {
        if plan.day == from_day {
            plan.new_word_ids.retain(|id| *id != word_id);
        } else if plan.day == to_day {
            plan.new_word_ids.push(word_id);
        }
    }
    next.rebuild_review_closure();
    let next = checked(next)?;

    info!(
        "event=word_reschedule module=schedule status=ok word_id={} from_day={} to_day={}",
        word_id, from_day, to_day
    );
    Ok(MoveOutcome {
        accepted: true,
        schedule: next,
        rejection: None,
    })
}

#[cfg(test)]
mod tests {
    use super::{move_word, MoveRejection};
    use crate::model::schedule::DaySchedule;
    use uuid::Uuid;

    fn three_day() -> (DaySchedule, Uuid, Uuid) {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        (DaySchedule::from_introductions(vec![vec![a], vec![b], vec![]]), a, b)
    }

    #[test]
    fn moving_later_drops_earlier_reviews() {
        let (schedule, a, b) = three_day();
        let outcome = move_word(&schedule, a, 1, 2).expect("move should validate");

        assert!(outcome.accepted);
        let day2 = outcome.schedule.day(2).expect("day 2");
        assert_eq!(day2.new_word_ids, vec![b, a]);
        assert!(day2.review_word_ids.is_empty());
        assert_eq!(outcome.schedule.day(3).expect("day 3").review_word_ids, vec![b, a]);
    }

    #[test]
    fn final_day_is_rejected_and_schedule_unchanged() {
        let (schedule, a, _) = three_day();
        let outcome = move_word(&schedule, a, 1, 3).expect("rejection is not an error");
        assert!(!outcome.accepted);
        assert_eq!(
            outcome.rejection,
            Some(MoveRejection::FinalDayIsReviewOnly { day: 3 })
        );
        assert_eq!(outcome.schedule, schedule);
    }

    #[test]
    fn same_day_move_is_accepted_noop() {
        let (schedule, _, b) = three_day();
        let outcome = move_word(&schedule, b, 2, 2).expect("noop");
        assert!(outcome.accepted);
        assert_eq!(outcome.schedule, schedule);
    }

    #[test]
    fn unknown_word_or_wrong_from_day_is_silent_noop() {
        let (schedule, a, _) = three_day();
        let outcome = move_word(&schedule, Uuid::new_v4(), 1, 2).expect("noop");
        assert!(!outcome.accepted);
        assert!(outcome.rejection.is_none());

        let outcome = move_word(&schedule, a, 2, 1).expect("noop");
        assert!(!outcome.accepted);
        assert!(outcome.rejection.is_none());
        assert_eq!(outcome.schedule, schedule);
    }

    #[test]
    fn same_day_move_of_word_not_on_that_day_is_noop() {
        let (schedule, a, _) = three_day();
        let outcome = move_word(&schedule, Uuid::new_v4(), 2, 2).expect("noop");
        assert!(!outcome.accepted);
        assert!(outcome.rejection.is_none());

        let outcome = move_word(&schedule, a, 2, 2).expect("noop");
        assert!(!outcome.accepted);
        assert!(outcome.rejection.is_none());

        let outcome = move_word(&schedule, a, 3, 3).expect("noop");
        assert!(!outcome.accepted);
        assert!(outcome.rejection.is_none());
        assert_eq!(outcome.schedule, schedule);
    }

    #[test]
    fn out_of_range_target_is_rejected() {
        let (schedule, a, _) = three_day();
        let outcome = move_word(&schedule, a, 1, 0).expect("rejection");
        assert_eq!(
            outcome.rejection,
            Some(MoveRejection::DayOutOfRange { day: 0, day_count: 3 })
        );
    }
}
