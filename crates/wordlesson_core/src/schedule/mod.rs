//! Lesson day scheduling.
//!
//! # Responsibility
//! - Distribute a word pool across lesson days (front-load + decay).
//! - Build the initial `DaySchedule` and apply manual day moves.
//!
//! # Invariants
//! - Every schedule leaving this module has passed `DaySchedule::validate()`.
//! - Invariant breaks abort the operation with `InvariantViolation`; they
//!   never yield a partially consistent schedule.

use crate::model::schedule::{DaySchedule, ScheduleInvariantError};
use crate::model::word::{Word, WordId};
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod adjuster;
pub mod builder;
pub mod config;
pub mod distributor;

use adjuster::MoveOutcome;
use config::{ScheduleConfig, ScheduleConfigError};

pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Scheduling failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    Config(ScheduleConfigError),
    /// Distribution needs at least one word.
    EmptyPool,
    DayCountOutOfRange { day_count: u32, max_days: u32 },
    /// Internal error: a produced schedule broke an invariant.
    InvariantViolation(String),
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid schedule config: {err}"),
            Self::EmptyPool => write!(f, "word pool is empty"),
            Self::DayCountOutOfRange {
                day_count,
                max_days,
            } => write!(f, "day count {day_count} must be within 1..={max_days}"),
            Self::InvariantViolation(details) => {
                write!(f, "internal schedule invariant violated: {details}")
            }
        }
    }
}

impl Error for ScheduleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ScheduleConfigError> for ScheduleError {
    fn from(value: ScheduleConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<ScheduleInvariantError> for ScheduleError {
    fn from(value: ScheduleInvariantError) -> Self {
        Self::InvariantViolation(value.to_string())
    }
}

/// Passes `schedule` through only if every invariant holds.
pub(crate) fn checked(schedule: DaySchedule) -> ScheduleResult<DaySchedule> {
    if let Err(err) = schedule.validate() {
        error!(
            "event=schedule_check module=schedule status=error details={}",
            err
        );
        return Err(err.into());
    }
    Ok(schedule)
}

/// Scheduler facade bound to one policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler {
    config: ScheduleConfig,
}

impl Scheduler {
    /// Creates a scheduler after validating `config`.
    pub fn new(config: ScheduleConfig) -> ScheduleResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// New-word counts per day.
    pub fn distribute(&self, word_count: usize, day_count: u32) -> ScheduleResult<Vec<usize>> {
        distributor::distribute_with(&self.config, word_count, day_count)
    }

    /// Full schedule for `pool` in pool order.
    pub fn build(&self, pool: &[Word], day_count: u32) -> ScheduleResult<DaySchedule> {
        let ids: Vec<WordId> = pool.iter().map(|word| word.id).collect();
        builder::build_with(&self.config, &ids, day_count)
    }

    /// Moves one word's introduction day; see [`adjuster::move_word`].
    pub fn move_word(
        &self,
        schedule: &DaySchedule,
        word_id: WordId,
        from_day: u32,
        to_day: u32,
    ) -> ScheduleResult<MoveOutcome> {
        adjuster::move_word(schedule, word_id, from_day, to_day)
    }
}

/// New-word counts per day under the default policy.
pub fn distribute(word_count: usize, day_count: u32) -> ScheduleResult<Vec<usize>> {
    Scheduler::default().distribute(word_count, day_count)
}
