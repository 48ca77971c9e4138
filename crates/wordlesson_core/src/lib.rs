//! Core domain logic for word-list lessons.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::group::{ActivityToggles, GroupId, IntakeChannel};
pub use model::lesson::{GroupRecord, LessonRecord, LessonRecordError};
pub use model::schedule::{DayPlan, DaySchedule, ScheduleInvariantError};
pub use model::word::{Activity, Word, WordId, WordRecord, WordValidationError};
pub use repo::word_store::{StoreError, WordStore};
pub use schedule::adjuster::{MoveOutcome, MoveRejection};
pub use schedule::config::{ScheduleConfig, ScheduleConfigError};
pub use schedule::{distribute, ScheduleError, ScheduleResult, Scheduler};
pub use service::chip_service::ChipEngine;
pub use service::group_registry::{GroupRegistry, ToggleOutcome, ToggleRejection};
pub use service::staging::{tokenize, tokenize_file, StagingBuffer};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
