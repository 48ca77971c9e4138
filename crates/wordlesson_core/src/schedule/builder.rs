//! Initial day schedule construction.

use crate::model::schedule::DaySchedule;
use crate::model::word::WordId;
use crate::schedule::config::ScheduleConfig;
use crate::schedule::distributor::distribute_with;
use crate::schedule::{checked, ScheduleResult};
use log::info;

/// Assigns pooled word ids to introduction days in pool order and derives
/// the review closure.
pub fn build_with(
    config: &ScheduleConfig,
    word_ids: &[WordId],
    day_count: u32,
) -> ScheduleResult<DaySchedule> {
    let counts = distribute_with(config, word_ids.len(), day_count)?;

    let mut remaining = word_ids;
    let mut new_lists = Vec::with_capacity(counts.len());
    for count in counts {
        let (today, rest) = remaining.split_at(count);
        new_lists.push(today.to_vec());
        remaining = rest;
    }

    let schedule = checked(DaySchedule::from_introductions(new_lists))?;
    info!(
        "event=schedule_build module=schedule status=ok words={} days={}",
        word_ids.len(),
        day_count
    );
    Ok(schedule)
}
