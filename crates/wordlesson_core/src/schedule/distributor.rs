//! New-word distribution across lesson days.
//!
//! # Invariants
//! - Counts sum to the word count and are never negative.
//! - The final day introduces nothing when there is more than one day.
//! - Day 1 gets `round(ratio * N)` words, at least one.
//! - Middle days decay geometrically; rounding drift lands on the last
//!   middle day, and a negative last day pushes its shortfall backward.

use crate::schedule::config::ScheduleConfig;
use crate::schedule::{ScheduleError, ScheduleResult};
use log::{debug, error};

/// Returns the number of new words introduced on each of `day_count` days.
pub fn distribute_with(
    config: &ScheduleConfig,
    word_count: usize,
    day_count: u32,
) -> ScheduleResult<Vec<usize>> {
    config.validate()?;
    if word_count == 0 {
        return Err(ScheduleError::EmptyPool);
    }
    if day_count == 0 || day_count > config.max_days {
        return Err(ScheduleError::DayCountOutOfRange {
            day_count,
            max_days: config.max_days,
        });
    }

    let days = day_count as usize;
    let mut counts = vec![0usize; days];
    if days <= 2 {
        // Day 2 of a two-day lesson is review-only.
        counts[0] = word_count;
    } else {
        let first = front_load_count(word_count, config.front_load_ratio);
        counts[0] = first;
        let middle = spread_over_middle_days(word_count - first, days - 2, config.decay)?;
        counts[1..days - 1].copy_from_slice(&middle);
    }

    check_distribution(&counts, word_count)?;
    debug!(
        "event=distribute module=schedule status=ok words={} days={} counts={:?}",
        word_count, day_count, counts
    );
    Ok(counts)
}

fn front_load_count(word_count: usize, ratio: f64) -> usize {
    let rounded = (word_count as f64 * ratio).round() as usize;
    rounded.clamp(1, word_count)
}

fn spread_over_middle_days(
    remaining: usize,
    middle_days: usize,
    decay: f64,
) -> ScheduleResult<Vec<usize>> {
    let weights: Vec<f64> = (0..middle_days).map(|k| decay.powi(k as i32)).collect();
    let total: f64 = weights.iter().sum();
    let mut counts: Vec<i64> = weights
        .iter()
        .map(|weight| (remaining as f64 * weight / total).round() as i64)
        .collect();

    let drift = remaining as i64 - counts.iter().sum::<i64>();
    if let Some(last) = counts.last_mut() {
        *last += drift;
    }
    for index in (1..counts.len()).rev() {
        if counts[index] < 0 {
            counts[index - 1] += counts[index];
            counts[index] = 0;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(offset, count)| {
            usize::try_from(count).map_err(|_| {
                invariant_violation(format!(
                    "day {} received negative count {count}",
                    offset + 2
                ))
            })
        })
        .collect()
}

fn check_distribution(counts: &[usize], word_count: usize) -> ScheduleResult<()> {
    let total: usize = counts.iter().sum();
    if total != word_count {
        return Err(invariant_violation(format!(
            "distribution sums to {total}, expected {word_count}"
        )));
    }
    if counts.len() > 1 && counts.last().copied().unwrap_or(0) != 0 {
        return Err(invariant_violation(
            "final day received new words".to_string(),
        ));
    }
    Ok(())
}

fn invariant_violation(details: String) -> ScheduleError {
    error!(
        "event=distribute module=schedule status=error details={}",
        details
    );
    ScheduleError::InvariantViolation(details)
}

#[cfg(test)]
mod tests {
    use super::{distribute_with, front_load_count, spread_over_middle_days};
    use crate::schedule::config::ScheduleConfig;
    use crate::schedule::ScheduleError;

    fn run(word_count: usize, day_count: u32) -> Vec<usize> {
        distribute_with(&ScheduleConfig::default(), word_count, day_count)
            .expect("valid input must distribute")
    }

    #[test]
    fn ten_words_over_five_days() {
        assert_eq!(run(10, 5), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn one_and_two_day_lessons_introduce_everything_on_day_one() {
        assert_eq!(run(7, 1), vec![7]);
        assert_eq!(run(5, 2), vec![5, 0]);
    }

    #[test]
    fn negative_last_middle_day_pushes_shortfall_backward() {
        // Raw middle rounding for 6 words over 5 days is [3, 2, 1, 1, 0].
        assert_eq!(run(10, 7), vec![4, 3, 2, 1, 0, 0, 0]);
        assert_eq!(spread_over_middle_days(6, 5, 0.6).expect("spread"), vec![3, 2, 1, 0, 0]);
    }

    #[test]
    fn front_load_is_at_least_one() {
        assert_eq!(front_load_count(1, 0.4), 1);
        assert_eq!(front_load_count(2, 0.4), 1);
        assert_eq!(front_load_count(25, 0.4), 10);
        assert_eq!(run(1, 3), vec![1, 0, 0]);
    }

    #[test]
    fn rejects_empty_pool_and_out_of_range_days() {
        let config = ScheduleConfig::default();
        assert!(matches!(
            distribute_with(&config, 0, 3),
            Err(ScheduleError::EmptyPool)
        ));
        assert!(matches!(
            distribute_with(&config, 5, 0),
            Err(ScheduleError::DayCountOutOfRange { day_count: 0, .. })
        ));
        assert!(matches!(
            distribute_with(&config, 5, 11),
            Err(ScheduleError::DayCountOutOfRange { day_count: 11, max_days: 10 })
        ));
    }

    #[test]
    fn decay_is_tunable() {
        let flat = ScheduleConfig {
            decay: 1.0,
            ..ScheduleConfig::default()
        };
        assert_eq!(
            distribute_with(&flat, 10, 5).expect("flat decay"),
            vec![4, 2, 2, 2, 0]
        );
    }
}
