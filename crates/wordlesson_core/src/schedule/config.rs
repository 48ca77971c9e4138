//! Tunable scheduling policy.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Share of the pool introduced on day 1.
pub const DEFAULT_FRONT_LOAD_RATIO: f64 = 0.4;
/// Decay constant between consecutive middle days.
pub const DEFAULT_DECAY: f64 = 0.6;
/// Longest supported lesson.
pub const DEFAULT_MAX_DAYS: u32 = 10;

/// Distribution policy knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub front_load_ratio: f64,
    pub decay: f64,
    pub max_days: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            front_load_ratio: DEFAULT_FRONT_LOAD_RATIO,
            decay: DEFAULT_DECAY,
            max_days: DEFAULT_MAX_DAYS,
        }
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScheduleConfigError {
    FrontLoadRatio(f64),
    Decay(f64),
    MaxDays(u32),
}

impl Display for ScheduleConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FrontLoadRatio(value) => {
                write!(f, "front_load_ratio must be in (0, 1], got {value}")
            }
            Self::Decay(value) => write!(f, "decay must be in (0, 1], got {value}"),
            Self::MaxDays(value) => write!(f, "max_days must be at least 1, got {value}"),
        }
    }
}

impl Error for ScheduleConfigError {}

impl ScheduleConfig {
    pub fn validate(&self) -> Result<(), ScheduleConfigError> {
        if !(self.front_load_ratio > 0.0 && self.front_load_ratio <= 1.0) {
            return Err(ScheduleConfigError::FrontLoadRatio(self.front_load_ratio));
        }
        if !(self.decay > 0.0 && self.decay <= 1.0) {
            return Err(ScheduleConfigError::Decay(self.decay));
        }
        if self.max_days == 0 {
            return Err(ScheduleConfigError::MaxDays(self.max_days));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ScheduleConfig, ScheduleConfigError};

    #[test]
    fn default_config_is_valid() {
        let config = ScheduleConfig::default();
        config.validate().expect("defaults must validate");
        assert_eq!(config.max_days, 10);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let config = ScheduleConfig {
            decay: 0.0,
            ..ScheduleConfig::default()
        };
        assert_eq!(config.validate(), Err(ScheduleConfigError::Decay(0.0)));

        let config = ScheduleConfig {
            front_load_ratio: f64::NAN,
            ..ScheduleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScheduleConfigError::FrontLoadRatio(_))
        ));
    }
}
