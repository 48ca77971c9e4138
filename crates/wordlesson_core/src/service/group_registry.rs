//! Activity group registry.
//!
//! # Responsibility
//! - Track which activities are enabled for each named group.
//! - Validate toggle changes before they become canonical.
//!
//! # Invariants
//! - Every group has at least one activity enabled after every call.
//! - A rejected change leaves state untouched.

use crate::model::group::{ActivityToggles, GroupId};
use crate::model::word::Activity;
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a toggle change was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleRejection {
    /// The change would leave every activity disabled.
    WouldDisableAll { group: GroupId, activity: Activity },
    /// A restored toggle state has every activity disabled.
    NoActivityEnabled { group: GroupId },
}

impl Display for ToggleRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WouldDisableAll { group, .. } => write!(
                f,
                "Select at least one activity for the {group} group."
            ),
            Self::NoActivityEnabled { group } => {
                write!(f, "group {group} has no enabled activity")
            }
        }
    }
}

impl Error for ToggleRejection {}

/// Result of one toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub accepted: bool,
    /// Canonical toggle state after the call.
    pub state: ActivityToggles,
    pub rejection: Option<ToggleRejection>,
}

/// Per-group toggle registry.
#[derive(Debug, Clone)]
pub struct GroupRegistry {
    toggles: BTreeMap<GroupId, ActivityToggles>,
}

impl Default for GroupRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupRegistry {
    /// Creates a registry with every group on its namesake activity.
    pub fn new() -> Self {
        let toggles = GroupId::all()
            .iter()
            .map(|group| (*group, ActivityToggles::default_for(*group)))
            .collect();
        Self { toggles }
    }

    /// Current toggle state of one group.
    pub fn state(&self, group: GroupId) -> ActivityToggles {
        self.toggles
            .get(&group)
            .copied()
            .unwrap_or_else(|| ActivityToggles::default_for(group))
    }

    /// Applies one switch change unless it would disable every activity.
    pub fn set_toggle(
        &mut self,
        group: GroupId,
        activity: Activity,
        enabled: bool,
    ) -> ToggleOutcome {
        let current = self.state(group);
        let next = current.with(activity, enabled);
        if !next.any_enabled() {
            warn!(
                "event=toggle_set module=registry status=rejected group={} activity={} enabled={}",
                group, activity, enabled
            );
            return ToggleOutcome {
                accepted: false,
                state: current,
                rejection: Some(ToggleRejection::WouldDisableAll { group, activity }),
            };
        }

        self.toggles.insert(group, next);
        info!(
            "event=toggle_set module=registry status=ok group={} activity={} enabled={}",
            group, activity, enabled
        );
        ToggleOutcome {
            accepted: true,
            state: next,
            rejection: None,
        }
    }

    /// Replaces a whole toggle state (restore path).
    pub fn restore_state(
        &mut self,
        group: GroupId,
        state: ActivityToggles,
    ) -> Result<(), ToggleRejection> {
        if !state.any_enabled() {
            return Err(ToggleRejection::NoActivityEnabled { group });
        }
        self.toggles.insert(group, state);
        Ok(())
    }

    /// Snapshot of every group in stable order.
    pub fn states(&self) -> Vec<(GroupId, ActivityToggles)> {
        GroupId::all()
            .iter()
            .map(|group| (*group, self.state(*group)))
            .collect()
    }
}
