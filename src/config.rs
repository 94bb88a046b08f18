//! Runtime configuration for the CRM core.

use crate::dashboard::PriorPeriod;
use crate::lifecycle::VisitStatusPolicy;
use serde::{Deserialize, Serialize};

/// Tunables shared by the lifecycle and dashboard layers.
///
/// # Examples
///
/// ```
/// use realtyflow::config::CrmConfig;
/// use realtyflow::lifecycle::VisitStatusPolicy;
///
/// let config = CrmConfig::default();
/// assert_eq!(config.visit_policy, VisitStatusPolicy::AlwaysSchedule);
/// assert_eq!(config.follow_up_after_days, 7);
///
/// let cautious = CrmConfig::default().with_visit_policy(VisitStatusPolicy::KeepClosed);
/// assert_eq!(cautious.visit_policy, VisitStatusPolicy::KeepClosed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrmConfig {
    /// Status rule applied when a visit is saved.
    pub visit_policy: VisitStatusPolicy,
    /// Days without contact after which a lead needs follow-up.
    pub follow_up_after_days: u32,
    /// Reference values for stat card trends.
    pub prior_period: PriorPeriod,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            visit_policy: VisitStatusPolicy::AlwaysSchedule,
            follow_up_after_days: 7,
            prior_period: PriorPeriod::default(),
        }
    }
}

impl CrmConfig {
    /// Replaces the visit status policy.
    #[must_use]
    pub const fn with_visit_policy(mut self, visit_policy: VisitStatusPolicy) -> Self {
        self.visit_policy = visit_policy;
        self
    }

    /// Replaces the follow-up threshold.
    #[must_use]
    pub const fn with_follow_up_after_days(mut self, days: u32) -> Self {
        self.follow_up_after_days = days;
        self
    }

    /// Replaces the trend reference values.
    #[must_use]
    pub const fn with_prior_period(mut self, prior_period: PriorPeriod) -> Self {
        self.prior_period = prior_period;
        self
    }
}
