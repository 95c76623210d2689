//! Configuration for the scheduling engine.

/// Tunable knobs for critical path computation.
#[derive(Clone, Debug)]
pub struct ScheduleConfig {
    /// Slack at or below this threshold marks a task critical.
    ///
    /// A tolerance band rather than strict zero, to absorb day-rounding
    /// noise in caller-supplied durations.
    pub critical_slack_tolerance: f64,
    /// Duration for tasks with no estimate, no date window, and no
    /// complexity level.
    pub default_duration_days: f64,
    /// Verbosity level: 0=silent, 1=passes, 2=tasks, 3=debug.
    pub verbosity: u8,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            critical_slack_tolerance: 0.5,
            default_duration_days: 3.0,
            verbosity: 0,
        }
    }
}
