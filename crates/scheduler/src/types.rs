use serde::{Deserialize, Serialize};

/// Scheduler configuration, typically parsed from the `[scheduler]` table of
/// the CLI config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Dispatch the next ready job as soon as block or complete frees the
    /// executing slot.
    #[serde(default = "default_auto_fill")]
    pub auto_fill_on_vacancy: bool,
    /// Number of schedule events kept in the history (oldest dropped first).
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_auto_fill() -> bool { true }
fn default_history_capacity() -> usize { 64 }

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            auto_fill_on_vacancy: default_auto_fill(),
            history_capacity: default_history_capacity(),
        }
    }
}

impl SchedulerConfig {
    pub fn with_auto_fill(mut self, enabled: bool) -> Self {
        self.auto_fill_on_vacancy = enabled;
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}
