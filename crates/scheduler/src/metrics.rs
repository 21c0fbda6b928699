use serde::Serialize;

/// Transition counters for the `stats` view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchedulerMetrics {
    pub jobs_submitted: u64,
    /// Includes dispatches made by auto-fill.
    pub jobs_dispatched: u64,
    pub auto_fill_dispatches: u64,
    pub jobs_blocked: u64,
    pub jobs_unblocked: u64,
    pub jobs_completed: u64,
    /// Sum of estimated durations of completed jobs.
    pub work_completed: u64,
}

impl SchedulerMetrics {
    pub fn record_submit(&mut self) {
        self.jobs_submitted += 1;
    }

    pub fn record_dispatch(&mut self, auto_fill: bool) {
        self.jobs_dispatched += 1;
        if auto_fill {
            self.auto_fill_dispatches += 1;
        }
    }

    pub fn record_block(&mut self) {
        self.jobs_blocked += 1;
    }

    pub fn record_unblock(&mut self, count: usize) {
        self.jobs_unblocked += count as u64;
    }

    pub fn record_completion(&mut self, estimated_duration: u64) {
        self.jobs_completed += 1;
        self.work_completed = self.work_completed.saturating_add(estimated_duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics() {
        let m = SchedulerMetrics::default();
        assert_eq!(m.jobs_submitted, 0);
        assert_eq!(m.work_completed, 0);
    }

    #[test]
    fn dispatch_counts_auto_fill_separately() {
        let mut m = SchedulerMetrics::default();
        m.record_dispatch(false);
        m.record_dispatch(true);
        assert_eq!(m.jobs_dispatched, 2);
        assert_eq!(m.auto_fill_dispatches, 1);
    }

    #[test]
    fn completion_accumulates_work() {
        let mut m = SchedulerMetrics::default();
        m.record_completion(5);
        m.record_completion(7);
        assert_eq!(m.jobs_completed, 2);
        assert_eq!(m.work_completed, 12);
    }
}
