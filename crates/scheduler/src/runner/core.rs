use spool_core::{Job, JobId, Tick};
use tracing::debug;

use crate::events::{EventLog, ScheduleEvent};
use crate::metrics::SchedulerMetrics;
use crate::queue::ReadyQueue;
use crate::snapshot::QueueSnapshot;
use crate::types::SchedulerConfig;

/// The printer scheduler. Owns the ready queue, the blocked queue and the
/// single executing slot.
///
/// Every live job sits in exactly one of the three places, and its status
/// matches that place. Completed jobs are dropped.
#[derive(Debug)]
pub struct Scheduler {
    pub(super) config: SchedulerConfig,
    pub(super) ready: ReadyQueue,
    /// Blocked jobs in the order they were blocked.
    pub(super) blocked: Vec<Job>,
    pub(super) executing: Option<Job>,
    /// Next id to hand out. Never reused.
    pub(super) next_id: JobId,
    /// Logical clock, one tick per transition.
    pub(super) clock: Tick,
    pub(super) history: EventLog,
    pub(super) metrics: SchedulerMetrics,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl Scheduler {
    /// Create an empty scheduler.
    pub fn new(config: SchedulerConfig) -> Self {
        debug!(?config, "Scheduler created");
        Self {
            history: EventLog::with_capacity(config.history_capacity),
            config,
            ready: ReadyQueue::new(),
            blocked: Vec::new(),
            executing: None,
            next_id: 1,
            clock: 0,
            metrics: SchedulerMetrics::default(),
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Look up a live job by id across the ready queue, the blocked queue
    /// and the executing slot. Completed jobs are not found.
    pub fn inspect(&self, id: JobId) -> Option<&Job> {
        self.ready
            .get(id)
            .or_else(|| self.blocked.iter().find(|j| j.id == id))
            .or_else(|| self.executing.as_ref().filter(|j| j.id == id))
    }

    /// Ready jobs in dispatch order.
    pub fn ready_jobs(&self) -> impl Iterator<Item = &Job> {
        self.ready.iter()
    }

    pub fn blocked_jobs(&self) -> &[Job] {
        &self.blocked
    }

    pub fn executing(&self) -> Option<&Job> {
        self.executing.as_ref()
    }

    pub fn clock(&self) -> Tick {
        self.clock
    }

    pub fn metrics(&self) -> &SchedulerMetrics {
        &self.metrics
    }

    /// Recent transitions, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &ScheduleEvent> {
        self.history.iter()
    }

    /// Number of live jobs across all three places.
    pub fn live_jobs(&self) -> usize {
        self.ready.len() + self.blocked.len() + usize::from(self.executing.is_some())
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            tick: self.clock,
            ready: self.ready.ids(),
            blocked: self.blocked.iter().map(|j| j.id).collect(),
            executing: self.executing.as_ref().map(|j| j.id),
        }
    }

    pub(super) fn advance_clock(&mut self) -> Tick {
        self.clock += 1;
        self.clock
    }

    /// Emit the current queue state for anyone tracing at debug level.
    pub(super) fn trace_snapshot(&self) {
        let snap = self.snapshot();
        debug!(
            tick = snap.tick,
            ready = ?snap.ready,
            blocked = ?snap.blocked,
            executing = ?snap.executing,
            "Queue snapshot"
        );
    }
}
