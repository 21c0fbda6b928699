use std::collections::VecDeque;

use spool_core::{Job, JobId};

/// Ready jobs ordered ascending by priority.
///
/// Ordering is stable: jobs with equal priority keep the order in which
/// they entered (or re-entered) the queue. The front is always the next job
/// to dispatch.
#[derive(Debug, Default, Clone)]
pub struct ReadyQueue {
    jobs: VecDeque<Job>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a job and restore priority order.
    pub fn push(&mut self, job: Job) {
        self.jobs.push_back(job);
        self.resort();
    }

    /// Append several jobs in the given order, then restore priority order once.
    pub fn extend(&mut self, jobs: impl IntoIterator<Item = Job>) {
        self.jobs.extend(jobs);
        self.resort();
    }

    /// Remove the highest-priority job.
    pub fn pop_front(&mut self) -> Option<Job> {
        self.jobs.pop_front()
    }

    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }

    pub fn ids(&self) -> Vec<JobId> {
        self.jobs.iter().map(|j| j.id).collect()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    // `sort_by_key` is stable, which keeps FIFO order among equal priorities.
    fn resort(&mut self) {
        self.jobs.make_contiguous().sort_by_key(|j| j.priority);
    }
}

/// Stable sort of a job list ascending by priority.
pub(crate) fn sort_by_priority(jobs: &mut [Job]) {
    jobs.sort_by_key(|j| j.priority);
}
