use spool_core::{Job, JobStatus, Owner, Result, SchedulerError};
use tracing::{debug, info};

use crate::events::ScheduleEvent;
use crate::queue::sort_by_priority;

use super::Scheduler;

/// Outcome of freeing the executing slot with block or complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacancy {
    /// The job that left the slot, with its new status.
    pub released: Job,
    /// The job auto-fill moved into the slot, if any.
    pub dispatched: Option<Job>,
}

impl Scheduler {
    /// Submit a new job. It enters the ready queue in priority order.
    ///
    /// Fails with [`SchedulerError::InvalidArgument`] if the name is blank or
    /// the estimated duration is not positive; nothing changes in that case.
    pub fn submit(
        &mut self,
        name: impl Into<String>,
        priority: i64,
        estimated_duration: i64,
        owner: Owner,
    ) -> Result<Job> {
        let name = name.into();
        if name.trim().is_empty() {
            debug!("Rejected submission with empty name");
            return Err(SchedulerError::InvalidArgument(
                "job name must not be empty".to_string(),
            ));
        }
        if estimated_duration <= 0 {
            debug!(name = %name, estimated_duration, "Rejected submission");
            return Err(SchedulerError::InvalidArgument(format!(
                "estimated time must be positive, got {estimated_duration}"
            )));
        }

        let id = self.next_id;
        self.next_id += 1;
        let tick = self.advance_clock();
        let job = Job::new(id, name, priority, owner, estimated_duration as u64, tick);

        self.ready.push(job.clone());
        self.history.record(ScheduleEvent::Submitted { job_id: id, priority, tick });
        self.metrics.record_submit();
        info!(job_id = id, name = %job.name, priority, "Job added to the ready queue");
        self.trace_snapshot();
        Ok(job)
    }

    /// Move the highest-priority ready job into the executing slot.
    ///
    /// Fails with [`SchedulerError::SlotOccupied`] while a job is executing,
    /// and with [`SchedulerError::NoReadyJob`] when nothing is ready.
    pub fn dispatch_next(&mut self) -> Result<Job> {
        if let Some(current) = &self.executing {
            debug!(job_id = current.id, "Dispatch refused, slot occupied");
            return Err(SchedulerError::SlotOccupied(current.id));
        }
        self.dispatch(false)
    }

    /// Block the executing job, then auto-fill the slot.
    pub fn block(&mut self) -> Result<Vacancy> {
        let mut job = self.executing.take().ok_or(SchedulerError::NoExecutingJob)?;
        job.status = JobStatus::Blocked;
        let tick = self.advance_clock();

        self.blocked.push(job.clone());
        self.history.record(ScheduleEvent::Blocked { job_id: job.id, tick });
        self.metrics.record_block();
        info!(job_id = job.id, name = %job.name, "Job blocked");

        let dispatched = self.fill_vacancy();
        self.trace_snapshot();
        Ok(Vacancy { released: job, dispatched })
    }

    /// Return every blocked job to the ready queue.
    ///
    /// Blocked jobs are merged in priority order and the ready queue is
    /// re-sorted, so they interleave with already-ready jobs by priority.
    /// Does not dispatch. Returns the unblocked jobs in merge order.
    pub fn unblock(&mut self) -> Result<Vec<Job>> {
        if self.blocked.is_empty() {
            return Err(SchedulerError::NoBlockedJobs);
        }

        let mut jobs = std::mem::take(&mut self.blocked);
        sort_by_priority(&mut jobs);
        for job in &mut jobs {
            job.status = JobStatus::Ready;
        }
        let tick = self.advance_clock();

        let job_ids: Vec<_> = jobs.iter().map(|j| j.id).collect();
        self.ready.extend(jobs.iter().cloned());
        self.metrics.record_unblock(jobs.len());
        info!(job_ids = ?job_ids, "Jobs unblocked");
        self.history.record(ScheduleEvent::Unblocked { job_ids, tick });
        self.trace_snapshot();
        Ok(jobs)
    }

    /// Finish the executing job, discard it, then auto-fill the slot.
    pub fn complete(&mut self) -> Result<Vacancy> {
        let mut job = self.executing.take().ok_or(SchedulerError::NoExecutingJob)?;
        job.status = JobStatus::Done;
        let tick = self.advance_clock();

        self.history.record(ScheduleEvent::Completed { job_id: job.id, tick });
        self.metrics.record_completion(job.estimated_duration);
        info!(job_id = job.id, name = %job.name, "Job finished");

        let dispatched = self.fill_vacancy();
        self.trace_snapshot();
        Ok(Vacancy { released: job, dispatched })
    }

    /// Auto-fill on vacancy: after block or complete empties the slot,
    /// dispatch the next ready job so the printer does not sit idle.
    /// An empty ready queue just leaves the slot empty.
    fn fill_vacancy(&mut self) -> Option<Job> {
        if !self.config.auto_fill_on_vacancy {
            return None;
        }
        match self.dispatch(true) {
            Ok(job) => Some(job),
            Err(e) => {
                debug!(reason = %e, "Slot left empty");
                None
            }
        }
    }

    // Caller guarantees the slot is empty.
    fn dispatch(&mut self, auto_fill: bool) -> Result<Job> {
        let mut job = self.ready.pop_front().ok_or(SchedulerError::NoReadyJob)?;
        job.status = JobStatus::Executing;
        let tick = self.advance_clock();

        self.executing = Some(job.clone());
        self.history.record(ScheduleEvent::Dispatched { job_id: job.id, auto_fill, tick });
        self.metrics.record_dispatch(auto_fill);
        info!(job_id = job.id, name = %job.name, auto_fill, "Job executing");
        if !auto_fill {
            self.trace_snapshot();
        }
        Ok(job)
    }
}
