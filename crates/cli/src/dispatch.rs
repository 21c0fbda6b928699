//! Maps parsed commands onto scheduler operations.

use spool_core::{Job, JobId, Owner, SchedulerError};
use spool_scheduler::{QueueSnapshot, ScheduleEvent, Scheduler, SchedulerMetrics, Vacancy};

use crate::command::Command;

/// What a command produced, ready for the terminal to render.
#[derive(Debug, Clone)]
pub enum Reply {
    Added { job: Job, snapshot: QueueSnapshot },
    Executing { job: Job, snapshot: QueueSnapshot },
    Blocked { vacancy: Vacancy, snapshot: QueueSnapshot },
    Unblocked { jobs: Vec<Job>, snapshot: QueueSnapshot },
    Finished { vacancy: Vacancy, snapshot: QueueSnapshot },
    Found(Job),
    NotFound(JobId),
    Queues { snapshot: QueueSnapshot, json: bool },
    History(Vec<ScheduleEvent>),
    Stats(SchedulerMetrics),
    Help,
    Exit,
}

/// Run one command against the scheduler. Jobs are submitted as `owner`.
pub fn dispatch(
    scheduler: &mut Scheduler,
    owner: &Owner,
    command: Command,
) -> Result<Reply, SchedulerError> {
    let reply = match command {
        Command::Add {
            name,
            priority,
            estimated_time,
        } => {
            let job = scheduler.submit(name, priority, estimated_time, owner.clone())?;
            Reply::Added { job, snapshot: scheduler.snapshot() }
        }
        Command::Execute => {
            let job = scheduler.dispatch_next()?;
            Reply::Executing { job, snapshot: scheduler.snapshot() }
        }
        Command::Block => {
            let vacancy = scheduler.block()?;
            Reply::Blocked { vacancy, snapshot: scheduler.snapshot() }
        }
        Command::Unblock => {
            let jobs = scheduler.unblock()?;
            Reply::Unblocked { jobs, snapshot: scheduler.snapshot() }
        }
        Command::Done => {
            let vacancy = scheduler.complete()?;
            Reply::Finished { vacancy, snapshot: scheduler.snapshot() }
        }
        Command::View { id } => match scheduler.inspect(id) {
            Some(job) => Reply::Found(job.clone()),
            None => Reply::NotFound(id),
        },
        Command::Queues { json } => Reply::Queues { snapshot: scheduler.snapshot(), json },
        Command::History => Reply::History(scheduler.history().cloned().collect()),
        Command::Stats => Reply::Stats(scheduler.metrics().clone()),
        Command::Help => Reply::Help,
        Command::Exit => Reply::Exit,
    };
    Ok(reply)
}
