use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use spool_core::{JobId, Tick};

/// A scheduling transition, stamped with the logical tick it happened at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleEvent {
    Submitted { job_id: JobId, priority: i64, tick: Tick },
    Dispatched { job_id: JobId, auto_fill: bool, tick: Tick },
    Blocked { job_id: JobId, tick: Tick },
    Unblocked { job_ids: Vec<JobId>, tick: Tick },
    Completed { job_id: JobId, tick: Tick },
}

impl ScheduleEvent {
    pub fn tick(&self) -> Tick {
        match self {
            ScheduleEvent::Submitted { tick, .. }
            | ScheduleEvent::Dispatched { tick, .. }
            | ScheduleEvent::Blocked { tick, .. }
            | ScheduleEvent::Unblocked { tick, .. }
            | ScheduleEvent::Completed { tick, .. } => *tick,
        }
    }
}

impl std::fmt::Display for ScheduleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleEvent::Submitted { job_id, priority, tick } => {
                write!(f, "[{tick}] submitted {job_id} (priority {priority})")
            }
            ScheduleEvent::Dispatched { job_id, auto_fill, tick } => {
                if *auto_fill {
                    write!(f, "[{tick}] dispatched {job_id} (auto-fill)")
                } else {
                    write!(f, "[{tick}] dispatched {job_id}")
                }
            }
            ScheduleEvent::Blocked { job_id, tick } => write!(f, "[{tick}] blocked {job_id}"),
            ScheduleEvent::Unblocked { job_ids, tick } => {
                let ids: Vec<String> = job_ids.iter().map(|id| id.to_string()).collect();
                write!(f, "[{tick}] unblocked {}", ids.join(", "))
            }
            ScheduleEvent::Completed { job_id, tick } => write!(f, "[{tick}] completed {job_id}"),
        }
    }
}

/// Upper bound on slots reserved up front; larger histories grow on demand.
const PREALLOCATED_EVENTS: usize = 64;

/// Bounded event history, newest at the back.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: VecDeque<ScheduleEvent>,
    capacity: usize,
}

impl EventLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.min(PREALLOCATED_EVENTS)),
            capacity,
        }
    }

    pub fn record(&mut self, event: ScheduleEvent) {
        if self.capacity == 0 {
            return;
        }
        while self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduleEvent> {
        self.events.iter()
    }
}
