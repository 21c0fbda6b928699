use serde::Serialize;
use spool_core::{JobId, Tick};

/// Read-only view of the scheduler's collections at one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueSnapshot {
    pub tick: Tick,
    /// Ready job ids in dispatch order.
    pub ready: Vec<JobId>,
    pub blocked: Vec<JobId>,
    pub executing: Option<JobId>,
}

impl QueueSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn join_ids(ids: &[JobId]) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}

impl std::fmt::Display for QueueSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Ready Queue: {}", join_ids(&self.ready))?;
        writeln!(f, "Blocked Queue: {}", join_ids(&self.blocked))?;
        match self.executing {
            Some(id) => write!(f, "Executing Process: {id}"),
            None => write!(f, "Executing Process: None"),
        }
    }
}
