use serde::{Deserialize, Serialize};

/// Job identifier, unique for the lifetime of a scheduler.
pub type JobId = u64;

/// Logical time: one tick per scheduler transition.
pub type Tick = u64;

/// Lifecycle status of a job.
///
/// The status always matches where the job is held: the ready queue, the
/// blocked queue, the executing slot, or nowhere once `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    Ready,
    Blocked,
    Executing,
    Done,
}

impl JobStatus {
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Ready => "Ready",
            JobStatus::Blocked => "Blocked",
            JobStatus::Executing => "Executing",
            JobStatus::Done => "Done",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The entity that submitted a job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
}

impl Owner {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for Owner {
    fn default() -> Self {
        Self::new("Console User")
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A unit of print work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub name: String,
    /// Lower value is dispatched first.
    pub priority: i64,
    pub owner: Owner,
    /// Logical time units. Metadata only, nothing counts it down.
    pub estimated_duration: u64,
    pub status: JobStatus,
    pub submitted_at: Tick,
}

impl Job {
    /// Build a freshly submitted job in the `Ready` state.
    pub fn new(
        id: JobId,
        name: String,
        priority: i64,
        owner: Owner,
        estimated_duration: u64,
        submitted_at: Tick,
    ) -> Self {
        Self {
            id,
            name,
            priority,
            owner,
            estimated_duration,
            status: JobStatus::Ready,
            submitted_at,
        }
    }

    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }
}
