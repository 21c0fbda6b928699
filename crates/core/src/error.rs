use thiserror::Error;

use crate::job::JobId;

/// Errors returned by scheduler operations.
///
/// None of these are fatal: a failed operation leaves the scheduler exactly
/// as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No process is currently executing")]
    NoExecutingJob,

    #[error("No blocked processes")]
    NoBlockedJobs,

    #[error("No processes to execute")]
    NoReadyJob,

    #[error("Process {0} is already executing")]
    SlotOccupied(JobId),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
