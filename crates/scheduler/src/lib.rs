//! Single-printer job scheduling engine.
//!
//! Jobs wait in a priority-ordered ready queue, occupy the one executing
//! slot when dispatched, and may be parked in a blocked queue until they are
//! unblocked. Block and complete refill the slot from the ready queue when
//! auto-fill on vacancy is enabled.

pub mod events;
pub mod metrics;
pub mod queue;
pub mod runner;
pub mod shared;
pub mod snapshot;
pub mod types;

pub use events::{EventLog, ScheduleEvent};
pub use metrics::SchedulerMetrics;
pub use queue::ReadyQueue;
pub use runner::{Scheduler, Vacancy};
pub use shared::{SharedScheduler, new_shared_scheduler};
pub use snapshot::QueueSnapshot;
pub use types::SchedulerConfig;
