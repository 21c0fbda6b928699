//! Scheduler runner -- the engine that owns the queues and the executing slot.
//!
//! Split into focused submodules:
//! - `core`: Scheduler struct, constructor, and read-only accessors
//! - `transitions`: submit, dispatch, block, unblock, complete
mod core;
mod transitions;

pub use self::core::Scheduler;
pub use self::transitions::Vacancy;
