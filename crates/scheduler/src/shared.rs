use std::sync::{Arc, Mutex};

use crate::runner::Scheduler;
use crate::types::SchedulerConfig;

/// Thread-safe handle to a scheduler.
///
/// The queue invariants only hold between whole operations, so every
/// operation, including the auto-fill chained from block and complete, runs
/// under the one mutex.
pub type SharedScheduler = Arc<Mutex<Scheduler>>;

/// Create a new shared scheduler.
pub fn new_shared_scheduler(config: SchedulerConfig) -> SharedScheduler {
    Arc::new(Mutex::new(Scheduler::new(config)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use spool_core::Owner;

    use super::*;

    #[test]
    fn concurrent_submissions_get_unique_ids() {
        let shared = new_shared_scheduler(SchedulerConfig::default());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    (0..25)
                        .map(|i| {
                            let mut s = shared.lock().unwrap();
                            s.submit(format!("t{t}-{i}"), i % 3, 1, Owner::default())
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for h in handles {
            for id in h.join().unwrap() {
                assert!(ids.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(ids.len(), 100);
        assert_eq!(shared.lock().unwrap().live_jobs(), 100);
    }
}
