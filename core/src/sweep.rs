use crate::store::TaskStore;

/// Result of asking the sweep to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The sweep is now running; the first tick is due immediately.
    Started,
    /// A sweep is already in progress; the request is ignored.
    AlreadyRunning,
    /// There is nothing to complete; the sweep stays idle.
    NothingToDo,
}

/// Result of one sweep tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The task with this id was just completed; another tick should be
    /// scheduled after the pacing interval.
    Completed(u64),
    /// No pending tasks remain; the sweep has returned to idle.
    AllComplete,
    /// The sweep was not running; nothing happened.
    Idle,
}

/// Sequential completion driver: once started it completes pending tasks one
/// per tick, lowest priority rank first (id breaks ties), until none remain.
///
/// The sweep itself is clock-free. Pacing belongs to the caller: the event
/// loop invokes `tick` immediately after a successful `start` and then once
/// per fixed interval. There is no cancellation; a sweep runs to completion.
#[derive(Debug, Default)]
pub struct Sweep {
    running: bool,
}

impl Sweep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self, store: &TaskStore) -> StartOutcome {
        if self.running {
            return StartOutcome::AlreadyRunning;
        }
        if store.incomplete_sorted().is_empty() {
            return StartOutcome::NothingToDo;
        }
        self.running = true;
        StartOutcome::Started
    }

    pub fn tick(&mut self, store: &mut TaskStore) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        match store.incomplete_sorted().first() {
            Some(next) => {
                let id = next.id;
                store.complete(id);
                TickOutcome::Completed(id)
            }
            None => {
                self.running = false;
                TickOutcome::AllComplete
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;

    fn store_with(priorities: &[Priority]) -> TaskStore {
        let mut store = TaskStore::new();
        for (i, p) in priorities.iter().enumerate() {
            store.add(format!("task {}", i + 1), String::new(), None, *p);
        }
        store
    }

    #[test]
    fn test_sweep_completes_in_priority_then_id_order() {
        // id=1 low, id=2 high, id=3 high
        let mut store = store_with(&[Priority::Low, Priority::High, Priority::High]);
        let mut sweep = Sweep::new();

        assert_eq!(sweep.start(&store), StartOutcome::Started);
        assert_eq!(sweep.tick(&mut store), TickOutcome::Completed(2));
        assert_eq!(sweep.tick(&mut store), TickOutcome::Completed(3));
        assert_eq!(sweep.tick(&mut store), TickOutcome::Completed(1));
        assert_eq!(sweep.tick(&mut store), TickOutcome::AllComplete);
        assert!(!sweep.is_running());
        assert!(store.incomplete_sorted().is_empty());
    }

    #[test]
    fn test_start_with_no_pending_tasks_is_rejected() {
        let mut store = store_with(&[Priority::Medium]);
        store.complete(1);
        let mut sweep = Sweep::new();

        assert_eq!(sweep.start(&store), StartOutcome::NothingToDo);
        assert!(!sweep.is_running());
        assert_eq!(sweep.tick(&mut store), TickOutcome::Idle);
    }

    #[test]
    fn test_start_while_running_has_no_effect() {
        let mut store = store_with(&[Priority::Medium, Priority::Medium]);
        let mut sweep = Sweep::new();

        assert_eq!(sweep.start(&store), StartOutcome::Started);
        assert_eq!(sweep.start(&store), StartOutcome::AlreadyRunning);

        // Exactly one completion per tick, no duplicates from the second start.
        assert_eq!(sweep.tick(&mut store), TickOutcome::Completed(1));
        assert_eq!(store.incomplete_sorted().len(), 1);
        assert_eq!(sweep.tick(&mut store), TickOutcome::Completed(2));
        assert_eq!(sweep.tick(&mut store), TickOutcome::AllComplete);
    }

    #[test]
    fn test_tasks_added_mid_sweep_are_picked_up() {
        let mut store = store_with(&[Priority::Low]);
        let mut sweep = Sweep::new();

        assert_eq!(sweep.start(&store), StartOutcome::Started);
        let added = store.add("urgent".to_string(), String::new(), None, Priority::High);
        // The tick recomputes the ordering, so the new high task goes first.
        assert_eq!(sweep.tick(&mut store), TickOutcome::Completed(added));
        assert_eq!(sweep.tick(&mut store), TickOutcome::Completed(1));
        assert_eq!(sweep.tick(&mut store), TickOutcome::AllComplete);
    }
}
