use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::nav::{Schedule, Scheduled, Scheduler, Step};

/// Handles of timers that may still fire.
///
/// Each entry carries a flag its callback sets when it runs; fired entries are
/// dropped the next time something is inserted, so the set only ever holds
/// what is pending plus the last batch.
pub struct PendingSet<T> {
    entries: Vec<(Rc<Cell<bool>>, T)>,
}

impl<T> Default for PendingSet<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> PendingSet<T> {
    /// `start` receives the flag to set once the timer has fired.
    pub fn insert(&mut self, start: impl FnOnce(Rc<Cell<bool>>) -> T) {
        self.prune();
        let fired = Rc::new(Cell::new(false));
        let handle = start(fired.clone());
        self.entries.push((fired, handle));
    }

    pub fn prune(&mut self) {
        self.entries.retain(|(fired, _)| !fired.get());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Browser timeouts owned by one mounted card nav. Dropping the last clone
/// cancels whatever hasn't fired yet.
#[derive(Clone, Default)]
pub struct Timers {
    pending: Rc<RefCell<PendingSet<Timeout>>>,
}

impl Timers {
    pub fn after(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.pending.borrow_mut().insert(|fired| {
            Timeout::new(delay_ms, move || {
                fired.set(true);
                callback();
            })
        });
    }
}

/// Scheduler on browser timeouts. Each due step is handed to `dispatch`.
#[derive(Clone)]
pub struct TimeoutScheduler {
    timers: Timers,
    dispatch: Rc<dyn Fn(Step)>,
}

impl TimeoutScheduler {
    pub fn new(timers: Timers, dispatch: impl Fn(Step) + 'static) -> Self {
        Self { timers, dispatch: Rc::new(dispatch) }
    }
}

impl Scheduler for TimeoutScheduler {
    fn submit(&mut self, schedule: Schedule) {
        for Scheduled { delay_ms, step } in schedule {
            let dispatch = self.dispatch.clone();
            self.timers.after(delay_ms, move || dispatch(step));
        }
    }
}
