use super::host::Item;

/// Deferred work the menu asks its host loop to run later.
///
/// Visual steps carry the generation of the transition that produced them;
/// the menu drops them once a newer transition has started.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Reveal { item: Item, generation: u64 },
    ReleasePanel { generation: u64 },
    ScrollToAnchor { target: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scheduled {
    pub delay_ms: u32,
    pub step: Step,
}

/// Ordered steps with offsets relative to the moment they were produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    steps: Vec<Scheduled>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, delay_ms: u32, step: Step) {
        self.steps.push(Scheduled { delay_ms, step });
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scheduled> {
        self.steps.iter()
    }
}

impl IntoIterator for Schedule {
    type Item = Scheduled;
    type IntoIter = std::vec::IntoIter<Scheduled>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Runs a schedule's steps once their delay has passed.
pub trait Scheduler {
    fn submit(&mut self, schedule: Schedule);
}

/// Scheduler driven by an explicit clock instead of real timers.
///
/// Time only moves when [`ManualScheduler::advance`] is called, which hands
/// back every step that came due, in due order (submission order on ties).
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    seq: u64,
    pending: Vec<(u64, u64, Step)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// When the earliest pending step comes due.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.iter().map(|(due, _, _)| *due).min()
    }

    pub fn advance(&mut self, ms: u64) -> Vec<Step> {
        self.now_ms += ms;
        let now = self.now_ms;

        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(at, _, _)| *at <= now);
        self.pending = rest;

        due.sort_by_key(|(at, seq, _)| (*at, *seq));
        due.into_iter().map(|(_, _, step)| step).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn submit(&mut self, schedule: Schedule) {
        for Scheduled { delay_ms, step } in schedule {
            let due = self.now_ms + u64::from(delay_ms);
            self.pending.push((due, self.seq, step));
            self.seq += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll(target: &str) -> Step {
        Step::ScrollToAnchor { target: target.to_string() }
    }

    #[test]
    fn nothing_runs_before_its_delay() {
        let mut scheduler = ManualScheduler::new();
        let mut schedule = Schedule::new();
        schedule.push(100, scroll("#about"));
        scheduler.submit(schedule);

        assert!(scheduler.advance(99).is_empty());
        assert_eq!(scheduler.advance(1), vec![scroll("#about")]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn due_steps_come_back_in_time_order() {
        let mut scheduler = ManualScheduler::new();
        let mut schedule = Schedule::new();
        schedule.push(120, scroll("#c"));
        schedule.push(0, scroll("#a"));
        schedule.push(60, scroll("#b"));
        schedule.push(60, scroll("#b2"));
        scheduler.submit(schedule);

        assert_eq!(scheduler.next_due_ms(), Some(0));
        assert_eq!(
            scheduler.advance(500),
            vec![scroll("#a"), scroll("#b"), scroll("#b2"), scroll("#c")]
        );
    }

    #[test]
    fn delays_are_relative_to_submission_time() {
        let mut scheduler = ManualScheduler::new();
        scheduler.advance(1_000);

        let mut schedule = Schedule::new();
        schedule.push(50, scroll("#late"));
        scheduler.submit(schedule);

        assert_eq!(scheduler.next_due_ms(), Some(1_050));
        assert!(scheduler.advance(49).is_empty());
        assert_eq!(scheduler.advance(1).len(), 1);
    }
}
