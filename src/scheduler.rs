//! Scheduled-task queue for one-shot notifications.
//!
//! Tasks are kept sorted by fire time (ties broken by insertion order) and
//! addressed by a `TaskId`, so a task can be cancelled before it fires.
//! The queue never reads the wall clock itself: callers pass `now`, which
//! comes from a `Clock`. The terminal shell uses `SystemClock`; tests use
//! `ManualClock` and never wait.

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
use uuid::Uuid;

// ═══════════════════════════════════════════
// Clock
// ═══════════════════════════════════════════

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Hand-driven clock. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

// ═══════════════════════════════════════════
// Time-of-day helpers
// ═══════════════════════════════════════════

/// Next instant strictly after `now` whose time of day is `time`:
/// today if still ahead, otherwise tomorrow.
pub fn next_occurrence(now: NaiveDateTime, time: NaiveTime) -> NaiveDateTime {
    let today = now.date().and_time(time);
    if today > now {
        today
    } else {
        today + Duration::days(1)
    }
}

/// Wait time from `now` until `fire_at`; zero if already due.
pub fn delay_until(now: NaiveDateTime, fire_at: NaiveDateTime) -> std::time::Duration {
    (fire_at - now).to_std().unwrap_or(std::time::Duration::ZERO)
}

// ═══════════════════════════════════════════
// Scheduler
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A task that has come due.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTask<T> {
    pub id: TaskId,
    pub fire_at: NaiveDateTime,
    pub payload: T,
}

type QueueKey = (NaiveDateTime, u64);

/// Sorted queue of one-shot tasks keyed by id.
#[derive(Debug)]
pub struct Scheduler<T> {
    queue: BTreeMap<QueueKey, (TaskId, T)>,
    index: HashMap<TaskId, QueueKey>,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            queue: BTreeMap::new(),
            index: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Queue `payload` to fire at `fire_at`.
    pub fn schedule_at(&mut self, fire_at: NaiveDateTime, payload: T) -> TaskId {
        let id = TaskId::new();
        let key = (fire_at, self.next_seq);
        self.next_seq += 1;
        self.queue.insert(key, (id, payload));
        self.index.insert(id, key);
        id
    }

    /// Remove a pending task. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.index.remove(&id) {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    pub fn fire_time(&self, id: TaskId) -> Option<NaiveDateTime> {
        self.index.get(&id).map(|(at, _)| *at)
    }

    /// Earliest pending fire time.
    pub fn next_fire_time(&self) -> Option<NaiveDateTime> {
        self.queue.keys().next().map(|(at, _)| *at)
    }

    /// Remove and return every task with `fire_at <= now`, earliest first.
    pub fn pop_due(&mut self, now: NaiveDateTime) -> Vec<ScheduledTask<T>> {
        let mut due = Vec::new();
        while let Some(entry) = self.queue.first_entry() {
            let (fire_at, _) = *entry.key();
            if fire_at > now {
                break;
            }
            let (id, payload) = entry.remove();
            self.index.remove(&id);
            due.push(ScheduledTask {
                id,
                fire_at,
                payload,
            });
        }
        due
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn tod(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn later_today_stays_today() {
        assert_eq!(next_occurrence(at(9, 0), tod(18, 30)), at(18, 30));
    }

    #[test]
    fn earlier_time_rolls_to_tomorrow() {
        let fire = next_occurrence(at(9, 0), tod(8, 0));
        assert_eq!(fire, at(8, 0) + Duration::days(1));
        assert!(delay_until(at(9, 0), fire) > std::time::Duration::ZERO);
    }

    #[test]
    fn same_minute_rolls_to_tomorrow() {
        let fire = next_occurrence(at(9, 0), tod(9, 0));
        assert_eq!(fire, at(9, 0) + Duration::days(1));
    }

    #[test]
    fn delay_is_zero_when_overdue() {
        assert_eq!(delay_until(at(10, 0), at(9, 0)), std::time::Duration::ZERO);
        assert_eq!(
            delay_until(at(9, 0), at(9, 1)),
            std::time::Duration::from_secs(60)
        );
    }

    #[test]
    fn pop_due_returns_in_fire_order() {
        let mut s = Scheduler::new();
        s.schedule_at(at(12, 0), "noon");
        s.schedule_at(at(8, 0), "morning");
        s.schedule_at(at(20, 0), "evening");
        assert_eq!(s.next_fire_time(), Some(at(8, 0)));

        let due: Vec<_> = s.pop_due(at(12, 0)).into_iter().map(|t| t.payload).collect();
        assert_eq!(due, vec!["morning", "noon"]);
        assert_eq!(s.len(), 1);
        assert_eq!(s.next_fire_time(), Some(at(20, 0)));
    }

    #[test]
    fn ties_fire_in_insertion_order() {
        let mut s = Scheduler::new();
        s.schedule_at(at(8, 0), 1);
        s.schedule_at(at(8, 0), 2);
        s.schedule_at(at(8, 0), 3);
        let due: Vec<_> = s.pop_due(at(8, 0)).into_iter().map(|t| t.payload).collect();
        assert_eq!(due, vec![1, 2, 3]);
    }

    #[test]
    fn nothing_due_before_fire_time() {
        let mut s = Scheduler::new();
        s.schedule_at(at(8, 0), ());
        assert!(s.pop_due(at(7, 59)).is_empty());
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn cancel_removes_pending_task() {
        let mut s = Scheduler::new();
        let keep = s.schedule_at(at(8, 0), "keep");
        let drop = s.schedule_at(at(9, 0), "drop");
        assert!(s.cancel(drop));
        assert!(!s.cancel(drop));
        assert_eq!(s.fire_time(drop), None);
        assert_eq!(s.fire_time(keep), Some(at(8, 0)));

        let due = s.pop_due(at(23, 0));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, keep);
        assert!(s.is_empty());
    }

    #[test]
    fn cancel_after_firing_is_false() {
        let mut s = Scheduler::new();
        let id = s.schedule_at(at(8, 0), ());
        s.pop_due(at(8, 0));
        assert!(!s.cancel(id));
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(at(8, 0));
        let other = clock.clone();
        clock.advance(Duration::minutes(90));
        assert_eq!(other.now(), at(9, 30));
        other.set(at(7, 0));
        assert_eq!(clock.now(), at(7, 0));
    }
}
