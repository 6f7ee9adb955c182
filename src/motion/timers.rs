//! Cancellable deferred events.
//!
//! The event loop owns a timer queue; anything that wants work done
//! later schedules an event with a deadline and keeps the returned
//! handle. Cancelling the handle invalidates the entry, so a view that
//! is torn down before its timer fires never has stale work delivered
//! against discarded state. Single-threaded; the queue is drained once
//! per tick.

use std::time::Instant;

/// Handle to one scheduled event. Cancelling it invalidates the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct TimerEntry<E> {
    id: u64,
    at: Instant,
    event: E,
}

/// Deadline-ordered queue of deferred events.
#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    entries: Vec<TimerEntry<E>>,
    next_id: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedules `event` for delivery at `at`.
    pub fn schedule(&mut self, at: Instant, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(TimerEntry { id, at, event });
        TimerHandle(id)
    }

    /// Invalidates a scheduled event. Cancelling an already-delivered
    /// or already-cancelled handle is a no-op.
    pub fn cancel(&mut self, handle: TimerHandle) {
        self.entries.retain(|e| e.id != handle.0);
    }

    /// Removes every scheduled event.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of events still scheduled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pops every event whose deadline has passed, in deadline order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<E> {
        let mut due: Vec<TimerEntry<E>> = Vec::new();
        let mut remaining: Vec<TimerEntry<E>> = Vec::new();

        for entry in self.entries.drain(..) {
            if entry.at <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;

        // Stable by (deadline, insertion id) so simultaneous deadlines
        // deliver in schedule order.
        due.sort_by(|a, b| a.at.cmp(&b.at).then(a.id.cmp(&b.id)));
        due.into_iter().map(|e| e.event).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_drain_due_delivers_in_deadline_order() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(now + Duration::from_secs(3), "third");
        queue.schedule(now + Duration::from_secs(1), "first");
        queue.schedule(now + Duration::from_secs(2), "second");

        let fired = queue.drain_due(now + Duration::from_secs(5));
        assert_eq!(fired, vec!["first", "second", "third"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_due_leaves_future_events() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(now + Duration::from_secs(1), "soon");
        queue.schedule(now + Duration::from_secs(10), "later");

        let fired = queue.drain_due(now + Duration::from_secs(2));
        assert_eq!(fired, vec!["soon"]);
        assert_eq!(queue.pending(), 1);
    }

    #[test]
    fn test_cancelled_events_never_deliver() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        let keep = queue.schedule(now + Duration::from_secs(1), "keep");
        let drop = queue.schedule(now + Duration::from_secs(1), "drop");
        let _ = keep;

        queue.cancel(drop);
        let fired = queue.drain_due(now + Duration::from_secs(2));
        assert_eq!(fired, vec!["keep"]);
    }

    #[test]
    fn test_cancel_after_delivery_is_noop() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(now, "x");
        assert_eq!(queue.drain_due(now).len(), 1);
        queue.cancel(handle);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_simultaneous_deadlines_deliver_in_schedule_order() {
        let now = Instant::now();
        let at = now + Duration::from_secs(1);
        let mut queue = TimerQueue::new();
        queue.schedule(at, 1);
        queue.schedule(at, 2);
        queue.schedule(at, 3);

        assert_eq!(queue.drain_due(at), vec![1, 2, 3]);
    }

    #[test]
    fn test_clear_drops_everything() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(now + Duration::from_secs(1), "a");
        queue.schedule(now + Duration::from_secs(2), "b");
        queue.clear();
        assert!(queue.drain_due(now + Duration::from_secs(5)).is_empty());
    }
}
