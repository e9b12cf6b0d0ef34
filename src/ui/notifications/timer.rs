// SPDX-License-Identifier: MPL-2.0
//! Cancellable deadline queue.
//!
//! Each scheduled task is identified by a [`TimerHandle`]. Cancelling a
//! handle removes the task outright, so a cancelled task can never fire.
//! Tasks due at the same instant fire in scheduling order.

use std::collections::BTreeMap;
use std::time::Instant;

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle {
    due: Instant,
    seq: u64,
}

impl TimerHandle {
    /// When the task is due.
    #[must_use]
    pub fn due(self) -> Instant {
        self.due
    }
}

/// Pending tasks ordered by deadline.
#[derive(Debug)]
pub struct Timers<T> {
    pending: BTreeMap<TimerHandle, T>,
    next_seq: u64,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self {
            pending: BTreeMap::new(),
            next_seq: 0,
        }
    }
}

impl<T> Timers<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to fire at `due`.
    pub fn schedule(&mut self, due: Instant, task: T) -> TimerHandle {
        let handle = TimerHandle {
            due,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending.insert(handle, task);
        handle
    }

    /// Cancels a pending task, returning it if it had not fired yet.
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<T> {
        self.pending.remove(&handle)
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    /// Removes and returns the earliest task due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, T)> {
        let due = self.pending.first_key_value()?.0.due;
        if due > now {
            return None;
        }
        self.pending
            .pop_first()
            .map(|(handle, task)| (handle.due, task))
    }

    /// Deadline of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.keys().next().map(|handle| handle.due)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Cancels every pending task.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
