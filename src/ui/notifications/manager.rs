// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! Each toast moves through `entering → steady → leaving → removed`.
//! Showing a toast schedules its expiry; expiry (or a manual dismiss)
//! starts the exit transition and schedules removal. Every pending timer
//! is a [`TimerHandle`] stored with the toast it belongs to, so dismissing,
//! hiding or clearing a toast cancels exactly its own timer.
//!
//! The manager never reads the clock itself: callers pass `now` in, and
//! the application feeds it from its tick subscription.

use super::notification::{ToastId, ToastKind, ToastRecord};
use super::timer::{TimerHandle, Timers};
use crate::config::{
    DEFAULT_TOAST_DURATION_MS, TOAST_ENTER_TRANSITION_MS, TOAST_EXIT_TRANSITION_MS,
};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use std::time::{Duration, Instant};

/// Time a leaving toast stays in the collection before it is removed.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(TOAST_EXIT_TRANSITION_MS);

/// Length of the fade-in after a toast is shown.
pub const ENTER_TRANSITION: Duration = Duration::from_millis(TOAST_ENTER_TRANSITION_MS);

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// User closed a toast.
    Dismiss(ToastId),
    /// Fire every timer due at this instant.
    Tick(Instant),
}

/// Animation phase of a toast at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Visible and fading in.
    Entering,
    /// Fully visible, duration timer running.
    Steady,
    /// Fading out, removal pending.
    Leaving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerAction {
    Expire(ToastId),
    Remove(ToastId),
}

#[derive(Debug)]
struct Entry {
    record: ToastRecord,
    shown_at: Instant,
    leaving_since: Option<Instant>,
    timer: Option<TimerHandle>,
}

impl Entry {
    fn phase(&self, now: Instant) -> Phase {
        match self.leaving_since {
            Some(_) => Phase::Leaving,
            None if now.saturating_duration_since(self.shown_at) < ENTER_TRANSITION => {
                Phase::Entering
            }
            None => Phase::Steady,
        }
    }

    fn opacity(&self, now: Instant) -> f32 {
        match self.leaving_since {
            Some(since) => 1.0 - progress(now.saturating_duration_since(since), EXIT_TRANSITION),
            None => progress(now.saturating_duration_since(self.shown_at), ENTER_TRANSITION),
        }
    }
}

/// Fraction of `total` covered by `elapsed`, clamped to `0.0..=1.0`.
fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

/// A toast as it should be drawn at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct ToastFrame<'a> {
    pub record: &'a ToastRecord,
    pub phase: Phase,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f32,
}

/// Owns the active toasts and their timers.
#[derive(Debug)]
pub struct Manager {
    /// Active toasts in insertion order.
    entries: Vec<Entry>,
    timers: Timers<TimerAction>,
    duration: Duration,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::with_duration(Duration::from_millis(DEFAULT_TOAST_DURATION_MS))
    }
}

impl Manager {
    /// Creates an empty manager using the default display duration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager with a custom display duration.
    #[must_use]
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            entries: Vec::new(),
            timers: Timers::new(),
            duration,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Display duration applied by [`Manager::show`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Changes the display duration for toasts shown from now on.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Shows a toast with the manager's display duration.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) -> ToastId {
        self.show_with_duration(message, kind, self.duration, now)
    }

    /// Shows a toast that starts leaving `duration` after `now`.
    ///
    /// A duration too large to represent as a deadline schedules no expiry;
    /// the toast then stays until it is dismissed or hidden.
    pub fn show_with_duration(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Duration,
        now: Instant,
    ) -> ToastId {
        let record = ToastRecord::new(message, kind);
        let id = record.id();
        let timer = now
            .checked_add(duration)
            .map(|due| self.timers.schedule(due, TimerAction::Expire(id)));

        self.entries.push(Entry {
            record,
            shown_at: now,
            leaving_since: None,
            timer,
        });
        self.log(DiagnosticEventKind::ToastShown {
            id: id.value(),
            kind: kind.as_str().to_string(),
        });
        id
    }

    /// Closes a toast on user request.
    ///
    /// Cancels its duration timer and removes it [`EXIT_TRANSITION`] after
    /// `now`. Returns `false` if the toast is unknown or already leaving.
    pub fn dismiss(&mut self, id: ToastId, now: Instant) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        if self.entries[index].leaving_since.is_some() {
            return false;
        }

        if let Some(timer) = self.entries[index].timer.take() {
            self.timers.cancel(timer);
        }
        self.begin_leaving(index, now);
        self.log(DiagnosticEventKind::ToastDismissed { id: id.value() });
        true
    }

    /// Removes a toast immediately, cancelling whatever timer it still had.
    ///
    /// Returns `true` if the toast was found and removed.
    pub fn hide(&mut self, id: ToastId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let entry = self.entries.remove(index);
        if let Some(timer) = entry.timer {
            self.timers.cancel(timer);
        }
        self.log(DiagnosticEventKind::ToastRemoved { id: id.value() });
        true
    }

    /// Fires every timer due at or before `now`, in deadline order.
    ///
    /// Removal timers scheduled by an expiry in this call fire in the same
    /// call when they are already due. Follow-up deadlines are computed from
    /// the deadline that fired, not from `now`, so a late tick does not
    /// stretch a toast's lifetime.
    pub fn tick(&mut self, now: Instant) {
        while let Some((due, action)) = self.timers.pop_due(now) {
            match action {
                TimerAction::Expire(id) => {
                    if let Some(index) = self.position(id) {
                        self.entries[index].timer = None;
                        self.begin_leaving(index, due);
                        self.log(DiagnosticEventKind::ToastExpired { id: id.value() });
                    }
                }
                TimerAction::Remove(id) => {
                    if let Some(index) = self.position(id) {
                        self.entries.remove(index);
                        self.log(DiagnosticEventKind::ToastRemoved { id: id.value() });
                    }
                }
            }
        }
    }

    /// Handles a toast message. `now` is the instant a dismissal happens.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
            Message::Tick(instant) => self.tick(*instant),
        }
    }

    /// Removes every toast and cancels all timers.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.timers.clear();
    }

    /// Active toasts in insertion order.
    pub fn toasts(&self) -> impl Iterator<Item = &ToastRecord> {
        self.entries.iter().map(|entry| &entry.record)
    }

    /// Active toasts with their phase and opacity at `now`.
    pub fn frames(&self, now: Instant) -> impl Iterator<Item = ToastFrame<'_>> {
        self.entries.iter().map(move |entry| ToastFrame {
            record: &entry.record,
            phase: entry.phase(now),
            opacity: entry.opacity(now),
        })
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastRecord> {
        self.entries
            .iter()
            .find(|entry| entry.record.id() == id)
            .map(|entry| &entry.record)
    }

    /// Phase of a toast at `now`, or `None` once it has been removed.
    #[must_use]
    pub fn phase(&self, id: ToastId, now: Instant) -> Option<Phase> {
        self.position(id).map(|index| self.entries[index].phase(now))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any expiry or removal is still scheduled.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Deadline of the next scheduled transition.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_due()
    }

    fn position(&self, id: ToastId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.record.id() == id)
    }

    fn begin_leaving(&mut self, index: usize, at: Instant) {
        let entry = &mut self.entries[index];
        let id = entry.record.id();
        entry.record.hide();
        entry.leaving_since = Some(at);
        let due = at.checked_add(EXIT_TRANSITION).unwrap_or(at);
        entry.timer = Some(self.timers.schedule(due, TimerAction::Remove(id)));
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use std::collections::HashSet;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert!(!manager.has_pending_timers());
        assert_eq!(manager.duration(), ms(DEFAULT_TOAST_DURATION_MS));
    }

    #[test]
    fn show_appends_visible_toast() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show("Saved", ToastKind::Success, t0);

        let record = manager.get(id).expect("toast should exist");
        assert!(record.is_visible());
        assert_eq!(record.message(), "Saved");
        assert_eq!(manager.phase(id, t0), Some(Phase::Entering));
        assert_eq!(manager.next_deadline(), Some(t0 + ms(DEFAULT_TOAST_DURATION_MS)));
    }

    #[test]
    fn toast_becomes_steady_after_enter_transition() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show("Hi", ToastKind::Info, t0);

        assert_eq!(manager.phase(id, t0 + ENTER_TRANSITION), Some(Phase::Steady));
    }

    #[test]
    fn short_toast_leaves_after_duration_then_is_removed() {
        let t0 = Instant::now();
        let mut manager = Manager::with_duration(ms(100));
        let id = manager.show("Quick", ToastKind::Info, t0);

        manager.tick(t0 + ms(99));
        assert_eq!(manager.get(id).map(ToastRecord::is_visible), Some(true));

        manager.tick(t0 + ms(100));
        assert_eq!(manager.phase(id, t0 + ms(100)), Some(Phase::Leaving));
        assert_eq!(manager.get(id).map(ToastRecord::is_visible), Some(false));

        manager.tick(t0 + ms(399));
        assert!(manager.get(id).is_some());

        manager.tick(t0 + ms(400));
        assert!(manager.get(id).is_none());
        assert!(!manager.has_pending_timers());
    }

    #[test]
    fn late_tick_fires_expiry_and_removal_together() {
        let t0 = Instant::now();
        let mut manager = Manager::with_duration(ms(100));
        let id = manager.show("Late", ToastKind::Warning, t0);

        manager.tick(t0 + ms(1000));
        assert!(manager.get(id).is_none());
    }

    #[test]
    fn late_tick_does_not_stretch_removal() {
        let t0 = Instant::now();
        let mut manager = Manager::with_duration(ms(100));
        let id = manager.show("Late", ToastKind::Warning, t0);

        // Expiry noticed 150ms late; removal is still 300ms after the expiry deadline.
        manager.tick(t0 + ms(250));
        assert_eq!(manager.phase(id, t0 + ms(250)), Some(Phase::Leaving));
        assert_eq!(manager.next_deadline(), Some(t0 + ms(400)));
    }

    #[test]
    fn dismiss_removes_after_exit_transition_not_duration() {
        let t0 = Instant::now();
        let mut manager = Manager::with_duration(ms(4000));
        let id = manager.show("Close me", ToastKind::Error, t0);

        assert!(manager.dismiss(id, t0 + ms(1000)));
        assert_eq!(manager.phase(id, t0 + ms(1000)), Some(Phase::Leaving));

        manager.tick(t0 + ms(1299));
        assert!(manager.get(id).is_some());

        manager.tick(t0 + ms(1300));
        assert!(manager.get(id).is_none());
        assert!(!manager.has_pending_timers(), "duration timer must be cancelled");
    }

    #[test]
    fn dismiss_twice_is_a_no_op() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show("Once", ToastKind::Info, t0);

        assert!(manager.dismiss(id, t0));
        assert!(!manager.dismiss(id, t0 + ms(200)));

        // Removal is still anchored to the first dismiss.
        manager.tick(t0 + ms(300));
        assert!(manager.get(id).is_none());
    }

    #[test]
    fn dismiss_unknown_returns_false() {
        let mut manager = Manager::new();
        assert!(!manager.dismiss(ToastId::new(), Instant::now()));
    }

    #[test]
    fn hide_removes_immediately_and_cancels_timer() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show("Gone", ToastKind::Info, t0);

        assert!(manager.hide(id));
        assert!(manager.get(id).is_none());
        assert!(!manager.has_pending_timers());
        assert!(!manager.hide(id));
    }

    #[test]
    fn clear_cancels_everything() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.show(format!("toast {i}"), ToastKind::Info, t0);
        }

        manager.clear();
        assert!(manager.is_empty());
        assert!(manager.next_deadline().is_none());
    }

    #[test]
    fn toasts_progress_independently_and_keep_insertion_order() {
        let t0 = Instant::now();
        let mut manager = Manager::with_duration(ms(1000));
        let first = manager.show("first", ToastKind::Info, t0);
        let second = manager.show_with_duration("second", ToastKind::Success, ms(350), t0);
        let third = manager.show("third", ToastKind::Warning, t0 + ms(50));

        manager.tick(t0 + ms(400));
        assert_eq!(manager.phase(first, t0 + ms(400)), Some(Phase::Steady));
        assert_eq!(manager.phase(second, t0 + ms(400)), Some(Phase::Leaving));
        assert_eq!(manager.phase(third, t0 + ms(400)), Some(Phase::Steady));

        manager.dismiss(third, t0 + ms(400));

        let order: Vec<_> = manager.toasts().map(ToastRecord::id).collect();
        assert_eq!(order, vec![first, second, third]);

        manager.tick(t0 + ms(700));
        let order: Vec<_> = manager.toasts().map(ToastRecord::id).collect();
        assert_eq!(order, vec![first]);
    }

    #[test]
    fn ids_are_unique_across_rapid_shows() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let ids: HashSet<ToastId> = (0..1000)
            .map(|i| manager.show(format!("burst {i}"), ToastKind::Info, t0))
            .collect();

        assert_eq!(ids.len(), 1000);
        assert_eq!(manager.len(), 1000);
    }

    #[test]
    fn opacity_fades_in_and_out() {
        let t0 = Instant::now();
        let mut manager = Manager::with_duration(ms(1000));
        let id = manager.show("fade", ToastKind::Info, t0);

        let opacity_at = |manager: &Manager, at: Instant| {
            manager
                .frames(at)
                .find(|frame| frame.record.id() == id)
                .map(|frame| frame.opacity)
        };

        assert_eq!(opacity_at(&manager, t0), Some(0.0));
        assert_eq!(opacity_at(&manager, t0 + ENTER_TRANSITION), Some(1.0));

        manager.tick(t0 + ms(1000));
        let halfway = opacity_at(&manager, t0 + ms(1150)).expect("still present");
        assert!((halfway - 0.5).abs() < 0.01, "got {halfway}");
    }

    #[test]
    fn handle_message_dismiss_starts_leaving() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show("msg", ToastKind::Info, t0);

        manager.handle_message(&Message::Dismiss(id), t0 + ms(50));
        assert_eq!(manager.get(id).map(ToastRecord::is_visible), Some(false));

        manager.handle_message(&Message::Tick(t0 + ms(349)), t0 + ms(349));
        assert!(manager.get(id).is_some());
        manager.handle_message(&Message::Tick(t0 + ms(350)), t0 + ms(350));
        assert!(manager.get(id).is_none());
    }

    #[test]
    fn unrepresentable_duration_never_expires() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show_with_duration("sticky", ToastKind::Info, Duration::MAX, t0);

        assert!(!manager.has_pending_timers());
        manager.tick(t0 + ms(60_000));
        assert_eq!(manager.phase(id, t0 + ms(60_000)), Some(Phase::Steady));

        let closed_at = t0 + ms(60_000);
        assert!(manager.dismiss(id, closed_at));
        manager.tick(closed_at + EXIT_TRANSITION);
        assert!(manager.get(id).is_none());
    }

    #[test]
    fn huge_default_duration_does_not_panic() {
        let t0 = Instant::now();
        let mut manager = Manager::with_duration(Duration::MAX);
        let id = manager.show("sticky", ToastKind::Warning, t0);

        manager.tick(t0 + ms(1000));
        assert!(manager.get(id).is_some_and(ToastRecord::is_visible));
        assert!(manager.hide(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn lifecycle_is_reported_to_diagnostics() {
        let t0 = Instant::now();
        let mut collector = DiagnosticsCollector::new(50);
        let mut manager = Manager::with_duration(ms(100));
        manager.set_diagnostics(collector.handle());

        manager.show("logged", ToastKind::Success, t0);
        manager.tick(t0 + ms(400));
        collector.process_pending();

        let kinds: Vec<_> = collector
            .iter()
            .map(|event| match &event.kind {
                DiagnosticEventKind::ToastShown { .. } => "shown",
                DiagnosticEventKind::ToastExpired { .. } => "expired",
                DiagnosticEventKind::ToastRemoved { .. } => "removed",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["shown", "expired", "removed"]);
    }
}
