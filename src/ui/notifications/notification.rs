// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `ToastRecord` struct and the `ToastKind` enum
//! used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;

/// Unique identifier for a toast.
///
/// Identifiers come from a process-wide counter and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Kind of toast; determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    pub const ALL: [ToastKind; 4] = [
        ToastKind::Success,
        ToastKind::Error,
        ToastKind::Info,
        ToastKind::Warning,
    ];

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ToastKind::Success => palette::SUCCESS_500,
            ToastKind::Error => palette::ERROR_500,
            ToastKind::Info => palette::INFO_500,
            ToastKind::Warning => palette::WARNING_500,
        }
    }

    /// Glyph shown in front of the message.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Info => "i",
            ToastKind::Warning => "!",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
        }
    }
}

/// A notification record held by the manager.
///
/// `visible` starts out true and flips to false once the toast starts
/// leaving. Nothing else about a record changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastRecord {
    id: ToastId,
    message: String,
    kind: ToastKind,
    visible: bool,
}

impl ToastRecord {
    /// Creates a visible record with a fresh ID.
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id: ToastId::new(),
            message: message.into(),
            kind,
            visible: true,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(super) fn hide(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let a = ToastRecord::new("saved", ToastKind::Success);
        let b = ToastRecord::new("saved", ToastKind::Success);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn ids_display_as_strings() {
        let id = ToastId::new();
        assert_eq!(id.to_string(), format!("toast-{}", id.value()));
    }

    #[test]
    fn kind_colors_are_distinct() {
        for (i, a) in ToastKind::ALL.iter().enumerate() {
            for b in ToastKind::ALL.iter().skip(i + 1) {
                assert_ne!(a.color(), b.color(), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn new_record_is_visible() {
        let record = ToastRecord::new("hello", ToastKind::Warning);
        assert!(record.is_visible());
        assert_eq!(record.message(), "hello");
        assert_eq!(record.kind(), ToastKind::Warning);
    }
}
