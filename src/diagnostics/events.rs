// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Events record access decisions and toast lifecycle transitions so a
//! session can be reconstructed after the fact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A gate refused access.
    AccessDenied {
        /// Name of the gated area.
        gate: String,
        /// Machine-readable denial label.
        reason: String,
    },

    /// The session switched to another role.
    RoleChanged { role: String },

    /// A toast was added to the collection.
    ToastShown { id: u64, kind: String },

    /// A toast was closed by the user before its timer ran out.
    ToastDismissed { id: u64 },

    /// A toast's display duration elapsed.
    ToastExpired { id: u64 },

    /// A toast left the collection.
    ToastRemoved { id: u64 },

    /// A non-fatal problem (e.g. unreadable config).
    Warning { message: String },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}
