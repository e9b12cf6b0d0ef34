// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::access::Role;
use crate::ui::notifications::{self, ToastKind};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast timers and transitions.
    Tick(Instant),
    RoleSelected(Role),
    PermissionToggled { key: String, granted: bool },
    /// Show a sample toast of the given kind.
    ShowToast(ToastKind),
    ExportReport,
    ManageUsers,
    /// Write the diagnostics buffer as JSON next to the settings file.
    ExportDiagnostics,
}

/// Runtime flags passed from the launcher to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Role to start the session with, overriding `[session] role`.
    pub role: Option<String>,
}
