// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast display duration and exit transition
//! - **Session**: Role assumed when none is configured
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a toast stays on screen before it starts leaving (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

/// Minimum toast duration (in milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = 100;

/// Maximum toast duration (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Length of the exit transition; a leaving toast is removed once it elapses.
pub const TOAST_EXIT_TRANSITION_MS: u64 = 300;

/// Length of the fade-in played when a toast first appears.
pub const TOAST_ENTER_TRANSITION_MS: u64 = 300;

/// Interval between lifecycle ticks while timers are pending.
pub const TOAST_TICK_INTERVAL_MS: u64 = 50;

// ==========================================================================
// Session Defaults
// ==========================================================================

/// Role name used when the configuration does not provide one.
pub const DEFAULT_ROLE: &str = "viewer";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_DURATION_MS > 0);
    assert!(MAX_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(TOAST_EXIT_TRANSITION_MS > 0);
    assert!(TOAST_TICK_INTERVAL_MS < TOAST_EXIT_TRANSITION_MS);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
