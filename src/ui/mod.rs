// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components are presentational: they receive the session, the toast
//! manager and the localizer from the application and emit messages up.
//!
//! # Access control
//!
//! - [`permission_gate`] - renders content or a fallback depending on a gate
//! - [`access_denied`] - placeholder explaining a denial
//! - [`guarded_action`] - button disabled with a tooltip when denied
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod access_denied;
pub mod design_tokens;
pub mod guarded_action;
pub mod notifications;
pub mod permission_gate;
pub mod styles;
pub mod theming;
