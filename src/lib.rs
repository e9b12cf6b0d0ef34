// SPDX-License-Identifier: MPL-2.0
//! `iced_dashboard` provides role-gated dashboard components and a toast
//! notification system built with the Iced GUI framework.
//!
//! Access decisions live in [`access`] and never touch the UI, so they can
//! be tested on their own. The [`ui`] module renders gated content, denial
//! placeholders and toasts, and [`app`] wires everything into a demo
//! dashboard with Fluent localization and persisted preferences.

#![doc(html_root_url = "https://docs.rs/iced_dashboard/0.1.0")]

pub mod access;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;
