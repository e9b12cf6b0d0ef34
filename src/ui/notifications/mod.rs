// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Toasts appear temporarily to inform users about actions without
//! blocking interaction. Each one expires after the manager's display
//! duration, or earlier when the user closes it, then fades out before it
//! is dropped from the collection.
//!
//! # Components
//!
//! - [`notification`] - `ToastRecord`, `ToastId` and `ToastKind`
//! - [`manager`] - `Manager` owning the active toasts and their timers
//! - [`timer`] - cancellable deadline queue backing the manager
//! - [`toast`] - widget rendering the toasts
//!
//! # Usage
//!
//! ```ignore
//! use iced_dashboard::ui::notifications::{Manager, ToastKind, Toast};
//! use std::time::Instant;
//!
//! let mut manager = Manager::new();
//! manager.show("Report exported", ToastKind::Success, Instant::now());
//!
//! // In the view function
//! let overlay = Toast::view_overlay(&manager, now, &i18n).map(Message::Notification);
//! ```

pub mod manager;
pub mod notification;
pub mod timer;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, Phase, ToastFrame};
pub use manager::{ENTER_TRANSITION, EXIT_TRANSITION};
pub use notification::{ToastId, ToastKind, ToastRecord};
pub use timer::{TimerHandle, Timers};
pub use toast::Toast;
