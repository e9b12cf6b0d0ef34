// SPDX-License-Identifier: MPL-2.0
//! Conditional rendering of gated content.
//!
//! # Usage
//!
//! ```ignore
//! use iced_dashboard::access::{Gate, Role};
//! use iced_dashboard::ui::permission_gate::PermissionGate;
//!
//! PermissionGate::new(Gate::new().require_role(Role::Manager), reports_panel)
//!     .fallback(AccessDenied::new(&denial, &i18n).view())
//!     .view(&session)
//! ```

use crate::access::{Access, Authorizer, Gate};
use iced::widget::Space;
use iced::Element;

/// Renders `content` when the gate grants access and `fallback` otherwise.
///
/// Without an explicit fallback a denied gate renders an empty space, so
/// the surrounding layout does not change shape.
pub struct PermissionGate<'a, Message> {
    gate: Gate,
    content: Element<'a, Message>,
    fallback: Option<Element<'a, Message>>,
}

impl<'a, Message: 'a> PermissionGate<'a, Message> {
    pub fn new(gate: Gate, content: impl Into<Element<'a, Message>>) -> Self {
        Self {
            gate,
            content: content.into(),
            fallback: None,
        }
    }

    /// Sets what to render when access is denied.
    #[must_use]
    pub fn fallback(mut self, fallback: impl Into<Element<'a, Message>>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// The gate this widget evaluates.
    #[must_use]
    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    /// Whether `auth` gets the content rather than the fallback.
    #[must_use]
    pub fn shows_content<A: Authorizer + ?Sized>(&self, auth: &A) -> bool {
        matches!(self.gate.evaluate(auth), Access::Granted)
    }

    /// Evaluates the gate against `auth` and returns the element to draw.
    pub fn view<A: Authorizer + ?Sized>(self, auth: &A) -> Element<'a, Message> {
        if self.shows_content(auth) {
            self.content
        } else {
            self.fallback.unwrap_or_else(|| Space::new().into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{Permissions, Role, Session};
    use iced::widget::text;

    #[test]
    fn builds_for_granted_and_denied_sessions() {
        let admin = Session::with_role(Role::Admin, Permissions::new());
        let guest = Session::new("guest", Permissions::new());
        let gate = Gate::new().require_role(Role::Manager);

        let _granted: Element<'_, ()> = PermissionGate::new(gate.clone(), text("secret"))
            .fallback(text("denied"))
            .view(&admin);
        let _denied: Element<'_, ()> = PermissionGate::new(gate, text("secret")).view(&guest);
    }

    #[test]
    fn content_is_chosen_only_when_granted() {
        let manager = Session::with_role(Role::Manager, Permissions::new().with("reports.export"));
        let viewer = Session::with_role(Role::Viewer, Permissions::new().with("reports.export"));
        let unknown = Session::new("root", Permissions::new().with("reports.export"));
        let widget: PermissionGate<'_, ()> = PermissionGate::new(
            Gate::new()
                .require_role(Role::Manager)
                .require_permission("reports.export"),
            text("reports"),
        );

        assert!(widget.shows_content(&manager));
        assert!(!widget.shows_content(&viewer));
        assert!(!widget.shows_content(&unknown));
        assert!(!widget.shows_content(&Session::with_role(Role::Admin, Permissions::new())));
    }

    #[test]
    fn exposes_its_gate() {
        let gate = Gate::new().require_permission("reports.export");
        let widget: PermissionGate<'_, ()> = PermissionGate::new(gate.clone(), text("x"));
        assert_eq!(widget.gate(), &gate);
    }
}
