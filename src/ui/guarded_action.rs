// SPDX-License-Identifier: MPL-2.0
//! Buttons that stay visible but inert when the user lacks access.

use crate::access::{Access, Authorizer, Gate};
use crate::i18n::fluent::I18n;
use crate::ui::access_denied;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::{button as button_styles, tooltip};
use iced::widget::{button, tooltip::Position, Text};
use iced::Element;

/// A button guarded by a [`Gate`].
///
/// When the gate grants access the button is enabled and emits its
/// message. Otherwise it is drawn disabled and a tooltip explains why.
#[derive(Debug, Clone)]
pub struct GuardedAction<Message> {
    label: String,
    gate: Gate,
    on_press: Message,
    position: Position,
}

impl<Message: Clone + 'static> GuardedAction<Message> {
    pub fn new(label: impl Into<String>, gate: Gate, on_press: Message) -> Self {
        Self {
            label: label.into(),
            gate,
            on_press,
            position: Position::Bottom,
        }
    }

    /// Where the denial tooltip appears.
    #[must_use]
    pub fn tooltip_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn view<'a, A: Authorizer + ?Sized>(self, auth: &A, i18n: &I18n) -> Element<'a, Message> {
        let label = Text::new(self.label).size(typography::BODY);

        match self.gate.evaluate(auth) {
            Access::Granted => button(label)
                .on_press(self.on_press)
                .padding([spacing::XS, spacing::MD])
                .style(button_styles::primary)
                .into(),
            Access::Denied(denial) => {
                let inert = button(label)
                    .padding([spacing::XS, spacing::MD])
                    .style(button_styles::disabled());
                tooltip::styled(inert, access_denied::reason(&denial, i18n), self.position).into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{Permissions, Role, Session};
    use crate::config::Config;

    #[derive(Debug, Clone)]
    enum Message {
        Export,
    }

    #[test]
    fn renders_in_both_states() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let gate = Gate::new().require_permission("reports.export");
        let allowed = Session::with_role(Role::Viewer, Permissions::new().with("reports.export"));
        let refused = Session::with_role(Role::Admin, Permissions::new());

        let action = GuardedAction::new("Export", gate, Message::Export)
            .tooltip_position(Position::Top);
        let _enabled: Element<'_, Message> = action.clone().view(&allowed, &i18n);
        let _disabled: Element<'_, Message> = action.view(&refused, &i18n);
    }
}
