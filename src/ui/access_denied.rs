// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown in place of content the user may not see.
//!
//! # Usage
//!
//! ```ignore
//! use iced_dashboard::ui::access_denied::AccessDenied;
//!
//! if let Access::Denied(denial) = gate.evaluate(&session) {
//!     AccessDenied::new(&denial, &i18n).view()
//! }
//! ```

use crate::access::{Denial, Role};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Localized explanation of a denial.
#[must_use]
pub fn reason(denial: &Denial, i18n: &I18n) -> String {
    let key = denial.i18n_key();
    match denial {
        Denial::UnrecognizedRole => i18n.tr(key),
        Denial::UnrecognizedRequirement(name) => {
            i18n.tr_with_args(key, &[("role", name.as_str())])
        }
        Denial::InsufficientRole { current, required } => {
            let current = i18n.tr(current.i18n_key());
            let required = i18n.tr(required.i18n_key());
            i18n.tr_with_args(
                key,
                &[("current", current.as_str()), ("required", required.as_str())],
            )
        }
        Denial::MissingPermission(permission) => {
            i18n.tr_with_args(key, &[("permission", permission.as_str())])
        }
    }
}

/// Centered card explaining why content is hidden.
#[derive(Debug, Clone)]
pub struct AccessDenied {
    title: String,
    reason: String,
    required_role: Option<String>,
}

impl AccessDenied {
    /// Builds the placeholder for `denial`.
    ///
    /// An insufficient-role denial also fills in the required role line.
    pub fn new(denial: &Denial, i18n: &I18n) -> Self {
        let placeholder = Self {
            title: i18n.tr("access-denied-title"),
            reason: reason(denial, i18n),
            required_role: None,
        };
        match denial {
            Denial::InsufficientRole { required, .. } => placeholder.required_role(*required, i18n),
            _ => placeholder,
        }
    }

    /// Overrides the heading.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds a line naming the role needed to see the content.
    #[must_use]
    pub fn required_role(mut self, role: Role, i18n: &I18n) -> Self {
        let role = i18n.tr(role.i18n_key());
        self.required_role =
            Some(i18n.tr_with_args("access-denied-required-role", &[("role", role.as_str())]));
        self
    }

    #[must_use]
    pub fn reason_text(&self) -> &str {
        &self.reason
    }

    #[must_use]
    pub fn required_role_text(&self) -> Option<&str> {
        self.required_role.as_deref()
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let title = Text::new(self.title)
            .size(typography::TITLE_MD)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::WARNING_500),
            });

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(Text::new(self.reason).size(typography::BODY));

        if let Some(required) = self.required_role {
            content = content.push(Text::new(required).size(typography::CAPTION).style(
                |theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                },
            ));
        }

        let card = Container::new(content)
            .max_width(sizing::PLACEHOLDER_MAX_WIDTH)
            .padding(spacing::LG)
            .style(container_styles::placeholder);

        Container::new(card)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::MD)
            .into()
    }
}
