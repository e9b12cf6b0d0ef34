// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a kind-colored accent and a close button.
//! Their opacity follows the frame computed by the manager, so entering
//! toasts fade in and leaving toasts fade out.

use super::manager::{Manager, Message, ToastFrame};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles, tooltip};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget.
pub struct Toast;

impl Toast {
    /// Renders a single toast frame.
    pub fn view<'a>(frame: ToastFrame<'a>, i18n: &I18n) -> Element<'a, Message> {
        let record = frame.record;
        let kind = record.kind();
        let accent = kind.color();
        let alpha = frame.opacity;

        let glyph = Text::new(kind.glyph())
            .size(sizing::ICON_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color {
                    a: accent.a * alpha,
                    ..accent
                }),
            });

        let message = Text::new(record.message()).size(typography::BODY);

        let close = button(Text::new("×").size(typography::BODY))
            .on_press(Message::Dismiss(record.id()))
            .padding(spacing::XXS)
            .style(button_styles::dismiss(alpha));
        let close = tooltip::styled(
            close,
            i18n.tr("toast-close"),
            iced::widget::tooltip::Position::Left,
        );

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(close);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| container_styles::toast(theme, accent, alpha))
            .into()
    }

    /// Renders every active toast stacked in the bottom-right corner.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        now: Instant,
        i18n: &I18n,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .frames(now)
            .map(|frame| Self::view(frame, i18n))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}
