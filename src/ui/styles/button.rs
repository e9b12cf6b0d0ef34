// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => return disabled()(theme, status),
        _ => (palette::PRIMARY_500, palette::PRIMARY_600, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Grayed out, non-interactive button.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(Color {
            a: opacity::DISABLED,
            ..palette::GRAY_200
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless close button drawn inside a toast, faded by `alpha`.
pub fn dismiss(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text = theme.palette().text;
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE * alpha,
                ..palette::GRAY_400
            })),
            _ => None,
        };

        button::Style {
            background,
            text_color: Color {
                a: text.a * alpha,
                ..text
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_uses_brand_color() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn primary_disabled_matches_disabled_style() {
        let a = primary(&Theme::Light, button::Status::Disabled);
        let b = disabled()(&Theme::Light, button::Status::Active);
        assert_eq!(a.background, b.background);
        assert_eq!(a.text_color, b.text_color);
    }

    #[test]
    fn dismiss_is_transparent_until_hovered() {
        let style = dismiss(1.0);
        assert!(style(&Theme::Dark, button::Status::Active).background.is_none());
        assert!(style(&Theme::Dark, button::Status::Hovered).background.is_some());
    }
}
