// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface used for dashboard sections.
///
/// Derived from the active theme background so cards stay readable in both
/// light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Dashed-looking placeholder shown in place of gated content.
pub fn placeholder(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Toast card with an accent border, faded by `alpha`.
pub fn toast(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg = theme.extended_palette().background.base.color;
    let text = theme.palette().text;

    container::Style {
        background: Some(Background::Color(Color { a: bg.a * alpha, ..bg })),
        border: Border {
            color: Color {
                a: accent.a * alpha,
                ..accent
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: Color {
                a: opacity::OVERLAY_MEDIUM * alpha,
                ..shadow::MD.color
            },
            ..shadow::MD
        },
        text_color: Some(Color {
            a: text.a * alpha,
            ..text
        }),
        ..Default::default()
    }
}
