// SPDX-License-Identifier: MPL-2.0
//! Style of the share feedback tooltip.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Inverted surface: light on dark themes, dark on light ones.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    let is_dark = (base.r + base.g + base.b) / 3.0 < 0.5;

    let (background, text_color) = if is_dark {
        (palette::WHITE, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::WHITE)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color { a: 0.3, ..palette::GRAY_400 },
        },
        shadow: shadow::MD,
        text_color: Some(text_color),
        ..Default::default()
    }
}
