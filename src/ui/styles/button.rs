// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (unlock, see more, accept).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ACCENT_400,
        button::Status::Pressed => palette::ACCENT_700,
        button::Status::Active => palette::ACCENT_500,
        button::Status::Disabled => palette::GRAY_400,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::ACCENT_700,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Secondary action that adapts to the light or dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (background, text_color) = match (status, is_light) {
        (button::Status::Hovered, true) => (palette::GRAY_200, palette::GRAY_900),
        (button::Status::Hovered, false) => (palette::GRAY_400, WHITE),
        (button::Status::Disabled, _) => (palette::GRAY_200, palette::GRAY_400),
        (_, true) => (WHITE, palette::GRAY_900),
        (_, false) => (palette::GRAY_700, WHITE),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Translucent buttons drawn over the modal backdrop.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_STRONG,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Thumbnail frame. Keyboard focus and the modal's current item get a ring.
pub fn thumbnail(focused: bool, highlighted: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let ring = if focused {
            Some(palette::GOLD_400)
        } else if highlighted || status == button::Status::Hovered {
            Some(palette::ACCENT_400)
        } else {
            None
        };
        button::Style {
            background: Some(Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            text_color: theme.palette().text,
            border: Border {
                color: ring.unwrap_or(Color::TRANSPARENT),
                width: if ring.is_some() { border::WIDTH_LG } else { 0.0 },
                radius: radius::MD.into(),
            },
            shadow: if status == button::Status::Hovered {
                shadow::MD
            } else {
                shadow::NONE
            },
            snap: true,
        }
    }
}

/// Share button in the brand color of its network.
pub fn share(brand: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Disabled => palette::GRAY_400,
            button::Status::Hovered => Color {
                a: opacity::BACKDROP,
                ..brand
            },
            _ => brand,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
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
    fn primary_button_uses_accent_color() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ACCENT_500))
        );
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let style_fn = overlay(WHITE, 0.5, 0.8);
        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn focus_ring_wins_over_highlight() {
        let focused = thumbnail(true, true)(&Theme::Light, button::Status::Active);
        let highlighted = thumbnail(false, true)(&Theme::Light, button::Status::Active);
        let plain = thumbnail(false, false)(&Theme::Light, button::Status::Active);
        assert_eq!(focused.border.color, palette::GOLD_400);
        assert_eq!(highlighted.border.color, palette::ACCENT_400);
        assert_eq!(plain.border.width, 0.0);
    }

    #[test]
    fn disabled_share_button_is_gray() {
        let style = share(palette::PINTEREST)(&Theme::Dark, button::Status::Disabled);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_400)));
    }
}
