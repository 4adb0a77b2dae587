// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface for the gate form and the install prompt.
///
/// Derived from the theme background so it reads in both light and dark
/// modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Dark layer behind the modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Placeholder drawn while a thumbnail is loading or after it failed.
pub fn placeholder(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.strong.color,
        )),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small badge marking video thumbnails.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_mostly_opaque_black() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => {
                assert_eq!(color.a, opacity::BACKDROP);
                assert_eq!(color.r, 0.0);
            }
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn panel_follows_theme() {
        assert_ne!(panel(&Theme::Light).background, panel(&Theme::Dark).background);
    }
}
