// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Three layers are stacked: the current screen (gate, page or modal), the
//! share tooltip, and the toast overlay.

use super::message::{Message, ModalMessage};
use super::App;
use crate::application::share::{ShareLinks, SharePlatform};
use crate::domain::media::MediaItem;
use crate::domain::ui::{Point, Size};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{border, opacity, palette, sizing, spacing, typography};
use crate::ui::gallery::{layout, DisplayedMedia, FocusTarget, ModalSurface};
use crate::ui::notifications::Toast;
use crate::ui::state::{tooltip, ActiveTooltip};
use crate::ui::styles;
use crate::ui::widgets::media_guard;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, image, mouse_area, text_input, Column, Container, Id, Row, Scrollable, Stack, Text,
};
use iced::{alignment, mouse, ContentFit, Element, Length, Padding};
use std::collections::{HashMap, HashSet};

/// Identifier of the scrollable that shows the zoomed image.
pub(super) const MEDIA_SCROLLABLE: &str = "gallery-media";

/// Rough glyph width used to size the tooltip before layout.
const TOOLTIP_CHAR_WIDTH: f32 = 7.5;

/// Images and their load status, borrowed from the app.
#[derive(Clone, Copy)]
struct ImageCache<'a> {
    images: &'a HashMap<String, ImageData>,
    failed: &'a HashSet<String>,
}

impl<'a> ImageCache<'a> {
    fn get(&self, source: &str) -> Option<&'a ImageData> {
        self.images.get(source)
    }

    fn has_failed(&self, source: &str) -> bool {
        self.failed.contains(source)
    }
}

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let i18n = &self.i18n;
        let cache = ImageCache {
            images: &self.images,
            failed: &self.failed_images,
        };

        let screen: Element<'_, Message> = if !self.context.authenticated {
            view_gate(i18n, &self.passphrase_input, self.gate_rejected)
        } else if let Some(displayed) = self.gallery.view().displayed() {
            view_modal(ModalContext {
                i18n,
                displayed,
                surface: self.gallery.view(),
                cache,
                window: self.window_size,
                dragging: self.drag.is_dragging,
            })
        } else {
            view_page(PageContext {
                i18n,
                items: self.gallery.state().items(),
                surface: self.gallery.view(),
                cache,
                links: self.gallery.share_helper().links(),
                window: self.window_size,
                is_loading: self.is_loading,
                prompt_visible: self.prompt_visible,
                can_lock: self.context.gate.is_required(),
            })
        };

        let mut layers = Stack::new().push(screen);
        if let Some(active) = &self.tooltip {
            layers = layers.push(view_tooltip(i18n, active, self.window_size));
        }
        layers
            .push(Toast::view_overlay(&self.notifications, i18n).map(Message::Notification))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

fn view_gate<'a>(i18n: &'a I18n, input: &'a str, rejected: bool) -> Element<'a, Message> {
    let field = text_input(&i18n.tr("gate-placeholder"), input)
        .secure(true)
        .on_input(Message::PassphraseChanged)
        .on_submit(Message::PassphraseSubmitted)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::INPUT_WIDTH));

    let submit = button(Text::new(i18n.tr("gate-submit")).size(typography::BODY))
        .on_press(Message::PassphraseSubmitted)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let mut form = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("gate-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("gate-prompt")).size(typography::BODY))
        .push(field)
        .push(submit);

    if rejected {
        form = form.push(
            Text::new(i18n.tr("gate-error"))
                .size(typography::CAPTION)
                .style(|_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    Container::new(
        Container::new(form)
            .padding(spacing::XL)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

struct PageContext<'a> {
    i18n: &'a I18n,
    items: &'a [MediaItem],
    surface: &'a ModalSurface,
    cache: ImageCache<'a>,
    links: &'a ShareLinks,
    window: Size,
    is_loading: bool,
    prompt_visible: bool,
    can_lock: bool,
}

fn view_page(ctx: PageContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr("gallery-heading"))
                .size(typography::TITLE_LG)
                .width(Length::Fill),
        );
    if ctx.can_lock {
        header = header.push(
            button(Text::new(i18n.tr("gate-lock")).size(typography::BODY))
                .on_press(Message::Lock)
                .style(styles::button::secondary),
        );
    }

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(header);

    if ctx.prompt_visible {
        content = content.push(view_prompt(i18n));
    }

    if ctx.items.is_empty() {
        content = content.push(view_empty_state(i18n, ctx.is_loading));
    } else {
        content = content.push(view_grid(&ctx));
    }

    let page = Scrollable::new(content)
        .width(Length::Fill)
        .height(Length::Fill);

    Column::new()
        .push(page)
        .push(view_share_bar(i18n, ctx.links, ctx.window))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_empty_state(i18n: &I18n, is_loading: bool) -> Element<'_, Message> {
    if is_loading {
        return Text::new(i18n.tr("gallery-loading"))
            .size(typography::BODY)
            .into();
    }
    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("gallery-empty")).size(typography::BODY))
        .push(
            button(Text::new(i18n.tr("gallery-reload")).size(typography::BODY))
                .on_press(Message::ReloadGallery)
                .style(styles::button::secondary),
        )
        .into()
}

fn view_grid<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let surface = ctx.surface;
    let cells: Vec<Element<'a, Message>> = surface
        .revealed()
        .iter()
        .enumerate()
        .filter_map(|(position, &index)| ctx.items.get(index).map(|item| (position, index, item)))
        .map(|(position, index, item)| {
            view_thumbnail(
                index,
                item,
                ctx.cache,
                surface.focus() == Some(FocusTarget::Thumbnail(index)),
                surface.highlighted() == Some(position),
            )
        })
        .collect();

    let mut grid = Column::new().spacing(spacing::MD);
    let mut cells = cells.into_iter().peekable();
    while cells.peek().is_some() {
        let row = Row::with_children(cells.by_ref().take(sizing::GRID_COLUMNS))
            .spacing(spacing::MD);
        grid = grid.push(row);
    }

    if surface.is_see_more_visible() {
        let focused = surface.focus() == Some(FocusTarget::SeeMore);
        grid = grid.push(
            button(Text::new(ctx.i18n.tr("gallery-see-more")).size(typography::BODY))
                .on_press(Message::SeeMore)
                .padding([spacing::XS, spacing::LG])
                .style(move |theme: &iced::Theme, status: button::Status| {
                    let mut style = styles::button::primary(theme, status);
                    if focused {
                        style.border.color = palette::GOLD_400;
                        style.border.width = border::WIDTH_MD;
                    }
                    style
                }),
        );
    }

    grid.into()
}

fn view_thumbnail<'a>(
    index: usize,
    item: &'a MediaItem,
    cache: ImageCache<'a>,
    focused: bool,
    highlighted: bool,
) -> Element<'a, Message> {
    let side = Length::Fixed(sizing::THUMBNAIL);
    let picture: Element<'a, Message> = match cache.get(item.thumb()) {
        Some(data) => image(data.handle.clone())
            .width(side)
            .height(side)
            .content_fit(ContentFit::Cover)
            .into(),
        None => {
            let label = if cache.has_failed(item.thumb()) {
                item.alt()
            } else {
                ""
            };
            Container::new(Text::new(label).size(typography::CAPTION))
                .width(side)
                .height(side)
                .center_x(side)
                .center_y(side)
                .style(styles::container::placeholder)
                .into()
        }
    };

    let content: Element<'a, Message> = if item.is_video() {
        Stack::new()
            .push(picture)
            .push(
                Container::new(
                    Container::new(Text::new("▶").size(sizing::ICON_MD))
                        .padding(spacing::XS)
                        .style(styles::container::badge),
                )
                .width(side)
                .height(side)
                .center_x(side)
                .center_y(side),
            )
            .into()
    } else {
        picture
    };

    button(content)
        .on_press(Message::ThumbnailPressed(index))
        .padding(spacing::XXS)
        .style(styles::button::thumbnail(focused, highlighted))
        .into()
}

fn view_prompt(i18n: &I18n) -> Element<'_, Message> {
    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("prompt-install-accept")).size(typography::BODY))
                .on_press(Message::PromptAccepted)
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("prompt-dismiss")).size(typography::BODY))
                .on_press(Message::PromptDismissed)
                .style(styles::button::secondary),
        );

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("prompt-install-title")).size(typography::TITLE_SM))
            .push(Text::new(i18n.tr("prompt-install-body")).size(typography::BODY))
            .push(actions),
    )
    .padding(spacing::MD)
    .width(Length::Fixed(sizing::PROMPT_WIDTH))
    .style(styles::container::panel)
    .into()
}

// ---------------------------------------------------------------------------
// Modal
// ---------------------------------------------------------------------------

struct ModalContext<'a> {
    i18n: &'a I18n,
    displayed: &'a DisplayedMedia,
    surface: &'a ModalSurface,
    cache: ImageCache<'a>,
    window: Size,
    dragging: bool,
}

fn view_modal(ctx: ModalContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let window_button = |label: &str, message: ModalMessage| {
        button(Text::new(label.to_string()).size(typography::BODY))
            .on_press(Message::Modal(message))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_SUBTLE,
                opacity::OVERLAY_MEDIUM,
            ))
    };

    let counter = i18n.tr_with_args(
        "modal-counter",
        &[("counter", ctx.displayed.counter.as_str())],
    );
    let top_bar = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XS, spacing::MD])
        .height(Length::Fixed(layout::TOP_BAR_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(counter)
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(window_button(
            &i18n.tr("modal-fullscreen"),
            ModalMessage::ToggleFullscreen,
        ))
        .push(window_button(
            &i18n.tr("modal-maximize"),
            ModalMessage::ToggleMaximize,
        ))
        .push(window_button(&i18n.tr("modal-close"), ModalMessage::Close));

    let gutter = |glyph: &'static str, message: ModalMessage| {
        button(
            Container::new(Text::new(glyph).size(typography::TITLE_LG))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .on_press(Message::Modal(message))
        .width(Length::Fixed(layout::NAV_GUTTER))
        .height(Length::Fill)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::TRANSPARENT,
            opacity::OVERLAY_SUBTLE,
        ))
    };

    let middle = Row::new()
        .push(gutter("‹", ModalMessage::Previous))
        .push(view_media(&ctx))
        .push(gutter("›", ModalMessage::Next))
        .height(Length::Fill);

    let modal = Column::new()
        .push(top_bar)
        .push(middle)
        .push(view_share_bar(i18n, &ctx.displayed.share, ctx.window))
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(modal)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop)
        .into()
}

fn view_media<'a>(ctx: &ModalContext<'a>) -> Element<'a, Message> {
    let item = &ctx.displayed.item;
    let viewport = layout::media_viewport(ctx.window);

    let body: Element<'a, Message> = if item.is_video() {
        view_video_poster(ctx)
    } else if let Some(data) = ctx.cache.get(item.source()) {
        let (scale, _) = ctx.surface.transform();
        let fitted = data.fit_within(viewport);
        let scaled = Size::new(fitted.width * scale.value(), fitted.height * scale.value());
        let (pad_x, pad_y) = layout::centering_padding(scaled, viewport);

        let picture = image(data.handle.clone())
            .width(Length::Fixed(scaled.width))
            .height(Length::Fixed(scaled.height))
            .content_fit(ContentFit::Fill);

        let scrollable = Scrollable::new(Container::new(picture).padding(Padding {
            top: pad_y,
            right: pad_x,
            bottom: pad_y,
            left: pad_x,
        }))
        .id(Id::new(MEDIA_SCROLLABLE))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::hidden(),
            horizontal: Scrollbar::hidden(),
        });

        let interaction = if ctx.dragging {
            mouse::Interaction::Grabbing
        } else if scale.value() > 1.0 {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::ZoomIn
        };

        mouse_area(media_guard(scrollable))
            .interaction(interaction)
            .on_move(|position| {
                Message::Modal(ModalMessage::CursorMoved(Point::new(position.x, position.y)))
            })
            .on_exit(Message::Modal(ModalMessage::CursorLeft))
            .on_press(Message::Modal(ModalMessage::MediaPressed))
            .on_release(Message::Modal(ModalMessage::MediaReleased))
            .on_double_click(Message::Modal(ModalMessage::MediaDoubleClicked))
            .on_scroll(|delta| Message::Modal(ModalMessage::MediaScrolled(delta)))
            .into()
    } else {
        let key = if ctx.cache.has_failed(item.source()) {
            "notification-image-fetch-error"
        } else {
            "gallery-loading"
        };
        Container::new(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    };

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .into()
}

fn view_video_poster<'a>(ctx: &ModalContext<'a>) -> Element<'a, Message> {
    let item = &ctx.displayed.item;
    let play = button(
        Text::new(format!("▶  {}", ctx.i18n.tr("modal-play-video"))).size(typography::TITLE_SM),
    )
    .on_press(Message::PlayVideo)
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
    ));

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);
    if let Some(poster) = ctx.cache.get(item.thumb()) {
        layers = layers.push(
            image(poster.handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain)
                .opacity(if ctx.surface.is_video_paused() {
                    opacity::OVERLAY_STRONG
                } else {
                    opacity::OPAQUE
                }),
        );
    }
    layers
        .push(
            Container::new(play)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .into()
}

// ---------------------------------------------------------------------------
// Share bar and tooltip
// ---------------------------------------------------------------------------

fn platform_color(platform: SharePlatform) -> iced::Color {
    match platform {
        SharePlatform::Facebook => palette::FACEBOOK,
        SharePlatform::Twitter => palette::TWITTER,
        SharePlatform::Pinterest => palette::PINTEREST,
        SharePlatform::CopyLink => palette::GRAY_700,
    }
}

fn view_share_bar<'a>(i18n: &I18n, links: &ShareLinks, window: Size) -> Element<'a, Message> {
    let count = SharePlatform::ALL.len();
    let buttons = SharePlatform::ALL
        .iter()
        .enumerate()
        .map(|(index, &platform)| -> Element<'a, Message> {
            let anchor = layout::share_button_anchor(index, count, window);
            let label = Container::new(Text::new(i18n.tr(platform.label_key())).size(typography::CAPTION))
                .center_x(Length::Fill)
                .center_y(Length::Fill);
            button(label)
                .on_press_maybe(
                    links
                        .url_for(platform)
                        .map(|_| Message::Share { platform, anchor }),
                )
                .width(Length::Fixed(layout::SHARE_BUTTON_WIDTH))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::share(platform_color(platform)))
                .into()
        });

    Container::new(Row::with_children(buttons).spacing(spacing::XS))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SHARE_BAR_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::SHARE_BAR_HEIGHT))
        .into()
}

fn view_tooltip<'a>(i18n: &I18n, active: &ActiveTooltip, window: Size) -> Element<'a, Message> {
    let message = i18n.tr(active.message_key());
    let estimated = Size::new(
        message.chars().count() as f32 * TOOLTIP_CHAR_WIDTH + 2.0 * spacing::XS,
        typography::BODY + 2.0 * spacing::XS + spacing::XXS,
    );
    let placed = tooltip::position(active.anchor(), estimated, window);

    let bubble = Container::new(Text::new(message).size(typography::BODY))
        .padding(spacing::XS)
        .style(styles::tooltip::tooltip_container);

    Container::new(bubble)
        .padding(Padding {
            top: placed.origin.y,
            left: placed.origin.x,
            ..Padding::ZERO
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_platform_has_a_distinct_color() {
        let colors: Vec<_> = SharePlatform::ALL.iter().map(|&p| platform_color(p)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn image_cache_reports_failures() {
        let images = HashMap::new();
        let mut failed = HashSet::new();
        failed.insert("broken.jpg".to_string());
        let cache = ImageCache {
            images: &images,
            failed: &failed,
        };
        assert!(cache.has_failed("broken.jpg"));
        assert!(cache.get("broken.jpg").is_none());
    }
}
