// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the greeting page.
//!
//! The `App` struct wires together the page context (config, gate, manifest
//! location), the gallery controller and its iced surface, localization and
//! the persisted store, and translates messages into side effects like
//! manifest loading, image fetching, sharing and window mode changes.

mod context;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use context::PageContext;
pub use message::{Flags, Message, ModalMessage};

use crate::application::gallery::{GalleryController, GallerySettings};
use crate::application::prompt::PromptSuppression;
use crate::config::DEFAULT_PROMPT_COOLDOWN_DAYS;
use crate::domain::ui::{Point, Size, TooltipTimeout};
use crate::i18n::fluent::I18n;
use crate::infrastructure::manifest::http_client;
use crate::infrastructure::ManifestLoader;
use crate::media::{self, ImageData};
use crate::ui::gallery::ModalSurface;
use crate::ui::notifications;
use crate::ui::state::{ActiveTooltip, DragState, TouchGestures};
use crate::ui::theming::ThemeMode;
use iced::{window, Task, Theme};
use persisted_state::PersistedStore;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    context: PageContext,
    store: PersistedStore,
    gallery: GalleryController<ModalSurface, TouchGestures>,
    /// Decoded images keyed by resolved source.
    images: HashMap<String, ImageData>,
    /// Sources currently being fetched or known to be broken.
    pending_images: HashSet<String>,
    failed_images: HashSet<String>,
    http: Option<reqwest::Client>,
    /// Bumped on every manifest request; stale results are dropped.
    load_generation: u64,
    is_loading: bool,
    window_id: Option<window::Id>,
    window_size: Size,
    theme_mode: ThemeMode,
    passphrase_input: String,
    gate_rejected: bool,
    prompt: PromptSuppression,
    prompt_visible: bool,
    tooltip: Option<ActiveTooltip>,
    tooltip_timeout: TooltipTimeout,
    /// Last cursor position over the modal media area.
    cursor: Option<Point>,
    drag: DragState,
    /// Whether the current press has moved far enough to be a drag.
    drag_moved: bool,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("authenticated", &self.context.authenticated)
            .field("items", &self.gallery.state().len())
            .field("modal", &self.gallery.state().modal())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        // The gallery tears down before the window goes away.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Resolves the page context and starts loading the gallery when the
    /// visitor is already authenticated.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (store, store_warning) = PersistedStore::load(flags.paths.state_file());
        let (context, warnings) = PageContext::resolve(&flags, &store);
        let i18n = I18n::new(flags.lang.clone(), &context.config);

        let settings = GallerySettings::from_config(&context.config);
        let gallery = GalleryController::with_gestures(
            Vec::new(),
            settings,
            ModalSurface::new(),
            TouchGestures::new(),
        );

        let http = match http_client() {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!(error = %err, "HTTP client unavailable, remote media disabled");
                None
            }
        };

        let mut app = App {
            i18n,
            theme_mode: context.config.general.theme_mode,
            prompt: PromptSuppression::new(
                context
                    .config
                    .prompt
                    .cooldown_days
                    .unwrap_or(DEFAULT_PROMPT_COOLDOWN_DAYS),
            ),
            tooltip_timeout: TooltipTimeout::new(
                context
                    .config
                    .share
                    .tooltip_ms
                    .unwrap_or(crate::config::DEFAULT_TOOLTIP_MS),
            ),
            context,
            store,
            gallery,
            images: HashMap::new(),
            pending_images: HashSet::new(),
            failed_images: HashSet::new(),
            http,
            load_generation: 0,
            is_loading: false,
            window_id: None,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            passphrase_input: String::new(),
            gate_rejected: false,
            prompt_visible: false,
            tooltip: None,
            cursor: None,
            drag: DragState::default(),
            drag_moved: false,
            notifications: notifications::Manager::new(),
        };

        for key in store_warning.into_iter().chain(warnings) {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = if app.context.authenticated {
            app.mount_gallery()
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.state().counter() {
            Some(counter) if self.gallery.state().is_open() => format!("{counter} - {app_name}"),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    /// Called once the visitor is authenticated: shows the prompt unless it
    /// was dismissed recently, and requests the manifest.
    fn mount_gallery(&mut self) -> Task<Message> {
        self.prompt_visible = !self
            .prompt
            .is_suppressed(&mut self.store, chrono::Utc::now());
        self.load_gallery()
    }

    /// Requests the manifest. Any earlier request still in flight becomes
    /// stale.
    fn load_gallery(&mut self) -> Task<Message> {
        self.load_generation += 1;
        let generation = self.load_generation;

        let Some(location) = self.context.manifest.clone() else {
            return Task::none();
        };
        let loader = match ManifestLoader::for_location(&location) {
            Ok(loader) => loader,
            Err(err) => {
                tracing::error!(error = %err, "cannot build manifest loader");
                self.notifications
                    .push(notifications::Notification::warning(err.i18n_key()));
                return Task::none();
            }
        };

        tracing::info!(%location, "loading gallery manifest");
        self.is_loading = true;
        Task::perform(
            async move { media::load_gallery(&loader).await },
            move |(items, error)| Message::GalleryLoaded {
                generation,
                items,
                error,
            },
        )
    }
}
