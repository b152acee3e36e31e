// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the login screen and the
//! product list.
//!
//! The `App` struct owns the screens, the view models and the notification
//! manager, and translates screen events into tasks on the view models and
//! adapters. Startup policy (config loading, logger installation, backend
//! selection) lives here as well.

pub mod config;
pub mod logging;
mod message;
pub mod paths;
mod screen;
pub mod services;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::media::RemoteImageCache;
use crate::ui::login;
use crate::ui::notifications::{self, Notification};
use crate::ui::product_list;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use services::Services;
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    /// Resolved once at startup; `System` is not re-detected per frame.
    theme: Theme,
    services: Services,
    login: login::State,
    product_list: product_list::State,
    /// Downloaded remote product photos.
    images: RemoteImageCache,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("dialog_open", &self.product_list.has_dialog())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Startup input consumed once by the boot closure.
#[derive(Debug, Default)]
struct Boot {
    flags: Flags,
    config: Config,
    config_warning: Option<&'static str>,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// Loads the configuration and installs the logger before the first window
/// opens.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, load_warning) = config::load();
    if let Err(err) = logging::init(config.general.log_level.as_deref()) {
        eprintln!("logging disabled: {err}");
    }
    log::info!("starting {} {}", paths::APP_NAME, env!("CARGO_PKG_VERSION"));
    if let Some(warning) = &load_warning {
        log::warn!("ignoring {}: {}", warning.path.display(), warning.error);
    }
    let config_warning = load_warning.as_ref().map(config::LoadWarning::i18n_key);

    // iced 0.14 requires the boot function to be Fn; the input is taken on
    // the first call.
    let boot_state = RefCell::new(Some(Boot {
        flags,
        config,
        config_warning,
    }));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(boot: Boot) -> (Self, Task<Message>) {
        let Boot {
            flags,
            config,
            config_warning,
        } = boot;

        let i18n = I18n::new(flags.lang.clone(), &config);
        let (services, backend_warning) =
            Services::build(&flags, &config, i18n.tr("camera-dialog-title"));

        let mut notifications = notifications::Manager::new();
        for key in config_warning.into_iter().chain(backend_warning) {
            notifications.push(Notification::warning(key));
        }

        let app = App {
            i18n,
            screen: Screen::default(),
            theme: config.general.theme_mode.iced_theme(),
            config,
            services,
            login: login::State::new(),
            product_list: product_list::State::new(),
            images: RemoteImageCache::default(),
            notifications,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Login => app_name,
            Screen::Products => {
                format!("{} - {app_name}", self.i18n.tr("product-list-title"))
            }
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            config: &self.config,
            services: &self.services,
            login: &mut self.login,
            product_list: &mut self.product_list,
            images: &mut self.images,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Login(login_message) => update::handle_login_message(&mut ctx, login_message),
            Message::ProductList(list_message) => {
                update::handle_product_list_message(&mut ctx, list_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::LoginFinished(success) => update::handle_login_finished(&mut ctx, success),
            Message::ProductsPublished(published) => {
                update::handle_products_published(&mut ctx, published)
            }
            Message::CatalogOperationFinished {
                result,
                success_key,
            } => update::handle_catalog_operation_finished(&mut ctx, result, success_key),
            Message::ImageDownloaded { url, result } => {
                update::handle_image_downloaded(&mut ctx, url, result)
            }
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            config: &self.config,
            login: &self.login,
            product_list: &self.product_list,
            images: &self.images,
            notifications: &self.notifications,
        })
    }
}
