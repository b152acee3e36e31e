// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screens report [`Event`](crate::ui::product_list::Event)s; the handlers
//! here turn them into `Task`s on the view models and adapters. Results come
//! back as messages routed to the screen that asked.

use super::config::Config;
use super::services::Services;
use super::{Message, Screen};
use crate::app::paths;
use crate::application::port::{CaptureTarget, Permission};
use crate::application::view_model::ProductFeed;
use crate::domain::Product;
use crate::error::{Error, Result};
use crate::media::{self, image_cache, RemoteImageCache};
use crate::ui::add_product;
use crate::ui::login::{self, Event as LoginEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::product_list::{self, Event as ProductListEvent};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub config: &'a Config,
    pub services: &'a Services,
    pub login: &'a mut login::State,
    pub product_list: &'a mut product_list::State,
    pub images: &'a mut RemoteImageCache,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_login_message(ctx: &mut UpdateContext<'_>, message: login::Message) -> Task<Message> {
    match login::update(ctx.login, message) {
        LoginEvent::None => Task::none(),
        LoginEvent::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
        LoginEvent::SubmitCredentials { email, password } => {
            let view_model = ctx.services.login.clone();
            Task::perform(
                async move { view_model.login(email, password).await },
                Message::LoginFinished,
            )
        }
    }
}

pub fn handle_login_finished(ctx: &mut UpdateContext<'_>, success: bool) -> Task<Message> {
    ctx.login.finish_login();
    if !success {
        ctx.notifications
            .push(Notification::error("notification-login-failed"));
        return Task::none();
    }

    log::info!("signed in, showing the catalog");
    *ctx.screen = Screen::Products;
    // Subscribe before fetching so the first snapshot is not missed.
    let feed = ctx.services.products.feed();
    Task::batch([watch_products(feed), fetch_products(ctx.services)])
}

fn watch_products(feed: ProductFeed) -> Task<Message> {
    Task::perform(feed.next(), Message::ProductsPublished)
}

fn fetch_products(services: &Services) -> Task<Message> {
    let view_model = services.products.clone();
    Task::perform(
        async move { view_model.get_products().await },
        |result| Message::CatalogOperationFinished {
            result,
            success_key: None,
        },
    )
}

pub fn handle_products_published(
    ctx: &mut UpdateContext<'_>,
    published: Option<(Vec<Product>, ProductFeed)>,
) -> Task<Message> {
    let Some((products, feed)) = published else {
        log::warn!("product feed closed");
        return Task::none();
    };

    log::debug!("showing {} products", products.len());
    let downloads = request_images(ctx, &products);
    ctx.product_list.set_products(products);
    Task::batch([downloads, watch_products(feed)])
}

/// Starts a download for every remote photo not cached or in flight.
fn request_images(ctx: &mut UpdateContext<'_>, products: &[Product]) -> Task<Message> {
    let Some(client) = ctx.services.images.as_ref() else {
        return Task::none();
    };

    let urls = ctx
        .images
        .claim_missing(products.iter().map(|product| product.image.as_str()));
    Task::batch(urls.into_iter().map(|url| {
        let client = client.clone();
        let request = url.clone();
        Task::perform(image_cache::download(client, request), move |result| {
            Message::ImageDownloaded { url, result }
        })
    }))
}

pub fn handle_image_downloaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<Vec<u8>>,
) -> Task<Message> {
    match result {
        Ok(bytes) => {
            if !ctx.images.insert(url.clone(), bytes) {
                log::debug!("photo {url} too large to cache");
            }
        }
        Err(err) => {
            log::warn!("photo {url} unavailable: {err}");
            ctx.images.fail(&url);
        }
    }
    Task::none()
}

pub fn handle_catalog_operation_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<()>,
    success_key: Option<&'static str>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            if let Some(key) = success_key {
                ctx.notifications.push(Notification::success(key));
            }
        }
        Err(err) => {
            log::warn!("catalog operation failed: {err}");
            ctx.notifications.push(Notification::from_error(&err));
            // Leave the loading state so the failure is not hidden behind it.
            if ctx.product_list.is_loading() {
                ctx.product_list
                    .set_products(ctx.services.products.snapshot());
            }
        }
    }
    Task::none()
}

pub fn handle_product_list_message(
    ctx: &mut UpdateContext<'_>,
    message: product_list::Message,
) -> Task<Message> {
    match product_list::update(ctx.product_list, message) {
        ProductListEvent::None => Task::none(),
        ProductListEvent::Refresh => fetch_products(ctx.services),
        ProductListEvent::Add(product) => {
            let view_model = ctx.services.products.clone();
            catalog_operation(
                async move { view_model.add_product(product).await },
                "notification-product-added",
            )
        }
        ProductListEvent::Update { id, name } => {
            let view_model = ctx.services.products.clone();
            catalog_operation(
                async move { view_model.update_product(id, name).await },
                "notification-product-updated",
            )
        }
        ProductListEvent::Delete(id) => {
            let view_model = ctx.services.products.clone();
            catalog_operation(
                async move { view_model.delete_product(id).await },
                "notification-product-deleted",
            )
        }
        ProductListEvent::RequestPermissions { then_capture } => {
            request_permissions(ctx, then_capture)
        }
        ProductListEvent::ProvisionCapture => provision_capture(ctx),
        ProductListEvent::LaunchCamera(target) => launch_camera(ctx, target),
        ProductListEvent::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
    }
}

fn catalog_operation(
    operation: impl std::future::Future<Output = Result<()>> + Send + 'static,
    success_key: &'static str,
) -> Task<Message> {
    Task::perform(operation, move |result| Message::CatalogOperationFinished {
        result,
        success_key: Some(success_key),
    })
}

fn to_add_dialog(message: add_product::Message) -> Message {
    Message::ProductList(product_list::Message::AddDialog(message))
}

fn request_permissions(ctx: &UpdateContext<'_>, then_capture: bool) -> Task<Message> {
    let gateway = ctx.services.permissions.clone();
    let required = Permission::capture_set(ctx.config.capture.platform_api_level);
    log::debug!("requesting permissions {required:?}");
    Task::perform(
        async move { gateway.request(&required).await.all_granted(&required) },
        move |granted| {
            to_add_dialog(add_product::Message::PermissionsResolved {
                granted,
                then_capture,
            })
        },
    )
}

fn provision_capture(ctx: &UpdateContext<'_>) -> Task<Message> {
    let pictures_dir = paths::get_pictures_dir(ctx.config.capture.pictures_dir.clone());
    Task::perform(
        async move {
            match pictures_dir {
                Some(dir) => media::provision(&dir),
                None => Err(Error::Capture("no picture directory available".into())),
            }
        },
        |result| to_add_dialog(add_product::Message::CaptureProvisioned(result)),
    )
}

fn launch_camera(ctx: &UpdateContext<'_>, target: CaptureTarget) -> Task<Message> {
    let camera = ctx.services.camera.clone();
    log::info!("launching camera on {}", target.uri);
    Task::perform(
        async move {
            let success = camera.capture(&target).await;
            (target, success)
        },
        |(target, success)| to_add_dialog(add_product::Message::CaptureFinished { target, success }),
    )
}

pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.screen == Screen::Products && ctx.product_list.has_dialog() {
        return handle_product_list_message(ctx, product_list::Message::DismissDialog);
    }
    Task::none()
}
