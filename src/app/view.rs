// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen and stacks the toast overlay on top of it.

use super::config::Config;
use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::media::RemoteImageCache;
use crate::ui::login;
use crate::ui::notifications::{self, Toast};
use crate::ui::product_list;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub config: &'a Config,
    pub login: &'a login::State,
    pub product_list: &'a product_list::State,
    pub images: &'a RemoteImageCache,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Login => login::view(login::ViewContext {
            i18n: ctx.i18n,
            state: ctx.login,
        })
        .map(Message::Login),
        Screen::Products => product_list::view(product_list::ViewContext {
            i18n: ctx.i18n,
            state: ctx.product_list,
            layout: ctx.config.catalog.layout,
            columns: ctx.config.catalog.columns(),
            images: ctx.images,
        })
        .map(Message::ProductList),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
