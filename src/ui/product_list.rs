// SPDX-License-Identifier: MPL-2.0
//! Product list screen.
//!
//! Owns the dialog slot and the last product snapshot. The slot holds at
//! most one dialog; the edit dialog carries the product it edits, so there
//! is no selection without an open edit dialog. Catalog operations are
//! reported upward as [`Event`]s.

use crate::app::config::CatalogLayout;
use crate::application::port::CaptureTarget;
use crate::domain::catalog::GridColumns;
use crate::domain::{NewProduct, Product, ProductId};
use crate::i18n::fluent::I18n;
use crate::media::image_cache::RemoteImageCache;
use crate::ui::add_product;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::edit_product;
use crate::ui::notifications::Notification;
use crate::ui::product_grid;
use crate::ui::styles;
use iced::widget::{button, mouse_area, opaque, text, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};

/// The modal currently shown over the list.
#[derive(Debug, Clone, Default)]
pub enum Dialog {
    #[default]
    None,
    Add(add_product::State),
    Edit(edit_product::State),
}

/// What the area under the toolbar shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Body<'a> {
    Loading,
    /// Placeholder caption instead of an empty grid.
    Empty,
    Products(&'a [Product]),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    /// `None` until the first snapshot arrives.
    products: Option<Vec<Product>>,
    dialog: Dialog,
}

#[derive(Debug, Clone)]
pub enum Message {
    Grid(product_grid::Message),
    AddRequested,
    RefreshRequested,
    AddDialog(add_product::Message),
    EditDialog(edit_product::Message),
    /// Escape or a click on the backdrop.
    DismissDialog,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Refresh,
    Add(NewProduct),
    Update { id: ProductId, name: String },
    Delete(ProductId),
    RequestPermissions { then_capture: bool },
    ProvisionCapture,
    LaunchCamera(CaptureTarget),
    Notify(Notification),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn products(&self) -> Option<&[Product]> {
        self.products.as_deref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.products.is_none()
    }

    #[must_use]
    pub fn body(&self) -> Body<'_> {
        match self.products.as_deref() {
            None => Body::Loading,
            Some([]) => Body::Empty,
            Some(products) => Body::Products(products),
        }
    }

    #[must_use]
    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    #[must_use]
    pub fn has_dialog(&self) -> bool {
        !matches!(self.dialog, Dialog::None)
    }

    /// Product the edit dialog is open on.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        match &self.dialog {
            Dialog::Edit(edit) => Some(edit.product()),
            _ => None,
        }
    }

    /// Replaces the displayed collection with a published snapshot.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = Some(products);
    }

    fn close_dialog(&mut self) {
        if self.has_dialog() {
            log::debug!("closing dialog");
        }
        self.dialog = Dialog::None;
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::AddRequested => {
            if state.has_dialog() {
                return Event::None;
            }
            log::debug!("opening add dialog");
            state.dialog = Dialog::Add(add_product::State::new());
            Event::RequestPermissions {
                then_capture: false,
            }
        }
        Message::RefreshRequested => Event::Refresh,
        Message::Grid(product_grid::Message::Edit(product)) => {
            if state.has_dialog() {
                return Event::None;
            }
            log::debug!("opening edit dialog on product {}", product.id);
            state.dialog = Dialog::Edit(edit_product::State::new(product));
            Event::None
        }
        Message::Grid(product_grid::Message::Delete(id)) => Event::Delete(id),
        Message::AddDialog(message) => handle_add_dialog(state, message),
        Message::EditDialog(message) => handle_edit_dialog(state, message),
        Message::DismissDialog => {
            state.close_dialog();
            Event::None
        }
    }
}

fn handle_add_dialog(state: &mut State, message: add_product::Message) -> Event {
    // Late results for a dialog that is gone are dropped here.
    let Dialog::Add(add) = &mut state.dialog else {
        return Event::None;
    };

    match add_product::update(add, message) {
        add_product::Event::None => Event::None,
        add_product::Event::RequestPermissions { then_capture } => {
            Event::RequestPermissions { then_capture }
        }
        add_product::Event::ProvisionCapture => Event::ProvisionCapture,
        add_product::Event::LaunchCamera(target) => Event::LaunchCamera(target),
        add_product::Event::Notify(notification) => Event::Notify(notification),
        add_product::Event::Submitted(product) => {
            state.close_dialog();
            Event::Add(product)
        }
        add_product::Event::Dismissed => {
            state.close_dialog();
            Event::None
        }
    }
}

fn handle_edit_dialog(state: &mut State, message: edit_product::Message) -> Event {
    let Dialog::Edit(edit) = &mut state.dialog else {
        return Event::None;
    };

    match edit_product::update(edit, message) {
        edit_product::Event::None => Event::None,
        edit_product::Event::Notify(notification) => Event::Notify(notification),
        edit_product::Event::Update { id, name } => {
            state.close_dialog();
            Event::Update { id, name }
        }
        edit_product::Event::Dismissed => {
            state.close_dialog();
            Event::None
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub layout: CatalogLayout,
    pub columns: GridColumns,
    pub images: &'a RemoteImageCache,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let body: Element<'_, Message> = match ctx.state.body() {
        Body::Loading => centered_caption(i18n.tr("product-list-loading")),
        Body::Empty => centered_caption(i18n.tr("product-list-empty")),
        Body::Products(products) => product_grid::view(product_grid::ViewContext {
            i18n,
            products,
            layout: ctx.layout,
            columns: ctx.columns,
            images: ctx.images,
        })
        .map(Message::Grid),
    };

    let screen = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(toolbar(i18n))
        .push(body);

    let dialog: Option<Element<'_, Message>> = match &ctx.state.dialog {
        Dialog::None => None,
        Dialog::Add(state) => Some(
            add_product::view(add_product::ViewContext { i18n, state }).map(Message::AddDialog),
        ),
        Dialog::Edit(state) => Some(
            edit_product::view(edit_product::ViewContext { i18n, state })
                .map(Message::EditDialog),
        ),
    };

    match dialog {
        None => screen.into(),
        Some(dialog) => Stack::new()
            .push(screen)
            .push(modal(dialog))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    }
}

fn toolbar(i18n: &I18n) -> Element<'_, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(iced::alignment::Vertical::Center)
        .push(Text::new(i18n.tr("product-list-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(i18n.tr("product-list-refresh")).size(typography::BODY))
                .on_press(Message::RefreshRequested)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        )
        .push(
            button(text(i18n.tr("product-list-add")).size(typography::BODY))
                .on_press(Message::AddRequested)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    Container::new(row)
        .padding([spacing::SM, spacing::MD])
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

fn centered_caption<'a>(caption: String) -> Element<'a, Message> {
    Container::new(Text::new(caption).size(typography::BODY_LG))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Dims the screen and centers `dialog` on it. Clicks outside the dialog
/// dismiss it; clicks inside never reach the backdrop.
fn modal(dialog: Element<'_, Message>) -> Element<'_, Message> {
    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::DismissDialog);

    let body = Container::new(opaque(
        Container::new(dialog)
            .padding(spacing::LG)
            .style(styles::container::dialog),
    ))
    .center_x(Length::Fill)
    .center_y(Length::Fill);

    Stack::new()
        .push(opaque(backdrop))
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
