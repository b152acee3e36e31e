// SPDX-License-Identifier: MPL-2.0
//! Rename dialog for the selected product.

use crate::domain::product::normalize_new_name;
use crate::domain::{Product, ProductId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Row, Space, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub struct State {
    product: Product,
    name: String,
    is_error: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    Submit,
    Dismiss,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Update { id: ProductId, name: String },
    Notify(Notification),
    Dismissed,
}

impl State {
    /// Opens the dialog on `product`, pre-filled with its current name.
    #[must_use]
    pub fn new(product: Product) -> Self {
        let name = product.name.clone();
        Self {
            product,
            name,
            is_error: false,
        }
    }

    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.is_error
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.name = value;
            Event::None
        }
        Message::Submit => match normalize_new_name(&state.name) {
            None => {
                state.is_error = true;
                Event::Notify(Notification::warning("notification-name-required"))
            }
            // Nothing to send; closing is all that is left to do.
            Some(name) if name == state.product.name => Event::Dismissed,
            Some(name) => Event::Update {
                id: state.product.id,
                name,
            },
        },
        Message::Dismiss => Event::Dismissed,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let title = Text::new(i18n.tr("edit-product-title")).size(typography::TITLE_MD);
    let current = Text::new(i18n.tr_with_args(
        "edit-product-current",
        &[("name", state.product.name.as_str())],
    ))
    .size(typography::BODY_SM);

    let name = text_input(&i18n.tr("edit-product-name"), &state.name)
        .on_input(Message::NameChanged)
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .style(styles::text_input::field(state.is_error));

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(i18n.tr("dialog-cancel")).size(typography::BODY))
                .on_press(Message::Dismiss)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        )
        .push(
            button(text(i18n.tr("edit-product-submit")).size(typography::BODY))
                .on_press(Message::Submit)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .push(title)
        .push(current)
        .push(name)
        .push(actions)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samba() -> Product {
        Product {
            id: ProductId::new(7),
            name: "Samba OG".into(),
            description: "Indoor classic".into(),
            price: 100,
            image: String::new(),
        }
    }

    #[test]
    fn dialog_prefills_current_name() {
        let state = State::new(samba());
        assert_eq!(state.name, "Samba OG");
        assert!(!state.is_error());
    }

    #[test]
    fn new_name_is_sent_trimmed_with_product_id() {
        let mut state = State::new(samba());
        update(&mut state, Message::NameChanged("  Samba XLG ".into()));

        match update(&mut state, Message::Submit) {
            Event::Update { id, name } => {
                assert_eq!(id, ProductId::new(7));
                assert_eq!(name, "Samba XLG");
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn blank_name_sets_error_flag() {
        let mut state = State::new(samba());
        update(&mut state, Message::NameChanged("   ".into()));

        assert!(matches!(update(&mut state, Message::Submit), Event::Notify(_)));
        assert!(state.is_error());
    }

    #[test]
    fn unchanged_name_closes_without_update() {
        let mut state = State::new(samba());
        assert!(matches!(update(&mut state, Message::Submit), Event::Dismissed));
    }
}
