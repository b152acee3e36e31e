// SPDX-License-Identifier: MPL-2.0
//! Login screen.
//!
//! Credentials are free text; checking them is the job of the login view
//! model, reached through [`Event::SubmitCredentials`].

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    email: String,
    password: String,
    in_flight: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    ForgotPassword,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    SubmitCredentials { email: String, password: String },
    Notify(Notification),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Re-enables the form once the pending login has completed.
    pub fn finish_login(&mut self) {
        self.in_flight = false;
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        // Credentials are frozen while a login is in flight.
        Message::EmailChanged(_) | Message::PasswordChanged(_) if state.in_flight => Event::None,
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        Message::PasswordChanged(value) => {
            state.password = value;
            Event::None
        }
        Message::Submit => {
            if state.in_flight {
                return Event::None;
            }
            state.in_flight = true;
            Event::SubmitCredentials {
                email: state.email.clone(),
                password: state.password.clone(),
            }
        }
        Message::ForgotPassword => {
            Event::Notify(Notification::info("notification-forgot-password"))
        }
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

    let title = Text::new(i18n.tr("login-title")).size(typography::TITLE_LG);

    let email = text_input(&i18n.tr("login-email"), &state.email)
        .on_input_maybe((!state.in_flight).then_some(Message::EmailChanged))
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .style(styles::text_input::field(false));

    let password = text_input(&i18n.tr("login-password"), &state.password)
        .secure(true)
        .on_input_maybe((!state.in_flight).then_some(Message::PasswordChanged))
        .on_submit_maybe((!state.in_flight).then_some(Message::Submit))
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .style(styles::text_input::field(false));

    let label = if state.in_flight {
        i18n.tr("login-signing-in")
    } else {
        i18n.tr("login-submit")
    };
    let submit = button(
        text(label)
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press_maybe((!state.in_flight).then_some(Message::Submit))
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary);

    let forgot = button(text(i18n.tr("login-forgot")).size(typography::BODY_SM))
        .on_press(Message::ForgotPassword)
        .style(styles::button::link);

    let form = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::LOGIN_FORM_WIDTH))
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(email)
        .push(password)
        .push(submit)
        .push(forgot);

    Container::new(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    fn typed(email: &str, password: &str) -> State {
        let mut state = State::new();
        update(&mut state, Message::EmailChanged(email.into()));
        update(&mut state, Message::PasswordChanged(password.into()));
        state
    }

    #[test]
    fn submit_forwards_credentials_verbatim() {
        let mut state = typed(" alice@shop.test", "s3cret ");

        match update(&mut state, Message::Submit) {
            Event::SubmitCredentials { email, password } => {
                assert_eq!(email, " alice@shop.test");
                assert_eq!(password, "s3cret ");
            }
            other => panic!("expected credentials, got {other:?}"),
        }
        assert!(state.is_in_flight());
    }

    #[test]
    fn credentials_are_frozen_while_in_flight() {
        let mut state = typed("a@b.c", "x");
        update(&mut state, Message::Submit);

        update(&mut state, Message::EmailChanged("other@b.c".into()));
        update(&mut state, Message::PasswordChanged("y".into()));
        assert_eq!(state.email(), "a@b.c");

        state.finish_login();
        update(&mut state, Message::EmailChanged("other@b.c".into()));
        assert_eq!(state.email(), "other@b.c");
        match update(&mut state, Message::Submit) {
            Event::SubmitCredentials { password, .. } => assert_eq!(password, "x"),
            other => panic!("expected credentials, got {other:?}"),
        }
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut state = typed("a@b.c", "x");
        update(&mut state, Message::Submit);

        assert!(matches!(update(&mut state, Message::Submit), Event::None));

        state.finish_login();
        assert!(matches!(
            update(&mut state, Message::Submit),
            Event::SubmitCredentials { .. }
        ));
    }

    #[test]
    fn empty_credentials_are_still_submitted() {
        let mut state = State::new();
        assert!(matches!(
            update(&mut state, Message::Submit),
            Event::SubmitCredentials { .. }
        ));
    }

    #[test]
    fn forgot_password_only_informs() {
        let mut state = State::new();
        match update(&mut state, Message::ForgotPassword) {
            Event::Notify(notification) => {
                assert_eq!(notification.severity(), Severity::Info);
                assert_eq!(notification.message_key(), "notification-forgot-password");
            }
            other => panic!("expected notification, got {other:?}"),
        }
        assert!(!state.is_in_flight());
    }
}
