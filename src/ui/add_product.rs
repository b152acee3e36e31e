// SPDX-License-Identifier: MPL-2.0
//! Add-product dialog.
//!
//! The dialog collects name, description and price, and a photo captured by
//! the camera. Capturing goes through the parent: the dialog asks for
//! permissions, then for a provisioned capture target, then for the camera
//! to be launched on that target, and is told about each outcome through
//! [`Message`]. Results for a target other than the pending one are ignored.

use crate::application::port::CaptureTarget;
use crate::domain::product::{parse_price, validate_new_product};
use crate::domain::NewProduct;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::widget::{button, image, text, text_input, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct State {
    name: String,
    description: String,
    price: String,
    /// Photo bound by the last successful capture.
    image: Option<PathBuf>,
    /// Destination handed to the camera, until it reports back.
    pending: Option<CaptureTarget>,
    is_error: bool,
    permissions_granted: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    DescriptionChanged(String),
    PriceChanged(String),
    /// The image placeholder was tapped.
    CaptureRequested,
    Submit,
    Dismiss,
    PermissionsResolved {
        granted: bool,
        then_capture: bool,
    },
    CaptureProvisioned(Result<CaptureTarget, Error>),
    CaptureFinished {
        target: CaptureTarget,
        success: bool,
    },
}

/// Events propagated to the parent.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Ask for camera and media-read permissions.
    RequestPermissions { then_capture: bool },
    /// Provision a fresh capture destination.
    ProvisionCapture,
    /// Run the camera on `target`.
    LaunchCamera(CaptureTarget),
    Notify(Notification),
    Submitted(NewProduct),
    Dismissed,
}

/// Which inputs are highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub description: bool,
    pub price: bool,
    pub image: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    #[must_use]
    pub fn image(&self) -> Option<&PathBuf> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn pending_target(&self) -> Option<&CaptureTarget> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn is_capturing(&self) -> bool {
        self.pending.is_some()
    }

    /// Inputs to highlight, derived from the current values once a
    /// submission has failed.
    #[must_use]
    pub fn field_errors(&self) -> FieldErrors {
        if !self.is_error {
            return FieldErrors::default();
        }
        FieldErrors {
            name: self.name.is_empty(),
            description: self.description.is_empty(),
            price: parse_price(&self.price).is_none(),
            image: self.image.is_none(),
        }
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.name = value;
            Event::None
        }
        Message::DescriptionChanged(value) => {
            state.description = value;
            Event::None
        }
        Message::PriceChanged(value) => {
            state.price = value;
            Event::None
        }
        Message::CaptureRequested => {
            if state.is_capturing() {
                Event::None
            } else if state.permissions_granted {
                Event::ProvisionCapture
            } else {
                Event::RequestPermissions { then_capture: true }
            }
        }
        Message::PermissionsResolved {
            granted,
            then_capture,
        } => {
            state.permissions_granted = granted;
            if !granted {
                Event::Notify(Notification::warning("notification-permissions-denied"))
            } else if then_capture && !state.is_capturing() {
                Event::ProvisionCapture
            } else {
                Event::None
            }
        }
        Message::CaptureProvisioned(Ok(target)) => {
            if state.is_capturing() {
                return Event::None;
            }
            state.pending = Some(target.clone());
            Event::LaunchCamera(target)
        }
        Message::CaptureProvisioned(Err(err)) => Event::Notify(Notification::from_error(&err)),
        Message::CaptureFinished { target, success } => {
            if state.pending.as_ref() != Some(&target) {
                log::debug!("ignoring stale capture result {}", target.uri);
                return Event::None;
            }
            state.pending = None;
            if success {
                state.image = Some(target.file);
                Event::None
            } else {
                state.image = None;
                Event::Notify(Notification::error("notification-capture-failed"))
            }
        }
        Message::Submit => {
            match validate_new_product(
                &state.name,
                &state.description,
                &state.price,
                state.image.as_ref(),
            ) {
                Ok(product) => Event::Submitted(product),
                Err(issues) => {
                    log::debug!("add form rejected: {issues:?}");
                    state.is_error = true;
                    Event::Notify(Notification::warning("notification-fields-required"))
                }
            }
        }
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
    let errors = state.field_errors();

    let title = Text::new(i18n.tr("add-product-title")).size(typography::TITLE_MD);

    let name = text_input(&i18n.tr("add-product-name"), &state.name)
        .on_input(Message::NameChanged)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .style(styles::text_input::field(errors.name));
    let description = text_input(&i18n.tr("add-product-description"), &state.description)
        .on_input(Message::DescriptionChanged)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .style(styles::text_input::field(errors.description));
    let price = text_input(&i18n.tr("add-product-price"), &state.price)
        .on_input(Message::PriceChanged)
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .style(styles::text_input::field(errors.price));

    let preview: Element<'_, Message> = match (&state.image, state.is_capturing()) {
        (_, true) => Text::new(i18n.tr("add-product-capturing"))
            .size(typography::BODY)
            .into(),
        (Some(file), false) => image(image::Handle::from_path(file))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        (None, false) => Text::new(i18n.tr("add-product-tap-to-capture"))
            .size(typography::BODY)
            .into(),
    };
    let capture = button(
        Container::new(preview)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CAPTURE_PREVIEW_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(Message::CaptureRequested)
    .padding(0)
    .width(Length::Fill)
    .style(styles::button::surface(errors.image));

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
            button(text(i18n.tr("add-product-submit")).size(typography::BODY))
                .on_press(Message::Submit)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .push(title)
        .push(name)
        .push(description)
        .push(price)
        .push(capture)
        .push(actions)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    fn target(name: &str) -> CaptureTarget {
        let file = PathBuf::from(format!("/data/pictures/{name}"));
        CaptureTarget {
            uri: format!("file://{}", file.display()),
            file,
        }
    }

    fn fill(state: &mut State, name: &str, description: &str, price: &str) {
        update(state, Message::NameChanged(name.into()));
        update(state, Message::DescriptionChanged(description.into()));
        update(state, Message::PriceChanged(price.into()));
    }

    fn capture(state: &mut State, target: CaptureTarget, success: bool) -> Event {
        update(state, Message::CaptureProvisioned(Ok(target.clone())));
        update(state, Message::CaptureFinished { target, success })
    }

    #[test]
    fn complete_form_submits_payload() {
        let mut state = State::new();
        fill(&mut state, "Shoe", "Red", "50");
        let photo = target("IMG_20240101_120000.jpg");
        capture(&mut state, photo.clone(), true);

        match update(&mut state, Message::Submit) {
            Event::Submitted(product) => {
                assert_eq!(product.name, "Shoe");
                assert_eq!(product.description, "Red");
                assert_eq!(product.price, 50);
                assert_eq!(product.image_file, photo.file);
            }
            other => panic!("expected submission, got {other:?}"),
        }
        assert!(!state.is_error());
    }

    #[test]
    fn non_numeric_price_sets_error_flag() {
        let mut state = State::new();
        fill(&mut state, "Shoe", "Red", "abc");
        capture(&mut state, target("a.jpg"), true);

        let event = update(&mut state, Message::Submit);

        assert!(matches!(event, Event::Notify(ref n) if n.message_key() == "notification-fields-required"));
        assert!(state.is_error());
        assert_eq!(
            state.field_errors(),
            FieldErrors {
                price: true,
                ..FieldErrors::default()
            }
        );
    }

    #[test]
    fn missing_image_blocks_submission() {
        let mut state = State::new();
        fill(&mut state, "Shoe", "Red", "50");

        assert!(matches!(update(&mut state, Message::Submit), Event::Notify(_)));
        assert!(state.field_errors().image);
    }

    #[test]
    fn highlights_follow_later_edits() {
        let mut state = State::new();
        update(&mut state, Message::Submit);
        assert!(state.field_errors().name);

        update(&mut state, Message::NameChanged("Shoe".into()));
        assert!(!state.field_errors().name);
        assert!(state.field_errors().description);
    }

    #[test]
    fn first_tap_requests_permissions_then_captures() {
        let mut state = State::new();
        assert!(matches!(
            update(&mut state, Message::CaptureRequested),
            Event::RequestPermissions { then_capture: true }
        ));

        let event = update(
            &mut state,
            Message::PermissionsResolved {
                granted: true,
                then_capture: true,
            },
        );
        assert!(matches!(event, Event::ProvisionCapture));

        assert!(matches!(
            update(&mut state, Message::CaptureRequested),
            Event::ProvisionCapture
        ));
    }

    #[test]
    fn denied_permissions_warn_and_allow_retry() {
        let mut state = State::new();
        let event = update(
            &mut state,
            Message::PermissionsResolved {
                granted: false,
                then_capture: false,
            },
        );
        assert!(matches!(event, Event::Notify(ref n) if n.severity() == Severity::Warning));

        assert!(matches!(
            update(&mut state, Message::CaptureRequested),
            Event::RequestPermissions { then_capture: true }
        ));
    }

    #[test]
    fn provisioned_target_launches_camera() {
        let mut state = State::new();
        let photo = target("b.jpg");
        let event = update(&mut state, Message::CaptureProvisioned(Ok(photo.clone())));
        assert!(matches!(event, Event::LaunchCamera(ref t) if *t == photo));
        assert_eq!(state.pending_target(), Some(&photo));
    }

    #[test]
    fn tap_while_capturing_is_ignored() {
        let mut state = State::new();
        update(&mut state, Message::CaptureProvisioned(Ok(target("c.jpg"))));
        assert!(matches!(update(&mut state, Message::CaptureRequested), Event::None));
    }

    #[test]
    fn capture_failure_unsets_image_and_notifies() {
        let mut state = State::new();
        capture(&mut state, target("first.jpg"), true);
        assert!(state.image().is_some());

        let event = capture(&mut state, target("second.jpg"), false);

        assert!(matches!(event, Event::Notify(ref n) if n.message_key() == "notification-capture-failed"));
        assert!(state.image().is_none());
        assert!(!state.is_capturing());
    }

    #[test]
    fn result_for_other_target_is_ignored() {
        let mut state = State::new();
        update(&mut state, Message::CaptureProvisioned(Ok(target("current.jpg"))));

        let event = update(
            &mut state,
            Message::CaptureFinished {
                target: target("stale.jpg"),
                success: true,
            },
        );

        assert!(matches!(event, Event::None));
        assert!(state.image().is_none());
        assert!(state.is_capturing());
    }

    #[test]
    fn provisioning_failure_is_reported() {
        let mut state = State::new();
        let event = update(
            &mut state,
            Message::CaptureProvisioned(Err(Error::Io("read-only".into()))),
        );
        assert!(matches!(event, Event::Notify(ref n) if n.message_key() == "error-io"));
    }

    #[test]
    fn dismiss_is_reported() {
        let mut state = State::new();
        assert!(matches!(update(&mut state, Message::Dismiss), Event::Dismissed));
    }
}
