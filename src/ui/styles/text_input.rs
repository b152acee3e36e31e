// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::text_input;
use iced::{Border, Theme};

/// Default input, or a red-bordered one when `is_error` is set.
pub fn field(is_error: bool) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let base = text_input::default(theme, status);
        if !is_error {
            return base;
        }
        text_input::Style {
            border: Border {
                color: palette::ERROR_500,
                width: border::WIDTH_MD,
                radius: radius::SM.into(),
            },
            ..base
        }
    }
}
