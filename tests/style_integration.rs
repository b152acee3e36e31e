// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::{button as iced_button, text_input as iced_text_input};
    use iced::Theme;
    use storefront::ui::design_tokens::{opacity, palette, sizing, spacing};
    use storefront::ui::styles::{button, container, text_input};
    use storefront::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = button::primary(&theme, iced_button::Status::Active);
            let _ = button::secondary(&theme, iced_button::Status::Hovered);
            let _ = button::danger(&theme, iced_button::Status::Pressed);
            let _ = button::link(&theme, iced_button::Status::Disabled);
            let _ = button::surface(true)(&theme, iced_button::Status::Active);
            let _ = container::dialog(&theme);
            let _ = container::card(&theme);
            let _ = container::image_placeholder(&theme);
            let _ = container::backdrop(&theme);
            let _ = container::toolbar(&theme);
            let _ = text_input::field(false)(&theme, iced_text_input::Status::Active);
        }
    }

    #[test]
    fn error_field_border_is_the_error_color() {
        let style = text_input::field(true)(&Theme::Light, iced_text_input::Status::Active);
        assert_eq!(style.border.color, palette::ERROR_500);
    }

    #[test]
    fn backdrop_dims_without_hiding() {
        assert!(opacity::BACKDROP > opacity::TRANSPARENT);
        assert!(opacity::BACKDROP < opacity::OPAQUE);
        assert!(sizing::DIALOG_WIDTH > sizing::LOGIN_FORM_WIDTH);
        assert!(spacing::MD > spacing::SM);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        assert!(light.surface_primary.r > dark.surface_primary.r);
        assert!(light.text_primary.r < dark.text_primary.r);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
    }
}
