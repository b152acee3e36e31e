// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every screen.
//!
//! - **Palette**: base colors
//! - **Opacity**: overlay and surface transparency
//! - **Spacing**: 8px grid
//! - **Sizing**: cards, dialogs, inputs and toasts
//! - **Typography**: font size scale
//! - **Border**, **Radius** and **Shadow**
//!
//! ```
//! use storefront::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::BACKDROP,
//!     ..palette::BLACK
//! };
//! let padding = spacing::MD;
//! # let _ = (backdrop, padding);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Neutral ramp, warm-tinted to sit well under product photos
    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.29, 0.27, 0.26);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.53, 0.51);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.78, 0.76);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.92, 0.9);

    // Brand: teal used for primary actions and prices
    pub const PRIMARY_400: Color = Color::from_rgb(0.22, 0.7, 0.67);
    pub const PRIMARY_500: Color = Color::from_rgb(0.09, 0.56, 0.54);
    pub const PRIMARY_600: Color = Color::from_rgb(0.05, 0.44, 0.42);

    // Toast severities
    pub const ERROR_500: Color = Color::from_rgb(0.84, 0.19, 0.2);
    pub const WARNING_500: Color = Color::from_rgb(0.93, 0.58, 0.1);
    pub const SUCCESS_500: Color = Color::from_rgb(0.2, 0.64, 0.33);
    pub const INFO_500: Color = Color::from_rgb(0.25, 0.47, 0.85);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Dimmed backdrop behind an open dialog.
    pub const BACKDROP: f32 = 0.55;

    /// Semi-transparent panels such as toasts.
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

pub mod sizing {
    /// Width of the login form column.
    pub const LOGIN_FORM_WIDTH: f32 = 360.0;

    /// Width of the add/edit dialogs.
    pub const DIALOG_WIDTH: f32 = 420.0;

    /// Height of the image area on a product card.
    pub const CARD_IMAGE_HEIGHT: f32 = 180.0;

    /// Height of the capture placeholder inside the add dialog.
    pub const CAPTURE_PREVIEW_HEIGHT: f32 = 160.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    //! Font sizes: titles for headings, body for content.

    /// Screen headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Dialog titles.
    pub const TITLE_MD: f32 = 20.0;

    /// Card names.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::{palette, Color};
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    const SOFT_BLACK: Color = Color {
        a: 0.25,
        ..palette::BLACK
    };

    /// Resting product card.
    pub const SM: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    /// Toasts.
    pub const MD: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 3.0 },
        blur_radius: 10.0,
    };

    /// Dialogs floating over the backdrop.
    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 24.0,
    };
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);

    assert!(sizing::DIALOG_WIDTH > sizing::TOAST_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_fits_minimum_window() {
        let needed = sizing::DIALOG_WIDTH + 2.0 * spacing::LG;
        assert!(needed < crate::app::MIN_WINDOW_WIDTH as f32);
    }

    #[test]
    fn brand_ramp_darkens() {
        assert!(palette::PRIMARY_400.g > palette::PRIMARY_500.g);
        assert!(palette::PRIMARY_500.g > palette::PRIMARY_600.g);
    }
}
