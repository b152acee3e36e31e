// SPDX-License-Identifier: MPL-2.0
//! Localization through Fluent.
//!
//! Translations are `.ftl` files under `assets/i18n/`, embedded in the
//! binary. The active locale is taken from `--lang`, then the config file,
//! then the OS locale, then `en-US`.

pub mod fluent;
