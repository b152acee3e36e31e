// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! - [`notification`]: `Notification` with severity and i18n message key
//! - [`manager`]: `Manager` queuing notifications and expiring them
//! - [`toast`]: rendering of the visible notifications
//!
//! Success and info toasts stay 3s, warnings and errors 5s. At
//! most three are visible; the rest wait in a FIFO queue.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::error("notification-login-failed"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
