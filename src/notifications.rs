//! Notifications
//!
//! Transient, user-facing messages such as a rejected basket add. Sinks are
//! fire-and-forget: nothing is returned to the caller.

use std::fmt;

use tracing::{info, warn};

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Informational message
    Info,

    /// Something the user tried did not happen
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Presentation level
    pub level: NotificationLevel,

    /// Message text
    pub message: String,
}

impl Notification {
    /// Create an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    /// Create an informational notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A one-way sink for notifications.
pub trait Notifier {
    /// Deliver a notification.
    fn notify(&mut self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Sends notifications to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Info => info!(target: "storefront::notifications", "{notification}"),
            NotificationLevel::Error => warn!(target: "storefront::notifications", "{notification}"),
        }
    }
}

/// Keeps every notification it receives, oldest first.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    notifications: Vec<Notification>,
}

impl NotificationLog {
    /// Notifications received so far.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Take the received notifications, leaving the log empty.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Number of notifications received.
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Check if nothing has been received.
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

impl Notifier for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
