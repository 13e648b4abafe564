//! Transient notification (toast) state.
//!
//! The HTTP layer never renders anything itself: it normalizes a response
//! and hands the outcome to [`NotificationsState::absorb`], which maps it
//! to at most one toast. The queue keeps the newest five entries, oldest
//! dropped first, matching the top-right stack the UI renders.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::envelope::Normalized;

/// Maximum number of toasts kept at once.
pub const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// One visible toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsState {
    items: Vec<Notification>,
}

impl NotificationsState {
    /// Currently visible toasts, oldest first.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn push_info(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Info, message.into());
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    /// Map a normalized response outcome to zero or one toast.
    ///
    /// Success with a message becomes an info toast, a declared failure an
    /// error toast. Success without a message and passthrough bodies emit
    /// nothing.
    pub fn absorb(&mut self, outcome: &Normalized) {
        match outcome {
            Normalized::Success { message: Some(message), .. } => self.push_info(message.clone()),
            Normalized::Failure { message } => self.push_error(message.clone()),
            Normalized::Success { message: None, .. } | Normalized::Passthrough(_) => {}
        }
    }

    /// Remove a toast by id. Unknown ids are ignored (the auto-dismiss
    /// timer can race a manual close).
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }

    fn push(&mut self, kind: NotificationKind, message: String) {
        if self.items.len() >= MAX_TOASTS {
            self.items.remove(0);
        }
        self.items.push(Notification {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            message,
        });
    }
}
