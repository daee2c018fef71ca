//! Keyword categorization for the notification center tabs.
//!
//! Notifications carry no category field, so the "stock" and "expiry" tabs
//! are derived from message keywords plus severity. Treat these as a
//! provisional policy rather than a stable classification.

use notification_center_types::{Notification, NotificationType};

/// A keyword + severity predicate over notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCategory {
    /// Matched case-insensitively against the message body
    pub keyword: String,
    pub types: Vec<NotificationType>,
}

impl KeywordCategory {
    pub fn new(keyword: impl Into<String>, types: &[NotificationType]) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            types: types.to_vec(),
        }
    }

    /// Low-stock warnings
    pub fn low_stock() -> Self {
        Self::new("stock", &[NotificationType::Warning])
    }

    /// Expired or expiring products ("expired", "will expire", "expiry")
    pub fn expiry() -> Self {
        Self::new("expir", &[NotificationType::Warning, NotificationType::Danger])
    }

    pub fn matches(&self, notification: &Notification) -> bool {
        self.types.contains(&notification.notification_type)
            && notification.message.to_lowercase().contains(&self.keyword)
    }
}

/// Unread predicate, shared by the unread tab and the badge count
pub fn is_unread(notification: &Notification) -> bool {
    !notification.read
}
