//! Shared types for the pharmacy notification center and its renderers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

// =====================================================
// Domain Types
// =====================================================

/// Severity of a notification. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NotificationType {
    Info,
    Warning,
    Danger,
}

impl NotificationType {
    /// Capitalized label shown on the alert badge
    pub fn label(&self) -> &'static str {
        match self {
            NotificationType::Info => "Info",
            NotificationType::Warning => "Warning",
            NotificationType::Danger => "Danger",
        }
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            NotificationType::Danger => BadgeVariant::Destructive,
            NotificationType::Warning => BadgeVariant::Warning,
            NotificationType::Info => BadgeVariant::Secondary,
        }
    }
}

/// Visual treatment of a severity badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Destructive,
    Warning,
    Secondary,
}

/// A single alert record.
///
/// Everything except `read` is fixed at creation. Records are only handed
/// out by reference or as clones; the owning store is the sole mutator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    /// Create an unread notification
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        notification_type: NotificationType,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            notification_type,
            timestamp,
            read: false,
        }
    }

    /// Builder-style override of the initial read flag (seed data only)
    pub fn with_read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }
}

/// Tabs of the notification center
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NotificationTab {
    #[default]
    All,
    Unread,
    Stock,
    Expiry,
}

impl NotificationTab {
    /// Parse from string, defaulting to All if invalid
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Heading and hint shown when the tab has nothing to list
    pub fn empty_state(&self) -> (&'static str, Option<&'static str>) {
        match self {
            NotificationTab::All => ("No notifications to display", None),
            NotificationTab::Unread => {
                ("No unread notifications", Some("You're all caught up!"))
            }
            NotificationTab::Stock => (
                "No stock alerts",
                Some("All products are sufficiently stocked"),
            ),
            NotificationTab::Expiry => (
                "No expiry alerts",
                Some("No products are nearing expiration"),
            ),
        }
    }
}

// =====================================================
// Snapshot Types
// =====================================================

/// Owned, read-only copy of the store handed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSnapshot {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}
